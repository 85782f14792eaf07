//! Axis-wise statistical reductions.
//!
//! Axis 0 reduces every row to one value (a `rows x 1` column), axis 1
//! reduces every column (a `1 x cols` row). Reductions over the empty
//! matrix return the empty matrix.

use std::cmp::Ordering;
use std::ops::Add;

use num_traits::ToPrimitive;

use crate::check;
use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;

impl<T: Clone> Matrix<T> {
    /// Applies `f` to every slice of the chosen axis and shapes the
    /// results as a column (axis 0) or a row (axis 1).
    fn reduce_axis<U>(&self, axis: u32, mut f: impl FnMut(&[T]) -> U) -> MatResult<Matrix<U>> {
        check::axis(axis)?;
        if self.is_empty() {
            return Ok(Matrix::new());
        }
        if axis == 0 {
            let data = self
                .data
                .chunks(self.num_cols)
                .map(|row| f(row))
                .collect();
            Ok(Matrix::from_parts(data, self.num_rows, 1))
        } else {
            let data = (0..self.num_cols)
                .map(|col| {
                    let column: Vec<T> = (0..self.num_rows)
                        .map(|row| self.data[row * self.num_cols + col].clone())
                        .collect();
                    f(&column)
                })
                .collect();
            Ok(Matrix::from_parts(data, 1, self.num_cols))
        }
    }

    /// Length of the slices reduced along `axis`.
    fn axis_len(&self, axis: u32) -> usize {
        if axis == 0 {
            self.num_cols
        } else {
            self.num_rows
        }
    }

    /// Smallest value of each row (axis 0) or column (axis 1).
    ///
    /// # Errors
    ///
    /// Fails if `axis` is not 0 or 1.
    pub fn min(&self, axis: u32) -> MatResult<Self>
    where
        T: PartialOrd,
    {
        self.reduce_axis(axis, |slice| {
            let mut best = slice[0].clone();
            for v in &slice[1..] {
                if *v < best {
                    best = v.clone();
                }
            }
            best
        })
    }

    /// Largest value of each row (axis 0) or column (axis 1).
    ///
    /// # Errors
    ///
    /// Fails if `axis` is not 0 or 1.
    pub fn max(&self, axis: u32) -> MatResult<Self>
    where
        T: PartialOrd,
    {
        self.reduce_axis(axis, |slice| {
            let mut best = slice[0].clone();
            for v in &slice[1..] {
                if *v > best {
                    best = v.clone();
                }
            }
            best
        })
    }

    /// Sum of each row (axis 0) or column (axis 1), folded from the
    /// element type's default value.
    ///
    /// # Errors
    ///
    /// Fails if `axis` is not 0 or 1.
    pub fn sum(&self, axis: u32) -> MatResult<Self>
    where
        T: Add<Output = T> + Default,
    {
        self.sum_with(axis, T::default())
    }

    /// Sum of each row (axis 0) or column (axis 1), folded from a
    /// caller-supplied identity element.
    ///
    /// # Errors
    ///
    /// Fails if `axis` is not 0 or 1.
    pub fn sum_with(&self, axis: u32, zero: T) -> MatResult<Self>
    where
        T: Add<Output = T>,
    {
        self.reduce_axis(axis, |slice| {
            slice
                .iter()
                .fold(zero.clone(), |acc, v| acc + v.clone())
        })
    }

    /// Mean of each row (axis 0) or column (axis 1), promoted to `f64`.
    ///
    /// Only arithmetic element types satisfy the `ToPrimitive` bound;
    /// anything else is refused at compile time.
    ///
    /// # Errors
    ///
    /// Fails if `axis` is not 0 or 1.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self, axis: u32) -> MatResult<Matrix<f64>>
    where
        T: ToPrimitive,
    {
        self.reduce_axis(axis, |slice| {
            let total: f64 = slice
                .iter()
                .map(|v| v.to_f64().unwrap_or(f64::NAN))
                .sum();
            total / slice.len() as f64
        })
    }

    /// Population standard deviation of each row (axis 0) or column
    /// (axis 1), promoted to `f64`.
    ///
    /// Only arithmetic element types satisfy the `ToPrimitive` bound;
    /// anything else is refused at compile time.
    ///
    /// # Errors
    ///
    /// Fails if `axis` is not 0 or 1, or if the reduced axis holds
    /// fewer than 2 elements (a population of one has no spread).
    #[allow(clippy::cast_precision_loss)]
    pub fn std(&self, axis: u32) -> MatResult<Matrix<f64>>
    where
        T: ToPrimitive,
    {
        check::axis(axis)?;
        if self.is_empty() {
            return Ok(Matrix::new());
        }
        let len = self.axis_len(axis);
        if len < 2 {
            return Err(MatError::AxisTooShort { len, min: 2 });
        }
        self.reduce_axis(axis, |slice| {
            let n = slice.len() as f64;
            let values: Vec<f64> = slice
                .iter()
                .map(|v| v.to_f64().unwrap_or(f64::NAN))
                .collect();
            let mean = values.iter().sum::<f64>() / n;
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
            variance.sqrt()
        })
    }

    /// Median of each row (axis 0) or column (axis 1).
    ///
    /// For an even element count this is the lower of the two central
    /// values, not their average.
    ///
    /// # Errors
    ///
    /// Fails if `axis` is not 0 or 1.
    pub fn median(&self, axis: u32) -> MatResult<Self>
    where
        T: PartialOrd,
    {
        self.reduce_axis(axis, |slice| {
            let mut sorted = slice.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            sorted.swap_remove((sorted.len() - 1) / 2)
        })
    }
}
