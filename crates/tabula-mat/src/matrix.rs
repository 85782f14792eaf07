//! The dense matrix container.
//!
//! Entries are stored in a flat row-major `Vec` with explicit row and
//! column counts. Two invariants hold at all times: every row has the
//! same length, and the element type is never the raw `bool` primitive
//! (truth-valued matrices use [`tabula_truth::Truth`] instead). The
//! empty matrix is canonically 0x0.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::check;
use crate::error::MatResult;

/// A two-dimensional rectangular container.
///
/// Construction validates the rectangular-shape and element-type
/// invariants; every view or result matrix is a new, independently
/// owned value. Copies are deep (`Clone`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    /// Entries in row-major order.
    pub(crate) data: Vec<T>,
    /// Number of rows.
    pub(crate) num_rows: usize,
    /// Number of columns.
    pub(crate) num_cols: usize,
}

impl<T> Matrix<T> {
    /// Assembles a matrix from already-validated parts.
    pub(crate) fn from_parts(data: Vec<T>, num_rows: usize, num_cols: usize) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        if num_rows == 0 || num_cols == 0 {
            return Self::new();
        }
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates the empty 0x0 matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            num_rows: 0,
            num_cols: 0,
        }
    }

    /// Creates a matrix filled with the type's default value.
    ///
    /// A zero row or column count yields the empty matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::BoolElement`](crate::MatError::BoolElement) if
    /// `T` is the raw `bool` primitive.
    pub fn with_dim(num_rows: usize, num_cols: usize) -> MatResult<Self>
    where
        T: Default,
    {
        check::element_type::<T>()?;
        let data = (0..num_rows * num_cols).map(|_| T::default()).collect();
        Ok(Self::from_parts(data, num_rows, num_cols))
    }

    /// Creates a matrix filled with copies of `val`.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::BoolElement`](crate::MatError::BoolElement) if
    /// `T` is the raw `bool` primitive.
    pub fn filled(num_rows: usize, num_cols: usize, val: T) -> MatResult<Self>
    where
        T: Clone,
    {
        check::element_type::<T>()?;
        Ok(Self::from_parts(
            vec![val; num_rows * num_cols],
            num_rows,
            num_cols,
        ))
    }

    /// Creates a matrix from a nested vector of rows.
    ///
    /// This is the literal construction surface:
    /// `Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])`.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::NotRectangular`](crate::MatError::NotRectangular)
    /// if the rows have unequal lengths, or
    /// [`MatError::BoolElement`](crate::MatError::BoolElement) if `T` is
    /// the raw `bool` primitive.
    pub fn from_rows(rows: Vec<Vec<T>>) -> MatResult<Self> {
        check::element_type::<T>()?;
        check::rectangular(&rows)?;
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self::from_parts(data, num_rows, num_cols))
    }

    /// Returns the dimensions as `(rows, columns)`.
    #[must_use]
    pub const fn dim(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Returns the number of rows (the vertical dimension).
    #[must_use]
    pub const fn dim_v(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns (the horizontal dimension).
    #[must_use]
    pub const fn dim_h(&self) -> usize {
        self.num_cols
    }

    /// Checks whether the matrix has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Iterates over the entries in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Overwrites every cell with copies of `val`.
    pub fn fill(&mut self, val: T)
    where
        T: Clone,
    {
        for cell in &mut self.data {
            *cell = val.clone();
        }
    }

    /// Resets the matrix to the empty state.
    pub fn clear(&mut self) {
        self.data.clear();
        self.num_rows = 0;
        self.num_cols = 0;
    }

    /// Exports the matrix as a nested vector of rows.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.data.chunks(self.num_cols.max(1)).map(<[T]>::to_vec).collect()
    }

    /// Converts every cell to another element type.
    ///
    /// Convertibility is a compile-time requirement (`T: Into<U>`).
    ///
    /// # Errors
    ///
    /// Returns [`MatError::BoolElement`](crate::MatError::BoolElement) if
    /// `U` is the raw `bool` primitive.
    pub fn cast<U>(&self) -> MatResult<Matrix<U>>
    where
        T: Clone + Into<U>,
    {
        check::element_type::<U>()?;
        let data = self.data.iter().map(|v| v.clone().into()).collect();
        Ok(Matrix::from_parts(data, self.num_rows, self.num_cols))
    }

    /// Builds a same-shape matrix by applying `f` to every cell.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::BoolElement`](crate::MatError::BoolElement) if
    /// `U` is the raw `bool` primitive.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> MatResult<Matrix<U>> {
        check::element_type::<U>()?;
        let data = self.data.iter().map(f).collect();
        Ok(Matrix::from_parts(data, self.num_rows, self.num_cols))
    }

    /// Builds a same-shape matrix by applying `f` to every cell along
    /// with its `(row, column)` position.
    ///
    /// # Errors
    ///
    /// Returns [`MatError::BoolElement`](crate::MatError::BoolElement) if
    /// `U` is the raw `bool` primitive.
    pub fn map_indexed<U>(&self, mut f: impl FnMut(usize, usize, &T) -> U) -> MatResult<Matrix<U>> {
        check::element_type::<U>()?;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, v)| f(i / self.num_cols, i % self.num_cols, v))
            .collect();
        Ok(Matrix::from_parts(data, self.num_rows, self.num_cols))
    }

    /// Mutates every cell in place, row-major.
    pub fn apply(&mut self, mut f: impl FnMut(&mut T)) {
        for cell in &mut self.data {
            f(cell);
        }
    }

    /// Mutates every cell in place, row-major, exposing its
    /// `(row, column)` position.
    pub fn apply_indexed(&mut self, mut f: impl FnMut(usize, usize, &mut T)) {
        let num_cols = self.num_cols;
        for (i, cell) in self.data.iter_mut().enumerate() {
            f(i / num_cols, i % num_cols, cell);
        }
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of range for a {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of range for a {}x{} matrix",
            self.num_rows,
            self.num_cols
        );
        &mut self.data[row * self.num_cols + col]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows {
            for col in 0..self.num_cols {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.data[row * self.num_cols + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatError;

    #[test]
    fn test_new_is_empty() {
        let m: Matrix<i32> = Matrix::new();
        assert!(m.is_empty());
        assert_eq!(m.dim(), (0, 0));
    }

    #[test]
    fn test_with_dim() {
        let m: Matrix<i32> = Matrix::with_dim(2, 3).unwrap();
        assert_eq!(m.dim(), (2, 3));
        assert_eq!(m.dim_v(), 2);
        assert_eq!(m.dim_h(), 3);
        assert!(m.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_dimension_collapses_to_empty() {
        let m: Matrix<i32> = Matrix::with_dim(3, 0).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.dim(), (0, 0));
    }

    #[test]
    fn test_filled() {
        let m = Matrix::filled(2, 2, 7).unwrap();
        assert!(m.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_from_rows_round_trips() {
        let literal = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let m = Matrix::from_rows(literal.clone()).unwrap();
        assert_eq!(m.dim(), (2, 3));
        assert_eq!(m.to_vec(), literal);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Matrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatError::NotRectangular {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_bool_element_type_is_rejected() {
        assert_eq!(
            Matrix::<bool>::with_dim(2, 2).unwrap_err(),
            MatError::BoolElement
        );
        assert_eq!(
            Matrix::filled(1, 1, true).unwrap_err(),
            MatError::BoolElement
        );
        assert_eq!(
            Matrix::from_rows(vec![vec![true]]).unwrap_err(),
            MatError::BoolElement
        );
    }

    #[test]
    fn test_clone_is_deep() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let mut copy = m.clone();
        copy[(0, 0)] = 99;
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(copy[(0, 0)], 99);
    }

    #[test]
    fn test_fill_and_clear() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        m.fill(0);
        assert!(m.iter().all(|&v| v == 0));
        m.clear();
        assert!(m.is_empty());
    }

    #[test]
    fn test_cast() {
        let m = Matrix::from_rows(vec![vec![1_i32, 2], vec![3, 4]]).unwrap();
        let f: Matrix<f64> = m.cast().unwrap();
        assert_eq!(f[(1, 1)], 4.0);
        assert_eq!(f.dim(), m.dim());
    }

    #[test]
    fn test_map_and_map_indexed() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let doubled = m.map(|v| v * 2).unwrap();
        assert_eq!(doubled.to_vec(), vec![vec![2, 4], vec![6, 8]]);

        let positions = m.map_indexed(|r, c, _| (r, c)).unwrap();
        assert_eq!(positions[(1, 0)], (1, 0));
        assert_eq!(positions[(0, 1)], (0, 1));
    }

    #[test]
    fn test_apply_round_trips() {
        let mut m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let original = m.clone();
        m.apply(|v| *v *= 2);
        assert_eq!(m.to_vec(), vec![vec![2, 4], vec![6, 8]]);
        m.apply(|v| *v /= 2);
        assert_eq!(m, original);
    }

    #[test]
    fn test_apply_indexed_sees_positions() {
        let mut m: Matrix<usize> = Matrix::with_dim(2, 3).unwrap();
        m.apply_indexed(|r, c, v| *v = r * 10 + c);
        assert_eq!(m[(0, 2)], 2);
        assert_eq!(m[(1, 1)], 11);
    }

    #[test]
    fn test_display_row_major() {
        let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.to_string(), "1 2 3\n4 5 6\n");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_out_of_range() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let _ = m[(0, 2)];
    }
}
