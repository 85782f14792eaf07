//! Arithmetic and comparison operations.
//!
//! Named methods return `Result` and carry the validation; the operator
//! traits delegate to them and panic on a contract violation, since
//! `std::ops` cannot surface an error. Operators are implemented on
//! references, so `&a + &b` leaves both operands usable.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use tabula_truth::Truth;

use crate::check;
use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;

impl<T> Matrix<T> {
    /// Same-shape traversal without the element-type gate; internal
    /// callers never produce a `bool` element.
    pub(crate) fn map_plain<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix::from_parts(
            self.data.iter().map(f).collect(),
            self.num_rows,
            self.num_cols,
        )
    }

    fn zip_with(&self, other: &Self, mut f: impl FnMut(&T, &T) -> T) -> Self {
        debug_assert_eq!(self.dim(), other.dim());
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| f(a, b))
            .collect();
        Self::from_parts(data, self.num_rows, self.num_cols)
    }

    /// Elementwise sum of two same-shape matrices.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions differ.
    pub fn try_add(&self, other: &Self) -> MatResult<Self>
    where
        T: Add<Output = T> + Clone,
    {
        check::same_dim(self, other)?;
        Ok(self.zip_with(other, |a, b| a.clone() + b.clone()))
    }

    /// Elementwise difference of two same-shape matrices.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions differ.
    pub fn try_sub(&self, other: &Self) -> MatResult<Self>
    where
        T: Sub<Output = T> + Clone,
    {
        check::same_dim(self, other)?;
        Ok(self.zip_with(other, |a, b| a.clone() - b.clone()))
    }

    /// Elementwise (Hadamard) product of two same-shape matrices.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions differ.
    pub fn hadamard(&self, other: &Self) -> MatResult<Self>
    where
        T: Mul<Output = T> + Clone,
    {
        check::same_dim(self, other)?;
        Ok(self.zip_with(other, |a, b| a.clone() * b.clone()))
    }

    /// Algebraic matrix product via the standard triple sum.
    ///
    /// # Errors
    ///
    /// Fails if `self.dim_h() != other.dim_v()`.
    pub fn matmul(&self, other: &Self) -> MatResult<Self>
    where
        T: Zero + Mul<Output = T> + Clone,
    {
        check::inner_dim(self, other)?;
        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = T::zero();
                for k in 0..self.num_cols {
                    sum = sum
                        + self.data[i * self.num_cols + k].clone()
                            * other.data[k * other.num_cols + j].clone();
                }
                data.push(sum);
            }
        }
        Ok(Self::from_parts(data, self.num_rows, other.num_cols))
    }

    /// Raises a square matrix to an integer power by repeated
    /// multiplication; the zeroth power is the identity of matching
    /// dimension.
    ///
    /// # Errors
    ///
    /// Fails if the matrix is not square.
    pub fn pow(&self, n: u32) -> MatResult<Self>
    where
        T: Zero + One + Clone,
    {
        check::square(self)?;
        if n == 0 {
            return Ok(Self::unit(self.num_rows));
        }
        let mut result = self.clone();
        for _ in 1..n {
            result = result.matmul(self)?;
        }
        Ok(result)
    }

    /// In-place form of [`pow`](Self::pow).
    ///
    /// # Errors
    ///
    /// Fails if the matrix is not square.
    pub fn pow_assign(&mut self, n: u32) -> MatResult<()>
    where
        T: Zero + One + Clone,
    {
        *self = self.pow(n)?;
        Ok(())
    }

    /// Broadcasts `val` onto every cell with `+`.
    #[must_use]
    pub fn add_scalar(&self, val: &T) -> Self
    where
        T: Add<Output = T> + Clone,
    {
        self.map_plain(|x| x.clone() + val.clone())
    }

    /// Broadcasts `val` onto every cell with `-`.
    #[must_use]
    pub fn sub_scalar(&self, val: &T) -> Self
    where
        T: Sub<Output = T> + Clone,
    {
        self.map_plain(|x| x.clone() - val.clone())
    }

    /// Broadcasts `val` onto every cell with `*`.
    #[must_use]
    pub fn mul_scalar(&self, val: &T) -> Self
    where
        T: Mul<Output = T> + Clone,
    {
        self.map_plain(|x| x.clone() * val.clone())
    }

    /// Broadcasts `val` onto every cell with `/`.
    ///
    /// # Errors
    ///
    /// Fails if `val` is the zero of the element type.
    pub fn div_scalar(&self, val: &T) -> MatResult<Self>
    where
        T: Div<Output = T> + Zero + Clone,
    {
        if val.is_zero() {
            return Err(MatError::ZeroScalar);
        }
        Ok(self.map_plain(|x| x.clone() / val.clone()))
    }

    fn mask(&self, mut pred: impl FnMut(&T) -> bool) -> Matrix<Truth> {
        self.map_plain(|v| Truth::new(pred(v)))
    }

    /// Truth matrix of cells equal to `val`.
    #[must_use]
    pub fn eq_mask(&self, val: &T) -> Matrix<Truth>
    where
        T: PartialEq,
    {
        self.mask(|v| v == val)
    }

    /// Truth matrix of cells not equal to `val`.
    #[must_use]
    pub fn ne_mask(&self, val: &T) -> Matrix<Truth>
    where
        T: PartialEq,
    {
        self.mask(|v| v != val)
    }

    /// Truth matrix of cells strictly less than `val`.
    #[must_use]
    pub fn lt_mask(&self, val: &T) -> Matrix<Truth>
    where
        T: PartialOrd,
    {
        self.mask(|v| v < val)
    }

    /// Truth matrix of cells less than or equal to `val`.
    #[must_use]
    pub fn le_mask(&self, val: &T) -> Matrix<Truth>
    where
        T: PartialOrd,
    {
        self.mask(|v| v <= val)
    }

    /// Truth matrix of cells strictly greater than `val`.
    #[must_use]
    pub fn gt_mask(&self, val: &T) -> Matrix<Truth>
    where
        T: PartialOrd,
    {
        self.mask(|v| v > val)
    }

    /// Truth matrix of cells greater than or equal to `val`.
    #[must_use]
    pub fn ge_mask(&self, val: &T) -> Matrix<Truth>
    where
        T: PartialOrd,
    {
        self.mask(|v| v >= val)
    }
}

impl<T: Add<Output = T> + Clone> Add for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add(self, other: Self) -> Matrix<T> {
        self.try_add(other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Sub<Output = T> + Clone> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn sub(self, other: Self) -> Matrix<T> {
        self.try_sub(other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Zero + Mul<Output = T> + Clone> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// Algebraic matrix product.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not agree.
    fn mul(self, other: Self) -> Matrix<T> {
        self.matmul(other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Neg<Output = T> + Clone> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map_plain(|v| -v.clone())
    }
}

impl<T: Add<Output = T> + Clone> Add<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, val: T) -> Matrix<T> {
        self.add_scalar(&val)
    }
}

impl<T: Sub<Output = T> + Clone> Sub<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, val: T) -> Matrix<T> {
        self.sub_scalar(&val)
    }
}

impl<T: Mul<Output = T> + Clone> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, val: T) -> Matrix<T> {
        self.mul_scalar(&val)
    }
}

impl<T: Div<Output = T> + Zero + Clone> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    /// # Panics
    ///
    /// Panics if `val` is the zero of the element type.
    fn div(self, val: T) -> Matrix<T> {
        self.div_scalar(&val).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Add<Output = T> + Clone> AddAssign<&Matrix<T>> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn add_assign(&mut self, other: &Matrix<T>) {
        *self = &*self + other;
    }
}

impl<T: Add<Output = T> + Clone> AddAssign<T> for Matrix<T> {
    fn add_assign(&mut self, val: T) {
        *self = self.add_scalar(&val);
    }
}

impl<T: Sub<Output = T> + Clone> SubAssign<&Matrix<T>> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn sub_assign(&mut self, other: &Matrix<T>) {
        *self = &*self - other;
    }
}

impl<T: Sub<Output = T> + Clone> SubAssign<T> for Matrix<T> {
    fn sub_assign(&mut self, val: T) {
        *self = self.sub_scalar(&val);
    }
}

impl<T: Zero + Mul<Output = T> + Clone> MulAssign<&Matrix<T>> for Matrix<T> {
    /// Algebraic matrix product, in place.
    ///
    /// # Panics
    ///
    /// Panics if the inner dimensions do not agree.
    fn mul_assign(&mut self, other: &Matrix<T>) {
        *self = &*self * other;
    }
}

impl<T: Mul<Output = T> + Clone> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, val: T) {
        *self = self.mul_scalar(&val);
    }
}

impl<T: Div<Output = T> + Zero + Clone> DivAssign<T> for Matrix<T> {
    /// # Panics
    ///
    /// Panics if `val` is the zero of the element type.
    fn div_assign(&mut self, val: T) {
        *self = self.div_scalar(&val).unwrap_or_else(|e| panic!("{e}"));
    }
}

/// Symmetric scalar-on-the-left forms for the primitive numeric types.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn add(self, m: &Matrix<$t>) -> Matrix<$t> {
                    m.map_plain(|x| self + x)
                }
            }

            impl Sub<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn sub(self, m: &Matrix<$t>) -> Matrix<$t> {
                    m.map_plain(|x| self - x)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, m: &Matrix<$t>) -> Matrix<$t> {
                    m.map_plain(|x| self * x)
                }
            }
        )*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
