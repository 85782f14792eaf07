//! In-place setters, row/column insertion and removal, and searches.
//!
//! Inserting into an empty matrix at position 0 establishes the
//! cross-dimension from the supplied vector; removing the last row or
//! column collapses the matrix back to the canonical empty state.

use crate::check;
use crate::error::MatResult;
use crate::matrix::Matrix;

impl<T> Matrix<T> {
    /// Overwrites the row at `n`.
    ///
    /// # Errors
    ///
    /// Fails if `n` is out of range or `val` does not have exactly one
    /// cell per column.
    pub fn set_row(&mut self, n: usize, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        check::row_id(self, n)?;
        check::row_len(self, val.len())?;
        let start = n * self.num_cols;
        self.data[start..start + self.num_cols].clone_from_slice(val);
        Ok(())
    }

    /// Overwrites the column at `n`.
    ///
    /// # Errors
    ///
    /// Fails if `n` is out of range or `val` does not have exactly one
    /// cell per row.
    pub fn set_column(&mut self, n: usize, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        check::col_id(self, n)?;
        check::col_len(self, val.len())?;
        for (row, v) in val.iter().enumerate() {
            self.data[row * self.num_cols + n] = v.clone();
        }
        Ok(())
    }

    /// Overwrites one cell.
    ///
    /// # Errors
    ///
    /// Fails if `row` or `col` is out of range.
    pub fn set_cell(&mut self, row: usize, col: usize, val: T) -> MatResult<()> {
        *self.cell_mut(row, col)? = val;
        Ok(())
    }

    /// Overwrites the main diagonal.
    ///
    /// # Errors
    ///
    /// Fails if `val` is not exactly `min(rows, cols)` long.
    pub fn set_diag(&mut self, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        check::diag_len(self, val.len())?;
        for (i, v) in val.iter().enumerate() {
            self.data[i * self.num_cols + i] = v.clone();
        }
        Ok(())
    }

    /// Inserts a row at `pos`, shifting subsequent rows down.
    ///
    /// `pos == dim_v()` appends. On an empty matrix only position 0 is
    /// valid and the row's length becomes the column count.
    ///
    /// # Errors
    ///
    /// Fails if `pos` is past the appending boundary or the length does
    /// not match the column count.
    pub fn insert_row(&mut self, pos: usize, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        check::insert_pos(pos, self.num_rows)?;
        if self.is_empty() {
            self.data = val.to_vec();
            self.num_rows = 1;
            self.num_cols = val.len();
            if self.num_cols == 0 {
                self.clear();
            }
            return Ok(());
        }
        check::row_len(self, val.len())?;
        let start = pos * self.num_cols;
        self.data.splice(start..start, val.iter().cloned());
        self.num_rows += 1;
        Ok(())
    }

    /// Inserts a column at `pos`, shifting subsequent columns right.
    ///
    /// `pos == dim_h()` appends. On an empty matrix only position 0 is
    /// valid and the column's length becomes the row count.
    ///
    /// # Errors
    ///
    /// Fails if `pos` is past the appending boundary or the length does
    /// not match the row count.
    pub fn insert_column(&mut self, pos: usize, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        check::insert_pos(pos, self.num_cols)?;
        if self.is_empty() {
            self.data = val.to_vec();
            self.num_rows = val.len();
            self.num_cols = 1;
            if self.num_rows == 0 {
                self.clear();
            }
            return Ok(());
        }
        check::col_len(self, val.len())?;
        // Insert back to front so earlier offsets stay valid.
        for row in (0..self.num_rows).rev() {
            self.data.insert(row * self.num_cols + pos, val[row].clone());
        }
        self.num_cols += 1;
        Ok(())
    }

    /// Inserts a row before the first one.
    ///
    /// # Errors
    ///
    /// Fails if the length does not match the column count.
    pub fn push_row_front(&mut self, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        self.insert_row(0, val)
    }

    /// Appends a row after the last one.
    ///
    /// # Errors
    ///
    /// Fails if the length does not match the column count.
    pub fn push_row_back(&mut self, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        self.insert_row(self.num_rows, val)
    }

    /// Inserts a column before the first one.
    ///
    /// # Errors
    ///
    /// Fails if the length does not match the row count.
    pub fn push_col_front(&mut self, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        self.insert_column(0, val)
    }

    /// Appends a column after the last one.
    ///
    /// # Errors
    ///
    /// Fails if the length does not match the row count.
    pub fn push_col_back(&mut self, val: &[T]) -> MatResult<()>
    where
        T: Clone,
    {
        self.insert_column(self.num_cols, val)
    }

    /// Removes the row at `n`, shifting subsequent rows up.
    ///
    /// # Errors
    ///
    /// Fails if the matrix is empty or `n` is out of range.
    pub fn remove_row(&mut self, n: usize) -> MatResult<()> {
        check::row_id(self, n)?;
        let start = n * self.num_cols;
        self.data.drain(start..start + self.num_cols);
        self.num_rows -= 1;
        if self.num_rows == 0 {
            self.clear();
        }
        Ok(())
    }

    /// Removes the column at `n`, shifting subsequent columns left.
    ///
    /// # Errors
    ///
    /// Fails if the matrix is empty or `n` is out of range.
    pub fn remove_column(&mut self, n: usize) -> MatResult<()> {
        check::col_id(self, n)?;
        // Remove back to front so earlier offsets stay valid.
        for row in (0..self.num_rows).rev() {
            self.data.remove(row * self.num_cols + n);
        }
        self.num_cols -= 1;
        if self.num_cols == 0 {
            self.clear();
        }
        Ok(())
    }

    /// Finds the first row satisfying `pred`.
    ///
    /// An empty matrix always yields `None`.
    pub fn find_row(&self, mut pred: impl FnMut(&[T]) -> bool) -> Option<usize> {
        (0..self.num_rows).find(|&n| {
            let start = n * self.num_cols;
            pred(&self.data[start..start + self.num_cols])
        })
    }

    /// Finds the first row equal to `val`.
    pub fn find_row_eq(&self, val: &[T]) -> Option<usize>
    where
        T: PartialEq,
    {
        self.find_row(|row| row == val)
    }

    /// Finds the first column satisfying `pred`.
    ///
    /// An empty matrix always yields `None`.
    pub fn find_column(&self, mut pred: impl FnMut(&[T]) -> bool) -> Option<usize>
    where
        T: Clone,
    {
        (0..self.num_cols).find(|&n| {
            let col: Vec<T> = (0..self.num_rows)
                .map(|row| self.data[row * self.num_cols + n].clone())
                .collect();
            pred(&col)
        })
    }

    /// Finds the first column equal to `val`.
    pub fn find_column_eq(&self, val: &[T]) -> Option<usize>
    where
        T: Clone + PartialEq,
    {
        self.find_column(|col| col == val)
    }

    /// Finds the first cell satisfying `pred`, scanning row-major.
    ///
    /// An empty matrix always yields `None`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|v| pred(v))
            .map(|i| (i / self.num_cols, i % self.num_cols))
    }

    /// Finds the first cell equal to `val`, scanning row-major.
    pub fn find_eq(&self, val: &T) -> Option<(usize, usize)>
    where
        T: PartialEq,
    {
        self.find(|v| v == val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatError;

    fn sample() -> Matrix<i32> {
        Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_set_row() {
        let mut m = sample();
        m.set_row(1, &[10, 11, 12]).unwrap();
        assert_eq!(m.row(1).unwrap(), &[10, 11, 12]);
        assert_eq!(
            m.set_row(1, &[1, 2]),
            Err(MatError::LengthMismatch {
                expected: 3,
                found: 2
            })
        );
        assert!(m.set_row(3, &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_set_column() {
        let mut m = sample();
        m.set_column(2, &[10, 11, 12]).unwrap();
        assert_eq!(m.column(2).unwrap(), vec![10, 11, 12]);
        assert!(m.set_column(3, &[1, 2, 3]).is_err());
        assert!(m.set_column(0, &[1]).is_err());
    }

    #[test]
    fn test_set_cell_and_diag() {
        let mut m = sample();
        m.set_cell(2, 0, 70).unwrap();
        assert_eq!(m[(2, 0)], 70);
        m.set_diag(&[0, 0, 0]).unwrap();
        assert_eq!(m.diag(), vec![0, 0, 0]);
        assert!(m.set_diag(&[1, 2]).is_err());
    }

    #[test]
    fn test_insert_row() {
        let mut m = sample();
        m.insert_row(1, &[10, 11, 12]).unwrap();
        assert_eq!(m.dim(), (4, 3));
        assert_eq!(m.row(1).unwrap(), &[10, 11, 12]);
        assert_eq!(m.row(2).unwrap(), &[4, 5, 6]);
    }

    #[test]
    fn test_insert_row_into_empty() {
        let mut m: Matrix<i32> = Matrix::new();
        m.insert_row(0, &[10, 11, 12]).unwrap();
        assert_eq!(m.dim(), (1, 3));

        let mut bad: Matrix<i32> = Matrix::new();
        assert_eq!(
            bad.insert_row(1, &[10]),
            Err(MatError::PosOutOfRange { pos: 1, max: 0 })
        );
    }

    #[test]
    fn test_insert_row_boundary_appends() {
        let mut m = Matrix::from_rows(vec![vec![1, 2, 3]]).unwrap();
        m.insert_row(1, &[4, 5, 6]).unwrap();
        assert_eq!(m.row(1).unwrap(), &[4, 5, 6]);
        assert!(m.insert_row(3, &[0, 0, 0]).is_err());
    }

    #[test]
    fn test_insert_column() {
        let mut m = sample();
        m.insert_column(1, &[10, 11, 12]).unwrap();
        assert_eq!(m.dim(), (3, 4));
        assert_eq!(m.column(1).unwrap(), vec![10, 11, 12]);
        assert_eq!(m.to_vec()[0], vec![1, 10, 2, 3]);
        assert!(m.insert_column(0, &[1, 2]).is_err());
    }

    #[test]
    fn test_insert_column_into_empty() {
        let mut m: Matrix<i32> = Matrix::new();
        m.insert_column(0, &[10, 11, 12]).unwrap();
        assert_eq!(m.dim(), (3, 1));
        assert_eq!(m.column(0).unwrap(), vec![10, 11, 12]);
    }

    #[test]
    fn test_push_rows_and_columns() {
        let mut m = Matrix::from_rows(vec![vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        m.push_row_front(&[1, 2, 3]).unwrap();
        assert_eq!(m.row(0).unwrap(), &[1, 2, 3]);
        m.push_row_back(&[10, 11, 12]).unwrap();
        assert_eq!(m.row(3).unwrap(), &[10, 11, 12]);

        let mut m = Matrix::from_rows(vec![vec![4, 5], vec![7, 8]]).unwrap();
        m.push_col_front(&[1, 2]).unwrap();
        assert_eq!(m.column(0).unwrap(), vec![1, 2]);
        m.push_col_back(&[9, 10]).unwrap();
        assert_eq!(m.column(3).unwrap(), vec![9, 10]);
    }

    #[test]
    fn test_push_into_empty() {
        let mut m: Matrix<i32> = Matrix::new();
        m.push_row_back(&[1, 2, 3]).unwrap();
        assert_eq!(m.dim(), (1, 3));

        let mut m: Matrix<i32> = Matrix::new();
        m.push_col_back(&[1, 2, 3]).unwrap();
        assert_eq!(m.dim(), (3, 1));
    }

    #[test]
    fn test_remove_row() {
        let mut m = sample();
        m.remove_row(0).unwrap();
        assert_eq!(m.row(0).unwrap(), &[4, 5, 6]);
        m.remove_row(1).unwrap();
        assert_eq!(m.dim(), (1, 3));
        m.remove_row(0).unwrap();
        assert!(m.is_empty());
        assert_eq!(
            m.remove_row(0),
            Err(MatError::RowOutOfRange { index: 0, rows: 0 })
        );
    }

    #[test]
    fn test_remove_column() {
        let mut m = sample();
        m.remove_column(0).unwrap();
        assert_eq!(m.dim(), (3, 2));
        assert_eq!(m.column(0).unwrap(), vec![2, 5, 8]);
        m.remove_column(1).unwrap();
        assert_eq!(m.column(0).unwrap(), vec![2, 5, 8]);
        m.remove_column(0).unwrap();
        assert!(m.is_empty());
        assert!(m.remove_column(0).is_err());
    }

    #[test]
    fn test_remove_then_insert_restores() {
        let mut m = sample();
        let original = m.clone();
        let row = m.row(1).unwrap().to_vec();
        m.remove_row(1).unwrap();
        m.insert_row(1, &row).unwrap();
        assert_eq!(m, original);
    }

    #[test]
    fn test_find_row() {
        let m = sample();
        assert_eq!(m.find_row_eq(&[4, 5, 6]), Some(1));
        assert_eq!(m.find_row_eq(&[4, 5, 7]), None);
        assert_eq!(m.find_row(|row| row.iter().sum::<i32>() > 10), Some(1));

        let empty: Matrix<i32> = Matrix::new();
        assert_eq!(empty.find_row(|_| true), None);
    }

    #[test]
    fn test_find_column() {
        let m = sample();
        assert_eq!(m.find_column_eq(&[2, 5, 8]), Some(1));
        assert_eq!(m.find_column_eq(&[2, 5, 9]), None);
        assert_eq!(m.find_column(|col| col[0] == 3), Some(2));

        let empty: Matrix<i32> = Matrix::new();
        assert_eq!(empty.find_column(|_| true), None);
    }

    #[test]
    fn test_find_scans_row_major() {
        let m = Matrix::from_rows(vec![vec![1, 5], vec![5, 1]]).unwrap();
        assert_eq!(m.find_eq(&5), Some((0, 1)));
        assert_eq!(m.find(|&v| v < 2), Some((0, 0)));
        assert_eq!(m.find_eq(&9), None);

        let empty: Matrix<i32> = Matrix::new();
        assert_eq!(empty.find_eq(&1), None);
    }
}
