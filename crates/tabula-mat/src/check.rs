//! Precondition checks shared by every shape-sensitive operation.
//!
//! Each helper maps one contract violation to one [`MatError`] variant.
//! Operator-trait impls, which cannot surface a `Result`, route through
//! the same helpers and panic on `Err`.

use crate::error::{MatError, MatResult};
use crate::matrix::Matrix;

/// Rejects the raw `bool` primitive as an element type.
///
/// Truth-valued matrices use `tabula_truth::Truth`, which keeps every
/// cell individually addressable.
pub(crate) fn element_type<T>() -> MatResult<()> {
    if std::any::type_name::<T>() == "bool" {
        Err(MatError::BoolElement)
    } else {
        Ok(())
    }
}

/// Validates that every row of a nested-vector literal has the same
/// length as the first.
pub(crate) fn rectangular<T>(rows: &[Vec<T>]) -> MatResult<()> {
    let expected = rows.first().map_or(0, Vec::len);
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(MatError::NotRectangular {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(())
}

/// Validates that two matrices have identical dimensions.
pub(crate) fn same_dim<T, U>(lhs: &Matrix<T>, rhs: &Matrix<U>) -> MatResult<()> {
    if lhs.dim() == rhs.dim() {
        Ok(())
    } else {
        Err(MatError::DimMismatch {
            lhs: lhs.dim(),
            rhs: rhs.dim(),
        })
    }
}

/// Validates that the inner dimensions of a matrix product agree.
pub(crate) fn inner_dim<T, U>(lhs: &Matrix<T>, rhs: &Matrix<U>) -> MatResult<()> {
    if lhs.dim_h() == rhs.dim_v() {
        Ok(())
    } else {
        Err(MatError::InnerDimMismatch {
            lhs: lhs.dim(),
            rhs: rhs.dim(),
        })
    }
}

/// Validates a vector meant to become a row.
pub(crate) fn row_len<T>(m: &Matrix<T>, len: usize) -> MatResult<()> {
    vector_len(m.dim_h(), len)
}

/// Validates a vector meant to become a column.
pub(crate) fn col_len<T>(m: &Matrix<T>, len: usize) -> MatResult<()> {
    vector_len(m.dim_v(), len)
}

/// Validates a vector meant to become the diagonal.
pub(crate) fn diag_len<T>(m: &Matrix<T>, len: usize) -> MatResult<()> {
    vector_len(m.dim_v().min(m.dim_h()), len)
}

fn vector_len(expected: usize, found: usize) -> MatResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(MatError::LengthMismatch { expected, found })
    }
}

/// Validates a row index.
pub(crate) fn row_id<T>(m: &Matrix<T>, index: usize) -> MatResult<()> {
    if index < m.dim_v() {
        Ok(())
    } else {
        Err(MatError::RowOutOfRange {
            index,
            rows: m.dim_v(),
        })
    }
}

/// Validates a column index.
pub(crate) fn col_id<T>(m: &Matrix<T>, index: usize) -> MatResult<()> {
    if index < m.dim_h() {
        Ok(())
    } else {
        Err(MatError::ColOutOfRange {
            index,
            cols: m.dim_h(),
        })
    }
}

/// Validates an insert position, where the appending boundary `max` is
/// itself a valid position.
pub(crate) fn insert_pos(pos: usize, max: usize) -> MatResult<()> {
    if pos <= max {
        Ok(())
    } else {
        Err(MatError::PosOutOfRange { pos, max })
    }
}

/// Validates an axis argument: 0 reduces rows, 1 reduces columns.
pub(crate) fn axis(axis: u32) -> MatResult<()> {
    match axis {
        0 | 1 => Ok(()),
        other => Err(MatError::InvalidAxis(other)),
    }
}

/// Validates that a matrix is square.
pub(crate) fn square<T>(m: &Matrix<T>) -> MatResult<()> {
    if m.dim_v() == m.dim_h() {
        Ok(())
    } else {
        Err(MatError::NotSquare {
            rows: m.dim_v(),
            cols: m.dim_h(),
        })
    }
}
