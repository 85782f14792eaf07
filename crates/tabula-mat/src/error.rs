//! Error types for matrix operations.
//!
//! Two failure kinds exist: invalid arguments (shape or type contract
//! violations) and out-of-range indices. Lookups that can legitimately
//! find nothing return `Option` instead of an error.

use thiserror::Error;

/// Errors reported by matrix operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatError {
    /// A nested-vector literal had rows of unequal length.
    #[error("row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The raw `bool` primitive was used as the element type.
    #[error("`bool` is not a valid element type, use `tabula_truth::Truth`")]
    BoolElement,

    /// Two matrices had different dimensions in a binary operation.
    #[error("dimension mismatch: {lhs:?} vs {rhs:?}")]
    DimMismatch {
        /// Dimensions of the left operand.
        lhs: (usize, usize),
        /// Dimensions of the right operand.
        rhs: (usize, usize),
    },

    /// Inner dimensions of a matrix product did not agree.
    #[error("inner dimensions do not agree: {lhs:?} x {rhs:?}")]
    InnerDimMismatch {
        /// Dimensions of the left operand.
        lhs: (usize, usize),
        /// Dimensions of the right operand.
        rhs: (usize, usize),
    },

    /// A supplied row, column or diagonal had the wrong length.
    #[error("vector of length {found} does not fit, expected {expected}")]
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Supplied length.
        found: usize,
    },

    /// A row index was outside `[0, rows)`.
    #[error("row index {index} out of range for {rows} rows")]
    RowOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of rows.
        rows: usize,
    },

    /// A column index was outside `[0, cols)`.
    #[error("column index {index} out of range for {cols} columns")]
    ColOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of columns.
        cols: usize,
    },

    /// An insert position was outside `[0, dim]`.
    #[error("insert position {pos} out of range, valid positions are 0..={max}")]
    PosOutOfRange {
        /// The offending position.
        pos: usize,
        /// Last valid position (appending boundary).
        max: usize,
    },

    /// An axis argument was neither 0 (rows) nor 1 (columns).
    #[error("axis must be 0 (rows) or 1 (columns), got {0}")]
    InvalidAxis(u32),

    /// A square matrix was required.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Scalar division by zero.
    #[error("division by a zero scalar")]
    ZeroScalar,

    /// The reduced axis had fewer elements than the reduction needs.
    #[error("axis of length {len} is too short, at least {min} elements required")]
    AxisTooShort {
        /// Length of the reduced axis.
        len: usize,
        /// Minimum length required.
        min: usize,
    },
}

/// Convenience alias for matrix operation results.
pub type MatResult<T> = Result<T, MatError>;
