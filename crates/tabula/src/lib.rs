//! # Tabula
//!
//! A generic dense-matrix library for matrix-like data manipulation.
//!
//! Tabula provides a rectangular container over any element type with a
//! full algebra of structural, arithmetic, comparison and statistical
//! operations, with strict shape invariants and clear failure modes.
//!
//! ## Quick Start
//!
//! ```
//! use tabula::prelude::*;
//!
//! let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//! let bigger = m.gt_mask(&2);
//! assert_eq!(bigger[(1, 0)], Truth::TRUE);
//! # Ok::<(), MatError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tabula_mat as mat;
pub use tabula_truth as truth;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tabula_mat::{MatError, MatResult, Matrix};
    pub use tabula_truth::Truth;
}
