//! Property-based tests for the matrix algebra.
