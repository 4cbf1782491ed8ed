//! # tyche-linalg
//!
//! Small dense linear algebra for absorbing-chain calculations: a row-major
//! [`Matrix`] type and matrix inversion via the cofactor/adjugate method.
//!
//! The inverse is computed as `adjugate(A) / determinant(A)` with the
//! determinant expanded recursively along the first row. This is factorial
//! in the matrix dimension and intended only for the small systems that
//! arise from short target patterns.
//!
//! Singularity is detected exactly: a determinant of `0.0` yields
//! [`LinalgError::Singular`] rather than a matrix full of infinities.

pub mod error;
pub mod inverse;
pub mod matrix;

pub use error::LinalgError;
pub use inverse::{adjugate, determinant, inverse, minor};
pub use matrix::Matrix;
