//! Error types for the tyche-linalg crate.

/// Error type for all fallible operations in the tyche-linalg crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LinalgError {
    /// Returned when a matrix is constructed from no rows.
    #[error("matrix has no rows")]
    Empty,

    /// Returned when a matrix is constructed from rows of unequal length.
    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of columns found in that row.
        got: usize,
        /// Number of columns in the first row.
        expected: usize,
    },

    /// Returned when a square matrix is required but dimensions differ.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when two operands have incompatible dimensions.
    #[error("dimension mismatch: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        /// Rows of the left operand.
        left_rows: usize,
        /// Columns of the left operand.
        left_cols: usize,
        /// Rows of the right operand.
        right_rows: usize,
        /// Columns of the right operand.
        right_cols: usize,
    },

    /// Returned when a matrix has a determinant of exactly zero.
    #[error("matrix is singular (zero determinant)")]
    Singular,
}
