use thiserror::Error;

/// Errors raised while assembling the movie context at startup.
///
/// Per-query outcomes (empty query, no match, nothing similar) are never
/// errors; they are reported as data through [`crate::QueryResponse`].
#[derive(Debug, Error)]
pub enum CinematchError {
    /// The catalog contains no movies.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// A matrix row does not have as many columns as the matrix has rows.
    #[error("similarity matrix is not square: row {row} has {found} columns, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Number of columns found in the row.
        found: usize,
    },

    /// The matrix dimension differs from the number of catalog entries.
    #[error("similarity matrix is {matrix}x{matrix} but catalog has {catalog} movies")]
    DimensionMismatch {
        /// Number of catalog entries.
        catalog: usize,
        /// Matrix dimension.
        matrix: usize,
    },

    /// A similarity score is NaN, infinite or outside `[0.0, 1.0]`.
    #[error("invalid similarity score {value} at ({row}, {col})")]
    InvalidScore { row: usize, col: usize, value: f64 },

    /// `m[row][col]` and `m[col][row]` disagree.
    #[error("similarity matrix is not symmetric at ({row}, {col})")]
    Asymmetric { row: usize, col: usize },

    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for Cinematch operations.
pub type Result<T> = std::result::Result<T, CinematchError>;
