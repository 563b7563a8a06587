use crate::error::{CinematchError, Result};

/// Slack allowed above 1.0 and between mirrored cells, to absorb rounding
/// in externally computed cosine scores.
pub const SCORE_TOLERANCE: f64 = 1e-4;

/// Square, symmetric matrix of precomputed similarity scores.
///
/// Stored row-major in a single buffer. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    /// Builds a matrix from nested rows, validating shape and values.
    ///
    /// # Errors
    ///
    /// Returns `CinematchError::NotSquare` if any row length differs from the
    /// row count, `CinematchError::InvalidScore` for scores outside
    /// `[0.0, 1.0]` (or non-finite), and `CinematchError::Asymmetric` if
    /// mirrored cells disagree.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(CinematchError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            scores.extend(values);
        }

        let matrix = Self { size, scores };
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> Result<()> {
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.get(row, col);
                if !value.is_finite() || value < 0.0 || value > 1.0 + SCORE_TOLERANCE {
                    return Err(CinematchError::InvalidScore { row, col, value });
                }
                if col > row && (value - self.get(col, row)).abs() > SCORE_TOLERANCE {
                    return Err(CinematchError::Asymmetric { row, col });
                }
            }
        }
        Ok(())
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for a 0x0 matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Full row of scores for `index`, one entry per catalog position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.size;
        &self.scores[start..start + self.size]
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.scores[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_accepts_valid_matrix() {
        let matrix =
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.3], vec![0.3, 1.0]]).unwrap();
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.row(1).to_vec(), vec![0.3_f64, 1.0]);
        assert_eq!(matrix.get(0, 1), 0.3);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = SimilarityMatrix::from_rows(vec![vec![1.0, 0.3], vec![0.3]]).unwrap_err();
        assert!(matches!(
            err,
            CinematchError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn from_rows_rejects_out_of_range_scores() {
        let err =
            SimilarityMatrix::from_rows(vec![vec![1.0, -0.2], vec![-0.2, 1.0]]).unwrap_err();
        assert!(matches!(err, CinematchError::InvalidScore { row: 0, col: 1, .. }));

        let err = SimilarityMatrix::from_rows(vec![vec![f64::NAN]]).unwrap_err();
        assert!(matches!(err, CinematchError::InvalidScore { .. }));
    }

    #[test]
    fn from_rows_tolerates_rounding_above_one() {
        let matrix = SimilarityMatrix::from_rows(vec![vec![1.000_01]]).unwrap();
        assert_eq!(matrix.size(), 1);
    }

    #[test]
    fn from_rows_rejects_asymmetric_matrix() {
        let err =
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.3], vec![0.5, 1.0]]).unwrap_err();
        assert!(matches!(err, CinematchError::Asymmetric { row: 0, col: 1 }));
    }

    #[test]
    fn empty_matrix() {
        let matrix = SimilarityMatrix::from_rows(Vec::new()).unwrap();
        assert!(matrix.is_empty());
    }
}
