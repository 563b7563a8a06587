//! # Movie Context
//!
//! The immutable catalog + similarity matrix pair every query reads from,
//! together with the normalized titles used as a lookup aid.

use tracing::debug;

use crate::error::{CinematchError, Result};
use crate::normalize::Normalizer;
use crate::types::{Movie, SimilarityMatrix};

/// Read-only data shared by all queries.
///
/// Construct once at startup and share (e.g. behind an `Arc`); nothing in
/// it changes afterwards.
#[derive(Debug, Clone)]
pub struct MovieContext {
    movies: Vec<Movie>,
    matrix: SimilarityMatrix,
    normalized: Vec<String>,
    normalizer: Normalizer,
}

impl MovieContext {
    /// Builds a context, checking that the matrix matches the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CinematchError::EmptyCatalog` if `movies` is empty and
    /// `CinematchError::DimensionMismatch` if the matrix size differs from
    /// the catalog size.
    pub fn new(movies: Vec<Movie>, matrix: SimilarityMatrix) -> Result<Self> {
        if movies.is_empty() {
            return Err(CinematchError::EmptyCatalog);
        }
        if matrix.size() != movies.len() {
            return Err(CinematchError::DimensionMismatch {
                catalog: movies.len(),
                matrix: matrix.size(),
            });
        }

        let normalizer = Normalizer::new()?;
        let normalized = movies
            .iter()
            .map(|movie| normalizer.normalize(&movie.title))
            .collect();

        debug!(movies = movies.len(), "movie context built");

        Ok(Self {
            movies,
            matrix,
            normalized,
            normalizer,
        })
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Always `false` for a constructed context.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    #[must_use]
    pub fn movie(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    #[must_use]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    #[must_use]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Normalized titles, in catalog order.
    #[must_use]
    pub fn normalized_titles(&self) -> &[String] {
        &self.normalized
    }

    /// First catalog index whose normalized title equals `normalized`.
    #[must_use]
    pub fn first_with_normalized(&self, normalized: &str) -> Option<usize> {
        self.normalized.iter().position(|title| title == normalized)
    }

    /// First catalog index whose title equals `title`, ignoring case.
    #[must_use]
    pub fn find_title(&self, title: &str) -> Option<usize> {
        let wanted = title.to_lowercase();
        self.movies
            .iter()
            .position(|movie| movie.title.to_lowercase() == wanted)
    }
}
