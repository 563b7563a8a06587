//! Small synthetic catalogs for unit tests.

use crate::context::MovieContext;
use crate::types::{Movie, SimilarityMatrix};

/// Context whose matrix is the identity.
pub(crate) fn context_from_titles(titles: &[&str]) -> MovieContext {
    let n = titles.len();
    let rows = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();
    context_with_scores(titles, rows)
}

/// Context with explicit similarity rows.
pub(crate) fn context_with_scores(titles: &[&str], rows: Vec<Vec<f64>>) -> MovieContext {
    let movies = titles
        .iter()
        .map(|title| {
            let mut movie = Movie::new(*title);
            movie.genres = "Drama".into();
            movie
        })
        .collect();
    let matrix = SimilarityMatrix::from_rows(rows).unwrap();
    MovieContext::new(movies, matrix).unwrap()
}
