//! # Cinematch Core
//!
//! Resolves free-text movie titles against a fixed catalog and ranks the
//! rest of the catalog by a precomputed similarity matrix.
//!
//! ## Quick Start
//!
//! ```rust
//! use cinematch_core::{EngineConfig, Movie, MovieContext, Recommender, SimilarityMatrix};
//!
//! let movies = vec![Movie::new("Star Wars"), Movie::new("The Empire Strikes Back")];
//! let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.7], vec![0.7, 1.0]]).unwrap();
//! let context = MovieContext::new(movies, matrix).unwrap();
//!
//! let engine = Recommender::new(context, EngineConfig::default());
//! let response = engine.query_movie("star wars");
//!
//! assert_eq!(response.resolved_title.as_deref(), Some("Star Wars"));
//! assert_eq!(response.results[1].title, "The Empire Strikes Back");
//! ```
pub mod context;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod ranker;
pub mod resolver;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export primary API
pub use context::MovieContext;
pub use engine::{EngineConfig, Recommender};
pub use error::{CinematchError, Result};
pub use normalize::Normalizer;
pub use ranker::{RankedMovie, Ranker, RankerConfig, Ranking, SelfMatch, SIMILARITY_FLOOR};
pub use resolver::{
    ExactMatch, FuzzyMatch, KeywordMatch, MatchStrategy, NotFoundReason, ResolvedTitle,
    Resolution, ResolverConfig, SubstringMatch, TitleResolver,
};
pub use types::{
    MatchKind, Movie, QueryResponse, QueryStatus, Recommendation, SimilarityMatrix,
    SHORT_OVERVIEW_CHARS,
};
