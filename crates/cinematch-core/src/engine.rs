//! # Recommendation Engine
//!
//! Composes the [`TitleResolver`] and the [`Ranker`] over one immutable
//! [`MovieContext`] and exposes the single `query_movie` operation.

use tracing::debug;

use crate::context::MovieContext;
use crate::ranker::{Ranker, RankerConfig, SelfMatch};
use crate::resolver::{Resolution, ResolverConfig, TitleResolver};
use crate::types::{QueryResponse, Recommendation};

/// Configuration for the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub resolver: ResolverConfig,
    pub ranker: RankerConfig,
}

impl EngineConfig {
    /// Create a new engine configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resolver configuration.
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set the ranker configuration.
    pub fn with_ranker(mut self, ranker: RankerConfig) -> Self {
        self.ranker = ranker;
        self
    }

    /// Shortcut for the ranker's self-match policy.
    pub fn with_self_match(mut self, self_match: SelfMatch) -> Self {
        self.ranker.self_match = self_match;
        self
    }
}

/// Title resolver and similarity ranker over a fixed catalog.
///
/// Queries never mutate anything, so one `Recommender` can serve any
/// number of threads at once (share it behind an `Arc`).
#[derive(Debug)]
pub struct Recommender {
    context: MovieContext,
    resolver: TitleResolver,
    ranker: Ranker,
}

impl Recommender {
    /// Create a recommender over `context`.
    pub fn new(context: MovieContext, config: EngineConfig) -> Self {
        Self {
            context,
            resolver: TitleResolver::new(&config.resolver),
            ranker: Ranker::new(config.ranker),
        }
    }

    /// Create a recommender with a custom resolver chain.
    pub fn with_resolver(context: MovieContext, resolver: TitleResolver, ranker: Ranker) -> Self {
        Self {
            context,
            resolver,
            ranker,
        }
    }

    pub fn context(&self) -> &MovieContext {
        &self.context
    }

    /// Resolves a raw query to a canonical (lowercase) title.
    pub fn resolve(&self, query: &str) -> Resolution {
        self.resolver.resolve(&self.context, query)
    }

    /// Resolves `raw_title` and ranks the catalog against it.
    ///
    /// # Examples
    /// ```
    /// use cinematch_core::{EngineConfig, Movie, MovieContext, QueryStatus, Recommender, SimilarityMatrix};
    ///
    /// let movies = vec![Movie::new("Inception"), Movie::new("Tenet")];
    /// let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.6], vec![0.6, 1.0]]).unwrap();
    /// let ctx = MovieContext::new(movies, matrix).unwrap();
    /// let engine = Recommender::new(ctx, EngineConfig::default());
    ///
    /// let response = engine.query_movie("incepton");
    /// assert_eq!(response.status, QueryStatus::Ok);
    /// assert_eq!(response.resolved_title.as_deref(), Some("Inception"));
    /// assert_eq!(response.results[1].title, "Tenet");
    /// ```
    pub fn query_movie(&self, raw_title: &str) -> QueryResponse {
        let resolved = match self.resolve(raw_title) {
            Resolution::Found(resolved) => resolved,
            Resolution::NotFound(reason) => {
                debug!(query = raw_title, ?reason, "query not found");
                return QueryResponse::not_found();
            }
        };

        let Some(ranking) = self.ranker.rank(&self.context, &resolved.title) else {
            return QueryResponse::not_found();
        };

        let results = ranking
            .results
            .iter()
            .map(|ranked| Recommendation::new(ranked.movie, ranked.similarity))
            .collect();

        QueryResponse::ok(ranking.display_title, resolved.kind, results)
    }
}
