//! # Title Resolver
//!
//! Maps a noisy user query to exactly one catalog title by running an
//! ordered chain of [`MatchStrategy`] tiers (exact, substring, keyword,
//! fuzzy) and stopping at the first tier that produces a candidate.

pub mod strategy;

pub use strategy::{ExactMatch, FuzzyMatch, KeywordMatch, MatchStrategy, SubstringMatch};

use tracing::{debug, trace};

use crate::context::MovieContext;
use crate::types::MatchKind;

/// Configuration for the resolver chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Maximum fuzzy candidates considered.
    pub fuzzy_limit: usize,
    /// Minimum fuzzy similarity ratio.
    pub fuzzy_cutoff: f64,
    /// Minimum character length for a query word to trigger a keyword match.
    pub min_keyword_len: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_limit: 5,
            fuzzy_cutoff: 0.6,
            min_keyword_len: 3,
        }
    }
}

impl ResolverConfig {
    /// Create a new resolver configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of fuzzy candidates considered.
    pub fn with_fuzzy_limit(mut self, limit: usize) -> Self {
        self.fuzzy_limit = limit;
        self
    }

    /// Set the fuzzy similarity cutoff. Non-finite values are ignored.
    pub fn with_fuzzy_cutoff(mut self, cutoff: f64) -> Self {
        if cutoff.is_finite() {
            self.fuzzy_cutoff = cutoff.clamp(0.0, 1.0);
        }
        self
    }

    /// Set the minimum keyword length.
    pub fn with_min_keyword_len(mut self, len: usize) -> Self {
        self.min_keyword_len = len;
        self
    }
}

/// Why a query did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The query was blank once normalized; no strategy ran.
    EmptyQuery,
    /// Every strategy ran without producing a candidate.
    NoMatch,
}

/// A successfully resolved title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    /// Catalog index of the chosen movie.
    pub index: usize,
    /// Chosen catalog title, lowercased.
    pub title: String,
    /// Strategy that produced it.
    pub kind: MatchKind,
}

/// Outcome of [`TitleResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(ResolvedTitle),
    NotFound(NotFoundReason),
}

impl Resolution {
    /// The resolved lowercase title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Found(resolved) => Some(&resolved.title),
            Self::NotFound(_) => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Ordered chain of match strategies.
pub struct TitleResolver {
    strategies: Vec<Box<dyn MatchStrategy>>,
}

impl TitleResolver {
    /// Builds the standard four-tier chain from `config`.
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_strategies(vec![
            Box::new(ExactMatch),
            Box::new(SubstringMatch),
            Box::new(KeywordMatch {
                min_word_len: config.min_keyword_len,
            }),
            Box::new(FuzzyMatch {
                limit: config.fuzzy_limit,
                cutoff: config.fuzzy_cutoff,
            }),
        ])
    }

    /// Builds a resolver from an explicit chain, tried in order.
    pub fn with_strategies(strategies: Vec<Box<dyn MatchStrategy>>) -> Self {
        Self { strategies }
    }

    /// Strategy kinds in the order they are tried.
    pub fn kinds(&self) -> Vec<MatchKind> {
        self.strategies.iter().map(|s| s.kind()).collect()
    }

    /// Resolves `query` against the catalog in `ctx`.
    ///
    /// # Examples
    /// ```
    /// use cinematch_core::{Movie, MovieContext, ResolverConfig, SimilarityMatrix, TitleResolver};
    ///
    /// let movies = vec![Movie::new("Star Wars"), Movie::new("Wars of Stars")];
    /// let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.2], vec![0.2, 1.0]]).unwrap();
    /// let ctx = MovieContext::new(movies, matrix).unwrap();
    ///
    /// let resolver = TitleResolver::new(&ResolverConfig::default());
    /// assert_eq!(resolver.resolve(&ctx, "STAR").title(), Some("star wars"));
    /// ```
    pub fn resolve(&self, ctx: &MovieContext, query: &str) -> Resolution {
        let normalized = ctx.normalizer().normalize(query);
        if normalized.is_empty() {
            debug!(query, "empty query");
            return Resolution::NotFound(NotFoundReason::EmptyQuery);
        }

        for strategy in &self.strategies {
            let kind = strategy.kind();
            let Some(index) = strategy.attempt(&normalized, ctx) else {
                trace!(query = %normalized, strategy = %kind, "no candidate");
                continue;
            };
            let Some(movie) = ctx.movie(index) else {
                continue;
            };

            debug!(query = %normalized, strategy = %kind, index, title = %movie.title, "resolved");
            return Resolution::Found(ResolvedTitle {
                index,
                title: movie.title.to_lowercase(),
                kind,
            });
        }

        debug!(query = %normalized, "no strategy matched");
        Resolution::NotFound(NotFoundReason::NoMatch)
    }
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self::new(&ResolverConfig::default())
    }
}

impl std::fmt::Debug for TitleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleResolver")
            .field("strategies", &self.kinds())
            .finish()
    }
}
