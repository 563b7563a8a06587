//! # Similarity Ranker
//!
//! Reads the similarity row of a resolved title, drops scores below the
//! floor, and orders the rest by score (descending) with catalog order as
//! the tie-break.

use tracing::debug;

use crate::context::MovieContext;
use crate::types::Movie;

/// Default minimum similarity for a movie to be recommended.
pub const SIMILARITY_FLOOR: f64 = 0.1;

/// Whether the queried movie may appear in its own results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfMatch {
    /// Keep the queried movie when its self-similarity clears the floor.
    #[default]
    Include,
    /// Always drop the queried movie.
    Exclude,
}

/// Configuration for the ranker.
#[derive(Debug, Clone, PartialEq)]
pub struct RankerConfig {
    /// Minimum similarity (inclusive).
    pub floor: f64,
    pub self_match: SelfMatch,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            floor: SIMILARITY_FLOOR,
            self_match: SelfMatch::Include,
        }
    }
}

impl RankerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity floor, clamped to `[0.0, 1.0]`.
    ///
    /// A non-finite floor falls back to [`SIMILARITY_FLOOR`].
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = if floor.is_finite() {
            floor.clamp(0.0, 1.0)
        } else {
            SIMILARITY_FLOOR
        };
        self
    }

    /// Set the self-match policy.
    pub fn with_self_match(mut self, self_match: SelfMatch) -> Self {
        self.self_match = self_match;
        self
    }
}

/// A movie with its similarity to the queried one.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMovie<'a> {
    pub index: usize,
    pub movie: &'a Movie,
    pub similarity: f64,
}

/// Ranked neighbours of a known title.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    /// Catalog index the ranking was computed for.
    pub query_index: usize,
    /// Catalog title of that index, original casing.
    pub display_title: &'a str,
    pub results: Vec<RankedMovie<'a>>,
}

impl Ranking<'_> {
    /// `true` when the title is known but nothing cleared the floor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Orders catalog entries by precomputed similarity.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Ranks every catalog entry against `canonical_title`.
    ///
    /// Returns `None` if no catalog title equals `canonical_title`
    /// case-insensitively; the first equal title is used otherwise.
    pub fn rank<'a>(&self, ctx: &'a MovieContext, canonical_title: &str) -> Option<Ranking<'a>> {
        let query_index = ctx.find_title(canonical_title)?;
        let display_title = ctx.movie(query_index)?.title.as_str();

        let mut scored: Vec<(usize, f64)> = ctx
            .matrix()
            .row(query_index)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, score)| score >= self.config.floor)
            .filter(|&(index, _)| {
                self.config.self_match == SelfMatch::Include || index != query_index
            })
            .collect();

        // Stable: equal scores keep ascending catalog order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let results: Vec<RankedMovie<'a>> = scored
            .into_iter()
            .filter_map(|(index, similarity)| {
                ctx.movie(index).map(|movie| RankedMovie {
                    index,
                    movie,
                    similarity,
                })
            })
            .collect();

        debug!(
            title = display_title,
            query_index,
            results = results.len(),
            "ranked similar movies"
        );

        Some(Ranking {
            query_index,
            display_title,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::context_with_scores;

    fn catalog() -> MovieContext {
        context_with_scores(
            &["Inception", "Interstellar", "Memento", "Tenet", "Heat"],
            vec![
                vec![1.0, 0.4, 0.4, 0.7, 0.05],
                vec![0.4, 1.0, 0.2, 0.3, 0.0],
                vec![0.4, 0.2, 1.0, 0.1, 0.0],
                vec![0.7, 0.3, 0.1, 1.0, 0.09],
                vec![0.05, 0.0, 0.0, 0.09, 1.0],
            ],
        )
    }

    fn titles(ranking: &Ranking<'_>) -> Vec<String> {
        ranking
            .results
            .iter()
            .map(|r| r.movie.title.clone())
            .collect()
    }

    #[test]
    fn test_ranker_config() {
        let config = RankerConfig::new()
            .with_floor(0.3)
            .with_self_match(SelfMatch::Exclude);
        assert_eq!(config.floor, 0.3);
        assert_eq!(config.self_match, SelfMatch::Exclude);
        assert_eq!(RankerConfig::new().with_floor(2.0).floor, 1.0);
        assert_eq!(RankerConfig::default().floor, SIMILARITY_FLOOR);
    }

    #[test]
    fn test_ranker_config_non_finite_floor() {
        assert_eq!(RankerConfig::new().with_floor(f64::NAN).floor, SIMILARITY_FLOOR);
        assert_eq!(
            RankerConfig::new().with_floor(f64::INFINITY).floor,
            SIMILARITY_FLOOR
        );

        let ctx = catalog();
        let ranker = Ranker::new(RankerConfig::new().with_floor(f64::NAN));
        let ranking = ranker.rank(&ctx, "memento").unwrap();
        assert_eq!(
            titles(&ranking),
            vec!["Memento", "Inception", "Interstellar", "Tenet"]
        );
    }

    #[test]
    fn test_rank_orders_by_score_then_catalog_order() {
        let ctx = catalog();
        let ranking = Ranker::default().rank(&ctx, "inception").unwrap();

        assert_eq!(ranking.query_index, 0);
        assert_eq!(ranking.display_title, "Inception");
        // Self-similarity clears the floor and is kept; ties (0.4) keep catalog order.
        assert_eq!(
            titles(&ranking),
            vec!["Inception", "Tenet", "Interstellar", "Memento"]
        );
        assert!(ranking
            .results
            .windows(2)
            .all(|w| w[0].similarity >= w[1].similarity));
    }

    #[test]
    fn test_rank_floor_is_inclusive() {
        let ctx = catalog();
        let ranking = Ranker::default().rank(&ctx, "MEMENTO").unwrap();
        // Tenet sits exactly on the floor.
        assert_eq!(
            titles(&ranking),
            vec!["Memento", "Inception", "Interstellar", "Tenet"]
        );

        let ranking = Ranker::default().rank(&ctx, "tenet").unwrap();
        assert!(titles(&ranking).contains(&"Memento".to_string()));
        assert!(ranking.results.iter().all(|r| r.similarity >= SIMILARITY_FLOOR));
        assert!(!titles(&ranking).contains(&"Heat".to_string()));
    }

    #[test]
    fn test_rank_drops_scores_just_below_floor() {
        let ctx = context_with_scores(
            &["Alpha", "Beta"],
            vec![vec![1.0, 0.099_999_999], vec![0.099_999_999, 1.0]],
        );
        let ranking = Ranker::default().rank(&ctx, "alpha").unwrap();
        assert_eq!(titles(&ranking), vec!["Alpha"]);
    }

    #[test]
    fn test_rank_exclude_self() {
        let ctx = catalog();
        let ranker = Ranker::new(RankerConfig::new().with_self_match(SelfMatch::Exclude));
        let ranking = ranker.rank(&ctx, "inception").unwrap();
        assert_eq!(titles(&ranking), vec!["Tenet", "Interstellar", "Memento"]);
    }

    #[test]
    fn test_rank_known_title_with_nothing_similar() {
        let ctx = context_with_scores(
            &["Heat", "Alien"],
            vec![vec![0.05, 0.0], vec![0.0, 1.0]],
        );
        let ranking = Ranker::default().rank(&ctx, "heat").unwrap();
        assert_eq!(ranking.display_title, "Heat");
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_rank_unknown_title() {
        let ctx = catalog();
        assert!(Ranker::default().rank(&ctx, "incep").is_none());
    }

    #[test]
    fn test_rank_uses_first_case_insensitive_title() {
        let ctx = context_with_scores(
            &["Heat", "HEAT"],
            vec![vec![1.0, 0.5], vec![0.5, 1.0]],
        );
        let ranking = Ranker::default().rank(&ctx, "heat").unwrap();
        assert_eq!(ranking.query_index, 0);
        assert_eq!(ranking.display_title, "Heat");
    }
}
