//! # Match Strategies
//!
//! The four resolution tiers. Each one receives an already-normalized,
//! non-empty query and returns at most one catalog index. Ties are always
//! broken by catalog order.

use std::cmp::Reverse;

use crate::context::MovieContext;
use crate::types::MatchKind;

/// A single tier of the resolver chain.
pub trait MatchStrategy: Send + Sync {
    /// The kind reported when this strategy resolves a query.
    fn kind(&self) -> MatchKind;

    /// Tries to resolve `query` (normalized) to a catalog index.
    fn attempt(&self, query: &str, ctx: &MovieContext) -> Option<usize>;
}

/// Character length of the raw catalog title, used as a tie-breaker.
fn title_len(ctx: &MovieContext, index: usize) -> usize {
    ctx.movie(index).map_or(usize::MAX, |movie| movie.title.chars().count())
}

/// Normalized title equals the normalized query.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl MatchStrategy for ExactMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Exact
    }

    fn attempt(&self, query: &str, ctx: &MovieContext) -> Option<usize> {
        ctx.first_with_normalized(query)
    }
}

/// Normalized title contains the query.
///
/// Candidates starting with the query win, then titles with fewer words,
/// then shorter raw titles.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatch;

impl MatchStrategy for SubstringMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Substring
    }

    fn attempt(&self, query: &str, ctx: &MovieContext) -> Option<usize> {
        // min_by_key keeps the first of equal keys, i.e. catalog order.
        ctx.normalized_titles()
            .iter()
            .enumerate()
            .filter(|(_, title)| title.contains(query))
            .min_by_key(|(index, title)| {
                (
                    Reverse(title.starts_with(query)),
                    title.split_whitespace().count(),
                    title_len(ctx, *index),
                )
            })
            .map(|(index, _)| index)
    }
}

/// Word-overlap match driven by the first query word found in any title.
///
/// Only words of at least `min_word_len` characters can trigger a match,
/// and only the first triggering word is scored: later words are never
/// tried even if its candidates all score zero.
#[derive(Debug, Clone, Copy)]
pub struct KeywordMatch {
    pub min_word_len: usize,
}

impl Default for KeywordMatch {
    fn default() -> Self {
        Self { min_word_len: 3 }
    }
}

impl KeywordMatch {
    fn score(words: &[&str], title: &str) -> usize {
        words.iter().filter(|word| title.contains(*word)).count()
    }
}

impl MatchStrategy for KeywordMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Keyword
    }

    fn attempt(&self, query: &str, ctx: &MovieContext) -> Option<usize> {
        let words: Vec<&str> = query.split_whitespace().collect();
        let titles = ctx.normalized_titles();

        let trigger = words
            .iter()
            .filter(|word| word.chars().count() >= self.min_word_len)
            .find(|word| titles.iter().any(|title| title.contains(*word)))?;

        titles
            .iter()
            .enumerate()
            .filter(|(_, title)| title.contains(trigger))
            .map(|(index, title)| (index, Self::score(&words, title)))
            .min_by_key(|&(index, score)| (Reverse(score), title_len(ctx, index)))
            .filter(|&(_, score)| score > 0)
            .map(|(index, _)| index)
    }
}

/// Approximate match on normalized edit-distance similarity.
///
/// The ratio is `strsim::normalized_levenshtein`, i.e.
/// `1 - levenshtein / longer length`. Titles much longer or shorter than the
/// query score lower than they would under a matching-blocks ratio, so the
/// cutoff rejects short queries against long titles (`"star"` vs
/// `"star wars"` scores 0.44).
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatch {
    /// Maximum number of candidates considered.
    pub limit: usize,
    /// Minimum similarity ratio in `[0.0, 1.0]`.
    pub cutoff: f64,
}

impl Default for FuzzyMatch {
    fn default() -> Self {
        Self {
            limit: 5,
            cutoff: 0.6,
        }
    }
}

impl FuzzyMatch {
    /// Up to `limit` catalog indices with ratio >= `cutoff`, best first.
    #[must_use]
    pub fn candidates(&self, query: &str, ctx: &MovieContext) -> Vec<(usize, f64)> {
        let mut scored: Vec<(usize, f64)> = ctx
            .normalized_titles()
            .iter()
            .enumerate()
            .map(|(index, title)| (index, strsim::normalized_levenshtein(query, title)))
            .filter(|&(_, ratio)| ratio >= self.cutoff)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(self.limit);
        scored
    }
}

impl MatchStrategy for FuzzyMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Fuzzy
    }

    fn attempt(&self, query: &str, ctx: &MovieContext) -> Option<usize> {
        let (best, _) = self.candidates(query, ctx).into_iter().next()?;
        ctx.first_with_normalized(&ctx.normalized_titles()[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::context_from_titles;

    #[test]
    fn exact_picks_first_in_catalog_order() {
        let ctx = context_from_titles(&["Heat", "Alien", "ALIEN"]);
        assert_eq!(ExactMatch.attempt("alien", &ctx), Some(1));
        assert_eq!(ExactMatch.attempt("aliens", &ctx), None);
    }

    #[test]
    fn substring_prefers_titles_starting_with_query() {
        // Titles starting with the query rank first, so "wars" picks "Wars of Stars".
        let ctx = context_from_titles(&["Wars of Stars", "Star Wars"]);
        assert_eq!(SubstringMatch.attempt("star", &ctx), Some(1));
        assert_eq!(SubstringMatch.attempt("wars", &ctx), Some(0));
    }

    #[test]
    fn substring_prefers_fewer_words_then_shorter_titles() {
        let ctx = context_from_titles(&[
            "Batman Returns Again",
            "Batman: Returns",
            "Batman Begins",
        ]);
        // All start with "batman"; two-word titles beat three, shorter raw title wins.
        assert_eq!(SubstringMatch.attempt("batman", &ctx), Some(2));

        let ctx = context_from_titles(&["Rocky II", "Rocky V", "Rocky X"]);
        assert_eq!(SubstringMatch.attempt("rocky", &ctx), Some(1));
    }

    #[test]
    fn substring_no_candidates() {
        let ctx = context_from_titles(&["Heat"]);
        assert_eq!(SubstringMatch.attempt("cold", &ctx), None);
    }

    #[test]
    fn keyword_advances_past_words_without_matches() {
        let ctx = context_from_titles(&["Heat", "City of Lights", "Lights Out"]);
        assert_eq!(KeywordMatch::default().attempt("dark city lights", &ctx), Some(1));
    }

    #[test]
    fn keyword_only_scores_first_matching_word() {
        // "dark" matches first, so "City of Lights" is never considered.
        let ctx = context_from_titles(&["City of Lights", "Dark Knight"]);
        assert_eq!(KeywordMatch::default().attempt("dark city lights", &ctx), Some(1));
    }

    #[test]
    fn keyword_ranks_by_overlap_then_length() {
        let ctx = context_from_titles(&[
            "The Dark Knight Rises",
            "Dark Knight",
            "Dark",
        ]);
        assert_eq!(KeywordMatch::default().attempt("dark knight rises again", &ctx), Some(0));
        assert_eq!(KeywordMatch::default().attempt("dark knight returns", &ctx), Some(1));
    }

    #[test]
    fn keyword_ignores_short_words_as_triggers() {
        let ctx = context_from_titles(&["Up", "It"]);
        assert_eq!(KeywordMatch::default().attempt("up it", &ctx), None);
    }

    #[test]
    fn keyword_short_words_still_count_towards_score() {
        let ctx = context_from_titles(&["Toy Story", "Toy Story of Us"]);
        // Trigger "story" matches both; "of" and "us" lift the second title.
        assert_eq!(KeywordMatch::default().attempt("story of us", &ctx), Some(1));
    }

    #[test]
    fn fuzzy_finds_misspelling() {
        let ctx = context_from_titles(&["Inception", "Interstellar", "Insomnia"]);
        assert_eq!(FuzzyMatch::default().attempt("incepton", &ctx), Some(0));
    }

    #[test]
    fn fuzzy_ratio_penalizes_length_mismatch() {
        let ctx = context_from_titles(&["Star Wars"]);
        let fuzzy = FuzzyMatch::default();
        // 1 - 5/9: below the cutoff even though every query char is in the title.
        assert!(fuzzy.candidates("star", &ctx).is_empty());

        let candidates = fuzzy.candidates("star warz", &ctx);
        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].1 - 8.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn fuzzy_respects_cutoff_and_limit() {
        let ctx = context_from_titles(&["Heat", "Heal", "Head", "Hear", "Hehe", "Hat", "Meat"]);
        let fuzzy = FuzzyMatch {
            limit: 2,
            cutoff: 0.6,
        };
        let candidates = fuzzy.candidates("heat", &ctx);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0], (0, 1.0));
        // Ties at 0.75 keep catalog order.
        assert_eq!(candidates[1].0, 1);

        assert!(FuzzyMatch::default().candidates("zzzzzzzz", &ctx).is_empty());
    }

    #[test]
    fn fuzzy_maps_back_to_first_entry_with_same_normalized_form() {
        let ctx = context_from_titles(&["Se7en", "se7en.", "Seven Samurai"]);
        assert_eq!(FuzzyMatch::default().attempt("se7n", &ctx), Some(0));
    }
}
