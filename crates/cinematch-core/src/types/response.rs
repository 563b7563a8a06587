use serde::{Deserialize, Serialize};

use super::movie::{Movie, teaser};

/// Which resolution strategy produced the canonical title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Substring,
    Keyword,
    Fuzzy,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Substring => write!(f, "substring"),
            Self::Keyword => write!(f, "keyword"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// Outcome of a query, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    NotFound,
    Ok,
}

/// One recommended movie with its similarity to the resolved title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub genres: String,
    pub overview: String,
    pub director: String,
    pub cast: String,
    pub poster_url: Option<String>,
    /// Score in `[0.0, 1.0]` read from the similarity matrix.
    pub similarity: f64,
}

impl Recommendation {
    /// Copies the catalog fields of `movie` and attaches `similarity`.
    #[must_use]
    pub fn new(movie: &Movie, similarity: f64) -> Self {
        Self {
            title: movie.title.clone(),
            genres: movie.genres.clone(),
            overview: movie.overview.clone(),
            director: movie.director.clone(),
            cast: movie.cast.clone(),
            poster_url: movie.poster_url.clone(),
            similarity,
        }
    }

    /// Overview cut to `max_chars` characters; see [`Movie::short_overview`].
    #[must_use]
    pub fn short_overview(&self, max_chars: usize) -> String {
        teaser(&self.overview, max_chars)
    }
}

/// Response of a single `query_movie` call.
///
/// An unknown title is `NotFound` with no results. A known title with
/// nothing above the similarity floor is `Ok` with an empty result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub status: QueryStatus,

    /// Catalog title (original casing) the query resolved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_title: Option<String>,

    /// Strategy that resolved the query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_by: Option<MatchKind>,

    pub results: Vec<Recommendation>,
}

impl QueryResponse {
    /// A `not_found` response with no results.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: QueryStatus::NotFound,
            resolved_title: None,
            matched_by: None,
            results: Vec::new(),
        }
    }

    /// An `ok` response for `resolved_title`.
    #[must_use]
    pub fn ok(
        resolved_title: impl Into<String>,
        matched_by: MatchKind,
        results: Vec<Recommendation>,
    ) -> Self {
        Self {
            status: QueryStatus::Ok,
            resolved_title: Some(resolved_title.into()),
            matched_by: Some(matched_by),
            results,
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == QueryStatus::Ok
    }
}

impl std::fmt::Display for QueryResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.status, &self.resolved_title) {
            (QueryStatus::Ok, Some(title)) => {
                write!(f, "QueryResponse(title={title:?}")?;
                if let Some(kind) = self.matched_by {
                    write!(f, ", via={kind}")?;
                }
                write!(f, ", results={})", self.results.len())
            }
            _ => write!(f, "QueryResponse(not_found)"),
        }
    }
}
