use serde::{Deserialize, Deserializer, Serialize};

/// Number of overview characters shown in a teaser before truncation.
pub const SHORT_OVERVIEW_CHARS: usize = 200;

/// A single catalog entry.
///
/// Movies are identified by their position in the catalog, which is also
/// their row and column in the [`SimilarityMatrix`](super::SimilarityMatrix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title as stored in the catalog.
    pub title: String,

    /// Genre list, as a single free-text field.
    #[serde(default, deserialize_with = "string_or_null")]
    pub genres: String,

    /// Plot summary.
    #[serde(default, deserialize_with = "string_or_null")]
    pub overview: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub director: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub cast: String,

    /// Poster image URL, if the catalog has one.
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl Movie {
    /// Creates a movie with only a title set.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genres: String::new(),
            overview: String::new(),
            director: String::new(),
            cast: String::new(),
            poster_url: None,
        }
    }

    /// Returns the overview cut to at most `max_chars` characters, with
    /// `"..."` appended when anything was cut.
    #[must_use]
    pub fn short_overview(&self, max_chars: usize) -> String {
        teaser(&self.overview, max_chars)
    }
}

/// Cuts `text` to `max_chars` characters, marking the cut with `"..."`.
pub(crate) fn teaser(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        if !self.director.is_empty() {
            write!(f, " (dir. {})", self.director)?;
        }
        Ok(())
    }
}

/// Catalog exports write missing text cells as `null`.
fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
