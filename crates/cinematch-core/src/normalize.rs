//! # Title Normalization
//!
//! Folds titles and queries into a canonical lookup form: lowercase, the
//! separators `- _ . , : ;` replaced by spaces, whitespace runs squashed to
//! one space, ends trimmed.

use regex::Regex;

use crate::error::Result;

/// Title normalizer with pre-compiled patterns.
#[derive(Debug, Clone)]
pub struct Normalizer {
    re_separators: Regex,
    re_whitespace: Regex,
}

impl Normalizer {
    /// Constructs a new `Normalizer`.
    ///
    /// # Errors
    ///
    /// Returns `CinematchError::Regex` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_separators: Regex::new(r"[-_.,:;]")?,
            re_whitespace: Regex::new(r"\s+")?,
        })
    }

    /// Normalizes a title or query.
    ///
    /// # Examples
    /// ```
    /// use cinematch_core::Normalizer;
    ///
    /// let normalizer = Normalizer::new().unwrap();
    /// assert_eq!(normalizer.normalize("Spider-Man:  Far From Home"), "spider man far from home");
    /// ```
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let spaced = self.re_separators.replace_all(&lowered, " ");
        self.re_whitespace
            .replace_all(&spaced, " ")
            .trim()
            .to_string()
    }
}
