use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::locale::DEFAULT_LOCALE;

/// One synthetic book. Field names serialise in camelCase for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// 1-based position of the record (`record index + 1`).
    pub absolute_index: u64,
    pub isbn: String,
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub likes: u32,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub text: String,
    pub author: String,
}

/// Parameters for one batch of records. Range checks happen before a
/// request reaches the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub locale: String,
    pub seed: u64,
    pub average_likes: f64,
    pub average_reviews: f64,
    /// 0-based index of the first record.
    pub start: u64,
    pub count: u32,
}

impl GenerationRequest {
    /// 0-based record indices covered by this request.
    ///
    /// Indices past `u64::MAX` do not exist, so a range touching the end of
    /// the index space comes back short.
    pub fn indices(&self) -> Range<u64> {
        self.start..self.start.saturating_add(u64::from(self.count))
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            seed: 42,
            average_likes: 5.0,
            average_reviews: 3.0,
            start: 0,
            count: 20,
        }
    }
}
