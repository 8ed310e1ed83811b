//! Public data types shared across the engine.

use serde::Serialize;
use std::fmt;

/// Identifier of a stored document.
///
/// Negative values are rejected at ingestion; the type stays signed so that
/// they can be rejected explicitly rather than silently wrapped by a cast.
pub type DocumentId = i32;

/// Moderation status attached to every document at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// One ranked search hit: a document id with its relevance and rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: DocumentId,
    pub relevance: f64,
    pub rating: i32,
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}
