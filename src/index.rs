//! Inverted index, document store, and ingestion.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::error::{Result, SearchError};
use crate::tokenize::{StopWordSet, split_into_tokens};
use crate::types::{DocumentId, DocumentStatus};

/// Metadata stored per document.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentData {
    pub(crate) rating: i32,
    pub(crate) status: DocumentStatus,
}

/// Map from token to (document id -> term frequency).
///
/// Both levels are ordered: tokens lexicographically, postings by ascending
/// document id. Absence of a token means it occurs in no document.
#[derive(Debug, Default)]
pub(crate) struct InvertedIndex {
    postings: BTreeMap<String, BTreeMap<DocumentId, f64>>,
}

impl InvertedIndex {
    /// The posting list for `token`, or `None` if no document contains it.
    pub(crate) fn postings(&self, token: &str) -> Option<&BTreeMap<DocumentId, f64>> {
        self.postings.get(token)
    }

    /// Whether `token` occurs in document `id`.
    pub(crate) fn contains(&self, token: &str, id: DocumentId) -> bool {
        self.postings
            .get(token)
            .is_some_and(|docs| docs.contains_key(&id))
    }

    fn insert(&mut self, token: &str, id: DocumentId, term_freq: f64) {
        self.postings
            .entry(token.to_owned())
            .or_default()
            .insert(id, term_freq);
    }
}

/// Document metadata keyed by id; iteration is ascending by id.
#[derive(Debug, Default)]
pub(crate) struct DocumentStore {
    documents: BTreeMap<DocumentId, DocumentData>,
}

impl DocumentStore {
    pub(crate) fn len(&self) -> usize {
        self.documents.len()
    }

    pub(crate) fn contains(&self, id: DocumentId) -> bool {
        self.documents.contains_key(&id)
    }

    /// Metadata for `id`. Panics if the id is unknown: every id reachable
    /// through the index is also present in the store.
    pub(crate) fn data(&self, id: DocumentId) -> DocumentData {
        self.documents[&id]
    }

    /// The id of the `n`-th document under ascending-id iteration.
    pub(crate) fn nth_id(&self, n: usize) -> Option<DocumentId> {
        self.documents.keys().nth(n).copied()
    }
}

/// Owns the inverted index and the document store.
///
/// `add_document` is the sole writer for both; query paths only read.
#[derive(Debug, Default)]
pub(crate) struct Indexer {
    index: InvertedIndex,
    store: DocumentStore,
}

impl Indexer {
    pub(crate) fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub(crate) fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// Tokenizes `text`, drops stop words, and records the document's term
    /// frequencies, rating, and status.
    ///
    /// All failure points precede the first mutation, so a failed ingestion
    /// leaves the index and store untouched. A document whose every token is
    /// a stop word still occupies its id in the store.
    pub(crate) fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
        stop_words: &StopWordSet,
    ) -> Result<()> {
        if id < 0 {
            return Err(SearchError::InvalidArgument(format!(
                "cannot add a document with negative id {id}"
            )));
        }
        let tokens = split_into_tokens(text)?;
        if self.store.contains(id) {
            return Err(SearchError::InvalidArgument(format!(
                "document id {id} already exists"
            )));
        }

        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        let mut total = 0usize;
        for token in tokens {
            if stop_words.contains(token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
            total += 1;
        }

        for (token, count) in counts {
            self.index.insert(token, id, count as f64 / total as f64);
        }
        self.store.documents.insert(
            id,
            DocumentData {
                rating: average_rating(ratings),
                status,
            },
        );

        tracing::debug!(id, indexed_terms = total, "added document");
        Ok(())
    }
}

/// Integer mean truncated toward zero; 0 for an empty sequence.
fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}
