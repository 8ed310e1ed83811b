//! The public search-engine facade.

use crate::error::{Result, SearchError};
use crate::index::Indexer;
use crate::query::Query;
use crate::scoring::{self, DocumentPredicate};
use crate::tokenize::StopWordSet;
use crate::types::{DocumentId, DocumentStatus, ScoredDocument};

/// In-memory document search engine with TF-IDF ranking.
///
/// [`SearchEngine::add_document`] is the only mutator; every other operation
/// is a pure read. The engine provides no internal locking: finish ingesting
/// before issuing queries, or serialize ingestion and queries externally.
/// Concurrent reads are safe once ingestion has ceased; running ingestion
/// concurrently with anything is not supported.
#[derive(Debug, Default)]
pub struct SearchEngine {
    stop_words: StopWordSet,
    indexer: Indexer,
}

impl SearchEngine {
    /// Creates an engine with no stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with stop words taken from a space-delimited string.
    pub fn with_stop_word_text(text: &str) -> Result<Self> {
        Ok(Self {
            stop_words: StopWordSet::from_text(text)?,
            indexer: Indexer::default(),
        })
    }

    /// Creates an engine with stop words taken from a collection of words.
    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            stop_words: StopWordSet::from_words(words)?,
            indexer: Indexer::default(),
        })
    }

    /// Ingests one document.
    ///
    /// Fails with [`SearchError::InvalidArgument`] on a negative or duplicate
    /// id and with [`SearchError::InvalidInput`] on malformed text; either
    /// way the engine is left unchanged.
    pub fn add_document(
        &mut self,
        id: DocumentId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.indexer
            .add_document(id, text, status, ratings, &self.stop_words)
    }

    /// Top documents for `raw_query` among those with status
    /// [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    /// Top documents for `raw_query` filtered to a single status.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by(raw_query, move |_, document_status, _| {
            document_status == status
        })
    }

    /// Top documents for `raw_query` filtered by an arbitrary predicate over
    /// document id, status, and rating.
    ///
    /// Results are ordered by descending relevance; relevances within `1e-6`
    /// of each other are ordered by descending rating. At most five results
    /// are returned.
    pub fn find_top_documents_by<P>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(DocumentId, DocumentStatus, i32) -> bool,
    {
        self.find_top_documents_impl(raw_query, &predicate)
    }

    // Single non-generic ranking path; the public entry points above only
    // differ in the predicate they build.
    fn find_top_documents_impl(
        &self,
        raw_query: &str,
        predicate: DocumentPredicate<'_>,
    ) -> Result<Vec<ScoredDocument>> {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let hits = scoring::find_all_documents(&self.indexer, &query, predicate);
        let top = scoring::sort_and_truncate(hits);
        tracing::trace!(results = top.len(), "ranked query");
        Ok(top)
    }

    /// Reports which plus terms of `raw_query` occur in document `id`,
    /// in lexicographic order, together with the document's status.
    ///
    /// Returns an empty term list when any minus term occurs in the
    /// document; the plus terms are not consulted in that case.
    pub fn match_document(
        &self,
        raw_query: &str,
        id: DocumentId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let query = Query::parse(raw_query, &self.stop_words)?;
        if id < 0 || !self.indexer.store().contains(id) {
            return Err(SearchError::InvalidArgument(format!(
                "no document with id {id}"
            )));
        }
        let status = self.indexer.store().data(id).status;

        for token in &query.minus {
            if self.indexer.index().contains(token, id) {
                return Ok((Vec::new(), status));
            }
        }
        let matched = query
            .plus
            .iter()
            .filter(|token| self.indexer.index().contains(token, id))
            .cloned()
            .collect();
        Ok((matched, status))
    }

    /// Number of stored documents.
    pub fn document_count(&self) -> usize {
        self.indexer.store().len()
    }

    /// Id of the `n`-th document under ascending-id iteration of the store.
    pub fn document_id(&self, n: usize) -> Result<DocumentId> {
        self.indexer
            .store()
            .nth_id(n)
            .ok_or(SearchError::OutOfRange {
                index: n,
                count: self.document_count(),
            })
    }
}
