//! Relevance scoring and result ordering.

use std::collections::BTreeMap;

use crate::index::Indexer;
use crate::query::Query;
use crate::types::{DocumentId, DocumentStatus, ScoredDocument};

/// Hard cap on the number of returned results.
pub(crate) const MAX_RESULT_COUNT: usize = 5;

/// Relevances closer than this are treated as tied and ordered by rating.
pub(crate) const RELEVANCE_EPSILON: f64 = 1e-6;

/// Caller-supplied relevance filter over (id, status, rating).
///
/// Passed as a trait object so the ranking path is compiled once; the
/// convenience wrappers on the engine only differ in the closure they build.
pub(crate) type DocumentPredicate<'a> = &'a dyn Fn(DocumentId, DocumentStatus, i32) -> bool;

/// Scores every document matching the query's plus terms and drops any
/// document a minus term occurs in. Returned hits are unordered.
pub(crate) fn find_all_documents(
    indexer: &Indexer,
    query: &Query,
    predicate: DocumentPredicate<'_>,
) -> Vec<ScoredDocument> {
    let total_documents = indexer.store().len();
    let mut relevance: BTreeMap<DocumentId, f64> = BTreeMap::new();

    for token in &query.plus {
        // An absent token occurs in no document, so it contributes nothing;
        // short-circuiting also keeps the idf ratio well-defined.
        let Some(postings) = indexer.index().postings(token) else {
            continue;
        };
        let idf = (total_documents as f64 / postings.len() as f64).ln();
        for (&id, &term_freq) in postings {
            let data = indexer.store().data(id);
            if predicate(id, data.status, data.rating) {
                *relevance.entry(id).or_insert(0.0) += term_freq * idf;
            }
        }
    }

    // Exclusion is absolute: a single minus occurrence removes the document
    // no matter how many plus terms it matched.
    for token in &query.minus {
        let Some(postings) = indexer.index().postings(token) else {
            continue;
        };
        for id in postings.keys() {
            relevance.remove(id);
        }
    }

    relevance
        .into_iter()
        .map(|(id, relevance)| ScoredDocument {
            id,
            relevance,
            rating: indexer.store().data(id).rating,
        })
        .collect()
}

/// Orders hits by descending relevance, breaking near-ties by descending
/// rating, and truncates to [`MAX_RESULT_COUNT`].
///
/// The epsilon comparison is not a total order, so near-ties are resolved in
/// a second pass over runs of the relevance-sorted hits instead of inside
/// the sort comparator.
pub(crate) fn sort_and_truncate(mut hits: Vec<ScoredDocument>) -> Vec<ScoredDocument> {
    hits.sort_by(|lhs, rhs| rhs.relevance.total_cmp(&lhs.relevance));

    let mut run_start = 0;
    for i in 1..=hits.len() {
        let tied_with_run = i < hits.len()
            && (hits[run_start].relevance - hits[i].relevance).abs() < RELEVANCE_EPSILON;
        if !tied_with_run {
            hits[run_start..i].sort_by(|lhs, rhs| rhs.rating.cmp(&lhs.rating));
            run_start = i;
        }
    }

    hits.truncate(MAX_RESULT_COUNT);
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    fn hit(id: DocumentId, relevance: f64, rating: i32) -> ScoredDocument {
        ScoredDocument {
            id,
            relevance,
            rating,
        }
    }

    #[test]
    fn orders_by_relevance_descending() {
        let sorted = sort_and_truncate(vec![hit(1, 0.1, 0), hit(2, 0.9, 0), hit(3, 0.5, 0)]);
        let ids: Vec<_> = sorted.iter().map(|d| d.id).collect();
        check!(ids == [2, 3, 1]);
    }

    #[test]
    fn near_ties_fall_back_to_rating() {
        let sorted = sort_and_truncate(vec![
            hit(1, 0.5, 2),
            hit(2, 0.5 + RELEVANCE_EPSILON / 2.0, 7),
            hit(3, 0.7, 0),
        ]);
        let ids: Vec<_> = sorted.iter().map(|d| d.id).collect();
        check!(ids == [3, 2, 1]);
    }

    #[test]
    fn truncates_to_five_results() {
        let hits = (0..8).map(|id| hit(id, f64::from(id) * 0.1, 0)).collect();
        let sorted = sort_and_truncate(hits);
        check!(sorted.len() == MAX_RESULT_COUNT);
        check!(sorted[0].id == 7);
    }
}
