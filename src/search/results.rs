use std::cmp::{Ordering, Reverse};
use std::fmt;
use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// Document with relevance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub doc_id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl ScoredDocument {
    pub fn new(doc_id: DocId, relevance: f64, rating: i32) -> Self {
        ScoredDocument { doc_id, relevance, rating }
    }
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.doc_id, self.relevance, self.rating
        )
    }
}

/// Relevance descending; relevances closer than `epsilon` tie and fall back
/// to rating descending.
pub fn compare_by_relevance(lhs: &ScoredDocument, rhs: &ScoredDocument, epsilon: f64) -> Ordering {
    if (lhs.relevance - rhs.relevance).abs() < epsilon {
        rhs.rating.cmp(&lhs.rating)
    } else {
        rhs.relevance.partial_cmp(&lhs.relevance).unwrap_or(Ordering::Equal)
    }
}

/// Sort in place by [`compare_by_relevance`] and keep at most `limit` results.
///
/// The epsilon comparison is not transitive, so it is never handed to
/// `sort_by`. Results are sorted by exact relevance, then each output slot
/// takes the best-rated document among those within `epsilon` of the highest
/// remaining relevance. Equal ratings fall back to the lower id.
pub fn rank_and_truncate(results: &mut Vec<ScoredDocument>, limit: usize, epsilon: f64) {
    results.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));

    for slot in 0..limit.min(results.len()) {
        let top = results[slot].relevance;
        let mut best = slot;
        for candidate in slot + 1..results.len() {
            if top - results[candidate].relevance >= epsilon {
                break;
            }
            let (c, b) = (&results[candidate], &results[best]);
            if (c.rating, Reverse(c.doc_id)) > (b.rating, Reverse(b.doc_id)) {
                best = candidate;
            }
        }
        // keeps the tail sorted by relevance
        results[slot..=best].rotate_right(1);
    }

    results.truncate(limit);
}
