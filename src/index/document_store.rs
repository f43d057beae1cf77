use std::collections::{BTreeMap, HashMap};
use crate::core::types::{DocId, DocumentStatus};

/// Per-document metadata kept alongside the index
#[derive(Debug, Clone)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
    pub text: String,
}

/// Document storage: metadata by id plus the live ids in insertion order.
/// Each insert takes the next sequence number, so removal never shifts the
/// order.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<DocId, (u64, DocumentData)>,
    order: BTreeMap<u64, DocId>,
    next_seq: u64,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.documents.contains_key(&doc_id)
    }

    pub fn get(&self, doc_id: DocId) -> Option<&DocumentData> {
        self.documents.get(&doc_id).map(|(_, data)| data)
    }

    /// Caller guarantees `doc_id` is not live.
    pub fn insert(&mut self, doc_id: DocId, data: DocumentData) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.documents.insert(doc_id, (seq, data));
        self.order.insert(seq, doc_id);
    }

    pub fn remove(&mut self, doc_id: DocId) -> Option<DocumentData> {
        let (seq, data) = self.documents.remove(&doc_id)?;
        self.order.remove(&seq);
        Some(data)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.order.values().copied()
    }
}

/// Truncating integer mean; 0 for no ratings.
pub fn average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(rating: i32) -> DocumentData {
        DocumentData { rating, status: DocumentStatus::Actual, text: String::new() }
    }

    #[test]
    fn average_rating_truncates_toward_zero() {
        assert_eq!(average_rating(&[8, -3]), 2);
        assert_eq!(average_rating(&[7, 2, 7]), 5);
        assert_eq!(average_rating(&[5, -12, 2, 1]), -1);
        assert_eq!(average_rating(&[9]), 9);
        assert_eq!(average_rating(&[]), 0);
    }

    #[test]
    fn keeps_insertion_order_across_removal() {
        let mut store = DocumentStore::new();
        for id in [5, 1, 3] {
            store.insert(DocId(id), data(0));
        }
        store.remove(DocId(1));
        store.insert(DocId(1), data(4));

        let ids: Vec<_> = store.ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![5, 3, 1]);
        assert_eq!(store.get(DocId(1)).map(|d| d.rating), Some(4));
        assert!(store.remove(DocId(42)).is_none());
    }

    #[test]
    fn bulk_removal_keeps_survivors_in_order() {
        let mut store = DocumentStore::new();
        for id in 0..10_000 {
            store.insert(DocId(id), data(0));
        }
        for id in (0..10_000).filter(|id| id % 3 != 0) {
            assert!(store.remove(DocId(id)).is_some());
        }

        assert_eq!(store.len(), 3_334);
        let ids: Vec<_> = store.ids().map(|id| id.0).collect();
        let expected: Vec<_> = (0..10_000).filter(|id| id % 3 == 0).collect();
        assert_eq!(ids, expected);
    }
}
