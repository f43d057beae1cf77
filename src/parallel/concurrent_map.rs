use std::collections::{BTreeMap, HashMap};
use parking_lot::Mutex;
use crate::core::types::DocId;

/// Relevance accumulator shared by ranking workers.
///
/// Split into a fixed number of shards, each behind its own lock; a document
/// always lands in shard `id mod shard_count`, so writers touching different
/// shards never contend. Shard locks are never handed out.
pub struct ConcurrentAccumulator {
    shards: Vec<Mutex<HashMap<DocId, f64>>>,
}

impl ConcurrentAccumulator {
    /// `shard_count` of 0 is treated as 1.
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| Mutex::new(HashMap::new()))
            .collect();
        ConcurrentAccumulator { shards }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard_for(&self, doc_id: DocId) -> &Mutex<HashMap<DocId, f64>> {
        let index = doc_id.0.rem_euclid(self.shards.len() as i64) as usize;
        &self.shards[index]
    }

    /// Add `delta` to the value of `doc_id`, starting from 0.
    pub fn add_to(&self, doc_id: DocId, delta: f64) {
        *self.shard_for(doc_id).lock().entry(doc_id).or_insert(0.0) += delta;
    }

    /// Merge all shards into one ordered map.
    /// Only meaningful once every writer has joined.
    pub fn snapshot(&self) -> BTreeMap<DocId, f64> {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            merged.extend(shard.lock().iter().map(|(id, value)| (*id, *value)));
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn accumulates_per_document() {
        let acc = ConcurrentAccumulator::new(4);
        acc.add_to(DocId(1), 0.5);
        acc.add_to(DocId(5), 1.0);
        acc.add_to(DocId(1), 0.25);

        let snapshot = acc.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert!((snapshot[&DocId(1)] - 0.75).abs() < 1e-12);
        assert!((snapshot[&DocId(5)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_shards_falls_back_to_one() {
        let acc = ConcurrentAccumulator::new(0);
        assert_eq!(acc.shard_count(), 1);
        acc.add_to(DocId(3), 2.0);
        assert_eq!(acc.snapshot().len(), 1);
    }

    #[test]
    fn concurrent_writers_lose_no_updates() {
        let acc = ConcurrentAccumulator::new(8);
        (0..10_000i64).into_par_iter().for_each(|i| {
            acc.add_to(DocId(i % 100), 1.0);
        });

        let snapshot = acc.snapshot();
        assert_eq!(snapshot.len(), 100);
        assert!(snapshot.values().all(|v| (*v - 100.0).abs() < 1e-9));
        // ordered by id
        let ids: Vec<_> = snapshot.keys().map(|id| id.0).collect();
        assert_eq!(ids, (0..100).collect::<Vec<_>>());
    }
}
