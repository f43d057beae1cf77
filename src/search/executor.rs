use std::collections::BTreeMap;
use rayon::prelude::*;
use crate::core::types::{DocId, DocumentPredicate, ExecutionMode};
use crate::index::document_store::DocumentStore;
use crate::index::inverted::InvertedIndex;
use crate::parallel::concurrent_map::ConcurrentAccumulator;
use crate::query::parser::Query;
use crate::scoring::scorer::TfIdfScorer;
use crate::search::results::ScoredDocument;

/// Scores every document matching a parsed query. Ordering and truncation are
/// left to the caller.
pub struct QueryExecutor<'a> {
    index: &'a InvertedIndex,
    documents: &'a DocumentStore,
    scorer: TfIdfScorer,
    shard_count: usize,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(index: &'a InvertedIndex, documents: &'a DocumentStore, shard_count: usize) -> Self {
        QueryExecutor {
            index,
            documents,
            scorer: TfIdfScorer::new(),
            shard_count,
        }
    }

    /// Parallel mode runs on the current rayon pool; callers `install` the
    /// pool they want.
    pub fn find_all<P>(&self, query: &Query<'_>, predicate: &P, mode: ExecutionMode) -> Vec<ScoredDocument>
    where
        P: DocumentPredicate + ?Sized,
    {
        match mode {
            ExecutionMode::Sequential => self.find_all_sequential(query, predicate),
            ExecutionMode::Parallel => self.find_all_parallel(query, predicate),
        }
    }

    fn find_all_sequential<P>(&self, query: &Query<'_>, predicate: &P) -> Vec<ScoredDocument>
    where
        P: DocumentPredicate + ?Sized,
    {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();

        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else {
                continue;
            };
            let idf = self.scorer.idf(self.documents.len(), postings.len());

            for (&doc_id, &term_freq) in postings {
                let Some(data) = self.documents.get(doc_id) else {
                    continue;
                };
                if predicate.accept(doc_id, data.status, data.rating) {
                    *relevance.entry(doc_id).or_insert(0.0) += self.scorer.score(term_freq, idf);
                }
            }
        }

        for word in &query.minus_words {
            if let Some(postings) = self.index.postings(word) {
                for doc_id in postings.keys() {
                    relevance.remove(doc_id);
                }
            }
        }

        self.collect(relevance)
    }

    /// Plus-words fan out across workers. Minus-words are checked per
    /// contribution because the accumulator has no global erase.
    fn find_all_parallel<P>(&self, query: &Query<'_>, predicate: &P) -> Vec<ScoredDocument>
    where
        P: DocumentPredicate + ?Sized,
    {
        let relevance = ConcurrentAccumulator::new(self.shard_count);

        query.plus_words.par_iter().for_each(|word| {
            let Some(postings) = self.index.postings(word) else {
                return;
            };
            let idf = self.scorer.idf(self.documents.len(), postings.len());

            for (&doc_id, &term_freq) in postings {
                let Some(data) = self.documents.get(doc_id) else {
                    continue;
                };
                if predicate.accept(doc_id, data.status, data.rating)
                    && !self.has_any_term(doc_id, &query.minus_words)
                {
                    relevance.add_to(doc_id, self.scorer.score(term_freq, idf));
                }
            }
        });

        self.collect(relevance.snapshot())
    }

    fn has_any_term(&self, doc_id: DocId, words: &[&str]) -> bool {
        words.iter().any(|word| self.index.contains_term(doc_id, word))
    }

    fn collect(&self, relevance: BTreeMap<DocId, f64>) -> Vec<ScoredDocument> {
        relevance
            .into_iter()
            .filter_map(|(doc_id, relevance)| {
                self.documents
                    .get(doc_id)
                    .map(|data| ScoredDocument::new(doc_id, relevance, data.rating))
            })
            .collect()
    }
}
