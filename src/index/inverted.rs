use std::collections::{BTreeMap, HashMap};
use rayon::prelude::*;
use crate::core::types::{DocId, ExecutionMode};

/// Term frequencies of one term, by document
pub type PostingList = BTreeMap<DocId, f64>;

/// Term frequencies of one document, by term
pub type TermFrequencies = BTreeMap<String, f64>;

/// Inverted index structure.
///
/// `postings` (term -> document -> tf) and `doc_terms` (document -> term -> tf)
/// are two views of the same data and are always updated together.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingList>,
    doc_terms: HashMap<DocId, TermFrequencies>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the already filtered and validated words of a document.
    /// Each occurrence contributes `1 / words.len()` to its term.
    pub fn add_document(&mut self, doc_id: DocId, words: &[&str]) {
        if words.is_empty() {
            return;
        }

        let inv_word_count = 1.0 / words.len() as f64;
        let terms = self.doc_terms.entry(doc_id).or_default();
        for word in words {
            *self.postings
                .entry((*word).to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += inv_word_count;
            *terms.entry((*word).to_string()).or_insert(0.0) += inv_word_count;
        }
    }

    /// Erase every posting of `doc_id`. In parallel mode the document's own
    /// posting lists are processed on the current rayon pool.
    pub fn remove_document(&mut self, doc_id: DocId, mode: ExecutionMode) {
        let Some(terms) = self.doc_terms.remove(&doc_id) else {
            return;
        };

        match mode {
            ExecutionMode::Sequential => {
                for term in terms.keys() {
                    if let Some(list) = self.postings.get_mut(term) {
                        list.remove(&doc_id);
                        if list.is_empty() {
                            self.postings.remove(term);
                        }
                    }
                }
            }
            ExecutionMode::Parallel => {
                // Detach the affected lists so each worker owns a disjoint entry
                let mut detached: Vec<(String, PostingList)> = terms
                    .keys()
                    .filter_map(|term| self.postings.remove_entry(term.as_str()))
                    .collect();

                detached.par_iter_mut().for_each(|(_, list)| {
                    list.remove(&doc_id);
                });

                for (term, list) in detached {
                    if !list.is_empty() {
                        self.postings.insert(term, list);
                    }
                }
            }
        }
    }

    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        self.postings.get(term)
    }

    /// Number of documents containing `term`
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, |list| list.len())
    }

    pub fn term_frequencies(&self, doc_id: DocId) -> Option<&TermFrequencies> {
        self.doc_terms.get(&doc_id)
    }

    pub fn contains_term(&self, doc_id: DocId, term: &str) -> bool {
        self.doc_terms
            .get(&doc_id)
            .is_some_and(|terms| terms.contains_key(term))
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvertedIndex {
        let mut index = InvertedIndex::new();
        index.add_document(DocId(1), &["fluffy", "cat", "fluffy", "tail"]);
        index.add_document(DocId(2), &["cat", "collar"]);
        index
    }

    #[test]
    fn term_frequencies_sum_to_one() {
        let index = sample();
        let freqs = index.term_frequencies(DocId(1)).unwrap();
        assert!((freqs["fluffy"] - 0.5).abs() < 1e-12);
        assert!((freqs.values().sum::<f64>() - 1.0).abs() < 1e-12);
        assert_eq!(index.doc_freq("cat"), 2);
        assert!(index.contains_term(DocId(2), "collar"));
        assert!(!index.contains_term(DocId(1), "collar"));
    }

    #[test]
    fn document_without_words_has_no_postings() {
        let mut index = InvertedIndex::new();
        index.add_document(DocId(7), &[]);
        assert!(index.term_frequencies(DocId(7)).is_none());
        assert_eq!(index.term_count(), 0);
    }

    #[test]
    fn removal_keeps_both_views_in_sync() {
        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            let mut index = sample();
            index.remove_document(DocId(1), mode);

            assert!(index.term_frequencies(DocId(1)).is_none());
            assert!(index.postings("fluffy").is_none());
            assert!(index.postings("tail").is_none());
            assert_eq!(index.doc_freq("cat"), 1);
            assert_eq!(index.term_count(), 2);

            // unknown id is a no-op
            index.remove_document(DocId(1), mode);
            assert_eq!(index.doc_freq("cat"), 1);
        }
    }
}
