use rayon::prelude::*;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, DocumentStatus, ExecutionMode};
use crate::index::document_store::DocumentStore;
use crate::index::inverted::InvertedIndex;
use crate::query::parser::Query;

/// Outcome of matching a query against a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMatch {
    /// Plus-words present in the document. Empty when a minus-word matched.
    pub words: Vec<String>,
    pub status: DocumentStatus,
}

/// Document matcher - reports which query words a document contains,
/// without scoring
pub struct DocumentMatcher<'a> {
    index: &'a InvertedIndex,
    documents: &'a DocumentStore,
}

impl<'a> DocumentMatcher<'a> {
    pub fn new(index: &'a InvertedIndex, documents: &'a DocumentStore) -> Self {
        DocumentMatcher { index, documents }
    }

    /// Sequential mode keeps query order. Parallel mode filters on the current
    /// rayon pool and returns the words sorted and deduplicated.
    pub fn match_query(&self, query: &Query<'_>, doc_id: DocId, mode: ExecutionMode) -> Result<DocumentMatch> {
        let data = self.documents.get(doc_id).ok_or_else(|| {
            Error::new(ErrorKind::UnknownDocument, format!("document {} not found", doc_id))
        })?;
        let status = data.status;
        let contains = |word: &&str| self.index.contains_term(doc_id, word);

        let words = match mode {
            ExecutionMode::Sequential => {
                if query.minus_words.iter().any(contains) {
                    return Ok(DocumentMatch { words: Vec::new(), status });
                }
                query.plus_words.iter()
                    .filter(|word| contains(*word))
                    .map(|word| word.to_string())
                    .collect()
            }
            ExecutionMode::Parallel => {
                if query.minus_words.par_iter().any(contains) {
                    return Ok(DocumentMatch { words: Vec::new(), status });
                }
                let mut words: Vec<String> = query.plus_words.par_iter()
                    .filter(|word| contains(*word))
                    .map(|word| word.to_string())
                    .collect();
                words.par_sort_unstable();
                words.dedup();
                words
            }
        };

        Ok(DocumentMatch { words, status })
    }
}
