use std::collections::BTreeMap;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, trace, warn};
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, DocumentPredicate, DocumentStatus, ExecutionMode};
use crate::index::document_store::{average_rating, DocumentData, DocumentStore};
use crate::index::inverted::InvertedIndex;
use crate::query::matcher::{DocumentMatch, DocumentMatcher};
use crate::query::parser::QueryParser;
use crate::search::executor::QueryExecutor;
use crate::search::results::{rank_and_truncate, ScoredDocument};

/// In-memory full-text search engine.
///
/// Reads (`find_*`, `match_document`, lookups) take `&self` and may run
/// concurrently with each other; `add_document`/`remove_document` take
/// `&mut self`, so the borrow checker keeps writers away from in-flight reads.
pub struct SearchServer {
    config: Config,
    query_parser: QueryParser,
    index: InvertedIndex,
    documents: DocumentStore,
    pool: ThreadPool,
}

impl SearchServer {
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(stop_words, Config::default())
    }

    /// Stop words given as one space separated string, e.g. `"and in on"`.
    pub fn from_stop_words_text(text: &str) -> Result<Self> {
        Self::with_config(split_into_words(text), Config::default())
    }

    pub fn with_config<I, S>(stop_words: I, config: Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let stop_words = StopWordFilter::new(stop_words)?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.worker_threads)
            .thread_name(|i| format!("search-worker-{}", i))
            .build()?;

        debug!(
            stop_words = stop_words.len(),
            workers = config.worker_threads,
            shards = config.accumulator_shards,
            "search server created"
        );

        Ok(SearchServer {
            config,
            query_parser: QueryParser::new(stop_words),
            index: InvertedIndex::new(),
            documents: DocumentStore::new(),
            pool,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Index a document. Nothing is written unless every word is valid.
    pub fn add_document(
        &mut self,
        doc_id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if doc_id.0 < 0 || self.documents.contains(doc_id) {
            warn!(doc_id = doc_id.0, "rejected document id");
            return Err(Error::new(
                ErrorKind::InvalidDocumentId,
                format!("document id {} is negative or already in use", doc_id),
            ));
        }

        let mut words = Vec::new();
        for word in split_into_words(text) {
            if word.is_empty() || self.query_parser.stop_words.is_stop_word(word) {
                continue;
            }
            if !is_valid_word(word) {
                warn!(doc_id = doc_id.0, "rejected document with invalid word");
                return Err(Error::new(
                    ErrorKind::InvalidWord,
                    format!("word {:?} in document {} contains control characters", word, doc_id),
                ));
            }
            words.push(word);
        }

        self.index.add_document(doc_id, &words);
        self.documents.insert(doc_id, DocumentData {
            rating: average_rating(ratings),
            status,
            text: text.to_string(),
        });

        debug!(doc_id = doc_id.0, words = words.len(), "document indexed");
        Ok(())
    }

    /// Top documents with status ACTUAL, ranked sequentially.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with(ExecutionMode::Sequential, raw_query, &DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with(ExecutionMode::Sequential, raw_query, &status)
    }

    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<ScoredDocument>>
    where
        P: DocumentPredicate,
    {
        self.find_top_documents_with(ExecutionMode::Sequential, raw_query, &predicate)
    }

    /// Rank with an explicit execution mode and predicate. Returns at most
    /// `max_result_count` documents, relevance descending, ties (within
    /// `relevance_epsilon`) by rating descending.
    pub fn find_top_documents_with<P>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: &P,
    ) -> Result<Vec<ScoredDocument>>
    where
        P: DocumentPredicate + ?Sized,
    {
        let query = self.query_parser.parse(raw_query, true)?;
        let executor = QueryExecutor::new(&self.index, &self.documents, self.config.accumulator_shards);

        let mut results = match mode {
            ExecutionMode::Sequential => executor.find_all(&query, predicate, mode),
            ExecutionMode::Parallel => self.pool.install(|| executor.find_all(&query, predicate, mode)),
        };
        let hits = results.len();
        rank_and_truncate(&mut results, self.config.max_result_count, self.config.relevance_epsilon);

        trace!(
            ?mode,
            plus_words = query.plus_words.len(),
            minus_words = query.minus_words.len(),
            hits,
            returned = results.len(),
            "query ranked"
        );
        Ok(results)
    }

    pub fn match_document(&self, raw_query: &str, doc_id: DocId) -> Result<DocumentMatch> {
        self.match_document_with(ExecutionMode::Sequential, raw_query, doc_id)
    }

    /// Which plus-words of the query the document contains. An empty word list
    /// means a minus-word matched; the status is reported either way.
    pub fn match_document_with(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        doc_id: DocId,
    ) -> Result<DocumentMatch> {
        let query = self.query_parser.parse(raw_query, false)?;
        let matcher = DocumentMatcher::new(&self.index, &self.documents);

        match mode {
            ExecutionMode::Sequential => matcher.match_query(&query, doc_id, mode),
            ExecutionMode::Parallel => self.pool.install(|| matcher.match_query(&query, doc_id, mode)),
        }
    }

    pub fn remove_document(&mut self, doc_id: DocId) {
        self.remove_document_with(ExecutionMode::Sequential, doc_id);
    }

    /// Unknown ids are ignored. An id freed here may be added again later.
    pub fn remove_document_with(&mut self, mode: ExecutionMode, doc_id: DocId) {
        if !self.documents.contains(doc_id) {
            return;
        }

        match mode {
            ExecutionMode::Sequential => self.index.remove_document(doc_id, mode),
            ExecutionMode::Parallel => {
                let index = &mut self.index;
                self.pool.install(|| index.remove_document(doc_id, mode));
            }
        }
        self.documents.remove(doc_id);

        debug!(doc_id = doc_id.0, ?mode, remaining = self.documents.len(), "document removed");
    }

    /// Term frequencies of a live document; empty for unknown ids.
    pub fn word_frequencies(&self, doc_id: DocId) -> BTreeMap<String, f64> {
        self.index
            .term_frequencies(doc_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn document_text(&self, doc_id: DocId) -> Option<&str> {
        self.documents.get(doc_id).map(|data| data.text.as_str())
    }

    /// Live ids in insertion order
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.documents.ids()
    }

    pub(crate) fn pool(&self) -> &ThreadPool {
        &self.pool
    }
}

impl<'a> IntoIterator for &'a SearchServer {
    type Item = DocId;
    type IntoIter = Box<dyn Iterator<Item = DocId> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.document_ids())
    }
}
