use std::collections::VecDeque;
use chrono::{DateTime, Utc};
use crate::core::error::Result;
use crate::core::server::SearchServer;
use crate::core::types::{DocumentPredicate, DocumentStatus, ExecutionMode};
use crate::search::results::ScoredDocument;

/// One recorded find request
#[derive(Debug, Clone)]
pub struct QueryRecord {
    pub tick: u64,
    pub received_at: DateTime<Utc>,
    pub raw_query: String,
    pub results: Vec<ScoredDocument>,
}

/// Rolling history of find requests against a server.
///
/// Every request advances the clock by one tick; only the last
/// `request_window` ticks are retained. Failed requests are not recorded.
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryRecord>,
    window: u64,
    current_tick: u64,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        let window = server.config().request_window as u64;
        RequestQueue {
            server,
            requests: VecDeque::new(),
            window,
            current_tick: 0,
            no_result_requests: 0,
        }
    }

    pub fn add_find_request_by<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<ScoredDocument>>
    where
        P: DocumentPredicate,
    {
        let results = self.server.find_top_documents_with(ExecutionMode::Sequential, raw_query, &predicate)?;

        self.current_tick += 1;
        self.evict_expired();
        if results.is_empty() {
            self.no_result_requests += 1;
        }
        self.requests.push_back(QueryRecord {
            tick: self.current_tick,
            received_at: Utc::now(),
            raw_query: raw_query.to_string(),
            results: results.clone(),
        });

        Ok(results)
    }

    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.add_find_request_by(raw_query, status)
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.add_find_request_by(raw_query, DocumentStatus::Actual)
    }

    /// Retained requests that returned no documents
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &QueryRecord> {
        self.requests.iter()
    }

    // Make room for the request at `current_tick`
    fn evict_expired(&mut self) {
        while let Some(oldest) = self.requests.front() {
            if self.current_tick - oldest.tick < self.window {
                break;
            }
            if oldest.results.is_empty() {
                self.no_result_requests -= 1;
            }
            self.requests.pop_front();
        }
    }
}
