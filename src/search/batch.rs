use rayon::prelude::*;
use crate::core::error::Result;
use crate::core::server::SearchServer;
use crate::search::results::ScoredDocument;

/// Run every query (status ACTUAL) on the server's worker pool.
/// Results come back in query order; the first failing query fails the batch.
pub fn process_queries<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<Vec<ScoredDocument>>>
where
    S: AsRef<str> + Sync,
{
    server.pool().install(|| {
        queries
            .par_iter()
            .map(|query| server.find_top_documents(query.as_ref()))
            .collect()
    })
}

/// Same as [`process_queries`], flattened into one list.
pub fn process_queries_joined<S>(server: &SearchServer, queries: &[S]) -> Result<Vec<ScoredDocument>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(server, queries)?
        .into_iter()
        .flatten()
        .collect())
}
