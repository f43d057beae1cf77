/// Search server API demo
///
/// Demonstrates the main operations:
/// - Indexing documents with status and ratings
/// - Ranked search (default status, explicit status, predicate, parallel)
/// - Matching and word frequencies
/// - Removal
/// - Request history and batch queries
///
/// Run with `RUST_LOG=search_server=debug` to see the engine's logs.

use search_server::core::config::Config;
use search_server::core::server::SearchServer;
use search_server::core::types::{DocId, DocumentStatus, ExecutionMode};
use search_server::search::batch::process_queries_joined;
use search_server::search::request_queue::RequestQueue;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config { worker_threads: 4, ..Config::default() };
    let mut server = SearchServer::with_config(["and", "with", "in"], config)?;

    println!("Step 1: indexing documents...");
    let documents = [
        (1, "funny pet and nasty rat", DocumentStatus::Actual, vec![7, 2, 7]),
        (2, "funny pet with curly hair", DocumentStatus::Actual, vec![1, 2, 3]),
        (3, "big cat nasty hair", DocumentStatus::Actual, vec![1, 2, 8]),
        (4, "big dog cat vladislav", DocumentStatus::Banned, vec![1, 3, 2]),
        (5, "big dog hamster borya", DocumentStatus::Actual, vec![1, 1, 1]),
    ];
    for (id, text, status, ratings) in &documents {
        server.add_document(DocId(*id), text, *status, ratings)?;
    }
    println!("  {} documents indexed\n", server.document_count());

    println!("Step 2: ranked search");
    for doc in server.find_top_documents("curly nasty cat")? {
        println!("  {}", doc);
    }
    println!("  banned only:");
    for doc in server.find_top_documents_by_status("curly nasty cat", DocumentStatus::Banned)? {
        println!("    {}", doc);
    }
    println!("  even ids, parallel:");
    let even = |id: DocId, _: DocumentStatus, _: i32| id.0 % 2 == 0;
    for doc in server.find_top_documents_with(ExecutionMode::Parallel, "curly nasty cat", &even)? {
        println!("    {}", doc);
    }
    println!();

    println!("Step 3: matching");
    let matched = server.match_document("nasty -curly hair", DocId(3))?;
    println!("  doc 3: {:?} ({:?})", matched.words, matched.status);
    println!("  doc 1 word frequencies: {:?}\n", server.word_frequencies(DocId(1)));

    println!("Step 4: request history");
    {
        let mut requests = RequestQueue::new(&server);
        requests.add_find_request("empty request")?;
        requests.add_find_request("curly dog")?;
        requests.add_find_request_by_status("big collar", DocumentStatus::Banned)?;
        requests.add_find_request("sparrow")?;
        println!("  {} of {} requests found nothing\n", requests.no_result_requests(), requests.len());
    }

    println!("Step 5: batch queries");
    let joined = process_queries_joined(&server, &["nasty rat", "big dog", "hair"])?;
    for doc in &joined {
        println!("  {}", doc);
    }
    println!();

    println!("Step 6: removal");
    server.remove_document_with(ExecutionMode::Parallel, DocId(3));
    server.remove_document(DocId(42));
    let ids: Vec<_> = server.document_ids().map(|id| id.0).collect();
    println!("  remaining ids: {:?}", ids);

    Ok(())
}
