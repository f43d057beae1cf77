use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use search_server::core::config::Config;
use search_server::core::server::SearchServer;
use search_server::core::types::{DocId, DocumentStatus, ExecutionMode};
use search_server::search::batch::{process_queries, process_queries_joined};

const STATUSES: [DocumentStatus; 4] = [
    DocumentStatus::Actual,
    DocumentStatus::Irrelevant,
    DocumentStatus::Banned,
    DocumentStatus::Removed,
];

fn dictionary(rng: &mut StdRng, size: usize) -> Vec<String> {
    (0..size)
        .map(|_| {
            let len = rng.gen_range(1..8);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn random_text(rng: &mut StdRng, words: &[String], max_words: usize) -> String {
    let count = rng.gen_range(1..=max_words);
    (0..count)
        .map(|_| words.choose(rng).map(String::as_str).unwrap_or("word"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_query(rng: &mut StdRng, words: &[String], max_words: usize) -> String {
    let count = rng.gen_range(1..=max_words);
    (0..count)
        .map(|_| {
            let word = words.choose(rng).map(String::as_str).unwrap_or("word");
            if rng.gen_bool(0.1) { format!("-{}", word) } else { word.to_string() }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn corpus(seed: u64) -> (SearchServer, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let words = dictionary(&mut rng, 300);
    let config = Config { worker_threads: 4, ..Config::default() };
    let mut server = SearchServer::with_config(["and", "with", "of"], config).unwrap();

    for id in 0..500 {
        let text = random_text(&mut rng, &words, 40);
        let status = STATUSES[rng.gen_range(0..STATUSES.len())];
        let ratings: Vec<i32> = (0..rng.gen_range(0..5)).map(|_| rng.gen_range(-10..=10)).collect();
        server.add_document(DocId(id), &text, status, &ratings).unwrap();
    }

    let queries = (0..50).map(|_| random_query(&mut rng, &words, 8)).collect();
    (server, queries)
}

#[test]
fn test_parallel_ranking_matches_sequential() {
    let (server, queries) = corpus(7);

    for query in &queries {
        for status in STATUSES {
            let sequential = server.find_top_documents_with(ExecutionMode::Sequential, query, &status).unwrap();
            let parallel = server.find_top_documents_with(ExecutionMode::Parallel, query, &status).unwrap();

            assert_eq!(sequential.len(), parallel.len(), "query {:?}", query);
            for (s, p) in sequential.iter().zip(&parallel) {
                assert_eq!(s.doc_id, p.doc_id, "query {:?}", query);
                assert!((s.relevance - p.relevance).abs() < 1e-6, "query {:?}", query);
                assert_eq!(s.rating, p.rating, "query {:?}", query);
            }
        }

        let odd = |id: DocId, _: DocumentStatus, rating: i32| id.0 % 2 == 1 && rating >= 0;
        let sequential = server.find_top_documents_with(ExecutionMode::Sequential, query, &odd).unwrap();
        let parallel = server.find_top_documents_with(ExecutionMode::Parallel, query, &odd).unwrap();
        let sequential_ids: Vec<_> = sequential.iter().map(|d| d.doc_id).collect();
        let parallel_ids: Vec<_> = parallel.iter().map(|d| d.doc_id).collect();
        assert_eq!(sequential_ids, parallel_ids, "query {:?}", query);
        assert!(parallel.iter().all(|d| d.doc_id.0 % 2 == 1 && d.rating >= 0));
    }
}

#[test]
fn test_parallel_match_is_sorted_sequential_match() {
    let (server, queries) = corpus(11);

    for query in queries.iter().take(20) {
        for id in [0, 17, 250, 499] {
            let sequential = server.match_document_with(ExecutionMode::Sequential, query, DocId(id)).unwrap();
            let parallel = server.match_document_with(ExecutionMode::Parallel, query, DocId(id)).unwrap();

            let mut expected = sequential.words.clone();
            expected.sort();
            expected.dedup();
            assert_eq!(parallel.words, expected, "query {:?}", query);
            assert_eq!(parallel.status, sequential.status);
        }
    }
}

#[test]
fn test_parallel_removal_matches_sequential() {
    let (mut sequential, queries) = corpus(23);
    let (mut parallel, _) = corpus(23);

    let mut rng = StdRng::seed_from_u64(99);
    let mut victims: Vec<i64> = (0..500).collect();
    victims.shuffle(&mut rng);

    for id in victims.into_iter().take(200) {
        sequential.remove_document_with(ExecutionMode::Sequential, DocId(id));
        parallel.remove_document_with(ExecutionMode::Parallel, DocId(id));
    }

    assert_eq!(sequential.document_count(), 300);
    assert_eq!(parallel.document_count(), 300);
    assert!(sequential.document_ids().eq(parallel.document_ids()));

    for id in sequential.document_ids() {
        assert_eq!(sequential.word_frequencies(id), parallel.word_frequencies(id));
    }
    for query in &queries {
        let s = sequential.find_top_documents(query).unwrap();
        let p = parallel.find_top_documents(query).unwrap();
        assert_eq!(s, p, "query {:?}", query);
    }
}

#[test]
fn test_batch_processing_matches_single_queries() {
    let (server, queries) = corpus(5);

    let batched = process_queries(&server, &queries).unwrap();
    assert_eq!(batched.len(), queries.len());
    for (query, results) in queries.iter().zip(&batched) {
        assert_eq!(&server.find_top_documents(query).unwrap(), results);
    }

    let joined = process_queries_joined(&server, &queries).unwrap();
    assert_eq!(joined.len(), batched.iter().map(Vec::len).sum::<usize>());
}
