pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;
pub mod query;
pub mod parallel;

/*
┌────────────────────────────────────────────────────────────────────────────────────────────┐
│                              SEARCH SERVER ARCHITECTURE                                     │
└────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── CORE LAYER ──────────────────────────────────────────┐
│                                                                                              │
│  ┌────────────────────────────────────────────────────────────────────────────────────┐    │
│  │                             struct SearchServer                                     │    │
│  │  ┌──────────────────────────────────────────────────────────────────────────────┐ │    │
│  │  │ config: Config                    // limits, epsilon, shards, workers        │ │    │
│  │  │ query_parser: QueryParser         // owns the StopWordFilter                 │ │    │
│  │  │ index: InvertedIndex              // term -> doc -> tf, doc -> term -> tf    │ │    │
│  │  │ documents: DocumentStore          // rating/status/text + insertion order    │ │    │
│  │  │ pool: rayon::ThreadPool           // workers for ExecutionMode::Parallel     │ │    │
│  │  └──────────────────────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────────────────────┘    │
│                                                                                              │
│  ┌──────────────────┐  ┌──────────────────────┐  ┌─────────────────────────────────┐      │
│  │ struct DocId     │  │ enum DocumentStatus  │  │ enum ExecutionMode              │      │
│  │ • 0: i64         │  │ • Actual             │  │ • Sequential                    │      │
│  └──────────────────┘  │ • Irrelevant         │  │ • Parallel                      │      │
│                        │ • Banned             │  └─────────────────────────────────┘      │
│                        │ • Removed            │                                            │
│                        └──────────────────────┘                                            │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────────── QUERY PATH ─────────────────────────────────────────┐
│                                                                                              │
│   raw query ──► QueryParser::parse ──► Query { plus_words, minus_words }                    │
│                                              │                                               │
│                 ┌────────────────────────────┴───────────────────────────┐                  │
│                 ▼                                                        ▼                  │
│        QueryExecutor::find_all                                 DocumentMatcher              │
│   Sequential: BTreeMap accumulation,                      (plus-words found in doc,         │
│               minus-word post pass                         empty on minus-word hit)         │
│   Parallel:   par_iter over plus-words ──► ConcurrentAccumulator (N locked shards)          │
│                 │                                                                            │
│                 ▼                                                                            │
│        rank_and_truncate (relevance desc, rating desc within epsilon, top N)                │
│                                                                                              │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────────────── OUTER WRAPPERS ───────────────────────────────────────┐
│  RequestQueue<'a>: rolling window of find requests, counts empty results                     │
│  process_queries / process_queries_joined: many queries on the worker pool                   │
└──────────────────────────────────────────────────────────────────────────────────────────────┘
*/
