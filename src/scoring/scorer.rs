/// TF-IDF Scorer
///
/// Relevance of a document is the sum over query plus-words of
/// `tf(word, doc) * ln(total_docs / doc_freq(word))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl TfIdfScorer {
    pub fn new() -> Self {
        TfIdfScorer
    }

    /// Inverse document frequency. `doc_freq` of 0 yields 0 since such a
    /// term has no postings to score anyway.
    pub fn idf(&self, total_docs: usize, doc_freq: usize) -> f64 {
        if doc_freq == 0 || total_docs == 0 {
            return 0.0;
        }
        (total_docs as f64 / doc_freq as f64).ln()
    }

    pub fn score(&self, term_freq: f64, idf: f64) -> f64 {
        term_freq * idf
    }
}
