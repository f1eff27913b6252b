//! Okapi BM25 term scoring.

/// BM25 tuning constants. `k1` controls term-frequency saturation, `b` the
/// strength of document-length normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
    pub k1: f64,
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.2, b: 0.75 }
    }
}

/// Contribution of a single query term to one candidate document's score.
///
/// `tf` is the term's frequency inside the document, `df` the number of
/// distinct documents containing the term, `doc_count` the corpus size.
/// Returns 0 when `df == 0` or `avg_doc_len == 0`: there is no relevance
/// signal to derive.
pub fn score(
    tf: u64,
    df: u64,
    doc_count: u64,
    doc_len: u64,
    avg_doc_len: u64,
    params: Bm25Params,
) -> f64 {
    if df == 0 || avg_doc_len == 0 {
        return 0.0;
    }

    let n = doc_count as f64;
    let df = df as f64;
    let tf = tf as f64;

    let idf = ((n - df + 0.5) / (df + 0.5) + 1.0).ln();
    let norm = params.k1 * (1.0 - params.b + params.b * doc_len as f64 / avg_doc_len as f64);
    let weight = (tf * (params.k1 + 1.0)) / (tf + norm);
    idf * weight
}
