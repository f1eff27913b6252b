//! The indexing-and-ranking core: incremental inverted index maintenance,
//! BM25 query evaluation and top-K payload resolution over an `IndexStore`.

use crate::bm25::{self, Bm25Params};
use crate::keys;
use crate::rank;
use crate::store::{IndexStore, IndexStoreExt};
use crate::types::{Content, SearchResult};
use parking_lot::RwLock;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Engine construction options.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub bm25: Bm25Params,
    /// Number of results a search returns.
    pub top_k: usize,
    /// Expiry threaded through every persisted key, honored by TTL-capable
    /// backends and ignored by the rest.
    pub ttl: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bm25: Bm25Params::default(),
            top_k: 3,
            ttl: None,
        }
    }
}

/// Corpus-wide counters. The backend copy is authoritative; this is the only
/// state the engine keeps outside the store.
struct CorpusStats {
    token_len: u64,
    doc_count: u64,
}

impl CorpusStats {
    fn avg_doc_len(&self) -> u64 {
        if self.doc_count == 0 {
            0
        } else {
            self.token_len / self.doc_count
        }
    }
}

/// Ranked full-text search over any `IndexStore`.
///
/// Ingestion holds the write lock for its whole duration, backend round-trips
/// included, so at most one ingestion runs at a time. Searches hold the read
/// lock likewise and may overlap each other but never an ingestion.
pub struct SearchEngine {
    store: Arc<dyn IndexStore>,
    stats: RwLock<CorpusStats>,
    config: EngineConfig,
}

impl SearchEngine {
    /// Builds an engine over `store`, rehydrating the corpus counters from
    /// it. A failed read degrades to a cold start with both counters at
    /// zero; construction never fails.
    pub fn new(store: Arc<dyn IndexStore>, config: EngineConfig) -> Self {
        let (token_len, doc_count) = match Self::bootstrap(store.as_ref()) {
            Ok(counters) => counters,
            Err(err) => {
                tracing::warn!(%err, "corpus counters unavailable, starting cold");
                (0, 0)
            }
        };
        tracing::info!(token_len, doc_count, "search engine ready");
        Self {
            store,
            stats: RwLock::new(CorpusStats { token_len, doc_count }),
            config,
        }
    }

    fn bootstrap(store: &dyn IndexStore) -> anyhow::Result<(u64, u64)> {
        let token_len = store.get_int(keys::TOKEN_LEN)?;
        let doc_count = store.get_int(keys::DOC_COUNT)?;
        Ok((token_len, doc_count))
    }

    pub fn doc_count(&self) -> u64 {
        self.stats.read().doc_count
    }

    pub fn avg_doc_len(&self) -> u64 {
        self.stats.read().avg_doc_len()
    }

    /// Indexes one document. Backend errors are logged and swallowed;
    /// ingestion is best-effort per key and never rolls back partial writes.
    ///
    /// Re-ingesting an identifier is additive, not deduplicated: the call
    /// counts again toward `docCount` and `tokenLen`, and postings for terms
    /// present in an earlier token set but absent from this one are left in
    /// place.
    pub fn store_document(&self, doc_id: &str, tokens: &[String], content: Option<&Content>) {
        let mut stats = self.stats.write();

        let mut term_freq: HashMap<&str, u64> = HashMap::new();
        for token in tokens {
            *term_freq.entry(token.as_str()).or_insert(0) += 1;
        }

        stats.token_len += tokens.len() as u64;
        stats.doc_count += 1;

        let ttl = self.config.ttl;
        for (term, freq) in &term_freq {
            let key = keys::term_doc_count(term);
            let count = match self.store.get_int(&key) {
                Ok(count) => count,
                Err(err) => {
                    tracing::error!(%err, term, "failed to read term document count");
                    0
                }
            };
            if let Err(err) = self.store.set_int(&key, count + 1, ttl) {
                tracing::error!(%err, term, "failed to write term document count");
            }

            let key = keys::postings(term);
            let mut postings: HashMap<String, u64> = match self.store.get_object(&key) {
                Ok(existing) => existing.unwrap_or_default(),
                Err(err) => {
                    tracing::error!(%err, term, "failed to read postings");
                    HashMap::new()
                }
            };
            postings.insert(doc_id.to_string(), *freq);
            if let Err(err) = self.store.set_object(&key, &postings, ttl) {
                tracing::error!(%err, term, "failed to write postings");
            }
        }

        let counters = [
            (keys::doc_tokens_len(doc_id), tokens.len() as u64),
            (keys::TOKEN_LEN.to_string(), stats.token_len),
            (keys::DOC_COUNT.to_string(), stats.doc_count),
        ];
        if let Err(err) = self.store.set_int_batch(ttl, &counters) {
            tracing::error!(%err, doc_id, "failed to persist corpus counters");
        }

        if let Some(content) = content {
            let payload = json!({ "string": content.string, "object": content.object });
            if let Err(err) = self.store.set_object(&keys::data(doc_id), &payload, ttl) {
                tracing::error!(%err, doc_id, "failed to persist document payload");
            }
        }
    }

    /// Scores every document matching any query term and returns the
    /// configured top-K, highest score first. An empty query list yields no
    /// results.
    pub fn search(&self, queries: &[String]) -> Vec<SearchResult> {
        self.search_with_limit(queries, self.config.top_k)
    }

    /// `search` with a per-call result limit.
    ///
    /// A read failure while fetching one term's postings drops only that
    /// term's contribution; the remaining terms still score. Payloads are
    /// resolved only for the surviving results, and a missing or unreadable
    /// payload leaves the result in place without data.
    pub fn search_with_limit(&self, queries: &[String], k: usize) -> Vec<SearchResult> {
        let stats = self.stats.read();
        if queries.is_empty() {
            return Vec::new();
        }

        let doc_count = stats.doc_count;
        let avg_doc_len = stats.avg_doc_len();
        let mut doc_scores: HashMap<String, f64> = HashMap::new();

        for query in queries {
            let postings: HashMap<String, u64> =
                match self.store.get_object(&keys::postings(query)) {
                    Ok(Some(postings)) => postings,
                    Ok(None) => continue,
                    Err(err) => {
                        tracing::error!(%err, term = %query, "failed to read postings, skipping term");
                        continue;
                    }
                };

            let df = match self.store.get_int(&keys::term_doc_count(query)) {
                Ok(df) => df,
                Err(err) => {
                    tracing::error!(%err, term = %query, "failed to read term document count");
                    0
                }
            };

            for (doc_id, tf) in postings {
                let doc_len = match self.store.get_int(&keys::doc_tokens_len(&doc_id)) {
                    Ok(len) => len,
                    Err(err) => {
                        tracing::error!(%err, %doc_id, "failed to read document length");
                        0
                    }
                };
                let contribution =
                    bm25::score(tf, df, doc_count, doc_len, avg_doc_len, self.config.bm25);
                *doc_scores.entry(doc_id).or_insert(0.0) += contribution;
            }
        }

        let scored = doc_scores
            .into_iter()
            .map(|(id, score)| SearchResult { id, score, data: None })
            .collect();
        let mut results = rank::top_k(scored, k);

        for result in &mut results {
            match self.store.get_object(&keys::data(&result.id)) {
                Ok(data) => result.data = data,
                Err(err) => {
                    tracing::error!(%err, doc_id = %result.id, "failed to resolve payload")
                }
            }
        }

        results
    }
}
