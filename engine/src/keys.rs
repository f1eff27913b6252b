//! Persisted key naming. The scheme is shared by every backend so an index
//! written through one adapter can be read back through another.

pub const TOKEN_LEN: &str = "tokenLen";
pub const DOC_COUNT: &str = "docCount";

/// Distinct-document counter for a term.
pub fn term_doc_count(term: &str) -> String {
    format!("termDocCount:{term}")
}

/// Serialized posting map (document id -> term frequency) for a term.
pub fn postings(term: &str) -> String {
    format!("index:{term}")
}

/// Token count of one document.
pub fn doc_tokens_len(doc_id: &str) -> String {
    format!("docTokensLen:{doc_id}")
}

/// Stored payload of one document.
pub fn data(doc_id: &str) -> String {
    format!("data:{doc_id}")
}
