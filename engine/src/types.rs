use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Indexable content of a document: free text plus an optional structured
/// object. `object_indexes` lists the object keys to tokenize, in order;
/// when empty, every value is tokenized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub object: Map<String, Value>,
    #[serde(default)]
    pub object_indexes: Vec<String>,
}

/// Ingestion request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub stop_words: Vec<String>,
}

/// One ranked hit. `data` is resolved only for results that survive top-K
/// selection and stays `None` when the stored payload is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
