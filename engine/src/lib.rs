pub mod bm25;
pub mod engine;
pub mod keys;
pub mod rank;
pub mod store;
pub mod tokenizer;
pub mod types;

pub use engine::{EngineConfig, SearchEngine};
pub use store::{IndexStore, IndexStoreExt, MemoryStore, SledStore};
pub use types::{Content, Document, SearchResult};
