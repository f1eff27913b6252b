//! Backend contract for the index. The engine is constructed against
//! `IndexStore` and never against a concrete backend; adapters differ in
//! durability, TTL support and write atomicity.

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

mod memory;
mod sled_store;

pub use memory::MemoryStore;
pub use sled_store::SledStore;

/// Typed key-value operations the index requires of a backend.
///
/// Absent keys are "no signal", never an error: `get_int` reads 0 and
/// `get_raw` reads `None`. `ttl` is honored where the backend supports
/// expiry and ignored otherwise.
pub trait IndexStore: Send + Sync {
    fn set_int(&self, key: &str, value: u64, ttl: Option<Duration>) -> Result<()>;
    fn get_int(&self, key: &str) -> Result<u64>;
    fn set_raw(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>>;
    /// Write several integer keys in one call, atomically where the backend
    /// supports multi-key batches.
    fn set_int_batch(&self, ttl: Option<Duration>, entries: &[(String, u64)]) -> Result<()>;
    /// Flush and release backend resources.
    fn close(&self) -> Result<()>;
}

/// Structured-value layer over the raw byte contract. Objects are stored as
/// JSON so persisted posting maps and payloads are readable across adapters.
pub trait IndexStoreExt: IndexStore {
    fn set_object<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<()> {
        let bytes = serde_json::to_vec(value)?;
        self.set_raw(key, &bytes, ttl)
    }

    /// `Ok(None)` when the key is absent.
    fn get_object<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

impl<S: IndexStore + ?Sized> IndexStoreExt for S {}

/// Integers are persisted as 8 big-endian bytes in every adapter.
pub(crate) fn encode_int(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

pub(crate) fn decode_int(bytes: &[u8]) -> Result<u64> {
    let arr: [u8; 8] = bytes
        .try_into()
        .map_err(|_| anyhow!("integer value is {} bytes, expected 8", bytes.len()))?;
    Ok(u64::from_be_bytes(arr))
}
