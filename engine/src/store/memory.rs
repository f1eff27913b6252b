use super::{decode_int, encode_int, IndexStore};
use anyhow::Result;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// Process-local backend. Entries live until the process exits; TTLs are
/// ignored. Batched writes are atomic under the single map mutex.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys, for tests and diagnostics.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl IndexStore for MemoryStore {
    fn set_int(&self, key: &str, value: u64, _ttl: Option<Duration>) -> Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), encode_int(value).to_vec());
        Ok(())
    }

    fn get_int(&self, key: &str) -> Result<u64> {
        match self.entries.lock().get(key) {
            Some(bytes) => decode_int(bytes),
            None => Ok(0),
        }
    }

    fn set_raw(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set_int_batch(&self, _ttl: Option<Duration>, entries: &[(String, u64)]) -> Result<()> {
        let mut map = self.entries.lock();
        for (key, value) in entries {
            map.insert(key.clone(), encode_int(*value).to_vec());
        }
        Ok(())
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_int_reads_as_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.get_int("missing").unwrap(), 0);
    }

    #[test]
    fn absent_raw_reads_as_none() {
        let store = MemoryStore::new();
        assert!(store.get_raw("missing").unwrap().is_none());
    }

    #[test]
    fn int_round_trip() {
        let store = MemoryStore::new();
        store.set_int("n", 42, None).unwrap();
        assert_eq!(store.get_int("n").unwrap(), 42);
    }

    #[test]
    fn batch_writes_all_keys() {
        let store = MemoryStore::new();
        store
            .set_int_batch(
                None,
                &[("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)],
            )
            .unwrap();
        assert_eq!(store.get_int("a").unwrap(), 1);
        assert_eq!(store.get_int("b").unwrap(), 2);
        assert_eq!(store.get_int("c").unwrap(), 3);
    }
}
