use super::{decode_int, encode_int, IndexStore};
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

/// Embedded persistent backend over a sled tree. sled has no key expiry, so
/// TTLs are ignored; multi-key integer writes go through `sled::Batch` and
/// are applied atomically.
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }
}

impl IndexStore for SledStore {
    fn set_int(&self, key: &str, value: u64, _ttl: Option<Duration>) -> Result<()> {
        self.db.insert(key, &encode_int(value)[..])?;
        Ok(())
    }

    fn get_int(&self, key: &str) -> Result<u64> {
        match self.db.get(key)? {
            Some(bytes) => decode_int(&bytes),
            None => Ok(0),
        }
    }

    fn set_raw(&self, key: &str, value: &[u8], _ttl: Option<Duration>) -> Result<()> {
        self.db.insert(key, value)?;
        Ok(())
    }

    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.db.get(key)?.map(|bytes| bytes.to_vec()))
    }

    fn set_int_batch(&self, _ttl: Option<Duration>, entries: &[(String, u64)]) -> Result<()> {
        let mut batch = sled::Batch::default();
        for (key, value) in entries {
            batch.insert(key.as_bytes(), &encode_int(*value)[..]);
        }
        self.db.apply_batch(batch)?;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_and_raw_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SledStore::open(dir.path()).unwrap();
        store.set_int("n", 7, None).unwrap();
        store.set_raw("blob", b"payload", None).unwrap();
        assert_eq!(store.get_int("n").unwrap(), 7);
        assert_eq!(store.get_raw("blob").unwrap().unwrap(), b"payload");
        assert_eq!(store.get_int("missing").unwrap(), 0);
        assert!(store.get_raw("missing").unwrap().is_none());
    }

    #[test]
    fn batch_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let store = SledStore::open(dir.path()).unwrap();
        store
            .set_int_batch(None, &[("x".to_string(), 10), ("y".to_string(), 20)])
            .unwrap();
        assert_eq!(store.get_int("x").unwrap(), 10);
        assert_eq!(store.get_int("y").unwrap(), 20);
    }
}
