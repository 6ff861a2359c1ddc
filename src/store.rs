//! Persistent key-value store for widget state
//!
//! Each widget owns one key in a shared sled database and serializes its
//! whole slice as JSON. Reads that fail for any reason (missing key, stale
//! shape, corrupt bytes) fall back to the caller-provided default; writes
//! propagate their error, since nothing downstream depends on write success.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sled::Db;
use std::path::Path;
use tracing::{debug, info};

/// Key-value store adapter over a local sled database.
///
/// Cloning is cheap; all clones share the same underlying database.
#[derive(Debug, Clone)]
pub struct StateStore {
    db: Db,
}

impl StateStore {
    /// Open or create the state database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let db = sled::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "Opened state store");
        Ok(Self { db })
    }

    /// Read and JSON-decode the value under `key`.
    ///
    /// Returns `fallback` when the key is absent or the stored bytes do not
    /// decode as `T`. Decode failures are never surfaced to the caller.
    pub fn get<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.db.get(key.as_bytes()) {
            Ok(Some(raw)) => match serde_json::from_slice(&raw) {
                Ok(value) => value,
                Err(e) => {
                    debug!(key, error = %e, "Stored value unreadable, using fallback");
                    fallback
                }
            },
            Ok(None) => fallback,
            Err(e) => {
                debug!(key, error = %e, "Store read failed, using fallback");
                fallback
            }
        }
    }

    /// JSON-encode `value` and write it under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let encoded = serde_json::to_vec(value)?;
        self.db.insert(key.as_bytes(), encoded)?;
        Ok(())
    }

    /// Number of keys currently stored.
    pub fn key_count(&self) -> usize {
        self.db.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeSet;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        label: String,
        completed: BTreeSet<usize>,
        streak: u32,
    }

    fn open_temp() -> (tempfile::TempDir, StateStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = StateStore::open(dir.path().join("state.sled")).expect("open store");
        (dir, store)
    }

    #[test]
    fn test_set_then_get_roundtrips() {
        let (_dir, store) = open_temp();
        let value = Sample {
            label: "activation".to_string(),
            completed: BTreeSet::from([0, 2, 5]),
            streak: 3,
        };

        store.set("sample", &value).expect("set");
        let read: Sample = store.get("sample", Sample::default());
        assert_eq!(read, value);
    }

    #[test]
    fn test_missing_key_returns_fallback() {
        let (_dir, store) = open_temp();
        let fallback = Sample {
            label: "fresh".to_string(),
            ..Sample::default()
        };

        let read: Sample = store.get("never-written", fallback.clone());
        assert_eq!(read, fallback);
    }

    #[test]
    fn test_corrupt_value_returns_fallback() {
        let (_dir, store) = open_temp();
        store
            .db
            .insert("sample".as_bytes(), &b"{not json at all"[..])
            .expect("raw insert");

        let read: Sample = store.get("sample", Sample::default());
        assert_eq!(read, Sample::default());
    }

    #[test]
    fn test_shape_change_tolerated_via_fallback() {
        let (_dir, store) = open_temp();
        // An older schema stored a bare number under this key.
        store.set("sample", &42u32).expect("set");

        let read: Sample = store.get("sample", Sample::default());
        assert_eq!(read, Sample::default());
    }
}
