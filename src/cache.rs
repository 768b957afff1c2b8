// src/cache.rs
//! String-keyed blob cache boundary.
//!
//! The engine itself is cache-agnostic; callers persist serialized raw
//! batches between sessions through this trait and hand the engine plain
//! in-memory collections. An unparsable cached blob is discarded here (with
//! a warning) so the engine is never handed one.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::warn;

/// Generic get/set blob store. Implementations may be in-memory, on disk,
/// or browser-local storage behind a bridge.
pub trait BlobCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

/// Process-local cache for tests and the demo shell.
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.inner.lock().expect("cache mutex poisoned");
        map.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut map = self.inner.lock().expect("cache mutex poisoned");
        map.insert(key.to_string(), value);
    }
}

/// One cached raw batch with the time it was fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub fetched_at: DateTime<Utc>,
    pub items: Vec<T>,
}

impl<T> Snapshot<T> {
    pub fn now(items: Vec<T>) -> Self {
        Self {
            fetched_at: Utc::now(),
            items,
        }
    }
}

/// Serialize a batch under `key`. Serialization of our own types does not
/// fail in practice; if it ever does, the cache entry is simply not written.
pub fn store_snapshot<T: Serialize>(cache: &dyn BlobCache, key: &str, items: Vec<T>) {
    match serde_json::to_string(&Snapshot::now(items)) {
        Ok(blob) => cache.set(key, blob),
        Err(e) => warn!(key, error = %e, "snapshot not cached"),
    }
}

/// Load and decode a cached batch. A missing or unparsable blob yields
/// `None`; stale formats are discarded rather than surfaced as errors.
pub fn load_snapshot<T: DeserializeOwned>(cache: &dyn BlobCache, key: &str) -> Option<Snapshot<T>> {
    let blob = cache.get(key)?;
    match serde_json::from_str(&blob) {
        Ok(snap) => Some(snap),
        Err(e) => {
            warn!(key, error = %e, "discarding unparsable cache blob");
            None
        }
    }
}

/// Stable short cache key: `namespace` plus a 12-hex-char digest of the
/// source identity (endpoint URL, query, ...).
pub fn cache_key(namespace: &str, source: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(source.as_bytes());
    let suffix: String = digest[..6].iter().map(|b| format!("{b:02x}")).collect();
    format!("{namespace}:{suffix}")
}
