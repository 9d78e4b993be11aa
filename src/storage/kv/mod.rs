//! # Key-Value Storage Module
//!
//! Repositories for each domain collection, layered over an injected
//! [`KeyValueBackend`]. Every collection lives under one fixed key as a
//! JSON-serialized array or object, and every operation performs a full
//! read-modify-write cycle against its key.

pub mod admin_repository;
pub mod counter_repository;
pub mod price_repository;
pub mod record_repository;

pub use admin_repository::AdminRepository;
pub use counter_repository::CounterRepository;
pub use price_repository::PriceRepository;
pub use record_repository::RecordRepository;

use std::sync::Arc;

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueBackend;

/// Backend key holding the administrator collection.
pub const ADMINISTRATORS_KEY: &str = "administrators";
/// Backend key holding the price catalog.
pub const PRICES_KEY: &str = "prices";
/// Backend key holding the price change history.
pub const PRICE_HISTORY_KEY: &str = "price-history";
/// Backend key holding the recycling records.
pub const RECORDS_KEY: &str = "records";
/// Backend key holding the id counters.
pub const COUNTERS_KEY: &str = "counters";

/// KvConnection wraps the backend with JSON (de)serialization helpers.
///
/// Read failures never surface to callers: a missing key, unparsable
/// payload or backend error degrades to the caller-supplied fallback after
/// logging. Writes report success as a boolean and leave the previously
/// stored value untouched on failure.
#[derive(Clone)]
pub struct KvConnection {
    backend: Arc<dyn KeyValueBackend>,
}

impl KvConnection {
    /// Create a new connection over the given backend.
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        Self { backend }
    }

    /// Read and deserialize the value under `key`, or `fallback` if the key
    /// is absent or the stored payload cannot be parsed.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(raw) = self.backend.get(key) else {
            return fallback;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding unparsable payload under '{}': {}", key, e);
                fallback
            }
        }
    }

    /// Serialize `value` and store it under `key`. Returns false on failure.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> bool {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to serialize value for '{}': {}", key, e);
                return false;
            }
        };
        let stored = self.backend.set(key, &raw);
        if !stored {
            error!("Backend rejected write for '{}'", key);
        }
        stored
    }

    /// Whether the backend currently holds a value under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.backend.get(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryBackend;

    fn setup_connection() -> KvConnection {
        KvConnection::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_read_missing_key_returns_fallback() {
        let conn = setup_connection();
        let values: Vec<u32> = conn.read(RECORDS_KEY, vec![7]);
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let conn = setup_connection();
        assert!(conn.write(RECORDS_KEY, &vec![1u32, 2, 3]));
        let values: Vec<u32> = conn.read(RECORDS_KEY, vec![]);
        assert_eq!(values, vec![1, 2, 3]);
        assert!(conn.contains(RECORDS_KEY));
    }

    #[test]
    fn test_read_corrupt_payload_returns_fallback() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(PRICES_KEY, "not json at all");
        let conn = KvConnection::new(backend);
        let values: Vec<u32> = conn.read(PRICES_KEY, vec![]);
        assert!(values.is_empty());
    }
}
