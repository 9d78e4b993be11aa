//! In-memory key-value backend.
//!
//! Used as the substitution fake in tests and as a throwaway store for
//! development. Values live in a mutex-guarded map for the lifetime of the
//! process.

use std::collections::HashMap;
use std::sync::Mutex;

use super::traits::KeyValueBackend;

/// Backend storing every key in a process-local `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key).is_some()
    }
}
