//! # Storage Traits
//!
//! This module defines the storage abstraction trait that allows different
//! key-value backends to be used interchangeably by the repositories.

/// Trait defining the key-value backend contract.
///
/// The backend is an opaque string-keyed store: five top-level keys, each
/// holding a JSON-serialized collection. Implementations may be in-memory
/// (tests) or file-based (production) without the domain layer changing.
pub trait KeyValueBackend: Send + Sync {
    /// Fetch the raw string stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Returns false on failure (e.g. quota exceeded, IO error); the
    /// previously stored value must remain unchanged in that case.
    fn set(&self, key: &str, value: &str) -> bool;

    /// Remove the value stored under `key`. Returns true if a value existed.
    fn remove(&self, key: &str) -> bool;
}
