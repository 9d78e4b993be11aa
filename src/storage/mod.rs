//! Storage layer: backend trait, backend implementations and the
//! key-value repositories the domain services sit on.

pub mod file;
pub mod kv;
pub mod memory;
pub mod traits;

pub use file::FileBackend;
pub use kv::KvConnection;
pub use memory::MemoryBackend;
pub use traits::KeyValueBackend;
