//! # Counter Repository
//!
//! Issues unique, monotonically increasing identifiers for the two
//! independent sequences (recycling records and price history entries).
//! The counter state is persisted under its own key so ids survive
//! restarts and are never reused after a deletion.

use serde::{Deserialize, Serialize};

use super::{KvConnection, COUNTERS_KEY};

/// Persisted counter state for both id sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counters {
    pub next_record_id: u64,
    pub next_history_id: u64,
}

impl Default for Counters {
    fn default() -> Self {
        Self {
            next_record_id: 1,
            next_history_id: 1,
        }
    }
}

/// Repository issuing ids out of the persisted [`Counters`].
///
/// The read-increment-write cycle is not atomic across processes sharing a
/// backend; acceptable because the store runs single-threaded per context.
#[derive(Clone)]
pub struct CounterRepository {
    connection: KvConnection,
}

impl CounterRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    /// Issue the next recycling record id.
    pub fn next_record_id(&self) -> u64 {
        let mut counters: Counters = self.connection.read(COUNTERS_KEY, Counters::default());
        let id = counters.next_record_id;
        counters.next_record_id += 1;
        self.connection.write(COUNTERS_KEY, &counters);
        id
    }

    /// Issue the next price history entry id.
    pub fn next_history_id(&self) -> u64 {
        let mut counters: Counters = self.connection.read(COUNTERS_KEY, Counters::default());
        let id = counters.next_history_id;
        counters.next_history_id += 1;
        self.connection.write(COUNTERS_KEY, &counters);
        id
    }
}
