//! # Record Repository
//!
//! Persistence for recycling records. Records are appended in recording
//! order, so the stored order is chronological.

use crate::domain::models::record::RecyclingRecord;

use super::{KvConnection, RECORDS_KEY};

/// Repository for recycling transaction records.
#[derive(Clone)]
pub struct RecordRepository {
    connection: KvConnection,
}

impl RecordRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    /// Whether the record collection exists at all (seed check).
    pub fn is_seeded(&self) -> bool {
        self.connection.contains(RECORDS_KEY)
    }

    /// Read the full record collection, stored (chronological) order.
    pub fn list_records(&self) -> Vec<RecyclingRecord> {
        self.connection.read(RECORDS_KEY, Vec::new())
    }

    /// Write the full record collection.
    pub fn save_records(&self, records: &[RecyclingRecord]) -> bool {
        self.connection.write(RECORDS_KEY, &records)
    }

    /// Append one record, keeping chronological order.
    pub fn append_record(&self, record: RecyclingRecord) -> bool {
        let mut records = self.list_records();
        records.push(record);
        self.save_records(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::material::Material;
    use crate::storage::memory::MemoryBackend;
    use chrono::Utc;
    use std::sync::Arc;

    fn setup_repo() -> RecordRepository {
        RecordRepository::new(KvConnection::new(Arc::new(MemoryBackend::new())))
    }

    fn sample_record(id: u64) -> RecyclingRecord {
        RecyclingRecord {
            id,
            date: Utc::now(),
            material: Material::Pet,
            kilos: 2.0,
            price_per_kg: 4.0,
            total: 8.0,
            note: String::new(),
        }
    }

    #[test]
    fn test_append_keeps_order() {
        let repo = setup_repo();
        assert!(repo.list_records().is_empty());

        repo.append_record(sample_record(1));
        repo.append_record(sample_record(2));
        repo.append_record(sample_record(3));

        let ids: Vec<u64> = repo.list_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
