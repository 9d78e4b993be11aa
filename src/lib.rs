//! # Recycling Tracker Backend
//!
//! Client-side persistence layer for a recycling-tracking application:
//! administrator credentials, a material price catalog with change history,
//! and recycling transaction records, all stored in a string-keyed
//! key-value backend and exposed as CRUD and reporting operations.
//!
//! The backend is an injected capability ([`storage::KeyValueBackend`]),
//! so the hosting application chooses between the file-based store and the
//! in-memory one, and tests substitute a fake freely. Seeding is an
//! explicit, idempotent call ([`Backend::new`] performs it), not a
//! load-time side effect.

pub mod domain;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;

pub use domain::errors::StoreError;
pub use domain::models::{
    Administrator, Material, PriceEntry, PriceHistoryEntry, RecyclingRecord, RecyclingTotals,
};

use domain::{AdminService, PriceService, RecordService, ReportService, SeedService};
use storage::kv::{AdminRepository, CounterRepository, PriceRepository, RecordRepository};
use storage::{FileBackend, KeyValueBackend, KvConnection, MemoryBackend};

/// Main backend struct that orchestrates all services.
pub struct Backend {
    pub admin_service: AdminService,
    pub price_service: PriceService,
    pub record_service: RecordService,
    pub report_service: ReportService,
    pub seed_service: SeedService,
}

impl Backend {
    /// Create a backend over the given storage and seed absent collections.
    pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
        let connection = KvConnection::new(backend);

        let admin_repository = AdminRepository::new(connection.clone());
        let price_repository = PriceRepository::new(connection.clone());
        let record_repository = RecordRepository::new(connection.clone());
        let counter_repository = CounterRepository::new(connection);

        let seed_service = SeedService::new(
            admin_repository.clone(),
            price_repository.clone(),
            record_repository.clone(),
            counter_repository.clone(),
        );
        seed_service.ensure_seeded();

        let admin_service = AdminService::new(admin_repository.clone());
        let price_service = PriceService::new(price_repository.clone(), counter_repository.clone());
        let record_service = RecordService::new(
            record_repository.clone(),
            price_repository,
            admin_repository,
            counter_repository,
        );
        let report_service = ReportService::new(record_repository);

        Backend {
            admin_service,
            price_service,
            record_service,
            report_service,
            seed_service,
        }
    }

    /// Backend persisting under `data_dir`, one file per collection.
    pub fn open<P: AsRef<std::path::Path>>(data_dir: P) -> Result<Self> {
        let file_backend = FileBackend::new(data_dir)?;
        Ok(Self::new(Arc::new(file_backend)))
    }

    /// Backend over a process-local in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ReportService;
    use tempfile::TempDir;

    #[test]
    fn test_backend_seeds_on_construction() {
        let backend = Backend::in_memory();
        assert!(backend.admin_service.validate_admin("admin", "admin123"));
        assert_eq!(backend.price_service.list_prices().len(), 3);
        assert!(backend.record_service.list_records().is_empty());
    }

    #[test]
    fn test_statistics_match_totals_over_full_collection() {
        let backend = Backend::in_memory();
        backend.record_service.record_recycling("PET", 10.0, "bottles").unwrap();
        backend.record_service.record_recycling("Aluminum", 2.0, "cans").unwrap();
        backend.record_service.record_recycling("Cardboard", 8.0, "").unwrap();

        let statistics = backend.report_service.compute_statistics();
        let totals = ReportService::compute_totals(&backend.record_service.list_records());
        assert_eq!(statistics, totals);
        assert_eq!(statistics.total_kilos, 20.0);
        assert_eq!(statistics.total_amount, 40.0 + 74.0 + 20.0);
    }

    #[test]
    fn test_file_backend_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();

        let record_id = {
            let backend = Backend::open(temp_dir.path()).unwrap();
            backend.price_service.change_price("Aluminum", 40.0).unwrap();
            backend.record_service.record_recycling("Aluminum", 3.0, "cans").unwrap().id
        };

        let reopened = Backend::open(temp_dir.path()).unwrap();
        let record = reopened.record_service.get_record(record_id).unwrap();
        assert_eq!(record.price_per_kg, 40.0);
        assert_eq!(record.total, 120.0);

        // Reopening runs seeding again; nothing may be reset.
        let history = reopened.price_service.list_price_history();
        assert_eq!(history[0].new_price, 40.0);
        assert_eq!(reopened.record_service.list_records().len(), 1);
    }
}
