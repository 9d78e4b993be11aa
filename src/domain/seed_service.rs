//! Seeding logic: one-time creation of default data when a collection is
//! absent. Invoked explicitly by the hosting application at startup, not as
//! a module-load side effect.

use chrono::Utc;
use log::info;

use crate::domain::models::admin::Administrator;
use crate::domain::models::material::{Material, PriceEntry, PriceHistoryEntry};
use crate::storage::kv::{AdminRepository, CounterRepository, PriceRepository, RecordRepository};

/// Default administrator credentials created at first startup.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Default catalog price per kg for each material.
fn default_price(material: Material) -> f64 {
    match material {
        Material::Pet => 4.0,
        Material::Aluminum => 37.0,
        Material::Cardboard => 2.5,
    }
}

/// Service that populates missing collections with their defaults.
///
/// Idempotent per collection: an existing collection is never reset or
/// duplicated, so re-running after a partial seed only fills the gaps.
#[derive(Clone)]
pub struct SeedService {
    admin_repository: AdminRepository,
    price_repository: PriceRepository,
    record_repository: RecordRepository,
    counter_repository: CounterRepository,
}

impl SeedService {
    pub fn new(
        admin_repository: AdminRepository,
        price_repository: PriceRepository,
        record_repository: RecordRepository,
        counter_repository: CounterRepository,
    ) -> Self {
        Self {
            admin_repository,
            price_repository,
            record_repository,
            counter_repository,
        }
    }

    /// Seed every absent collection with its defaults.
    pub fn ensure_seeded(&self) {
        self.seed_admins();
        self.seed_prices();
        self.seed_records();
    }

    fn seed_admins(&self) {
        if self.admin_repository.is_seeded() {
            return;
        }
        info!("Seeding default administrator '{}'", DEFAULT_ADMIN_USERNAME);
        let admin = Administrator {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            name: "Administrator".to_string(),
            email: "admin@recycling.local".to_string(),
            program: "Recycling Program".to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            role: "admin".to_string(),
            total_recycled_amount: 0.0,
        };
        self.admin_repository.save_admins(&[admin]);
    }

    fn seed_prices(&self) {
        if self.price_repository.is_seeded() {
            return;
        }
        info!("Seeding default price catalog");
        let now = Utc::now();
        let mut prices = Vec::with_capacity(Material::ALL.len());
        let mut history = Vec::with_capacity(Material::ALL.len());
        for material in Material::ALL {
            let price = default_price(material);
            prices.push(PriceEntry {
                material,
                price_per_kg: price,
                updated_at: now,
            });
            // Each seed price gets a history row with previous price 0.
            history.insert(
                0,
                PriceHistoryEntry {
                    id: self.counter_repository.next_history_id(),
                    material,
                    previous_price: 0.0,
                    new_price: price,
                    changed_at: now,
                },
            );
        }
        self.price_repository.save_prices(&prices);
        self.price_repository.save_history(&history);
    }

    fn seed_records(&self) {
        if self.record_repository.is_seeded() {
            return;
        }
        info!("Seeding empty record collection");
        self.record_repository.save_records(&[]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::kv::KvConnection;
    use crate::storage::memory::MemoryBackend;
    use std::sync::Arc;

    fn setup_service() -> (SeedService, AdminRepository, PriceRepository, RecordRepository) {
        let conn = KvConnection::new(Arc::new(MemoryBackend::new()));
        let admin_repo = AdminRepository::new(conn.clone());
        let price_repo = PriceRepository::new(conn.clone());
        let record_repo = RecordRepository::new(conn.clone());
        let counter_repo = CounterRepository::new(conn);
        let service = SeedService::new(
            admin_repo.clone(),
            price_repo.clone(),
            record_repo.clone(),
            counter_repo,
        );
        (service, admin_repo, price_repo, record_repo)
    }

    #[test]
    fn test_seeds_all_collections() {
        let (service, admin_repo, price_repo, record_repo) = setup_service();
        service.ensure_seeded();

        let admins = admin_repo.list_admins();
        assert_eq!(admins.len(), 1);
        assert_eq!(admins[0].username, "admin");
        assert_eq!(admins[0].total_recycled_amount, 0.0);

        let prices = price_repo.list_prices();
        assert_eq!(prices.len(), 3);
        assert_eq!(price_repo.find_price(Material::Pet).unwrap().price_per_kg, 4.0);

        let history = price_repo.list_history();
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|entry| entry.previous_price == 0.0));

        assert!(record_repo.is_seeded());
        assert!(record_repo.list_records().is_empty());
    }

    #[test]
    fn test_seeding_is_idempotent() {
        let (service, admin_repo, price_repo, record_repo) = setup_service();
        service.ensure_seeded();

        let admins_before = admin_repo.list_admins();
        let prices_before = price_repo.list_prices();
        let history_before = price_repo.list_history();

        service.ensure_seeded();

        assert_eq!(admin_repo.list_admins(), admins_before);
        assert_eq!(price_repo.list_prices(), prices_before);
        assert_eq!(price_repo.list_history(), history_before);
        assert!(record_repo.list_records().is_empty());
    }

    #[test]
    fn test_partial_seed_fills_only_gaps() {
        let (service, admin_repo, price_repo, _record_repo) = setup_service();
        service.ensure_seeded();

        // Simulate a changed price, then reseed.
        let mut prices = price_repo.list_prices();
        prices[0].price_per_kg = 9.99;
        price_repo.save_prices(&prices);

        service.ensure_seeded();
        assert_eq!(price_repo.list_prices()[0].price_per_kg, 9.99);
        assert_eq!(admin_repo.list_admins().len(), 1);
    }
}
