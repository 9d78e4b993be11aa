//! Price catalog domain logic: listing the catalog, listing the change
//! history and applying price changes.

use anyhow::Result;
use chrono::Utc;
use log::info;

use crate::domain::errors::StoreError;
use crate::domain::models::material::{Material, PriceEntry, PriceHistoryEntry};
use crate::storage::kv::{CounterRepository, PriceRepository};

/// Service managing the price catalog and its history.
#[derive(Clone)]
pub struct PriceService {
    price_repository: PriceRepository,
    counter_repository: CounterRepository,
}

impl PriceService {
    pub fn new(price_repository: PriceRepository, counter_repository: CounterRepository) -> Self {
        Self {
            price_repository,
            counter_repository,
        }
    }

    /// Full price catalog, stored order.
    pub fn list_prices(&self) -> Vec<PriceEntry> {
        self.price_repository.list_prices()
    }

    /// Full price change history in stored order.
    ///
    /// Newest-first by construction, but callers should rely only on
    /// "history append order".
    pub fn list_price_history(&self) -> Vec<PriceHistoryEntry> {
        self.price_repository.list_history()
    }

    /// Change the current price of `material` to `new_price`.
    ///
    /// Records the prior price, overwrites the catalog entry and prepends a
    /// history entry with a fresh id. `new_price` is accepted as given
    /// (known gap: no positivity or finiteness check), and success is
    /// reported even when a sub-write silently failed.
    pub fn change_price(&self, material: &str, new_price: f64) -> Result<()> {
        let material: Material = material
            .parse()
            .map_err(|_| StoreError::MaterialNotFound(material.to_string()))?;

        let mut prices = self.price_repository.list_prices();
        let entry = prices
            .iter_mut()
            .find(|entry| entry.material == material)
            .ok_or_else(|| StoreError::MaterialNotFound(material.to_string()))?;

        let previous_price = entry.price_per_kg;
        let now = Utc::now();
        entry.price_per_kg = new_price;
        entry.updated_at = now;

        self.price_repository.save_prices(&prices);
        self.price_repository.prepend_history(PriceHistoryEntry {
            id: self.counter_repository.next_history_id(),
            material,
            previous_price,
            new_price,
            changed_at: now,
        });

        info!(
            "Changed price of {}: {} -> {}",
            material, previous_price, new_price
        );
        Ok(())
    }
}
