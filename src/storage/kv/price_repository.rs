//! # Price Repository
//!
//! Persistence for the price catalog and the append-only price change
//! history. History entries are prepended so the stored order is
//! newest-first.

use crate::domain::models::material::{Material, PriceEntry, PriceHistoryEntry};

use super::{KvConnection, PRICES_KEY, PRICE_HISTORY_KEY};

/// Repository for the price catalog and its change history.
#[derive(Clone)]
pub struct PriceRepository {
    connection: KvConnection,
}

impl PriceRepository {
    pub fn new(connection: KvConnection) -> Self {
        Self { connection }
    }

    /// Whether the price catalog exists at all (seed check).
    pub fn is_seeded(&self) -> bool {
        self.connection.contains(PRICES_KEY)
    }

    /// Read the full price catalog, stored order.
    pub fn list_prices(&self) -> Vec<PriceEntry> {
        self.connection.read(PRICES_KEY, Vec::new())
    }

    /// Current catalog entry for one material.
    pub fn find_price(&self, material: Material) -> Option<PriceEntry> {
        self.list_prices()
            .into_iter()
            .find(|entry| entry.material == material)
    }

    /// Write the full price catalog.
    pub fn save_prices(&self, prices: &[PriceEntry]) -> bool {
        self.connection.write(PRICES_KEY, &prices)
    }

    /// Read the full history, stored order (newest-first by construction).
    pub fn list_history(&self) -> Vec<PriceHistoryEntry> {
        self.connection.read(PRICE_HISTORY_KEY, Vec::new())
    }

    /// Write the full history collection.
    pub fn save_history(&self, history: &[PriceHistoryEntry]) -> bool {
        self.connection.write(PRICE_HISTORY_KEY, &history)
    }

    /// Prepend one history entry, keeping newest-first order.
    pub fn prepend_history(&self, entry: PriceHistoryEntry) -> bool {
        let mut history = self.list_history();
        history.insert(0, entry);
        self.save_history(&history)
    }
}
