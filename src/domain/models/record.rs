//! Domain models for recycling transactions and their aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::material::Material;

/// A single recycling transaction.
///
/// Immutable once stored; may only be deleted by id. The unit price is a
/// snapshot of the catalog price at recording time, so later price changes
/// never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecyclingRecord {
    /// Unique monotonic identifier, never reused after deletion.
    pub id: u64,
    pub date: DateTime<Utc>,
    pub material: Material,
    pub kilos: f64,
    /// Unit price at the time of recording.
    pub price_per_kg: f64,
    /// kilos × price_per_kg, rounded to two decimals.
    pub total: f64,
    pub note: String,
}

/// Summed weights and amount over a set of records, all two-decimal rounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecyclingTotals {
    pub pet_kilos: f64,
    pub aluminum_kilos: f64,
    pub cardboard_kilos: f64,
    pub total_kilos: f64,
    pub total_amount: f64,
}

impl RecyclingTotals {
    /// Summed kilos for one material.
    pub fn kilos_for(&self, material: Material) -> f64 {
        match material {
            Material::Pet => self.pet_kilos,
            Material::Aluminum => self.aluminum_kilos,
            Material::Cardboard => self.cardboard_kilos,
        }
    }
}

/// Round a monetary or weight value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
