//! Domain models shared by services and repositories.

pub mod admin;
pub mod material;
pub mod record;

pub use admin::Administrator;
pub use material::{Material, PriceEntry, PriceHistoryEntry};
pub use record::{round2, RecyclingRecord, RecyclingTotals};
