//! Typed domain errors.
//!
//! Services return `anyhow::Result` and wrap these variants, so callers can
//! match on the failure kind while the rest of the call chain stays on the
//! `?` operator.

use thiserror::Error;

/// Failure taxonomy for store operations.
///
/// Lookups that simply find nothing (get/delete of an unknown record id)
/// are not errors and never produce one of these.
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// A price change targeted a material that is not in the catalog.
    #[error("material '{0}' not found in price catalog")]
    MaterialNotFound(String),

    /// A recording referenced a material outside the fixed enum.
    #[error("'{0}' is not a recognized material")]
    InvalidMaterial(String),

    /// Weight must be a positive finite number of kilograms.
    #[error("invalid weight: {0} kg (must be a positive number)")]
    InvalidWeight(f64),
}
