//! Domain models for the material catalog: the fixed material enum, the
//! current price list and the append-only price change history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::StoreError;

/// The fixed set of recyclable materials the catalog tracks.
///
/// This enum is the single definition every component references; the
/// catalog never grows beyond these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "PET")]
    Pet,
    Aluminum,
    Cardboard,
}

impl Material {
    /// All materials, in catalog order.
    pub const ALL: [Material; 3] = [Material::Pet, Material::Aluminum, Material::Cardboard];

    /// Catalog name, as stored and exported.
    pub fn name(&self) -> &'static str {
        match self {
            Material::Pet => "PET",
            Material::Aluminum => "Aluminum",
            Material::Cardboard => "Cardboard",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pet" => Ok(Material::Pet),
            "aluminum" => Ok(Material::Aluminum),
            "cardboard" => Ok(Material::Cardboard),
            _ => Err(StoreError::InvalidMaterial(s.to_string())),
        }
    }
}

/// Current unit price for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub material: Material,
    pub price_per_kg: f64,
    pub updated_at: DateTime<Utc>,
}

/// One price change, immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryEntry {
    pub id: u64,
    pub material: Material,
    pub previous_price: f64,
    pub new_price: f64,
    pub changed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_names() {
        assert_eq!("PET".parse::<Material>().unwrap(), Material::Pet);
        assert_eq!("aluminum".parse::<Material>().unwrap(), Material::Aluminum);
        assert_eq!(" Cardboard ".parse::<Material>().unwrap(), Material::Cardboard);
        assert!("Glass".parse::<Material>().is_err());
    }

    #[test]
    fn test_serializes_as_catalog_name() {
        assert_eq!(serde_json::to_string(&Material::Pet).unwrap(), "\"PET\"");
        assert_eq!(serde_json::to_string(&Material::Aluminum).unwrap(), "\"Aluminum\"");
    }
}
