//! Recycling transaction domain logic: recording, querying and deleting
//! records.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};

use crate::domain::errors::StoreError;
use crate::domain::models::material::Material;
use crate::domain::models::record::{round2, RecyclingRecord};
use crate::domain::seed_service::DEFAULT_ADMIN_USERNAME;
use crate::storage::kv::{AdminRepository, CounterRepository, PriceRepository, RecordRepository};

/// Service managing recycling transaction records.
#[derive(Clone)]
pub struct RecordService {
    record_repository: RecordRepository,
    price_repository: PriceRepository,
    admin_repository: AdminRepository,
    counter_repository: CounterRepository,
}

impl RecordService {
    pub fn new(
        record_repository: RecordRepository,
        price_repository: PriceRepository,
        admin_repository: AdminRepository,
        counter_repository: CounterRepository,
    ) -> Self {
        Self {
            record_repository,
            price_repository,
            admin_repository,
            counter_repository,
        }
    }

    /// Record a recycling transaction and return the stored record.
    ///
    /// The unit price is snapshotted from the catalog at recording time (0
    /// if the catalog entry is missing) and the total is two-decimal
    /// rounded. The seeded administrator's cumulative total is bumped
    /// best-effort.
    pub fn record_recycling(
        &self,
        material: &str,
        kilos: f64,
        note: &str,
    ) -> Result<RecyclingRecord> {
        let material: Material = material.parse()?;
        if !kilos.is_finite() || kilos <= 0.0 {
            return Err(StoreError::InvalidWeight(kilos).into());
        }

        // Defensive default: a missing catalog entry prices at 0 rather
        // than failing the recording.
        let price_per_kg = match self.price_repository.find_price(material) {
            Some(entry) => entry.price_per_kg,
            None => {
                warn!("No catalog price for {}, recording at 0", material);
                0.0
            }
        };
        let total = round2(kilos * price_per_kg);

        let record = RecyclingRecord {
            id: self.counter_repository.next_record_id(),
            date: Utc::now(),
            material,
            kilos,
            price_per_kg,
            total,
            note: note.to_string(),
        };
        self.record_repository.append_record(record.clone());
        self.admin_repository
            .add_to_recycled_total(DEFAULT_ADMIN_USERNAME, total);

        info!(
            "Recorded {} kg of {} (record {}, total {})",
            kilos, material, record.id, total
        );
        Ok(record)
    }

    /// All records, stored (chronological) order.
    pub fn list_records(&self) -> Vec<RecyclingRecord> {
        self.record_repository.list_records()
    }

    /// Look up one record by id. Absence is not an error.
    pub fn get_record(&self, id: u64) -> Option<RecyclingRecord> {
        self.list_records().into_iter().find(|record| record.id == id)
    }

    /// Delete every record with the given id (expected: exactly one).
    ///
    /// Idempotent: returns true whether or not anything matched.
    pub fn delete_record(&self, id: u64) -> bool {
        let mut records = self.list_records();
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() != before {
            info!("Deleted record {}", id);
        }
        self.record_repository.save_records(&records);
        true
    }

    /// Records whose timestamp falls within the closed interval
    /// `[start, end]`.
    ///
    /// Bounds accept RFC3339 or `YYYY-MM-DD` (expanded to start/end of
    /// day). An unparsable bound matches no records; so does an inverted
    /// range.
    pub fn records_by_date_range(&self, start: &str, end: &str) -> Vec<RecyclingRecord> {
        let Some(start) = parse_range_bound(start, false) else {
            warn!("Unparsable range start '{}', returning no records", start);
            return Vec::new();
        };
        let Some(end) = parse_range_bound(end, true) else {
            warn!("Unparsable range end '{}', returning no records", end);
            return Vec::new();
        };

        self.list_records()
            .into_iter()
            .filter(|record| record.date >= start && record.date <= end)
            .collect()
    }
}

/// Parse one range bound. Date-only bounds expand to the start of day
/// (`end_of_day` false) or end of day (`end_of_day` true) so the interval
/// stays inclusive.
fn parse_range_bound(raw: &str, end_of_day: bool) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let time = if end_of_day {
            date.and_hms_opt(23, 59, 59)?
        } else {
            date.and_hms_opt(0, 0, 0)?
        };
        return Some(time.and_utc());
    }
    None
}
