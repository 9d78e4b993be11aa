//! Reporting domain logic: totals aggregation and CSV export.

use std::fs;
use std::path::Path;

use log::{error, info};

use crate::domain::models::material::Material;
use crate::domain::models::record::{round2, RecyclingRecord, RecyclingTotals};
use crate::storage::kv::RecordRepository;

/// Default export filename when the caller doesn't supply one.
pub const DEFAULT_EXPORT_FILENAME: &str = "registros_reciclaje.csv";

const CSV_HEADER: &str = "id,fecha,material,kilos,precioPorKg,total,nota";

/// Service producing totals and CSV exports over recycling records.
#[derive(Clone)]
pub struct ReportService {
    record_repository: RecordRepository,
}

impl ReportService {
    pub fn new(record_repository: RecordRepository) -> Self {
        Self { record_repository }
    }

    /// Totals over the full stored record collection.
    pub fn compute_statistics(&self) -> RecyclingTotals {
        Self::compute_totals(&self.record_repository.list_records())
    }

    /// Totals over a caller-supplied subset (e.g. a date-filtered report).
    ///
    /// Shared reduction: `compute_statistics` is this applied to the full
    /// collection.
    pub fn compute_totals(records: &[RecyclingRecord]) -> RecyclingTotals {
        let mut totals = RecyclingTotals::default();
        for record in records {
            match record.material {
                Material::Pet => totals.pet_kilos += record.kilos,
                Material::Aluminum => totals.aluminum_kilos += record.kilos,
                Material::Cardboard => totals.cardboard_kilos += record.kilos,
            }
            totals.total_kilos += record.kilos;
            totals.total_amount += record.total;
        }
        totals.pet_kilos = round2(totals.pet_kilos);
        totals.aluminum_kilos = round2(totals.aluminum_kilos);
        totals.cardboard_kilos = round2(totals.cardboard_kilos);
        totals.total_kilos = round2(totals.total_kilos);
        totals.total_amount = round2(totals.total_amount);
        totals
    }

    /// Export the full stored collection as CSV. Returns success.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> bool {
        self.export_filtered_csv(&self.record_repository.list_records(), path)
    }

    /// [`export_csv`](Self::export_csv) to [`DEFAULT_EXPORT_FILENAME`] in
    /// the working directory.
    pub fn export_csv_default(&self) -> bool {
        self.export_csv(DEFAULT_EXPORT_FILENAME)
    }

    /// Export a caller-supplied record set as CSV. Returns success.
    ///
    /// The note column is always double-quoted with embedded quotes
    /// doubled; every other column is unquoted. Failures are logged, not
    /// raised.
    pub fn export_filtered_csv<P: AsRef<Path>>(
        &self,
        records: &[RecyclingRecord],
        path: P,
    ) -> bool {
        let csv_content = render_csv(records);
        match fs::write(path.as_ref(), csv_content) {
            Ok(()) => {
                info!(
                    "Exported {} records to {}",
                    records.len(),
                    path.as_ref().display()
                );
                true
            }
            Err(e) => {
                error!("Failed to export CSV to {}: {}", path.as_ref().display(), e);
                false
            }
        }
    }
}

/// Render records as CSV text, one row per record.
fn render_csv(records: &[RecyclingRecord]) -> String {
    let mut content = String::from(CSV_HEADER);
    content.push('\n');
    for record in records {
        content.push_str(&format!(
            "{},{},{},{:.2},{:.2},{:.2},\"{}\"\n",
            record.id,
            record.date.to_rfc3339(),
            record.material,
            record.kilos,
            record.price_per_kg,
            record.total,
            record.note.replace('"', "\"\""),
        ));
    }
    content
}
