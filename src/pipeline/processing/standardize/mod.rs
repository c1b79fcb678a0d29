//! Mapping of the per-city intermediate tables onto the unified schema.
//!
//! Standardizers never fail on content: an absent column or a missing,
//! unparseable value resolves to the field's sentinel so both cities stack
//! into one table without gaps.

pub mod chicago;
pub mod dallas;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::INSPECTION_DATE;
use crate::metrics;
use crate::pipeline::processing::coerce;
use crate::table::{Row, Table};
use crate::types::City;

pub use chicago::ChicagoStandardizer;
pub use dallas::DallasStandardizer;

/// One (inspection, violation) pair in the unified schema, before derived fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardizedRecord {
    pub inspection_id: String,
    pub city: City,
    pub inspection_date: Option<NaiveDate>,
    pub establishment_name: String,
    pub aka_name: String,
    pub license_number: String,
    pub facility_type: String,
    pub inspection_type: String,
    pub result: String,
    pub violation_code: String,
    pub violation_description: String,
    pub violation_comment: String,
    pub address: String,
    pub city_name: String,
    pub state: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub month_name: Option<String>,
}

pub const STANDARDIZED_HEADERS: [&str; 21] = [
    "inspection_id",
    "city",
    "inspection_date",
    "establishment_name",
    "aka_name",
    "license_number",
    "facility_type",
    "inspection_type",
    "result",
    "violation_code",
    "violation_description",
    "violation_comment",
    "address",
    "city_name",
    "state",
    "zip_code",
    "latitude",
    "longitude",
    "year",
    "month",
    "month_name",
];

/// Maps one city's intermediate table onto [`StandardizedRecord`]s, row for row
pub trait Standardizer {
    fn city(&self) -> City;

    fn standardize_row(&self, row: &Row<'_>, position: usize) -> StandardizedRecord;

    fn standardize(&self, table: &Table) -> Vec<StandardizedRecord> {
        let records: Vec<StandardizedRecord> = table
            .rows()
            .enumerate()
            .map(|(position, row)| self.standardize_row(&row, position))
            .collect();

        let unparseable = table
            .rows()
            .zip(&records)
            .filter(|(row, rec)| row.value(INSPECTION_DATE).is_some() && rec.inspection_date.is_none())
            .count();
        if unparseable > 0 {
            debug!("{} {} rows had unparseable inspection dates", unparseable, self.city());
            metrics::standardize::unparseable_dates(self.city().as_str(), unparseable);
        }
        metrics::standardize::records_standardized(self.city().as_str(), records.len());
        records
    }
}

/// Date portion of the inspection timestamp plus its calendar breakdown
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DateParts {
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub month_name: Option<String>,
}

impl DateParts {
    pub fn from_cell(raw: Option<&str>) -> Self {
        let Some(date) = raw.and_then(coerce::parse_timestamp).map(|ts| ts.date()) else {
            return Self::default();
        };
        Self {
            date: Some(date),
            year: Some(date.year()),
            month: Some(date.month()),
            month_name: Some(date.format("%B").to_string()),
        }
    }
}

/// Column value, falling back to `default` when the column is absent or the value missing
pub(crate) fn value_or(row: &Row<'_>, column: &str, default: &str) -> String {
    row.value(column).unwrap_or(default).to_string()
}

/// Column value as found, with `default` used only when the column is absent.
/// A present column with a missing value yields the empty string.
pub(crate) fn column_or(row: &Row<'_>, column: &str, default: &str) -> String {
    match row.get(column) {
        Some(cell) if cell.trim().is_empty() => String::new(),
        Some(cell) => cell.to_string(),
        None => default.to_string(),
    }
}

/// Numeric column value, or 0 when absent, missing or not a number
pub(crate) fn number_or_zero(row: &Row<'_>, column: &str) -> f64 {
    row.value(column).and_then(coerce::parse_number).unwrap_or(0.0)
}
