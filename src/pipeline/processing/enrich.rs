//! Calculated fields layered onto standardized records for visualization.
//! Everything here is a pure function of one record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::standardize::StandardizedRecord;
use crate::types::City;

/// Meteorological season of the inspection month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
    /// The inspection date was missing or unparseable
    Unknown,
}

impl Season {
    pub fn from_month(month: Option<u32>) -> Self {
        match month {
            None => Season::Unknown,
            Some(12 | 1 | 2) => Season::Winter,
            Some(3..=5) => Season::Spring,
            Some(6..=8) => Season::Summer,
            Some(_) => Season::Fall,
        }
    }
}

/// Coarse outcome bucket over the free-text result
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResultSimple {
    Pass,
    Fail,
    Other,
}

impl ResultSimple {
    /// Case-insensitive substring match; a result mentioning both counts as Pass
    pub fn classify(result: &str) -> Self {
        let upper = result.to_uppercase();
        if upper.contains("PASS") {
            ResultSimple::Pass
        } else if upper.contains("FAIL") {
            ResultSimple::Fail
        } else {
            ResultSimple::Other
        }
    }
}

pub fn has_violation(violation_description: &str) -> bool {
    !violation_description.trim().is_empty()
}

/// A standardized record plus its calculated fields; one row of the master table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterRecord {
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
    pub has_violation: bool,
    pub season: Season,
    pub result_simple: ResultSimple,
}

pub const MASTER_HEADERS: [&str; 24] = [
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
    "has_violation",
    "season",
    "result_simple",
];

impl From<StandardizedRecord> for MasterRecord {
    fn from(rec: StandardizedRecord) -> Self {
        let has_violation = has_violation(&rec.violation_description);
        let season = Season::from_month(rec.month);
        let result_simple = ResultSimple::classify(&rec.result);

        MasterRecord {
            inspection_id: rec.inspection_id,
            city: rec.city,
            inspection_date: rec.inspection_date,
            establishment_name: rec.establishment_name,
            aka_name: rec.aka_name,
            license_number: rec.license_number,
            facility_type: rec.facility_type,
            inspection_type: rec.inspection_type,
            result: rec.result,
            violation_code: rec.violation_code,
            violation_description: rec.violation_description,
            violation_comment: rec.violation_comment,
            address: rec.address,
            city_name: rec.city_name,
            state: rec.state,
            zip_code: rec.zip_code,
            latitude: rec.latitude,
            longitude: rec.longitude,
            year: rec.year,
            month: rec.month,
            month_name: rec.month_name,
            has_violation,
            season,
            result_simple,
        }
    }
}

/// Attach the calculated fields to a standardized record
pub fn add_calculated_fields(record: StandardizedRecord) -> MasterRecord {
    MasterRecord::from(record)
}
