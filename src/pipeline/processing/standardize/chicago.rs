use super::{column_or, number_or_zero, value_or, DateParts, StandardizedRecord, Standardizer};
use crate::constants::{
    CHICAGO_ADDRESS, CHICAGO_AKA_NAME, CHICAGO_CITY, CHICAGO_DBA_NAME, CHICAGO_FACILITY_TYPE,
    CHICAGO_INSPECTION_ID, CHICAGO_LATITUDE, CHICAGO_LICENSE, CHICAGO_LONGITUDE,
    CHICAGO_RESULTS, CHICAGO_STATE, CHICAGO_STATE_DEFAULT, CHICAGO_ZIP, INSPECTION_DATE,
    INSPECTION_TYPE, UNKNOWN, UNKNOWN_ZIP, VIOLATION_CODE, VIOLATION_COMMENT,
    VIOLATION_DESCRIPTION,
};
use crate::table::Row;
use crate::types::City;

/// Chicago maps nearly 1:1; only missing values need sentinels.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChicagoStandardizer;

impl Standardizer for ChicagoStandardizer {
    fn city(&self) -> City {
        City::Chicago
    }

    fn standardize_row(&self, row: &Row<'_>, _position: usize) -> StandardizedRecord {
        let date = DateParts::from_cell(row.value(INSPECTION_DATE));

        StandardizedRecord {
            inspection_id: column_or(row, CHICAGO_INSPECTION_ID, ""),
            city: City::Chicago,
            inspection_date: date.date,
            establishment_name: value_or(row, CHICAGO_DBA_NAME, UNKNOWN),
            aka_name: column_or(row, CHICAGO_AKA_NAME, ""),
            license_number: column_or(row, CHICAGO_LICENSE, ""),
            facility_type: value_or(row, CHICAGO_FACILITY_TYPE, UNKNOWN),
            inspection_type: value_or(row, INSPECTION_TYPE, UNKNOWN),
            result: value_or(row, CHICAGO_RESULTS, UNKNOWN),
            violation_code: column_or(row, VIOLATION_CODE, ""),
            violation_description: column_or(row, VIOLATION_DESCRIPTION, ""),
            violation_comment: column_or(row, VIOLATION_COMMENT, ""),
            address: value_or(row, CHICAGO_ADDRESS, UNKNOWN),
            city_name: column_or(row, CHICAGO_CITY, City::Chicago.as_str()),
            state: column_or(row, CHICAGO_STATE, CHICAGO_STATE_DEFAULT),
            zip_code: value_or(row, CHICAGO_ZIP, UNKNOWN_ZIP),
            latitude: number_or_zero(row, CHICAGO_LATITUDE),
            longitude: number_or_zero(row, CHICAGO_LONGITUDE),
            year: date.year,
            month: date.month,
            month_name: date.month_name,
        }
    }
}
