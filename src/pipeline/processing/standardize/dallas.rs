use super::{column_or, value_or, DateParts, StandardizedRecord, Standardizer};
use crate::constants::{
    DALLAS_FACILITY_TYPE, DALLAS_INSPECTION_SCORE, DALLAS_LAT_LONG, DALLAS_PASSING_SCORE,
    DALLAS_RESTAURANT_NAME, DALLAS_STATE, DALLAS_STREET_ADDRESS, DALLAS_ZIP_CODE, DI_PROCESS_ID,
    INSPECTION_DATE, INSPECTION_TYPE, UNKNOWN, UNKNOWN_ZIP, VIOLATION_DESCRIPTION,
    VIOLATION_DETAIL,
};
use crate::pipeline::processing::coerce;
use crate::table::Row;
use crate::types::City;

/// Result recorded when the export carries no score column at all
const PLACEHOLDER_RESULT: &str = "Pass";

/// Dallas lacks license numbers, AKA names and violation codes, scores
/// inspections numerically, and packs coordinates into one cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct DallasStandardizer;

impl DallasStandardizer {
    /// Pass/Fail from the numeric score; a missing or non-numeric score is UNKNOWN
    pub fn result_from_score(score: Option<&str>) -> &'static str {
        match score.and_then(coerce::parse_number) {
            Some(points) if points >= DALLAS_PASSING_SCORE => "Pass",
            Some(_) => "Fail",
            None => UNKNOWN,
        }
    }
}

impl Standardizer for DallasStandardizer {
    fn city(&self) -> City {
        City::Dallas
    }

    fn standardize_row(&self, row: &Row<'_>, position: usize) -> StandardizedRecord {
        let date = DateParts::from_cell(row.value(INSPECTION_DATE));
        let (latitude, longitude) = coerce::split_lat_long(row.value(DALLAS_LAT_LONG));

        let inspection_id = if row.table().has_column(DI_PROCESS_ID) {
            column_or(row, DI_PROCESS_ID, "")
        } else {
            position.to_string()
        };

        let result = if row.table().has_column(DALLAS_INSPECTION_SCORE) {
            Self::result_from_score(row.value(DALLAS_INSPECTION_SCORE))
        } else {
            PLACEHOLDER_RESULT
        };

        StandardizedRecord {
            inspection_id,
            city: City::Dallas,
            inspection_date: date.date,
            establishment_name: value_or(row, DALLAS_RESTAURANT_NAME, UNKNOWN),
            aka_name: String::new(),
            license_number: String::new(),
            facility_type: DALLAS_FACILITY_TYPE.to_string(),
            inspection_type: value_or(row, INSPECTION_TYPE, UNKNOWN),
            result: result.to_string(),
            violation_code: String::new(),
            violation_description: column_or(row, VIOLATION_DESCRIPTION, ""),
            violation_comment: column_or(row, VIOLATION_DETAIL, ""),
            address: value_or(row, DALLAS_STREET_ADDRESS, UNKNOWN),
            city_name: City::Dallas.as_str().to_string(),
            state: DALLAS_STATE.to_string(),
            zip_code: value_or(row, DALLAS_ZIP_CODE, UNKNOWN_ZIP),
            latitude,
            longitude,
            year: date.year,
            month: date.month,
            month_name: date.month_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;
    use chrono::NaiveDate;

    fn intermediate() -> Table {
        let mut table = Table::new([
            "Restaurant Name",
            "Street Address",
            "Zip Code",
            "Inspection Date",
            "Inspection Score",
            "Inspection Type",
            "Lat Long Location",
            "Violation_Description",
            "Violation_Memo",
            "Violation_Detail",
            "Violation_Points",
            "DI_Process_ID",
        ]);
        let rows: [[&str; 12]; 3] = [
            ["BBQ Joint", "5 Elm St", "75201", "2023-04-01", "92", "Routine", "32.78,-96.80", "Sink", "memo", "no soap", "3", "1"],
            ["Taco Stand", "", "", "2023-04-02", "64", "", "", "", "", "", "", "2"],
            ["", "9 Oak St", "75204", "", "", "Follow-up", "bad", "", "", "", "", "3"],
        ];
        for row in rows {
            table.push_row(row.map(String::from).to_vec());
        }
        table
    }

    #[test]
    fn test_result_from_score() {
        assert_eq!(DallasStandardizer::result_from_score(Some("70")), "Pass");
        assert_eq!(DallasStandardizer::result_from_score(Some("100")), "Pass");
        assert_eq!(DallasStandardizer::result_from_score(Some("69.9")), "Fail");
        assert_eq!(DallasStandardizer::result_from_score(None), "UNKNOWN");
        assert_eq!(DallasStandardizer::result_from_score(Some("n/a")), "UNKNOWN");
    }

    #[test]
    fn test_full_row() {
        let records = DallasStandardizer.standardize(&intermediate());
        let rec = &records[0];

        assert_eq!(rec.inspection_id, "1");
        assert_eq!(rec.city, City::Dallas);
        assert_eq!(rec.inspection_date, NaiveDate::from_ymd_opt(2023, 4, 1));
        assert_eq!(rec.result, "Pass");
        assert_eq!(rec.facility_type, "Restaurant");
        assert_eq!(rec.violation_description, "Sink");
        assert_eq!(rec.violation_comment, "no soap");
        assert_eq!(rec.city_name, "Dallas");
        assert_eq!(rec.state, "TX");
        assert_eq!((rec.latitude, rec.longitude), (32.78, -96.80));
        assert_eq!(rec.month_name.as_deref(), Some("April"));
    }

    #[test]
    fn test_fields_without_dallas_equivalent_are_empty() {
        for rec in DallasStandardizer.standardize(&intermediate()) {
            assert_eq!(rec.violation_code, "");
            assert_eq!(rec.aka_name, "");
            assert_eq!(rec.license_number, "");
        }
    }

    #[test]
    fn test_missing_values_take_sentinels() {
        let records = DallasStandardizer.standardize(&intermediate());

        let failing = &records[1];
        assert_eq!(failing.result, "Fail");
        assert_eq!(failing.address, "UNKNOWN");
        assert_eq!(failing.zip_code, "00000");
        assert_eq!(failing.inspection_type, "UNKNOWN");
        assert_eq!((failing.latitude, failing.longitude), (0.0, 0.0));

        let unscored = &records[2];
        assert_eq!(unscored.establishment_name, "UNKNOWN");
        assert_eq!(unscored.result, "UNKNOWN");
        assert_eq!(unscored.inspection_date, None);
        assert_eq!(unscored.year, None);
        assert_eq!((unscored.latitude, unscored.longitude), (0.0, 0.0));
    }

    #[test]
    fn test_absent_score_and_process_id_columns() {
        let mut table = Table::new(["Restaurant Name"]);
        table.push_row(vec!["A".into()]);
        table.push_row(vec!["B".into()]);
        let records = DallasStandardizer.standardize(&table);

        assert_eq!(records[0].result, "Pass");
        assert_eq!(records[0].inspection_id, "0");
        assert_eq!(records[1].inspection_id, "1");
        assert_eq!(records[1].violation_description, "");
    }
}
