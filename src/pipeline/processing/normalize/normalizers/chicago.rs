use super::base::{NormalizerUtils, SourceNormalizer};
use crate::constants::{
    CHICAGO_SOURCE, CHICAGO_VIOLATIONS, CHICAGO_WORKFLOW, INSPECTION_DATE, VIOLATION_CODE,
    VIOLATION_COMMENT, VIOLATION_DESCRIPTION,
};
use crate::error::Result;
use crate::pipeline::processing::coerce;
use crate::pipeline::processing::parser::ViolationTextParser;
use crate::table::Table;
use crate::types::RunMetadata;

/// Normalizer for the Chicago export, whose violations arrive as one
/// pipe-delimited text blob per inspection.
///
/// Every source column except `Violations` is carried through unchanged
/// (with `Inspection Date` rewritten to canonical form), followed by the run
/// metadata and the three parsed violation columns.
#[derive(Debug, Default)]
pub struct ChicagoNormalizer {
    parser: ViolationTextParser,
}

impl ChicagoNormalizer {
    pub fn new() -> Self {
        Self {
            parser: ViolationTextParser::new(),
        }
    }
}

impl SourceNormalizer for ChicagoNormalizer {
    fn normalize(&self, source: &Table, run: &RunMetadata) -> Result<Table> {
        let violations_col = source.column_index(CHICAGO_VIOLATIONS);
        let date_col = source.column_index(INSPECTION_DATE);

        let kept: Vec<usize> = (0..source.headers().len())
            .filter(|i| Some(*i) != violations_col)
            .collect();

        let headers = kept
            .iter()
            .map(|&i| source.headers()[i].as_str())
            .chain(NormalizerUtils::metadata_headers())
            .chain([VIOLATION_CODE, VIOLATION_DESCRIPTION, VIOLATION_COMMENT]);
        let mut expanded = Table::new(headers);

        for (position, row) in source.rows().enumerate() {
            let mut base: Vec<String> = kept
                .iter()
                .map(|&i| {
                    let cell = &row.values()[i];
                    if Some(i) == date_col {
                        coerce::canonical_date(cell)
                    } else {
                        cell.clone()
                    }
                })
                .collect();
            base.extend(NormalizerUtils::metadata_values(position, run, CHICAGO_WORKFLOW));

            let blob = row.value(CHICAGO_VIOLATIONS);
            for entry in self.parser.parse(blob) {
                let mut values = base.clone();
                values.push(NormalizerUtils::cell(entry.code.as_deref()));
                values.push(NormalizerUtils::cell(entry.description.as_deref()));
                values.push(NormalizerUtils::cell(entry.comment.as_deref()));
                expanded.push_row(values);
            }
        }

        Ok(expanded)
    }

    fn source_id(&self) -> &str {
        CHICAGO_SOURCE
    }

    fn name(&self) -> &str {
        "Chicago Food Inspections Normalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn run() -> RunMetadata {
        RunMetadata::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn source() -> Table {
        let mut table = Table::new(["Inspection ID", "DBA Name", "Inspection Date", "Violations", "Results"]);
        table.push_row(vec![
            "100".into(),
            "Cafe".into(),
            "05/01/2023".into(),
            "10. No hot water - Comments: pipe broken|22. Improper storage - Comments: none".into(),
            "Fail".into(),
        ]);
        table.push_row(vec![
            "101".into(),
            "Diner".into(),
            "garbage".into(),
            "".into(),
            "Pass".into(),
        ]);
        table
    }

    #[test]
    fn test_headers_drop_blob_and_append_metadata_and_violation_fields() {
        let out = ChicagoNormalizer::new().normalize(&source(), &run()).unwrap();
        assert_eq!(
            out.headers(),
            &[
                "Inspection ID",
                "DBA Name",
                "Inspection Date",
                "Results",
                "DI_Process_ID",
                "DI_CurrentDate",
                "DI_WorkflowFileName",
                "Violation_Code",
                "Violation_Description",
                "Violation_Comment",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn test_each_violation_becomes_a_row_sharing_inspection_fields() {
        let out = ChicagoNormalizer::new().normalize(&source(), &run()).unwrap();
        assert_eq!(out.len(), 3);

        let first = out.row(0).unwrap();
        let second = out.row(1).unwrap();
        assert_eq!(first.value("Violation_Code"), Some("10"));
        assert_eq!(second.value("Violation_Code"), Some("22"));
        assert_eq!(second.value("Violation_Comment"), Some("none"));
        assert_eq!(first.values()[..7], second.values()[..7]);
        assert_eq!(first.value("Inspection Date"), Some("2023-05-01"));
        assert_eq!(first.value("DI_Process_ID"), Some("1"));
        assert_eq!(first.value("DI_CurrentDate"), Some("2024-06-01"));
        assert_eq!(first.value("DI_WorkflowFileName"), Some("chicago_food_inspections"));
    }

    #[test]
    fn test_violation_free_inspection_keeps_one_empty_row() {
        let out = ChicagoNormalizer::new().normalize(&source(), &run()).unwrap();
        let row = out.row(2).unwrap();
        assert_eq!(row.value("Inspection ID"), Some("101"));
        assert_eq!(row.value("DI_Process_ID"), Some("2"));
        assert_eq!(row.value("Inspection Date"), None);
        assert_eq!(row.value("Violation_Code"), None);
        assert_eq!(row.value("Violation_Description"), None);
        assert_eq!(row.value("Violation_Comment"), None);
    }

    #[test]
    fn test_missing_blob_column_still_yields_one_row_per_inspection() {
        let mut table = Table::new(["Inspection ID"]);
        table.push_row(vec!["7".into()]);
        let out = ChicagoNormalizer::new().normalize(&table, &run()).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out.row(0).unwrap().get("Violation_Description"), Some(""));
    }
}
