use anyhow::Result;
use chrono::NaiveDate;
use inspection_merge::csv_io::{self, TableReader};
use inspection_merge::pipeline::processing::normalize::normalizers::DallasViolationCollector;
use inspection_merge::pipeline::processing::normalize::NormalizationRegistry;
use inspection_merge::pipeline::processing::standardize::{
    ChicagoStandardizer, DallasStandardizer, Standardizer, STANDARDIZED_HEADERS,
};
use inspection_merge::{RunMetadata, Table};

fn run() -> RunMetadata {
    RunMetadata::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn chicago_source() -> Table {
    let mut table = Table::new([
        "Inspection ID",
        "DBA Name",
        "Inspection Date",
        "Results",
        "Violations",
    ]);
    table.push_row(vec![
        "1".into(),
        "NONE".into(),
        "01/15/2023".into(),
        "Pass".into(),
        "".into(),
    ]);
    table.push_row(vec![
        "2".into(),
        "THREE".into(),
        "02/15/2023".into(),
        "Fail".into(),
        "1. A - Comments: x|2. B - Comments: y|3. C - Comments: z".into(),
    ]);
    table.push_row(vec![
        "3".into(),
        "ONE".into(),
        "03/15/2023".into(),
        "Pass w/ Conditions".into(),
        "38. Ventilation - Comments: dusty".into(),
    ]);
    table
}

fn dallas_source() -> Table {
    let mut table = Table::new([
        "Restaurant Name",
        "Inspection Date",
        "Inspection Score",
        "Violation Description - 1",
        "Violation Description - 2",
        "Violation Description - 3",
        "Violation Detail - 3",
    ]);
    table.push_row(vec![
        "ONLY THIRD".into(),
        "04/01/2023".into(),
        "88".into(),
        "".into(),
        "".into(),
        "Hand sink".into(),
        "no towels".into(),
    ]);
    table.push_row(vec![
        "CLEAN".into(),
        "04/02/2023".into(),
        "100".into(),
        "".into(),
        "".into(),
        "".into(),
        "".into(),
    ]);
    table
}

#[test]
fn test_chicago_expansion_row_counts() -> Result<()> {
    let registry = NormalizationRegistry::new();
    let expanded = registry.normalize("chicago", &chicago_source(), &run())?;

    // max(1, k) rows per inspection
    assert_eq!(expanded.len(), 1 + 3 + 1);

    let ids: Vec<&str> = expanded
        .rows()
        .map(|row| row.get("Inspection ID").unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["1", "2", "2", "2", "3"]);

    let none = expanded.row(0).unwrap();
    assert_eq!(none.value("Violation_Code"), None);
    assert_eq!(none.value("Violation_Description"), None);
    assert_eq!(none.value("Violation_Comment"), None);

    let shared: Vec<_> = expanded
        .rows()
        .skip(1)
        .take(3)
        .map(|row| (row.get("DBA Name"), row.get("Results"), row.get("DI_Process_ID")))
        .collect();
    assert!(shared.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}

#[test]
fn test_dallas_collector_keeps_only_populated_groups() {
    let source = dallas_source();
    let collector = DallasViolationCollector::for_table(&source);

    let found = collector.collect(&source.row(0).unwrap());
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].index, Some(3));
    assert_eq!(found[0].description.as_deref(), Some("Hand sink"));
    assert_eq!(found[0].detail.as_deref(), Some("no towels"));

    let clean = collector.collect(&source.row(1).unwrap());
    assert_eq!(clean.len(), 1);
    assert_eq!(clean[0].index, None);
    assert_eq!(clean[0].description, None);
}

#[test]
fn test_dallas_expansion_row_counts() -> Result<()> {
    let registry = NormalizationRegistry::new();
    let expanded = registry.normalize("dallas", &dallas_source(), &run())?;
    assert_eq!(expanded.len(), 2);
    assert_eq!(expanded.row(0).unwrap().value("Violation_Description"), Some("Hand sink"));
    assert_eq!(expanded.row(1).unwrap().value("Violation_Description"), None);
    Ok(())
}

fn standardize_to_bytes<S: Standardizer>(standardizer: &S, intermediate: &[u8]) -> Result<Vec<u8>> {
    let table = TableReader::new().read(intermediate)?;
    let records = standardizer.standardize(&table);
    let mut out = Vec::new();
    csv_io::write_records(&mut out, &STANDARDIZED_HEADERS, &records)?;
    Ok(out)
}

#[test]
fn test_standardizers_are_idempotent() -> Result<()> {
    let registry = NormalizationRegistry::new();

    let mut chicago_intermediate = Vec::new();
    csv_io::write_table(
        &mut chicago_intermediate,
        &registry.normalize("chicago", &chicago_source(), &run())?,
    )?;
    let first = standardize_to_bytes(&ChicagoStandardizer, &chicago_intermediate)?;
    let second = standardize_to_bytes(&ChicagoStandardizer, &chicago_intermediate)?;
    assert_eq!(first, second);

    let mut dallas_intermediate = Vec::new();
    csv_io::write_table(
        &mut dallas_intermediate,
        &registry.normalize("dallas", &dallas_source(), &run())?,
    )?;
    let first = standardize_to_bytes(&DallasStandardizer, &dallas_intermediate)?;
    let second = standardize_to_bytes(&DallasStandardizer, &dallas_intermediate)?;
    assert_eq!(first, second);
    Ok(())
}
