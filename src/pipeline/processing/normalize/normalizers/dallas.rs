use super::base::{NormalizerUtils, SourceNormalizer};
use crate::constants::{
    dallas_violation_columns, DallasViolationColumns, DALLAS_MAX_VIOLATIONS, DALLAS_PROJECTION,
    DALLAS_SOURCE, DALLAS_WORKFLOW, INSPECTION_DATE, VIOLATION_DESCRIPTION, VIOLATION_DETAIL,
    VIOLATION_MEMO, VIOLATION_POINTS,
};
use crate::error::Result;
use crate::pipeline::processing::coerce;
use crate::table::{Row, Table};
use crate::types::{DallasViolation, RunMetadata};

/// Gathers the numbered `Violation * - i` column groups of a Dallas row into
/// an explicit list.
///
/// Groups whose description column is missing from the schema are dropped once,
/// up front, so per-row collection only checks values.
#[derive(Debug, Clone)]
pub struct DallasViolationCollector {
    groups: Vec<(usize, DallasViolationColumns)>,
}

impl DallasViolationCollector {
    pub fn for_table(table: &Table) -> Self {
        let groups = (1..=DALLAS_MAX_VIOLATIONS)
            .map(|i| (i, dallas_violation_columns(i)))
            .filter(|(_, cols)| table.has_column(&cols.description))
            .collect();
        Self { groups }
    }

    /// Violations of `row` in ascending group order. A group counts iff its
    /// description holds a value; memo, detail and points are taken as found.
    /// Never empty: a row with no violation yields the placeholder.
    pub fn collect(&self, row: &Row<'_>) -> Vec<DallasViolation> {
        let violations: Vec<DallasViolation> = self
            .groups
            .iter()
            .filter_map(|(index, cols)| {
                row.value(&cols.description).map(|description| DallasViolation {
                    index: Some(*index),
                    description: Some(description.to_string()),
                    memo: row.value_owned(&cols.memo),
                    detail: row.value_owned(&cols.detail),
                    points: row.value_owned(&cols.points),
                })
            })
            .collect();

        if violations.is_empty() {
            vec![DallasViolation::placeholder()]
        } else {
            violations
        }
    }
}

/// Normalizer for the Dallas export, whose violations are spread across up to
/// 25 parallel column groups.
///
/// Output is a fixed projection of inspection fields, the four violation
/// fields, then the run metadata.
#[derive(Debug, Default)]
pub struct DallasNormalizer;

impl DallasNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn output_headers() -> Vec<&'static str> {
        DALLAS_PROJECTION
            .into_iter()
            .chain([VIOLATION_DESCRIPTION, VIOLATION_MEMO, VIOLATION_DETAIL, VIOLATION_POINTS])
            .chain(NormalizerUtils::metadata_headers())
            .collect()
    }
}

impl SourceNormalizer for DallasNormalizer {
    fn normalize(&self, source: &Table, run: &RunMetadata) -> Result<Table> {
        let collector = DallasViolationCollector::for_table(source);
        let mut expanded = Table::new(Self::output_headers());

        for (position, row) in source.rows().enumerate() {
            let projection: Vec<String> = DALLAS_PROJECTION
                .iter()
                .map(|&col| match row.get(col) {
                    Some(cell) if col == INSPECTION_DATE => coerce::canonical_date(cell),
                    other => NormalizerUtils::cell(other),
                })
                .collect();
            let metadata = NormalizerUtils::metadata_values(position, run, DALLAS_WORKFLOW);

            for violation in collector.collect(&row) {
                let mut values = projection.clone();
                values.push(NormalizerUtils::cell(violation.description.as_deref()));
                values.push(NormalizerUtils::cell(violation.memo.as_deref()));
                values.push(NormalizerUtils::cell(violation.detail.as_deref()));
                values.push(NormalizerUtils::cell(violation.points.as_deref()));
                values.extend(metadata.iter().cloned());
                expanded.push_row(values);
            }
        }

        Ok(expanded)
    }

    fn source_id(&self) -> &str {
        DALLAS_SOURCE
    }

    fn name(&self) -> &str {
        "Dallas Restaurant Inspections Normalizer"
    }
}
