use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Write as _;

use super::enrich::{ResultSimple, MasterRecord, MASTER_HEADERS};
use crate::constants::TABLEAU_PUBLIC_CELL_LIMIT;
use crate::types::City;

const TOP_VIOLATIONS: usize = 10;

/// Descriptive statistics over a finished master table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MasterSummary {
    pub total_rows: usize,
    pub rows_by_city: BTreeMap<City, usize>,
    pub rows_by_year: BTreeMap<i32, usize>,
    pub rows_by_result: BTreeMap<ResultSimple, usize>,
    pub top_violations: Vec<(String, usize)>,
    pub distinct_establishments: usize,
    pub rows_with_violations: usize,
    pub pass_rate_percent: f64,
    pub tableau_cells: usize,
    pub fits_tableau_public: bool,
}

impl MasterSummary {
    pub fn from_records(records: &[MasterRecord]) -> Self {
        let mut rows_by_city = BTreeMap::new();
        let mut rows_by_year = BTreeMap::new();
        let mut rows_by_result = BTreeMap::new();
        let mut establishments = HashSet::new();
        let mut rows_with_violations = 0;

        // description -> (count, first position)
        let mut violations: HashMap<&str, (usize, usize)> = HashMap::new();

        for (position, rec) in records.iter().enumerate() {
            *rows_by_city.entry(rec.city).or_insert(0) += 1;
            if let Some(year) = rec.year {
                *rows_by_year.entry(year).or_insert(0) += 1;
            }
            *rows_by_result.entry(rec.result_simple).or_insert(0) += 1;
            establishments.insert(rec.establishment_name.as_str());
            if rec.has_violation {
                rows_with_violations += 1;
            }
            if !rec.violation_description.is_empty() {
                violations
                    .entry(rec.violation_description.as_str())
                    .or_insert((0, position))
                    .0 += 1;
            }
        }

        let mut ranked: Vec<(&str, (usize, usize))> = violations.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
        let top_violations = ranked
            .into_iter()
            .take(TOP_VIOLATIONS)
            .map(|(desc, (count, _))| (desc.to_string(), count))
            .collect();

        let passes = rows_by_result.get(&ResultSimple::Pass).copied().unwrap_or(0);
        let pass_rate_percent = if records.is_empty() {
            0.0
        } else {
            passes as f64 / records.len() as f64 * 100.0
        };
        let tableau_cells = records.len() * MASTER_HEADERS.len();

        Self {
            total_rows: records.len(),
            rows_by_city,
            rows_by_year,
            rows_by_result,
            top_violations,
            distinct_establishments: establishments.len(),
            rows_with_violations,
            pass_rate_percent,
            tableau_cells,
            fits_tableau_public: tableau_cells < TABLEAU_PUBLIC_CELL_LIMIT,
        }
    }

    /// Human-readable report for the console
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Records by City:");
        for (city, count) in &self.rows_by_city {
            let _ = writeln!(out, "   {city}: {count}");
        }
        let _ = writeln!(out, "Records by Year:");
        for (year, count) in &self.rows_by_year {
            let _ = writeln!(out, "   {year}: {count}");
        }
        let _ = writeln!(out, "Inspection Results:");
        for (result, count) in &self.rows_by_result {
            let _ = writeln!(out, "   {result:?}: {count}");
        }
        let _ = writeln!(out, "Top {} Violation Types:", TOP_VIOLATIONS);
        for (description, count) in &self.top_violations {
            let _ = writeln!(out, "   {count:>6}  {description}");
        }
        let _ = writeln!(out, "Total Rows: {}", self.total_rows);
        let _ = writeln!(out, "Total Establishments: {}", self.distinct_establishments);
        let _ = writeln!(out, "Rows with Violations: {}", self.rows_with_violations);
        let _ = writeln!(out, "Pass Rate: {:.1}%", self.pass_rate_percent);
        let _ = writeln!(
            out,
            "Tableau Public cells: {} / {} ({:.1}%){}",
            self.tableau_cells,
            TABLEAU_PUBLIC_CELL_LIMIT,
            self.tableau_cells as f64 / TABLEAU_PUBLIC_CELL_LIMIT as f64 * 100.0,
            if self.fits_tableau_public { "" } else { " - may exceed the limit" }
        );
        out
    }
}
