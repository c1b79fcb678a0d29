use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two municipal sources the pipeline understands.
///
/// Variant order matches the lexical order of the city labels, so the derived
/// `Ord` sorts the master table the same way a string comparison would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum City {
    Chicago,
    Dallas,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::Dallas => "Dallas",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values computed once per run and stamped onto every intermediate row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub run_date: NaiveDate,
}

impl RunMetadata {
    pub fn new(run_date: NaiveDate) -> Self {
        Self { run_date }
    }

    /// Metadata for a run starting now, in local time
    pub fn capture() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn run_date_string(&self) -> String {
        self.run_date.format("%Y-%m-%d").to_string()
    }
}

/// One violation pulled out of a Chicago `Violations` blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationEntry {
    pub code: Option<String>,
    pub description: Option<String>,
    pub comment: Option<String>,
}

impl ViolationEntry {
    /// Stand-in entry for an inspection that cited nothing
    pub fn placeholder() -> Self {
        Self::default()
    }
}

/// One violation collected from a Dallas numbered column group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DallasViolation {
    /// The 1-based column-group index this entry came from; `None` for the placeholder
    pub index: Option<usize>,
    pub description: Option<String>,
    pub memo: Option<String>,
    pub detail: Option<String>,
    pub points: Option<String>,
}

impl DallasViolation {
    pub fn placeholder() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_order_matches_label_order() {
        assert!(City::Chicago < City::Dallas);
        assert!(City::Chicago.as_str() < City::Dallas.as_str());
    }

    #[test]
    fn test_run_date_string_is_iso() {
        let meta = RunMetadata::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(meta.run_date_string(), "2024-03-09");
    }
}
