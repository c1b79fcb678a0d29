//! In-memory tabular dataset with named columns.
//!
//! Cells are plain strings. An empty cell means "missing"; the CSV boundary
//! folds configured null tokens into empty cells before a `Table` is built.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table. Header names are trimmed; on duplicates the first column wins.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| h.into().trim().to_string())
            .collect();
        let mut index = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            index.entry(name.clone()).or_insert(i);
        }
        Self {
            headers,
            index,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Append a row, padding short rows with empty cells and truncating long ones
    pub fn push_row(&mut self, mut values: Vec<String>) {
        values.resize(self.headers.len(), String::new());
        self.rows.push(values);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, position: usize) -> Option<Row<'_>> {
        self.rows.get(position).map(|values| Row {
            table: self,
            values,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            table: self,
            values,
        })
    }

    pub(crate) fn raw_rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Borrowed view of one table row with by-name access
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    values: &'a [String],
}

impl<'a> Row<'a> {
    /// Raw cell for `column`, or `None` when the table has no such column
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table
            .column_index(column)
            .and_then(|i| self.values.get(i))
            .map(|s| s.as_str())
    }

    /// Cell for `column` when the column exists and holds a non-missing value
    pub fn value(&self, column: &str) -> Option<&'a str> {
        self.get(column).filter(|v| !v.trim().is_empty())
    }

    /// Owned copy of [`Row::value`]
    pub fn value_owned(&self, column: &str) -> Option<String> {
        self.value(column).map(str::to_string)
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new([" Name ", "Score", "Name"]);
        table.push_row(vec!["Cafe".into(), "".into(), "ignored".into()]);
        table.push_row(vec!["Diner".into()]);
        table
    }

    #[test]
    fn test_headers_are_trimmed_and_first_duplicate_wins() {
        let table = sample();
        assert_eq!(table.headers()[0], "Name");
        assert_eq!(table.column_index("Name"), Some(0));
        assert!(table.has_column("Score"));
        assert!(!table.has_column(" Name "));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = sample();
        let row = table.row(1).unwrap();
        assert_eq!(row.get("Score"), Some(""));
        assert_eq!(row.value("Score"), None);
        assert_eq!(row.values().len(), 3);
    }

    #[test]
    fn test_value_distinguishes_absent_and_missing() {
        let table = sample();
        let row = table.row(0).unwrap();
        assert_eq!(row.value("Name"), Some("Cafe"));
        assert_eq!(row.get("Score"), Some(""));
        assert_eq!(row.get("Nope"), None);
        assert_eq!(row.value("Nope"), None);
    }
}
