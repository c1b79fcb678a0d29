//! Parser for Chicago's pipe-delimited `Violations` blob.
//!
//! Each entry looks like `<code>. <description> - Comments: <comment>`.
//! Extraction is per field: a segment that only half matches still yields
//! whatever could be recovered.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::ViolationEntry;

static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.").expect("valid code pattern"));

static DESCRIPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^.]*\.\s*(.+?)\s+-(?:\s|$)").expect("valid description pattern"));

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)Comments:\s*(.+)").expect("valid comment pattern"));

pub const SEGMENT_DELIMITER: char = '|';

#[derive(Debug, Clone, Copy, Default)]
pub struct ViolationTextParser;

impl ViolationTextParser {
    pub fn new() -> Self {
        Self
    }

    /// Split a blob into entries, in blob order.
    ///
    /// Always returns at least one entry: an absent blob, or one with no
    /// non-empty segment, yields the all-`None` placeholder.
    pub fn parse(&self, blob: Option<&str>) -> Vec<ViolationEntry> {
        let entries: Vec<ViolationEntry> = blob
            .into_iter()
            .flat_map(|b| b.split(SEGMENT_DELIMITER))
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.parse_segment(segment))
            .collect();

        if entries.is_empty() {
            vec![ViolationEntry::placeholder()]
        } else {
            entries
        }
    }

    /// Extract code, description and comment from one trimmed segment
    pub fn parse_segment(&self, segment: &str) -> ViolationEntry {
        ViolationEntry {
            code: capture(&CODE_RE, segment),
            description: capture(&DESCRIPTION_RE, segment),
            comment: capture(&COMMENT_RE, segment),
        }
    }
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Parse a blob with the default parser
pub fn parse_violations(blob: Option<&str>) -> Vec<ViolationEntry> {
    ViolationTextParser::new().parse(blob)
}
