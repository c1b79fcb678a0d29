//! Lenient coercions shared by the normalizers and standardizers.
//! Failures come back as `None` or a zero sentinel, never as errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%m-%d-%Y", "%Y%m%d"];

/// Parse a timestamp in any of the layouts the city exports use.
/// Date-only values land at midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Canonical text for a timestamp: date-only at midnight, otherwise with seconds
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    if ts.num_seconds_from_midnight() == 0 && ts.nanosecond() == 0 {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Rewrite a raw date cell into canonical form; unparseable input becomes empty
pub fn canonical_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| format_timestamp(&ts))
        .unwrap_or_default()
}

/// Finite number from a cell, tolerating surrounding whitespace
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Split a combined `"lat,long"` cell into coordinates.
///
/// Latitude is the text before the first comma and longitude the text after
/// it, up to any further comma. Anything absent, comma-less or non-numeric
/// gives 0 for that coordinate.
pub fn split_lat_long(raw: Option<&str>) -> (f64, f64) {
    let Some(raw) = raw.filter(|s| s.contains(',')) else {
        return (0.0, 0.0);
    };
    let mut parts = raw.split(',');
    let latitude = parts.next().and_then(parse_number).unwrap_or(0.0);
    let longitude = parts.next().and_then(parse_number).unwrap_or(0.0);
    (latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_parse_timestamp_layouts() {
        let midnight = ymd_hms(2023, 5, 1, 0, 0, 0);
        assert_eq!(parse_timestamp("2023-05-01"), Some(midnight));
        assert_eq!(parse_timestamp("05/01/2023"), Some(midnight));
        assert_eq!(parse_timestamp(" 2023-05-01T00:00:00 "), Some(midnight));
        assert_eq!(parse_timestamp("05/01/2023 12:00:00 AM"), Some(midnight));
        assert_eq!(
            parse_timestamp("2023-05-01 14:30:05"),
            Some(ymd_hms(2023, 5, 1, 14, 30, 5))
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp("2023-13-45"), None);
    }

    #[test]
    fn test_canonical_date() {
        assert_eq!(canonical_date("05/01/2023"), "2023-05-01");
        assert_eq!(canonical_date("2023-05-01 08:15:00"), "2023-05-01 08:15:00");
        assert_eq!(canonical_date("someday"), "");
    }

    #[test]
    fn test_split_lat_long() {
        assert_eq!(split_lat_long(Some("41.88,-87.62")), (41.88, -87.62));
        assert_eq!(split_lat_long(Some(" 32.7 , -96.8 ")), (32.7, -96.8));
        assert_eq!(split_lat_long(Some("")), (0.0, 0.0));
        assert_eq!(split_lat_long(None), (0.0, 0.0));
        assert_eq!(split_lat_long(Some("32.7")), (0.0, 0.0));
        assert_eq!(split_lat_long(Some("north,-96.8")), (0.0, -96.8));
        assert_eq!(split_lat_long(Some("32.7,-96.8,extra")), (32.7, -96.8));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 70 "), Some(70.0));
        assert_eq!(parse_number("69.5"), Some(69.5));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("seventy"), None);
    }
}
