use chrono::{DateTime, NaiveDateTime};

use crate::consts::TIMESTAMP_FORMATS;

/// Parse a trip timestamp. Offsets in RFC 3339 input are dropped and the
/// wall-clock time is kept, matching the naive timestamps in the CSV exports.
pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_export_format() {
        let dt = parse_timestamp("2017-01-01 00:07:57").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2017, 1, 1));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 7, 57));
    }

    #[test]
    fn parses_minutes_only_and_t_separator() {
        assert_eq!(
            parse_timestamp("2023-01-02 08:00"),
            parse_timestamp("2023-01-02T08:00:00")
        );
        assert!(parse_timestamp("2023-01-02 08:00").is_some());
    }

    #[test]
    fn rfc3339_keeps_wall_clock() {
        let dt = parse_timestamp("2017-06-23T15:09:32-04:00").unwrap();
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2017-13-01 00:00:00").is_none());
    }
}
