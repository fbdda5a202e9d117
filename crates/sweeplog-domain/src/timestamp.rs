//! Fixed textual timestamp format
//!
//! Both report input and report output use `MM/DD/YYYY HH:MM:SS`, 24-hour
//! clock, every field zero-padded.

use chrono::NaiveDateTime;

/// `strftime` pattern for the fixed timestamp format
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Length of a well-formed timestamp string
const TIMESTAMP_LEN: usize = 19;

/// Parse a timestamp in the fixed `MM/DD/YYYY HH:MM:SS` format
///
/// Fields must be zero-padded, so `5/1/2021 9:00:00` is rejected. Dates
/// that do not exist, such as `02/30/2021`, are rejected rather than clamped.
///
/// # Examples
///
/// ```
/// use sweeplog_domain::{format_timestamp, parse_timestamp};
///
/// let ts = parse_timestamp("05/28/2021 14:15:02").unwrap();
/// assert_eq!(format_timestamp(&ts), "05/28/2021 14:15:02");
///
/// assert!(parse_timestamp("2021-05-28 14:15:02").is_err());
/// ```
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, String> {
    if s.len() != TIMESTAMP_LEN {
        return Err(format!("Invalid timestamp '{}': expected MM/DD/YYYY HH:MM:SS", s));
    }

    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map_err(|e| format!("Invalid timestamp '{}': {}", s, e))
}

/// Render a timestamp in the fixed `MM/DD/YYYY HH:MM:SS` format
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_valid() {
        let ts = parse_timestamp("06/01/2021 13:39:01").unwrap();
        let expected = NaiveDate::from_ymd_opt(2021, 6, 1)
            .unwrap()
            .and_hms_opt(13, 39, 1)
            .unwrap();
        assert_eq!(ts, expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_timestamp("string").is_err());
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("13/01/2021 00:00:00").is_err());
        assert!(parse_timestamp("02/30/2021 00:00:00").is_err());
        assert!(parse_timestamp("05/01/2021 24:00:00").is_err());
    }

    #[test]
    fn test_parse_requires_zero_padding() {
        assert!(parse_timestamp("5/1/2021 9:00:00").is_err());
        assert!(parse_timestamp(" 05/01/2021 09:00:00").is_err());
    }

    #[test]
    fn test_format_zero_pads() {
        let ts = NaiveDate::from_ymd_opt(2021, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "01/02/2021 03:04:05");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    proptest! {
        /// Property: format then parse yields the original instant
        #[test]
        fn test_timestamp_roundtrip(
            year in 1000i32..=9999,
            month in 1u32..=12,
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
        ) {
            let ts = NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_hms_opt(hour, minute, second)
                .unwrap();
            let text = format_timestamp(&ts);
            prop_assert_eq!(text.len(), 19);
            prop_assert_eq!(parse_timestamp(&text).unwrap(), ts);
        }
    }
}
