//! Publication date parsing and formatting.
//!
//! Sidecar files store `pubDate` as a string in any of three shapes:
//! RFC 2822 (what `post` writes), RFC 3339, or a bare `YYYY-MM-DD` (treated
//! as midnight UTC). The feed always emits RFC 2822 with an explicit numeric
//! offset, so whatever offset the record carries survives into the output
//! unambiguously.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unrecognized date {0:?} (expected RFC 2822, RFC 3339, or YYYY-MM-DD)")]
pub struct DateError(pub String);

/// Parse a sidecar `pubDate` string.
///
/// Tried in order: RFC 2822, RFC 3339, bare ISO date. The offset embedded in
/// the string is preserved, not normalized to UTC, so re-rendering keeps the
/// author's chosen timezone.
pub fn parse_pub_date(raw: &str) -> Result<DateTime<FixedOffset>, DateError> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().fixed_offset());
        }
    }
    Err(DateError(raw.to_string()))
}

/// Current time in the machine's local offset, as `post` records it.
pub fn now_local() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Current time pinned to an explicit UTC offset in whole hours
/// (e.g. `-7` for UTC−7). `None` for offsets outside ±23.
pub fn now_at_offset(hours: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(hours.checked_mul(3600)?)?;
    Some(Utc::now().with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc2822() {
        let dt = parse_pub_date("Sat, 01 Jun 2024 10:30:00 -0700").unwrap();
        assert_eq!(dt.to_rfc2822(), "Sat, 1 Jun 2024 10:30:00 -0700");
    }

    #[test]
    fn parses_rfc3339() {
        let dt = parse_pub_date("2024-06-01T10:30:00-07:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        let dt = parse_pub_date("2024-06-01").unwrap();
        assert_eq!(dt.to_rfc2822(), "Sat, 1 Jun 2024 00:00:00 +0000");
    }

    #[test]
    fn preserves_recorded_offset() {
        let dt = parse_pub_date("Fri, 08 Aug 2026 23:00:00 -0700").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
        // same instant, different wall clock than UTC
        assert!(dt.to_rfc2822().ends_with("-0700"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(parse_pub_date("  2024-06-01  ").is_ok());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_pub_date("yesterday").is_err());
        assert!(parse_pub_date("").is_err());
        assert!(parse_pub_date("2024-13-01").is_err());
        assert!(parse_pub_date("2024-02-30").is_err());
    }

    #[test]
    fn error_names_the_raw_value() {
        let err = parse_pub_date("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn now_at_offset_uses_requested_offset() {
        let dt = now_at_offset(-7).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
        assert!(dt.to_rfc2822().ends_with("-0700"));
    }

    #[test]
    fn now_at_offset_rejects_out_of_range() {
        assert!(now_at_offset(24).is_none());
        assert!(now_at_offset(-24).is_none());
        assert!(now_at_offset(0).is_some());
        assert!(now_at_offset(23).is_some());
    }
}
