//! Month extraction from entry dates and month selectors.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Date-time layouts carrying a UTC offset. `%#z` takes `Z`, `+02`, `+0200` and `+02:00`.
const OFFSET_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

/// Local date-time layouts without an offset.
const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// An entry date that is not ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable entry date: {input:?}")]
pub struct DateParseError {
    pub input: String,
}

/// Calendar month (1-12) of an ISO-8601 date or date-time, as written.
///
/// Extended and basic layouts are accepted, as are reduced precision
/// (`2024-03`, `2024-03-05T22`), ordinal and week dates, and a comma as
/// the decimal mark. Offsets are not applied: `2024-03-31T23:30:00-05:00`
/// is in March.
pub fn entry_month(date: &str) -> Result<u32, DateParseError> {
    let s = date.trim().replace(',', ".");

    if let Some(d) = date_only(&s) {
        return Ok(d.month());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.month());
    }

    let s = widen_hour_only(&s).unwrap_or(s);
    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&s, fmt) {
            return Ok(dt.month());
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&s, fmt) {
            return Ok(dt.month());
        }
    }

    Err(DateParseError {
        input: date.to_string(),
    })
}

/// Dates without a time of day. The layout is picked by shape so that
/// `2024-03` is never read as an ordinal day.
fn date_only(s: &str) -> Option<NaiveDate> {
    let fmt = match (s.len(), s.contains('W'), s.contains('-')) {
        (10, false, true) => "%Y-%m-%d",
        (10, true, true) => "%G-W%V-%u",
        (8, false, false) => "%Y%m%d",
        (8, true, false) => "%GW%V%u",
        (8, false, true) => "%Y-%j",
        (7, false, false) => "%Y%j",
        (7, false, true) => {
            return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok();
        }
        _ => return None,
    };
    NaiveDate::parse_from_str(s, fmt).ok()
}

/// Give an hour-only time (`T22`, `T22Z`) a zero minute so chrono can read it.
fn widen_hour_only(s: &str) -> Option<String> {
    let (day, time) = s.split_once('T')?;
    let bytes = time.as_bytes();
    if bytes.len() < 2 || !bytes[..2].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let rest = &time[2..];
    if rest.starts_with(|c: char| c.is_ascii_digit() || c == ':' || c == '.') {
        return None;
    }

    let sep = if day.contains('-') { ":" } else { "" };
    Some(format!("{day}T{}{sep}00{rest}", &time[..2]))
}

/// Normalize a textual month selector to 1-12.
///
/// Leading zeros and surrounding whitespace are ignored, so `"03"` selects
/// March. Anything else selects nothing.
pub fn parse_month_selector(raw: Option<&str>) -> Option<u32> {
    raw?.trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
}
