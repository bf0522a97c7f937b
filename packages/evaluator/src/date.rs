//! Month/year date formatting for resume entries.
//!
//! Input dates are free-form strings coming from forms, imports and
//! parsers. Accepted shapes:
//!
//! - `2024-03` and `2024-03-15` (day ignored)
//! - `2024` (shown as January of that year)
//! - `Mar 2024` / `March 2024`
//! - `present` / `current` (any case)
//!
//! Anything else formats to an empty string. Formatting never fails.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::debug;
use vitae_model::DateFormat;

pub const PRESENT: &str = "Present";
pub const RANGE_SEPARATOR: &str = " – ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed date '{0}'")]
pub struct MalformedDate(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParsedDate {
    Month(NaiveDate),
    Present,
}

fn parse(raw: &str) -> Result<Option<ParsedDate>, MalformedDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let lowered = trimmed.to_ascii_lowercase();
    if lowered == "present" || lowered == "current" {
        return Ok(Some(ParsedDate::Present));
    }

    let malformed = || MalformedDate(trimmed.to_string());

    if let Some(date) = parse_numeric(trimmed) {
        return Ok(Some(ParsedDate::Month(date)));
    }

    // "Mar 2024" / "March 2024"; %b also accepts full month names
    NaiveDate::parse_from_str(&format!("1 {}", trimmed), "%d %b %Y")
        .ok()
        .filter(|d| (1000..=9999).contains(&d.year()))
        .map(|d| Some(ParsedDate::Month(d)))
        .ok_or_else(malformed)
}

fn parse_numeric(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('-');
    let year = parts.next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;

    let month = match parts.next() {
        None => 1,
        Some(month) if (1..=2).contains(&month.len()) && month.bytes().all(|b| b.is_ascii_digit()) => {
            month.parse().ok()?
        }
        Some(_) => return None,
    };

    let day = match parts.next() {
        None => 1,
        Some(day) if (1..=2).contains(&day.len()) && day.bytes().all(|b| b.is_ascii_digit()) => {
            day.parse().ok()?
        }
        Some(_) => return None,
    };
    if parts.next().is_some() {
        return None;
    }

    // Validate the full date, then keep only year and month
    NaiveDate::from_ymd_opt(year, month, day)?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// `format_date_with(raw, DateFormat::MonYear)`: `"2024-03"` → `"Mar 2024"`
pub fn format_date(raw: &str) -> String {
    format_date_with(raw, DateFormat::MonYear)
}

pub fn format_date_with(raw: &str, format: DateFormat) -> String {
    match parse(raw) {
        Ok(Some(ParsedDate::Present)) => PRESENT.to_string(),
        Ok(Some(ParsedDate::Month(date))) => {
            let pattern = match format {
                DateFormat::MonYear => "%b %Y",
                DateFormat::MonthYear => "%B %Y",
                DateFormat::Numeric => "%m/%Y",
                DateFormat::Iso => "%Y-%m",
                DateFormat::YearOnly => "%Y",
            };
            date.format(pattern).to_string()
        }
        Ok(None) => String::new(),
        Err(error) => {
            debug!(error = %error, "Dropping unparseable date");
            String::new()
        }
    }
}

/// `"Mar 2024 – Present"`; a missing half is omitted, both missing gives `""`
pub fn format_range(start: Option<&str>, end: Option<&str>, current: bool, format: DateFormat) -> String {
    let start = start.map(|s| format_date_with(s, format)).unwrap_or_default();
    let end = if current {
        PRESENT.to_string()
    } else {
        end.map(|e| format_date_with(e, format)).unwrap_or_default()
    };

    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start,
        (true, false) => end,
        (false, false) => format!("{}{}{}", start, RANGE_SEPARATOR, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_basic() {
        assert_eq!(format_date("2024-03"), "Mar 2024");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("bogus"), "");
    }

    #[test]
    fn test_format_date_accepted_shapes() {
        assert_eq!(format_date("2024"), "Jan 2024");
        assert_eq!(format_date("2021-11-30"), "Nov 2021");
        assert_eq!(format_date("Mar 2024"), "Mar 2024");
        assert_eq!(format_date("September 2019"), "Sep 2019");
        assert_eq!(format_date("  present "), "Present");
        assert_eq!(format_date("CURRENT"), "Present");
    }

    #[test]
    fn test_format_date_rejects_out_of_range() {
        assert_eq!(format_date("2024-13"), "");
        assert_eq!(format_date("2024-02-30"), "");
        assert_eq!(format_date("24-03"), "");
        assert_eq!(format_date("2024-03-01-09"), "");
        assert_eq!(format_date("Smarch 2024"), "");
    }

    #[test]
    fn test_format_date_with_formats() {
        assert_eq!(format_date_with("2024-03", DateFormat::MonthYear), "March 2024");
        assert_eq!(format_date_with("2024-03", DateFormat::Numeric), "03/2024");
        assert_eq!(format_date_with("Mar 2024", DateFormat::Iso), "2024-03");
        assert_eq!(format_date_with("2024-03", DateFormat::YearOnly), "2024");
    }

    #[test]
    fn test_format_range() {
        let f = DateFormat::MonYear;
        assert_eq!(format_range(Some("2022-01"), Some("2024-03"), false, f), "Jan 2022 – Mar 2024");
        assert_eq!(format_range(Some("2022-01"), Some("2024-03"), true, f), "Jan 2022 – Present");
        assert_eq!(format_range(Some("2022-01"), None, false, f), "Jan 2022");
        assert_eq!(format_range(None, Some("bogus"), false, f), "");
        assert_eq!(format_range(None, None, true, f), "Present");
    }
}
