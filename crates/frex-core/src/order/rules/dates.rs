//! Keyword-tagged date resolution.
//!
//! Best-effort by contract: a malformed date yields `None`, never an error,
//! so callers always substitute a policy default instead of aborting.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::{split_value, LineExtractor};

/// Formats attempted for datetime values, most specific first.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d.%m.%Y %H:%M",
    "%d/%m/%Y %H:%M",
];

/// Formats attempted for date-only values, resolved to midnight UTC.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y/%m/%d",
    "%d %B %Y",
    "%B %d, %Y",
];

/// Finds the first line containing a keyword and parses its value as a date.
#[derive(Debug)]
pub struct DateExtractor {
    keyword: String,
}

impl DateExtractor {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
        }
    }
}

impl LineExtractor for DateExtractor {
    type Output = DateTime<FixedOffset>;

    fn extract(&self, lines: &[String]) -> Option<DateTime<FixedOffset>> {
        let line = lines
            .iter()
            .find(|line| line.to_lowercase().contains(&self.keyword))?;
        parse_flexible(split_value(line))
    }
}

/// Best-effort parse of a free-text date.
pub fn parse_flexible(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed);
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            let naive = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }

    None
}

/// Convenience wrapper over [`DateExtractor`].
pub fn extract_date(lines: &[String], keyword: &str) -> Option<DateTime<FixedOffset>> {
    DateExtractor::new(keyword).extract(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_iso_date_after_keyword() {
        let doc = lines(&["Shipper: Acme", "Loading date: 2024-01-10"]);
        let parsed = extract_date(&doc, "loading date").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-10T00:00:00+00:00");
    }

    #[test]
    fn parses_dotted_european_date() {
        let doc = lines(&["Delivery date: 12.01.2024"]);
        let parsed = extract_date(&doc, "delivery date").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-12T00:00:00+00:00");
    }

    #[test]
    fn parses_datetime_with_minutes() {
        let doc = lines(&["Loading date: 2024-01-10 14:30"]);
        let parsed = extract_date(&doc, "loading date").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-10T14:30:00+00:00");
    }

    #[test]
    fn keeps_explicit_offset() {
        let doc = lines(&["Loading date: 2024-01-10T08:00:00+02:00"]);
        let parsed = extract_date(&doc, "loading date").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-10T08:00:00+02:00");
    }

    #[test]
    fn malformed_date_yields_none() {
        let doc = lines(&["Loading date: as soon as possible"]);
        assert_eq!(extract_date(&doc, "loading date"), None);
    }

    #[test]
    fn missing_keyword_yields_none() {
        let doc = lines(&["Shipper: Acme"]);
        assert_eq!(extract_date(&doc, "loading date"), None);
    }
}
