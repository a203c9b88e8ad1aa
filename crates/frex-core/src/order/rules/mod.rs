//! Line-level extraction rules shared by the order assembler.

pub mod cargo;
pub mod company;
pub mod dates;
pub mod keywords;
pub mod patterns;

pub use cargo::{extract_cargos, CargoExtractor};
pub use company::{extract_company, normalize_company, CompanyExtractor};
pub use dates::{extract_date, DateExtractor};
pub use keywords::{extract_line_value, KeywordExtractor};

/// Trait for line-scanning field extractors.
///
/// Lines are scanned in their given order and the first successful match
/// wins - scan order is a semantic contract, since it decides which line
/// populates a field when several lines match the same keyword set.
pub trait LineExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from the document lines.
    fn extract(&self, lines: &[String]) -> Option<Self::Output>;
}

/// Trim every line and drop the empty ones, preserving order.
pub fn normalize_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a matched line at its first `:`; the value is the remainder, or
/// the whole line when there is no delimiter.
pub fn split_value(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, value)) => value.trim(),
        None => line.trim(),
    }
}

/// Strip thousands separators before a numeric cast.
pub fn uncomma(raw: &str) -> String {
    raw.replace([',', ' ', '\u{a0}'], "")
}

/// Lenient integer cast: the leading digits of the cleaned string, 0 when
/// there are none. Mirrors how noisy column values like "3 pcs" are read.
pub fn cast_u32(raw: &str) -> u32 {
    let cleaned = uncomma(raw);
    let digits: String = cleaned.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Lenient float cast over the leading numeric run, 0.0 when unparseable.
pub fn cast_f64(raw: &str) -> f64 {
    let cleaned = uncomma(raw);
    let numeric: String = cleaned
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_drops_empty_lines() {
        let lines = vec![
            "  Shipper: Acme  ".to_string(),
            "   ".to_string(),
            String::new(),
            "Qty: 5".to_string(),
        ];
        assert_eq!(normalize_lines(&lines), vec!["Shipper: Acme", "Qty: 5"]);
    }

    #[test]
    fn split_value_takes_text_after_first_colon() {
        assert_eq!(split_value("Loading date: 2024-01-10 14:30"), "2024-01-10 14:30");
        assert_eq!(split_value("no delimiter here"), "no delimiter here");
        assert_eq!(split_value("Shipper:"), "");
    }

    #[test]
    fn casts_are_lenient() {
        assert_eq!(cast_u32("1,200"), 1200);
        assert_eq!(cast_u32("3 pcs"), 3);
        assert_eq!(cast_u32("N/A"), 0);
        assert_eq!(cast_f64("1,234.5"), 1234.5);
        assert_eq!(cast_f64("750 kg"), 750.0);
        assert_eq!(cast_f64("-"), 0.0);
    }
}
