//! Generic keyword-tagged line value extraction.
//!
//! The primitive behind order references, comments, transport numbers and
//! incoterms: find the first line matching any keyword of a set, return the
//! text after the `:` delimiter.

use tracing::trace;

use super::{split_value, LineExtractor};

/// Finds the first line matching any of a keyword set.
#[derive(Debug)]
pub struct KeywordExtractor {
    keywords: Vec<String>,
    first_only: bool,
}

impl KeywordExtractor {
    pub fn new(keywords: &[String]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            first_only: false,
        }
    }

    /// Stop scanning at the first hit. Scanning already returns on the
    /// first successful match either way; the flag records caller intent
    /// when composing fallback chains.
    pub fn first_only(mut self, first_only: bool) -> Self {
        self.first_only = first_only;
        self
    }
}

impl LineExtractor for KeywordExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        for line in lines {
            let lower = line.to_lowercase();
            if let Some(keyword) = self.keywords.iter().find(|kw| lower.contains(kw.as_str())) {
                let value = split_value(line);
                if !value.is_empty() {
                    trace!(%keyword, first_only = self.first_only, "keyword line matched");
                    return Some(value.to_string());
                }
                // Empty value: not a usable match, keep scanning.
            }
        }
        None
    }
}

/// Convenience wrapper over [`KeywordExtractor`].
pub fn extract_line_value(
    lines: &[String],
    keywords: &[String],
    first_only: bool,
) -> Option<String> {
    KeywordExtractor::new(keywords).first_only(first_only).extract(lines)
}
