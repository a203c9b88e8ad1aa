//! Best-effort country resolution for free-text location strings.

/// Resolves a free-text location string to an ISO-3166 alpha-2 code.
///
/// Implementations work over already-loaded data; resolution is a pure
/// lookup, never a network call.
pub trait CountryResolver {
    /// Return the alpha-2 code for `text`, or `None` when nothing matches.
    fn resolve_iso(&self, text: &str) -> Option<String>;
}

/// Static lookup table covering the common European freight corridor plus a
/// few frequent overseas origins. Matches country names as case-insensitive
/// substrings and bare alpha-2 tokens ("Berlin, DE").
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryTable;

impl CountryTable {
    pub fn new() -> Self {
        Self
    }
}

static COUNTRIES: &[(&str, &str)] = &[
    ("austria", "AT"),
    ("belgium", "BE"),
    ("bulgaria", "BG"),
    ("croatia", "HR"),
    ("czech", "CZ"),
    ("denmark", "DK"),
    ("estonia", "EE"),
    ("finland", "FI"),
    ("france", "FR"),
    ("germany", "DE"),
    ("deutschland", "DE"),
    ("greece", "GR"),
    ("hungary", "HU"),
    ("ireland", "IE"),
    ("italy", "IT"),
    ("latvia", "LV"),
    ("lithuania", "LT"),
    ("luxembourg", "LU"),
    ("netherlands", "NL"),
    ("norway", "NO"),
    ("poland", "PL"),
    ("polska", "PL"),
    ("portugal", "PT"),
    ("romania", "RO"),
    ("serbia", "RS"),
    ("slovakia", "SK"),
    ("slovenia", "SI"),
    ("spain", "ES"),
    ("sweden", "SE"),
    ("switzerland", "CH"),
    ("turkey", "TR"),
    ("ukraine", "UA"),
    ("united kingdom", "GB"),
    ("great britain", "GB"),
    ("england", "GB"),
    ("united states", "US"),
    ("china", "CN"),
];

impl CountryResolver for CountryTable {
    fn resolve_iso(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();
        for (name, iso) in COUNTRIES {
            if lower.contains(name) {
                return Some((*iso).to_string());
            }
        }

        // Bare alpha-2 tokens pass through unchanged. Only uppercase tokens
        // count, so short words like "at" never read as country codes.
        text.split(|c: char| !c.is_ascii_alphabetic())
            .filter(|token| token.len() == 2)
            .filter(|token| token.chars().all(|c| c.is_ascii_uppercase()))
            .map(str::to_string)
            .find(|token| COUNTRIES.iter().any(|(_, iso)| *iso == token.as_str()))
    }
}
