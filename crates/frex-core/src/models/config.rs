//! Configuration for the extraction pipeline.
//!
//! Every keyword set the heuristics match on is a config table row, so new
//! document variants are supported by editing data, not code paths.

use serde::{Deserialize, Serialize};

use crate::error::{FrexError, Result};

/// Main configuration for the frex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrexConfig {
    /// Keyword tables driving the heuristic matchers.
    pub keywords: KeywordConfig,

    /// Time-window policy for loading and delivery stops.
    pub schedule: ScheduleConfig,

    /// Fallback values for fields the document does not yield.
    pub defaults: DefaultsConfig,
}

/// Keyword tables, matched as case-insensitive substrings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Substrings identifying a document this pipeline should handle at all.
    pub format_gate: Vec<String>,

    /// Role cues for the sending party's company block.
    pub sender: Vec<String>,

    /// Role cues for the receiving party's company block.
    pub receiver: Vec<String>,

    /// Line tag for the loading date.
    pub loading_date: String,

    /// Line tag for the delivery date.
    pub delivery_date: String,

    /// Cues for the order reference line.
    pub order_reference: Vec<String>,

    /// Cues for truck/trailer registration lines.
    pub transport_numbers: Vec<String>,

    /// Cues for free-text remark lines.
    pub comment: Vec<String>,

    /// Cues for the delivery-terms line.
    pub incoterms: Vec<String>,

    /// Cues marking a line as a candidate tabular cargo row.
    pub cargo_cues: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            format_gate: words(&["order", "loading", "consignee", "shipment"]),
            sender: words(&["shipper", "sender", "customer"]),
            receiver: words(&["consignee", "receiver", "delivery"]),
            loading_date: "loading date".to_string(),
            delivery_date: "delivery date".to_string(),
            order_reference: words(&["order ref", "customer ref", "our ref"]),
            transport_numbers: words(&["truck", "vehicle", "registration"]),
            comment: words(&["comment", "note"]),
            incoterms: words(&["incoterms"]),
            cargo_cues: words(&["qty", "quantity", "weight", "pcs", "kg"]),
        }
    }
}

/// Fixed time-window policy. Window ends are derived from the resolved
/// start, never from document content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Hours added to the loading start to form its window end.
    pub loading_window_hours: i64,

    /// Hours added to the delivery start to form its window end.
    pub delivery_window_hours: i64,

    /// Days after "now" assumed when no delivery date is found.
    pub delivery_lead_days: i64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            loading_window_hours: 2,
            delivery_window_hours: 4,
            delivery_lead_days: 1,
        }
    }
}

/// Fallback values keeping the assembled record schema-valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Seed country for extracted company blocks. A non-empty value keeps
    /// the country fill slot inert; set to "" to let the resolver fill it.
    pub country: String,

    /// Seed city for extracted company blocks.
    pub city: String,

    /// Currency applied to freight price and cargo values.
    pub currency: String,

    /// Delivery terms when the document names none.
    pub incoterms: String,

    /// Package type stamped on every cargo row.
    pub package_type: String,

    /// Cargo type stamped on every cargo row.
    pub cargo_type: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            country: "DE".to_string(),
            city: "NA".to_string(),
            currency: "EUR".to_string(),
            incoterms: "CFR".to_string(),
            package_type: "EPAL".to_string(),
            cargo_type: "full".to_string(),
        }
    }
}

impl FrexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FrexError::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_keyword_tables() {
        let config = FrexConfig::default();
        assert_eq!(config.keywords.sender, vec!["shipper", "sender", "customer"]);
        assert_eq!(config.keywords.loading_date, "loading date");
        assert_eq!(config.schedule.loading_window_hours, 2);
        assert_eq!(config.defaults.incoterms, "CFR");
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: FrexConfig =
            serde_json::from_str(r#"{"defaults": {"country": ""}}"#).unwrap();
        assert_eq!(config.defaults.country, "");
        assert_eq!(config.defaults.currency, "EUR");
        assert_eq!(config.keywords.format_gate.len(), 4);
    }

    #[test]
    fn json_round_trip() {
        let config = FrexConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: FrexConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.keywords.cargo_cues, config.keywords.cargo_cues);
        assert_eq!(back.schedule.delivery_window_hours, 4);
    }
}
