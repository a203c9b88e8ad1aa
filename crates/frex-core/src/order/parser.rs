//! Heuristic order assembly from document lines.

use std::time::Instant;

use chrono::{DateTime, Duration, FixedOffset, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::country::{CountryResolver, CountryTable};
use crate::models::config::FrexConfig;
use crate::models::order::{
    Customer, CustomerSide, LocationRecord, OrderRecord, TimeWindow,
};

use super::rules::cargo::CargoExtractor;
use super::rules::company::{normalize_company, CompanyExtractor};
use super::rules::dates::extract_date;
use super::rules::keywords::extract_line_value;
use super::rules::normalize_lines;
use super::OrderParser;

/// Result of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The assembled, schema-valid order.
    pub order: OrderRecord,
    /// Fields that fell back to policy defaults or generated values.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Keyword-driven order parser.
///
/// Runs a fixed sequence of independent extraction passes over the document
/// lines and always produces a complete record: missing or malformed fields
/// degrade to policy defaults instead of errors, trading accuracy for
/// availability.
pub struct HeuristicOrderParser {
    config: FrexConfig,
    resolver: Box<dyn CountryResolver>,
    reference_time: Option<DateTime<FixedOffset>>,
}

impl HeuristicOrderParser {
    /// Create a parser with the default configuration and country table.
    pub fn new() -> Self {
        Self {
            config: FrexConfig::default(),
            resolver: Box::new(CountryTable::new()),
            reference_time: None,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: FrexConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the country resolver.
    pub fn with_resolver(mut self, resolver: Box<dyn CountryResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Pin "now" for deterministic date defaults (tests, replays).
    pub fn with_reference_time(mut self, at: DateTime<FixedOffset>) -> Self {
        self.reference_time = Some(at);
        self
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.reference_time
            .unwrap_or_else(|| Utc::now().fixed_offset())
    }

    fn generate_reference() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("ORD-{}", hex[..6].to_uppercase())
    }
}

impl Default for HeuristicOrderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderParser for HeuristicOrderParser {
    fn matches_format(&self, lines: &[String]) -> bool {
        let content = lines.join(" ").to_lowercase();
        self.config
            .keywords
            .format_gate
            .iter()
            .any(|kw| content.contains(&kw.to_lowercase()))
    }

    fn parse(&self, lines: &[String], attachment_filename: Option<&str>) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        let lines = normalize_lines(lines);
        info!("parsing order document with {} lines", lines.len());

        let attachment_filenames = attachment_filename
            .map(|name| vec![name.to_string()])
            .unwrap_or_default();

        let keywords = &self.config.keywords;
        let defaults = &self.config.defaults;
        let schedule = &self.config.schedule;

        let sender = CompanyExtractor::new(&keywords.sender, defaults, self.resolver.as_ref())
            .extract(&lines);
        let receiver = CompanyExtractor::new(&keywords.receiver, defaults, self.resolver.as_ref())
            .extract(&lines);
        if sender.company.is_empty() {
            warnings.push("sender company not found".to_string());
        }
        if receiver.company.is_empty() {
            warnings.push("receiver company not found".to_string());
        }

        let loading_from = extract_date(&lines, &keywords.loading_date).unwrap_or_else(|| {
            warnings.push("loading date missing, using current time".to_string());
            self.now()
        });
        let delivery_from = extract_date(&lines, &keywords.delivery_date).unwrap_or_else(|| {
            warnings.push("delivery date missing, assuming next day".to_string());
            self.now() + Duration::days(schedule.delivery_lead_days)
        });

        // Window ends are fixed policy, not document content.
        let loading_to = loading_from + Duration::hours(schedule.loading_window_hours);
        let delivery_to = delivery_from + Duration::hours(schedule.delivery_window_hours);

        let loading_locations = vec![LocationRecord {
            company_address: sender.clone(),
            time: TimeWindow {
                datetime_from: loading_from,
                datetime_to: loading_to,
            },
        }];
        let destination_locations = vec![LocationRecord {
            company_address: receiver,
            time: TimeWindow {
                datetime_from: delivery_from,
                datetime_to: delivery_to,
            },
        }];

        let cargos = CargoExtractor::new(&keywords.cargo_cues, defaults).extract(&lines);

        let order_reference =
            extract_line_value(&lines, &keywords.order_reference, true).unwrap_or_else(|| {
                let generated = Self::generate_reference();
                warnings.push(format!("order reference missing, generated {generated}"));
                generated
            });

        let order = OrderRecord {
            attachment_filenames,
            customer: Customer {
                side: CustomerSide::Sender,
                details: normalize_company(sender),
            },
            loading_locations,
            destination_locations,
            cargos,
            order_reference,
            freight_price: 0.0,
            freight_currency: defaults.currency.clone(),
            transport_numbers: extract_line_value(&lines, &keywords.transport_numbers, false)
                .unwrap_or_default(),
            comment: extract_line_value(&lines, &keywords.comment, false).unwrap_or_default(),
            incoterms: extract_line_value(&lines, &keywords.incoterms, false)
                .unwrap_or_else(|| defaults.incoterms.clone()),
        };

        // Safety net; the construction above keeps these invariants by itself.
        warnings.extend(order.validate());

        debug!(
            reference = %order.order_reference,
            warnings = warnings.len(),
            "order assembled"
        );

        ExtractionResult {
            order,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
