//! Order extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, HeuristicOrderParser};

use crate::error::SinkError;
use crate::models::order::OrderRecord;

/// Trait for order parsers.
pub trait OrderParser {
    /// Cheap routing gate: should this parser run on the document at all?
    fn matches_format(&self, lines: &[String]) -> bool;

    /// Parse a document's lines into a structured order. Never fails;
    /// missing fields degrade to policy defaults.
    fn parse(&self, lines: &[String], attachment_filename: Option<&str>) -> ExtractionResult;
}

/// Submission seam for assembled orders.
///
/// Implementations validate against their own stored schema and persist or
/// forward the record; none of that is the extractor's concern.
pub trait OrderSink {
    /// Submit one order record, returning the sink's opaque output.
    fn submit(&self, order: &OrderRecord) -> Result<serde_json::Value, SinkError>;
}
