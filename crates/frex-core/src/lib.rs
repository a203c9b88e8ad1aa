//! Core library for freight order extraction.
//!
//! This crate turns line-oriented text from freight-shipment documents
//! (bills of lading, transport orders) into normalized order records:
//! - heuristic keyword extractors for companies, dates, references and
//!   cargo rows
//! - schema-valid data models where every missing field degrades to a
//!   policy default instead of an error
//! - a fixed-sequence order assembler with a cheap format gate
//!
//! Upstream concerns (PDF rendering, OCR, file ingestion) and downstream
//! concerns (order persistence) stay behind the [`order::OrderSink`] and
//! [`country::CountryResolver`] seams.

pub mod country;
pub mod error;
pub mod models;
pub mod order;

pub use country::{CountryResolver, CountryTable};
pub use error::{FrexError, Result, SinkError};
pub use models::config::FrexConfig;
pub use models::order::{
    CargoRecord, CompanyRecord, Customer, CustomerSide, LocationRecord, OrderRecord, TimeWindow,
};
pub use order::{ExtractionResult, HeuristicOrderParser, OrderParser, OrderSink};
