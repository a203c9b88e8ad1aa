//! Error types for the frex-core library.

use thiserror::Error;

/// Main error type for the frex library.
///
/// Extraction itself is infallible by contract; these variants exist at the
/// I/O, configuration and submission seams around it.
#[derive(Error, Debug)]
pub enum FrexError {
    /// Order submission error.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors surfaced by an order submission sink.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The record does not match the sink's stored schema.
    #[error("schema rejection: {0}")]
    Schema(String),

    /// The sink could not persist or forward the record.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Result type for the frex library.
pub type Result<T> = std::result::Result<T, FrexError>;
