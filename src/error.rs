//! Error types for rule configuration and message decoding

use thiserror::Error;

/// Errors that can occur while building rules or decoding a raw message.
///
/// Extraction over already-decoded text never fails; every variant here is
/// either a configuration defect or a problem with the raw message bytes.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A rule names a scan direction other than `forward` or `backward`
    #[error("Unknown scan direction: {0}")]
    UnknownScanDirection(String),

    /// A rule names a cut direction other than `prefix` or `suffix`
    #[error("Unknown cut direction: {0}")]
    UnknownCutDirection(String),

    /// A rule pattern failed to compile
    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Catalog or extractor configuration could not be deserialized
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Failed to parse the message structure
    #[error("Failed to parse email structure: {0}")]
    Structure(String),

    /// Failed to decode message content
    #[error("Failed to decode content: {0}")]
    Decode(String),
}

/// Result type for rule building and message decoding
pub type Result<T> = std::result::Result<T, ExtractError>;
