//! Error types for the frab → HackerTracker conversion

use thiserror::Error;

/// Common result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised anywhere in the pipeline. None of these are recovered
/// locally; every one aborts the whole run.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP fetch failed, timed out, or returned a non-success status
    #[error("Network error: {0}")]
    Network(String),

    /// Source JSON does not match the expected frab schema
    #[error("Malformed source document: {0}")]
    MalformedSource(String),

    /// Event start date is not a valid `YYYY-MM-DDThh:mm:ss±hh:mm` timestamp
    #[error("Malformed timestamp {value:?}: {source}")]
    MalformedTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    /// Event duration is not of the form `H:MM` / `HH:MM`
    #[error("Malformed duration {0:?} (expected H:MM)")]
    MalformedDuration(String),

    /// Output record could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output directory could not be created or a file could not be written
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),

    /// Pipeline invariant violation (e.g. registry lookup after full
    /// population came back empty)
    #[error("Internal error: {0}")]
    Internal(String),
}
