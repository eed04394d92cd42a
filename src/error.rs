//! Crate-wide error type.
//!
//! Every failure in the scoring, ranking and selection core is a local,
//! deterministic validation failure. Only the report exporter performs I/O.

use thiserror::Error;

/// Errors produced by the wellness pipeline.
#[derive(Debug, Error)]
pub enum WellnessError {
    /// A person record carries a missing, non-finite or out-of-range signal.
    #[error("malformed record {id}: field `{field}` {reason}")]
    MalformedRecord {
        /// Id of the offending record.
        id: u32,
        /// Column name of the offending field.
        field: &'static str,
        /// What is wrong with the value.
        reason: String,
    },

    /// A catalog entry has a non-positive cost or benefit.
    #[error("invalid catalog entry #{index} ({name}): {reason}")]
    InvalidCatalogEntry {
        /// Position of the entry in the catalog.
        index: usize,
        /// Entry name.
        name: String,
        /// What is wrong with the entry.
        reason: String,
    },

    /// The ranker was asked for a key that a record does not carry.
    #[error("sort key `{key}` is not available on record {record_id:?}")]
    KeyMismatch {
        /// Requested key (column name).
        key: String,
        /// Record on which the lookup failed, if the failure is record-specific.
        record_id: Option<u32>,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// CSV serialization failed.
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing the report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WellnessError>;
