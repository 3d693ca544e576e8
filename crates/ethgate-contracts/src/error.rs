//! Error types for the ethgate pipeline.
//!
//! The evaluator itself is total and never fails. Errors only arise at the
//! edges: reading input documents and persisting the decision record.

use thiserror::Error;

/// The unified error type for ethgate.
#[derive(Debug, Error)]
pub enum EthgateError {
    /// An input document exists but could not be parsed, or its top level is
    /// not an object.
    ///
    /// This aborts the whole run before any output is written.
    #[error("malformed document '{path}': {reason}")]
    MalformedDocument { path: String, reason: String },

    /// An input document exists but could not be read from storage.
    #[error("failed to read '{path}': {reason}")]
    ReadFailed { path: String, reason: String },

    /// The decision record or audit report could not be persisted.
    ///
    /// Fatal: a decision that cannot be audited is not returned.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// A record could not be converted to or from JSON.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A command-line or runtime option is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the ethgate crates.
pub type EthgateResult<T> = Result<T, EthgateError>;
