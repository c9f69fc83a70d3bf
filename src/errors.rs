//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Store-layer
//! failures propagate to the caller; the one exception is first-run seeding,
//! which is logged and skipped (see `store::Store::open`).

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying storage medium ran out of quota while persisting a slot.
    ///
    /// The message carries the remedy because it is shown to the user verbatim:
    /// embedded base64 images are the usual culprit. Callers must keep their
    /// in-memory draft alive so the user can shrink it and retry.
    #[error(
        "storage is full while saving '{slot}': remove embedded images or delete old records, then retry"
    )]
    StorageFull {
        /// Name of the slot whose persist failed.
        slot: String,
    },

    /// Input failed validation (bad image URL, oversized file, negative amount).
    #[error("validation failed: {message}")]
    Validation {
        /// Human-readable description of what was rejected.
        message: String,
    },

    /// A record with the given id does not exist in the collection.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind, e.g. "product" or "quotation".
        entity: &'static str,
        /// The missing id.
        id: uuid::Uuid,
    },

    /// Configuration file or environment problem.
    #[error("configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration.
        message: String,
    },

    /// A persisted slot contained JSON that no longer deserializes.
    #[error("corrupt data in slot '{slot}': {source}")]
    Corrupt {
        /// Name of the slot that failed to parse.
        slot: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The generative-AI collaborator failed (network, API, or contract error).
    /// Always transient: callers surface a message and leave persisted state alone.
    #[error("assistant error: {message}")]
    Assistant {
        /// Description of the collaborator failure.
        message: String,
    },

    /// I/O error from the file-backed storage medium.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error outside of a named slot.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::Validation`] with an owned message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }
}
