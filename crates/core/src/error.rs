//! Error types for the record store.
//!
//! ## Taxonomy
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | `Identity` | all operations | caller identity could not be resolved |
//! | `Serialization` | store | record could not be encoded |
//! | `Deserialization` | get | stored bytes are not a record |
//! | `BackendWrite` | store | world state rejected the write |
//! | `BackendRead` | get | world state read failed |
//! | `BackendScan` | get-all, query | range scan failed or yielded an undecodable entry |
//! | `NotFound` | get | no record for this caller and cid |
//! | `ReadOnly` | store | store was opened read-only |
//!
//! Every error is surfaced to the invoker as-is. Nothing here is retried.

use thiserror::Error;

use crate::key::CompositeKey;

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a world-state backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend could not be reached or is shutting down.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    /// The backend refused the operation.
    #[error("operation rejected: {0}")]
    Rejected(String),
    /// A scan cursor was used after it was closed.
    #[error("scan cursor already closed")]
    CursorClosed,
}

/// Failure to resolve the identity of the current caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct IdentityError {
    /// Why resolution failed.
    pub reason: String,
}

impl IdentityError {
    /// Create an identity error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors returned by record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller identity could not be resolved.
    #[error("failed to get client identity: {0}")]
    Identity(#[from] IdentityError),

    /// Record could not be encoded.
    #[error("failed to encode record for CID {cid}: {source}")]
    Serialization {
        /// CID of the record being stored
        cid: String,
        /// Encoder error
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes could not be decoded as a record.
    #[error("failed to decode record at {key}: {source}")]
    Deserialization {
        /// Key the bytes were read from
        key: CompositeKey,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// World state rejected a write.
    #[error("failed to write to world state at {key}: {source}")]
    BackendWrite {
        /// Key being written
        key: CompositeKey,
        /// Backend error
        #[source]
        source: BackendError,
    },

    /// World state read failed.
    #[error("failed to read from world state at {key}: {source}")]
    BackendRead {
        /// Key being read
        key: CompositeKey,
        /// Backend error
        #[source]
        source: BackendError,
    },

    /// Range scan failed. Any records already collected are discarded.
    #[error("failed to scan world state [{start}, {end}): {reason}")]
    BackendScan {
        /// Inclusive scan start
        start: CompositeKey,
        /// Exclusive scan end
        end: CompositeKey,
        /// What went wrong
        reason: String,
    },

    /// No record exists for this caller and CID.
    #[error("the CID {cid} does not exist")]
    NotFound {
        /// Requested CID
        cid: String,
    },

    /// A write was attempted on a read-only store.
    #[error("{operation} rejected: store is read-only")]
    ReadOnly {
        /// Name of the rejected operation
        operation: &'static str,
    },
}

impl StoreError {
    /// Scan failure over `[start, end)`.
    pub fn scan(start: &CompositeKey, end: &CompositeKey, reason: impl Into<String>) -> Self {
        StoreError::BackendScan {
            start: start.clone(),
            end: end.clone(),
            reason: reason.into(),
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
