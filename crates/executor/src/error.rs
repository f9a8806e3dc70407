//! Executor error type.
//!
//! Flat, serializable errors returned to the invoker. Internal
//! [`StoreError`](cidstore_core::StoreError)s are mapped onto these by
//! [`convert`](crate::convert).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by [`Executor::execute`](crate::Executor::execute).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum Error {
    /// Caller identity could not be resolved.
    #[error("identity error: {reason}")]
    Identity {
        /// Details
        reason: String,
    },

    /// Record could not be encoded.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Details
        reason: String,
    },

    /// Stored bytes could not be decoded.
    #[error("deserialization error: {reason}")]
    Deserialization {
        /// Details
        reason: String,
    },

    /// World state rejected a write.
    #[error("backend write error: {reason}")]
    BackendWrite {
        /// Details
        reason: String,
    },

    /// World state read failed.
    #[error("backend read error: {reason}")]
    BackendRead {
        /// Details
        reason: String,
    },

    /// Range scan failed.
    #[error("backend scan error: {reason}")]
    BackendScan {
        /// Details
        reason: String,
    },

    /// Requested record does not exist.
    #[error("not found: {cid}")]
    NotFound {
        /// Requested CID
        cid: String,
    },

    /// Operation not permitted by the store's access mode.
    #[error("access denied: {reason}")]
    AccessDenied {
        /// Details
        reason: String,
    },

    /// Malformed invocation arguments.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Details
        reason: String,
    },

    /// No contract function with this name.
    #[error("unknown function: {name}")]
    UnknownFunction {
        /// Requested function name
        name: String,
    },

    /// Unexpected internal state.
    #[error("internal error: {reason}")]
    Internal {
        /// Details
        reason: String,
    },
}
