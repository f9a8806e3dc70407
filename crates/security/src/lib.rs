//! Access control and configuration for the record store.
//!
//! This crate provides the [`AccessMode`] and [`OpenOptions`] types used to
//! control how a record store is opened and which operations it accepts.
//! A read-only store matches a ledger's evaluate-only invocations: queries
//! run, writes are refused.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};

/// Controls whether the store accepts writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Allow both reads and writes (default).
    #[default]
    ReadWrite,
    /// Read-only mode: store operations return an error.
    ReadOnly,
}

impl AccessMode {
    /// Check if writes are permitted.
    pub fn allows_writes(self) -> bool {
        matches!(self, AccessMode::ReadWrite)
    }
}

/// Options for opening a record store.
///
/// Use the builder pattern to configure options:
///
/// ```ignore
/// use cidstore_security::{OpenOptions, AccessMode};
///
/// let opts = OpenOptions::new().access_mode(AccessMode::ReadOnly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenOptions {
    /// The access mode for the store.
    pub access_mode: AccessMode,
}

impl OpenOptions {
    /// Create a new `OpenOptions` with default settings (read-write mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access mode for the store.
    pub fn access_mode(mut self, mode: AccessMode) -> Self {
        self.access_mode = mode;
        self
    }

    /// Shorthand for read-only options.
    pub fn read_only() -> Self {
        Self::new().access_mode(AccessMode::ReadOnly)
    }
}
