//! Host runtime contracts.
//!
//! The record store owns no state. Per invocation the host supplies an
//! [`IdentityResolver`] naming the caller and a [`StateBackend`] holding the
//! world state. Both are bundled into an [`Invocation`].
//!
//! ## Ordering
//!
//! [`StateBackend::range_scan`] must yield entries in ascending byte-lexical
//! key order. Partition bounds rely on this: the upper bound `0xFF` sorts
//! after every UTF-8 cid only under raw byte comparison.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BackendError, IdentityError};

/// One entry yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvEntry {
    /// Raw world-state key
    pub key: Vec<u8>,
    /// Raw stored value
    pub value: Vec<u8>,
}

/// Forward-only, single-pass cursor over a key range.
///
/// Cursors hold backend resources until [`close`](StateIterator::close) is
/// called. Implementations should tolerate a second `close`.
pub trait StateIterator {
    /// Advance the cursor. `Ok(None)` marks the end of the range.
    fn next_entry(&mut self) -> Result<Option<KvEntry>, BackendError>;

    /// Release the cursor.
    fn close(&mut self) -> Result<(), BackendError>;
}

/// Key-value world state supplied by the host.
pub trait StateBackend {
    /// Read the value stored at `key`, `None` if absent.
    fn get_state(&self, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError>;

    /// Write `value` at `key`, replacing any existing value.
    fn put_state(&self, key: &[u8], value: Vec<u8>) -> Result<(), BackendError>;

    /// Open a cursor over `[start, end)` in ascending key order.
    fn range_scan<'a>(
        &'a self,
        start: &[u8],
        end: &[u8],
    ) -> Result<Box<dyn StateIterator + 'a>, BackendError>;
}

/// Resolves the principal ID of the current caller.
pub trait IdentityResolver {
    /// Principal ID of the identity that submitted this invocation.
    fn caller_id(&self) -> Result<String, IdentityError>;
}

/// Identifier of one invocation, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(Uuid);

impl TxId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        TxId(Uuid::new_v4())
    }

    /// Wrap a host-assigned id.
    pub fn from_uuid(id: Uuid) -> Self {
        TxId(id)
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TxId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capabilities the host supplies for a single invocation.
#[derive(Clone, Copy)]
pub struct Invocation<'a> {
    /// Invocation id for log correlation
    pub tx_id: TxId,
    /// Caller identity
    pub identity: &'a dyn IdentityResolver,
    /// World state
    pub state: &'a dyn StateBackend,
}

impl<'a> Invocation<'a> {
    /// Bundle an identity resolver and a backend under a fresh [`TxId`].
    pub fn new(identity: &'a dyn IdentityResolver, state: &'a dyn StateBackend) -> Self {
        Self {
            tx_id: TxId::new(),
            identity,
            state,
        }
    }

    /// Use a host-assigned invocation id.
    pub fn with_tx_id(mut self, tx_id: TxId) -> Self {
        self.tx_id = tx_id;
        self
    }
}

impl fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("tx_id", &self.tx_id)
            .finish_non_exhaustive()
    }
}
