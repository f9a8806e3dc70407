//! In-memory world state
//!
//! Ordered map from raw key bytes to raw values, used by embedded hosts and
//! tests in place of a ledger's world state.
//!
//! # Design
//!
//! - BTreeMap over `Vec<u8>`: byte-lexical ordering, so the `0xFF`
//!   partition bound works as the record store expects
//! - RwLock: concurrent readers, one writer at a time
//! - Scans snapshot their range at open time and never hold the lock
//!
//! Open cursors are counted so callers can check that every scan was
//! released.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use cidstore_core::{BackendError, KvEntry, StateBackend, StateIterator};

/// In-memory, ordered `StateBackend`.
///
/// # Example
///
/// ```ignore
/// use cidstore_storage::MemoryState;
///
/// let state = MemoryState::new();
/// state.put_state(b"cid_alice_Qm1", b"{...}".to_vec())?;
/// ```
pub struct MemoryState {
    data: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
    /// Cursors opened and not yet closed or dropped
    open_scans: AtomicUsize,
    /// Cursors opened over the lifetime of this state
    scans_opened: AtomicU64,
}

impl MemoryState {
    /// Create an empty state
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
            open_scans: AtomicUsize::new(0),
            scans_opened: AtomicU64::new(0),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if no keys are stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Number of cursors currently open
    pub fn open_scans(&self) -> usize {
        self.open_scans.load(Ordering::Acquire)
    }

    /// Number of cursors opened since creation
    pub fn scans_opened(&self) -> u64 {
        self.scans_opened.load(Ordering::Acquire)
    }

    /// All keys in ascending order
    pub fn keys(&self) -> Vec<Vec<u8>> {
        self.data.read().keys().cloned().collect()
    }
}

impl Default for MemoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryState")
            .field("len", &self.len())
            .field("open_scans", &self.open_scans())
            .field("scans_opened", &self.scans_opened())
            .finish()
    }
}

impl StateBackend for MemoryState {
    fn get_state(&self, key: &[u8]) -> Result<Option<Vec<u8>>, BackendError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put_state(&self, key: &[u8], value: Vec<u8>) -> Result<(), BackendError> {
        if key.is_empty() {
            return Err(BackendError::Rejected("key must not be empty".into()));
        }
        self.data.write().insert(key.to_vec(), value);
        Ok(())
    }

    fn range_scan<'a>(
        &'a self,
        start: &[u8],
        end: &[u8],
    ) -> Result<Box<dyn StateIterator + 'a>, BackendError> {
        // BTreeMap::range panics on an inverted range.
        let entries: Vec<KvEntry> = if start < end {
            self.data
                .read()
                .range::<[u8], _>((Bound::Included(start), Bound::Excluded(end)))
                .map(|(k, v)| KvEntry {
                    key: k.clone(),
                    value: v.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        self.open_scans.fetch_add(1, Ordering::AcqRel);
        self.scans_opened.fetch_add(1, Ordering::AcqRel);
        Ok(Box::new(MemoryScan {
            entries: entries.into_iter(),
            open_scans: &self.open_scans,
            closed: false,
        }))
    }
}

/// Cursor over a snapshot of a `MemoryState` range.
///
/// Dropping an unclosed cursor closes it.
pub struct MemoryScan<'a> {
    entries: std::vec::IntoIter<KvEntry>,
    open_scans: &'a AtomicUsize,
    closed: bool,
}

impl StateIterator for MemoryScan<'_> {
    fn next_entry(&mut self) -> Result<Option<KvEntry>, BackendError> {
        if self.closed {
            return Err(BackendError::CursorClosed);
        }
        Ok(self.entries.next())
    }

    fn close(&mut self) -> Result<(), BackendError> {
        if !self.closed {
            self.closed = true;
            self.open_scans.fetch_sub(1, Ordering::AcqRel);
        }
        Ok(())
    }
}

impl Drop for MemoryScan<'_> {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
