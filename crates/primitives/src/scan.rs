//! Scoped range scans.
//!
//! A [`ScanGuard`] owns a backend cursor for the duration of one operation.
//! The success path closes it explicitly so a close failure can be reported;
//! every other exit path closes it on drop.

use cidstore_core::{BackendError, KvEntry, StateIterator};
use tracing::warn;

/// Owns a cursor and guarantees it is closed exactly once.
pub(crate) struct ScanGuard<'a> {
    cursor: Box<dyn StateIterator + 'a>,
    closed: bool,
}

impl<'a> ScanGuard<'a> {
    pub(crate) fn new(cursor: Box<dyn StateIterator + 'a>) -> Self {
        Self {
            cursor,
            closed: false,
        }
    }

    pub(crate) fn next_entry(&mut self) -> Result<Option<KvEntry>, BackendError> {
        self.cursor.next_entry()
    }

    /// Close the cursor, surfacing any backend error.
    pub(crate) fn close(mut self) -> Result<(), BackendError> {
        self.closed = true;
        self.cursor.close()
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.cursor.close() {
            warn!(target: "cidstore::store", error = %e, "failed to close scan cursor");
        }
    }
}
