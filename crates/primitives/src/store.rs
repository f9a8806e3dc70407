//! CID Record Store primitive
//!
//! Stateless service over a host-supplied world state.
//! Associates CIDs with the identity that stored them.
//!
//! # Design
//!
//! RecordStore holds only its [`OpenOptions`]. Identity and world state
//! arrive with every call as an [`Invocation`], so one store instance serves
//! any number of invocations and keeps nothing between them.
//!
//! Records are addressed by `cid_{owner}_{cid}`. The owner is always the
//! resolved caller, never an argument, so callers can only read and write
//! inside their own partition.
//!
//! # Example
//!
//! ```ignore
//! let store = RecordStore::new();
//! let inv = Invocation::new(&identity, &state);
//!
//! store.store(&inv, "QmXyz", "report.pdf")?;
//! let record = store.get(&inv, "QmXyz")?;
//! let all = store.get_all(&inv)?;
//! ```

use cidstore_core::{CompositeKey, Invocation, Record, StoreError, StoreResult};
use cidstore_security::OpenOptions;
use tracing::{debug, info};

use crate::scan::ScanGuard;

/// Owner-scoped CID record store
///
/// # Thread Safety
///
/// RecordStore is Clone and Send + Sync. It carries no per-invocation state;
/// all shared state lives in the backend passed with each call.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    options: OpenOptions,
}

impl RecordStore {
    /// Create a read-write record store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record store with explicit options
    pub fn open(options: OpenOptions) -> Self {
        Self { options }
    }

    /// Options this store was opened with
    pub fn options(&self) -> &OpenOptions {
        &self.options
    }

    /// Initialization hook invoked once when the host instantiates the store.
    ///
    /// Touches no state.
    pub fn init_ledger(&self, inv: &Invocation<'_>) -> StoreResult<()> {
        info!(target: "cidstore::store", tx_id = %inv.tx_id, "initialize ledger");
        Ok(())
    }

    /// Store a CID record for the caller
    ///
    /// The record's owner is the resolved caller and its timestamp is the
    /// current time. Any record already stored by this caller under the same
    /// CID is overwritten.
    ///
    /// # Arguments
    ///
    /// * `inv` - Identity and world state for this invocation
    /// * `cid` - Content identifier, stored as given
    /// * `file_name` - Label stored alongside the CID
    ///
    /// # Returns
    ///
    /// The record as written
    ///
    /// # Errors
    ///
    /// - `ReadOnly`: store was opened read-only
    /// - `Identity`: caller could not be resolved
    /// - `Serialization`: record could not be encoded
    /// - `BackendWrite`: world state rejected the write
    pub fn store(&self, inv: &Invocation<'_>, cid: &str, file_name: &str) -> StoreResult<Record> {
        if !self.options.access_mode.allows_writes() {
            return Err(StoreError::ReadOnly { operation: "StoreCID" });
        }

        let owner = inv.identity.caller_id()?;
        let record = Record::new(cid, owner, file_name);
        let bytes = record.to_bytes().map_err(|source| StoreError::Serialization {
            cid: cid.to_string(),
            source,
        })?;

        let key = record.key();
        inv.state
            .put_state(key.as_bytes(), bytes)
            .map_err(|source| StoreError::BackendWrite {
                key: key.clone(),
                source,
            })?;

        debug!(
            target: "cidstore::store",
            tx_id = %inv.tx_id,
            owner = %record.owner,
            cid,
            %key,
            "stored record"
        );
        Ok(record)
    }

    /// Get one of the caller's records by CID
    ///
    /// Only the caller's own partition is consulted. A CID stored by another
    /// identity is reported as not found.
    ///
    /// # Errors
    ///
    /// - `Identity`: caller could not be resolved
    /// - `BackendRead`: world state read failed
    /// - `NotFound`: caller has no record with this CID
    /// - `Deserialization`: stored bytes are not a record
    pub fn get(&self, inv: &Invocation<'_>, cid: &str) -> StoreResult<Record> {
        let owner = inv.identity.caller_id()?;
        let key = CompositeKey::new(&owner, cid);

        let bytes = inv
            .state
            .get_state(key.as_bytes())
            .map_err(|source| StoreError::BackendRead {
                key: key.clone(),
                source,
            })?
            .ok_or_else(|| StoreError::NotFound {
                cid: cid.to_string(),
            })?;

        let record = Record::from_bytes(&bytes).map_err(|source| StoreError::Deserialization {
            key: key.clone(),
            source,
        })?;

        // Keys do not escape '_', so another owner's record can share this
        // key. It is still not the caller's.
        if record.owner != owner {
            debug!(
                target: "cidstore::store",
                tx_id = %inv.tx_id,
                %key,
                "key belongs to a different owner"
            );
            return Err(StoreError::NotFound {
                cid: cid.to_string(),
            });
        }

        debug!(target: "cidstore::store", tx_id = %inv.tx_id, owner = %owner, cid, "read record");
        Ok(record)
    }

    /// Get every record stored by the caller
    ///
    /// Scans `[cid_{owner}_, cid_{owner}_\xFF)` and returns the records in
    /// ascending CID order. An owner with no records gets an empty vector.
    ///
    /// # Errors
    ///
    /// - `Identity`: caller could not be resolved
    /// - `BackendScan`: the scan failed or yielded an undecodable entry.
    ///   Records read before the failure are discarded.
    pub fn get_all(&self, inv: &Invocation<'_>) -> StoreResult<Vec<Record>> {
        let owner = inv.identity.caller_id()?;
        let (start, end) = cidstore_core::owner_range(&owner);

        let records = scan_records(inv, &start, &end, |record| record.owner == owner)?;
        debug!(
            target: "cidstore::store",
            tx_id = %inv.tx_id,
            owner = %owner,
            count = records.len(),
            "listed records"
        );
        Ok(records)
    }

    /// Get every record whose stored owner is `owner`
    ///
    /// Unlike [`get_all`](Self::get_all) this is not limited to the caller
    /// and scans the whole record namespace, filtering on the decoded owner
    /// field. The caller must still resolve to an identity.
    ///
    /// # Errors
    ///
    /// Same as [`get_all`](Self::get_all).
    pub fn query_by_owner(&self, inv: &Invocation<'_>, owner: &str) -> StoreResult<Vec<Record>> {
        let caller = inv.identity.caller_id()?;
        let start = CompositeKey::namespace_start();
        let end = CompositeKey::namespace_end();

        let records = scan_records(inv, &start, &end, |record| record.owner == owner)?;
        debug!(
            target: "cidstore::store",
            tx_id = %inv.tx_id,
            caller = %caller,
            owner,
            count = records.len(),
            "queried records by owner"
        );
        Ok(records)
    }
}

/// Scan `[start, end)` and decode every entry, keeping those `keep` accepts.
///
/// All or nothing: the first failure discards everything collected.
fn scan_records(
    inv: &Invocation<'_>,
    start: &CompositeKey,
    end: &CompositeKey,
    mut keep: impl FnMut(&Record) -> bool,
) -> StoreResult<Vec<Record>> {
    let cursor = inv
        .state
        .range_scan(start.as_bytes(), end.as_bytes())
        .map_err(|e| StoreError::scan(start, end, e.to_string()))?;
    let mut guard = ScanGuard::new(cursor);

    let mut records = Vec::new();
    while let Some(entry) = guard
        .next_entry()
        .map_err(|e| StoreError::scan(start, end, e.to_string()))?
    {
        let record = Record::from_bytes(&entry.value).map_err(|e| {
            let key = CompositeKey::from_bytes(entry.key.clone());
            StoreError::scan(start, end, format!("undecodable record at {}: {}", key, e))
        })?;
        if keep(&record) {
            records.push(record);
        } else {
            debug!(
                target: "cidstore::store",
                tx_id = %inv.tx_id,
                key = %CompositeKey::from_bytes(entry.key),
                "skipping record of another owner"
            );
        }
    }

    guard
        .close()
        .map_err(|e| StoreError::scan(start, end, format!("close failed: {}", e)))?;
    Ok(records)
}
