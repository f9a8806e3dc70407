//! CID record command handlers.
//!
//! This module implements handlers for the record commands:
//! - StoreCID: Write a record for the caller
//! - GetCID: Read one of the caller's records
//! - GetAllCIDs: List the caller's records
//! - QueryCIDsByOwner: List records by stored owner

use cidstore_core::Invocation;
use cidstore_primitives::RecordStore;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle StoreCID command.
pub fn store_cid(
    store: &RecordStore,
    inv: &Invocation<'_>,
    cid: String,
    file_name: String,
) -> Result<Output> {
    let record = convert_result(store.store(inv, &cid, &file_name))?;
    Ok(Output::Record(record))
}

/// Handle GetCID command.
pub fn get_cid(store: &RecordStore, inv: &Invocation<'_>, cid: String) -> Result<Output> {
    let record = convert_result(store.get(inv, &cid))?;
    Ok(Output::Record(record))
}

/// Handle GetAllCIDs command.
pub fn get_all_cids(store: &RecordStore, inv: &Invocation<'_>) -> Result<Output> {
    let records = convert_result(store.get_all(inv))?;
    Ok(Output::Records(records))
}

/// Handle QueryCIDsByOwner command.
pub fn query_cids_by_owner(
    store: &RecordStore,
    inv: &Invocation<'_>,
    owner: String,
) -> Result<Output> {
    let records = convert_result(store.query_by_owner(inv, &owner))?;
    Ok(Output::Records(records))
}
