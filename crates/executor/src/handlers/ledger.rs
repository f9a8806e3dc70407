//! Ledger lifecycle handlers.

use cidstore_core::Invocation;
use cidstore_primitives::RecordStore;

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle InitLedger command.
pub fn init_ledger(store: &RecordStore, inv: &Invocation<'_>) -> Result<Output> {
    convert_result(store.init_ledger(inv))?;
    Ok(Output::Unit)
}
