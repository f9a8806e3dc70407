//! Command execution layer for cidstore
//!
//! The executor is the surface a host runtime invokes. It accepts a
//! [`Command`] together with the [`Invocation`] capabilities for the current
//! request, dispatches to the record store, and returns an [`Output`] or a
//! serializable [`Error`].
//!
//! Hosts that route invocations by function name use [`Executor::invoke`]:
//!
//! ```text
//! let executor = Executor::new(RecordStore::new());
//! let out = executor.invoke(&inv, "StoreCID", &["Qm123".into(), "report.pdf".into()])?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
mod command;
pub mod convert;
mod error;
pub mod handlers;
mod output;

pub use api::Records;
pub use command::Command;
pub use error::Error;
pub use output::Output;

use cidstore_core::Invocation;
use cidstore_primitives::RecordStore;
use tracing::debug;

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Dispatches commands to the record store.
///
/// Holds no per-invocation state; construct once and share.
#[derive(Debug, Clone, Default)]
pub struct Executor {
    store: RecordStore,
}

impl Executor {
    /// Create an executor over `store`.
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// The record store commands are dispatched to.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Execute one command on behalf of the invocation's caller.
    pub fn execute(&self, inv: &Invocation<'_>, cmd: Command) -> Result<Output> {
        debug!(target: "cidstore::executor", tx_id = %inv.tx_id, function = cmd.name(), "execute");
        match cmd {
            Command::InitLedger => handlers::ledger::init_ledger(&self.store, inv),
            Command::StoreCid { cid, file_name } => {
                handlers::records::store_cid(&self.store, inv, cid, file_name)
            }
            Command::GetCid { cid } => handlers::records::get_cid(&self.store, inv, cid),
            Command::GetAllCids => handlers::records::get_all_cids(&self.store, inv),
            Command::QueryCidsByOwner { owner } => {
                handlers::records::query_cids_by_owner(&self.store, inv, owner)
            }
        }
    }

    /// Parse a named function call and execute it.
    pub fn invoke(&self, inv: &Invocation<'_>, function: &str, args: &[String]) -> Result<Output> {
        let cmd = Command::parse(function, args)?;
        self.execute(inv, cmd)
    }

    /// Typed record operations for `inv`.
    pub fn records<'a>(&'a self, inv: &'a Invocation<'a>) -> Records<'a> {
        Records::new(self, inv)
    }
}
