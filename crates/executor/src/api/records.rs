//! Record operations for one invocation.

use cidstore_core::{Invocation, Record};

use crate::{Command, Error, Executor, Output, Result};

/// Handle for record operations on behalf of one caller.
///
/// Obtained via [`Executor::records()`].
pub struct Records<'a> {
    executor: &'a Executor,
    inv: &'a Invocation<'a>,
}

impl<'a> Records<'a> {
    pub(crate) fn new(executor: &'a Executor, inv: &'a Invocation<'a>) -> Self {
        Self { executor, inv }
    }

    /// Store a CID record and return it as written.
    pub fn store(&self, cid: &str, file_name: &str) -> Result<Record> {
        match self.executor.execute(
            self.inv,
            Command::StoreCid {
                cid: cid.to_string(),
                file_name: file_name.to_string(),
            },
        )? {
            Output::Record(record) => Ok(record),
            _ => Err(Error::Internal {
                reason: "Unexpected output for StoreCID".into(),
            }),
        }
    }

    /// Get one of the caller's records.
    pub fn get(&self, cid: &str) -> Result<Record> {
        match self.executor.execute(
            self.inv,
            Command::GetCid {
                cid: cid.to_string(),
            },
        )? {
            Output::Record(record) => Ok(record),
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetCID".into(),
            }),
        }
    }

    /// List all of the caller's records in CID order.
    pub fn list(&self) -> Result<Vec<Record>> {
        match self.executor.execute(self.inv, Command::GetAllCids)? {
            Output::Records(records) => Ok(records),
            _ => Err(Error::Internal {
                reason: "Unexpected output for GetAllCIDs".into(),
            }),
        }
    }

    /// List all records stored by `owner`.
    pub fn by_owner(&self, owner: &str) -> Result<Vec<Record>> {
        match self.executor.execute(
            self.inv,
            Command::QueryCidsByOwner {
                owner: owner.to_string(),
            },
        )? {
            Output::Records(records) => Ok(records),
            _ => Err(Error::Internal {
                reason: "Unexpected output for QueryCIDsByOwner".into(),
            }),
        }
    }
}
