//! Commands accepted by the executor.
//!
//! Each variant is one named contract function. Hosts that route
//! invocations as a function name plus string arguments use
//! [`Command::parse`].

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A contract function invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "function", content = "args")]
pub enum Command {
    /// No-op initialization hook.
    InitLedger,
    /// Store a CID record for the caller.
    #[serde(rename = "StoreCID")]
    StoreCid {
        /// Content identifier
        cid: String,
        /// Label stored with the CID
        #[serde(rename = "fileName")]
        file_name: String,
    },
    /// Get one of the caller's records.
    #[serde(rename = "GetCID")]
    GetCid {
        /// Content identifier
        cid: String,
    },
    /// Get all of the caller's records.
    #[serde(rename = "GetAllCIDs")]
    GetAllCids,
    /// Get all records stored by a given owner.
    #[serde(rename = "QueryCIDsByOwner")]
    QueryCidsByOwner {
        /// Owner principal ID
        owner: String,
    },
}

impl Command {
    /// Contract function name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::InitLedger => "InitLedger",
            Command::StoreCid { .. } => "StoreCID",
            Command::GetCid { .. } => "GetCID",
            Command::GetAllCids => "GetAllCIDs",
            Command::QueryCidsByOwner { .. } => "QueryCIDsByOwner",
        }
    }

    /// Build a command from a function name and positional string arguments.
    ///
    /// # Errors
    ///
    /// - `UnknownFunction`: no function with this name
    /// - `InvalidInput`: wrong number of arguments
    pub fn parse(function: &str, args: &[String]) -> Result<Command> {
        let cmd = match (function, args) {
            ("InitLedger", []) => Command::InitLedger,
            ("StoreCID", [cid, file_name]) => Command::StoreCid {
                cid: cid.clone(),
                file_name: file_name.clone(),
            },
            ("GetCID", [cid]) => Command::GetCid { cid: cid.clone() },
            ("GetAllCIDs", []) => Command::GetAllCids,
            ("QueryCIDsByOwner", [owner]) => Command::QueryCidsByOwner {
                owner: owner.clone(),
            },
            ("InitLedger" | "StoreCID" | "GetCID" | "GetAllCIDs" | "QueryCIDsByOwner", _) => {
                return Err(Error::InvalidInput {
                    reason: format!(
                        "{} expects {} argument(s), got {}",
                        function,
                        arity(function),
                        args.len()
                    ),
                })
            }
            _ => {
                return Err(Error::UnknownFunction {
                    name: function.to_string(),
                })
            }
        };
        Ok(cmd)
    }

    /// Check if the command writes to the world state.
    pub fn is_write(&self) -> bool {
        matches!(self, Command::StoreCid { .. })
    }
}

fn arity(function: &str) -> usize {
    match function {
        "StoreCID" => 2,
        "GetCID" | "QueryCIDsByOwner" => 1,
        _ => 0,
    }
}
