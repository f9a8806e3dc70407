//! In-process host capabilities for cidstore
//!
//! - MemoryState: ordered in-memory world state
//! - StaticIdentity: fixed caller identity
//!
//! Ledger hosts supply their own implementations of the core contracts;
//! these are for embedding and tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identity;
pub mod memory;

pub use identity::StaticIdentity;
pub use memory::{MemoryScan, MemoryState};
