//! Core types for cidstore
//!
//! This crate defines the pieces every other crate builds on:
//! - Record: a CID entry and its JSON wire encoding
//! - CompositeKey: owner-scoped world-state keys and partition bounds
//! - StateBackend / IdentityResolver: contracts the host runtime fulfils
//! - StoreError: error taxonomy for record store operations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod key;
pub mod record;

pub use contract::{IdentityResolver, Invocation, KvEntry, StateBackend, StateIterator, TxId};
pub use error::{BackendError, IdentityError, StoreError, StoreResult};
pub use key::{owner_range, CompositeKey};
pub use record::Record;
