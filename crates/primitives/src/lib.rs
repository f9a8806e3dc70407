//! Primitives layer for cidstore
//!
//! This crate implements the record store: an owner-scoped map from CIDs to
//! records, kept in a host-supplied world state.
//!
//! The store is a stateless facade. Identity and world state are passed in
//! with every call.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod scan;
pub mod store;

pub use store::RecordStore;
