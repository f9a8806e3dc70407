//! Command handlers, one module per command family.

pub mod ledger;
pub mod records;
