//! Record Store Scenario Suite
//!
//! End-to-end behaviour of the public `cidstore` API against the in-memory
//! world state:
//!
//! - **scenarios**: multi-owner walkthroughs
//! - **properties**: store/get/list laws over many inputs
//! - **resources**: scan cursor release and failure atomicity
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test record_store_scenarios
//! ```

mod test_utils;

mod properties;
mod resources;
mod scenarios;
