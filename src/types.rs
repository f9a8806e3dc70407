//! Public types for the cidstore API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Record model
// ============================================================================

pub use cidstore_core::{CompositeKey, Record};

// ============================================================================
// Host contracts
// ============================================================================

pub use cidstore_core::{IdentityResolver, Invocation, KvEntry, StateBackend, StateIterator, TxId};

// ============================================================================
// Errors
// ============================================================================

pub use cidstore_core::{BackendError, IdentityError, StoreError, StoreResult};

// ============================================================================
// Configuration
// ============================================================================

pub use cidstore_security::{AccessMode, OpenOptions};
