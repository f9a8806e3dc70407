//! cidstore: an owner-scoped CID record store.
//!
//! Records associate a content identifier with the identity that stored it,
//! a timestamp and a file name. They live in a key-value world state owned by
//! a host ledger runtime; this crate only builds keys, encodes records and
//! talks to the host through [`StateBackend`] and [`IdentityResolver`].
//!
//! ```ignore
//! use cidstore::{Invocation, MemoryState, RecordStore, StaticIdentity};
//!
//! let state = MemoryState::new();
//! let alice = StaticIdentity::new("alice");
//! let inv = Invocation::new(&alice, &state);
//!
//! let store = RecordStore::new();
//! store.store(&inv, "Qm123", "report.pdf")?;
//! assert_eq!(store.get_all(&inv)?.len(), 1);
//! ```

pub mod types;

pub use types::*;

pub use cidstore_executor::{Command, Error as ExecutorError, Executor, Output, Records};
pub use cidstore_primitives::RecordStore;
pub use cidstore_storage::{MemoryState, StaticIdentity};
