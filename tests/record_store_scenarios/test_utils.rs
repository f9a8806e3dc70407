//! Shared fixtures.

use cidstore::{Invocation, MemoryState, RecordStore, StaticIdentity};

/// Install a test log writer once per process. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A world state with a read-write store on top.
pub struct Ledger {
    pub state: MemoryState,
    pub store: RecordStore,
}

impl Ledger {
    pub fn new() -> Self {
        init_tracing();
        Self {
            state: MemoryState::new(),
            store: RecordStore::new(),
        }
    }

    /// Invocation on this ledger as `identity`.
    pub fn as_caller<'a>(&'a self, identity: &'a StaticIdentity) -> Invocation<'a> {
        Invocation::new(identity, &self.state)
    }
}
