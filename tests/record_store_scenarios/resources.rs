//! Scan cursor release and failure atomicity.

use cidstore::{StateBackend, StaticIdentity, StoreError};

use crate::test_utils::Ledger;

#[test]
fn every_scan_is_released() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let inv = ledger.as_caller(&alice);

    ledger.store.store(&inv, "A", "f").unwrap();
    for _ in 0..5 {
        ledger.store.get_all(&inv).unwrap();
        ledger.store.query_by_owner(&inv, "alice").unwrap();
    }
    assert_eq!(ledger.state.scans_opened(), 10);
    assert_eq!(ledger.state.open_scans(), 0);
}

#[test]
fn corrupt_entry_fails_whole_listing_and_releases_scan() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let inv = ledger.as_caller(&alice);

    ledger.store.store(&inv, "A", "f").unwrap();
    ledger.store.store(&inv, "C", "f").unwrap();
    ledger
        .state
        .put_state(b"cid_alice_B", br#"{"cid":"B"}"#.to_vec())
        .unwrap();

    let err = ledger.store.get_all(&inv).unwrap_err();
    assert!(matches!(err, StoreError::BackendScan { .. }));
    assert_eq!(ledger.state.open_scans(), 0);

    // Point reads of intact records still work.
    assert_eq!(ledger.store.get(&inv, "A").unwrap().cid, "A");
    assert!(matches!(
        ledger.store.get(&inv, "B").unwrap_err(),
        StoreError::Deserialization { .. }
    ));
}

#[test]
fn identity_failure_opens_no_scan() {
    let ledger = Ledger::new();
    let nobody = StaticIdentity::unresolvable("certificate expired");
    let err = ledger.store.get_all(&ledger.as_caller(&nobody)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to get client identity: certificate expired"
    );
    assert_eq!(ledger.state.scans_opened(), 0);
}
