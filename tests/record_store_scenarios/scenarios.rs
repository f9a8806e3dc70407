//! Multi-owner walkthroughs.

use cidstore::{Command, Executor, Output, StaticIdentity, StoreError};

use crate::test_utils::Ledger;

#[test]
fn alice_reads_her_record_bob_does_not() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let bob = StaticIdentity::new("bob");

    ledger
        .store
        .store(&ledger.as_caller(&alice), "Qm123", "report.pdf")
        .unwrap();

    let record = ledger.store.get(&ledger.as_caller(&alice), "Qm123").unwrap();
    assert_eq!(record.cid, "Qm123");
    assert_eq!(record.owner, "alice");
    assert_eq!(record.file_name, "report.pdf");

    let err = ledger.store.get(&ledger.as_caller(&bob), "Qm123").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));

    let all = ledger.store.get_all(&ledger.as_caller(&alice)).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].cid, "Qm123");

    assert!(ledger.store.get_all(&ledger.as_caller(&bob)).unwrap().is_empty());
}

#[test]
fn overwrite_keeps_latest_write() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let inv = ledger.as_caller(&alice);

    ledger.store.store(&inv, "A", "first.txt").unwrap();
    ledger.store.store(&inv, "B", "b.txt").unwrap();
    let latest = ledger.store.store(&inv, "A", "second.txt").unwrap();

    let all = ledger.store.get_all(&inv).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].cid, "A");
    assert_eq!(all[1].cid, "B");
    assert_eq!(all[0].file_name, "second.txt");
    assert_eq!(all[0].timestamp, latest.timestamp);
}

#[test]
fn same_cid_different_owners_are_independent() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let bob = StaticIdentity::new("bob");

    ledger.store.store(&ledger.as_caller(&alice), "Qm1", "alice.pdf").unwrap();
    ledger.store.store(&ledger.as_caller(&bob), "Qm1", "bob.pdf").unwrap();

    assert_eq!(
        ledger.store.get(&ledger.as_caller(&alice), "Qm1").unwrap().file_name,
        "alice.pdf"
    );
    assert_eq!(
        ledger.store.get(&ledger.as_caller(&bob), "Qm1").unwrap().file_name,
        "bob.pdf"
    );
    assert_eq!(ledger.state.len(), 2);
}

#[test]
fn fabric_style_principal_ids() {
    let ledger = Ledger::new();
    let id = StaticIdentity::new("x509::CN=appUser,OU=client::CN=ca.org1.example.com");
    let inv = ledger.as_caller(&id);

    ledger.store.store(&inv, "bafy1", "photo.png").unwrap();
    assert_eq!(
        ledger.state.keys(),
        vec![b"cid_x509::CN=appUser,OU=client::CN=ca.org1.example.com_bafy1".to_vec()]
    );
    assert_eq!(ledger.store.get_all(&inv).unwrap().len(), 1);
}

#[test]
fn executor_routes_named_functions() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let inv = ledger.as_caller(&alice);
    let executor = Executor::new(ledger.store.clone());

    executor.invoke(&inv, "InitLedger", &[]).unwrap();
    executor
        .invoke(&inv, "StoreCID", &["Qm9".to_string(), "notes.md".to_string()])
        .unwrap();

    match executor.execute(&inv, Command::GetAllCids).unwrap() {
        Output::Records(records) => {
            assert_eq!(records.len(), 1);
            assert_eq!(records[0].file_name, "notes.md");
        }
        other => panic!("Expected Records, got {:?}", other),
    }
}
