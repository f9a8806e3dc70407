//! Store/get/list laws.

use chrono::Utc;
use cidstore::{Record, StaticIdentity};

use crate::test_utils::Ledger;

#[test]
fn get_all_returns_exactly_what_was_stored_in_cid_order() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let bob = StaticIdentity::new("bob");
    let inv = ledger.as_caller(&alice);

    let mut cids: Vec<String> = (0..50).map(|i| format!("Qm{:03}", (i * 37) % 50)).collect();
    for cid in &cids {
        ledger.store.store(&inv, cid, "f").unwrap();
    }
    // Noise in a neighbouring partition.
    for i in 0..10 {
        ledger
            .store
            .store(&ledger.as_caller(&bob), &format!("Qm{:03}", i), "f")
            .unwrap();
    }

    cids.sort();
    cids.dedup();
    let listed: Vec<String> = ledger
        .store
        .get_all(&inv)
        .unwrap()
        .into_iter()
        .map(|r| r.cid)
        .collect();
    assert_eq!(listed, cids);
}

#[test]
fn stored_timestamp_is_not_before_call() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let inv = ledger.as_caller(&alice);

    for i in 0..20 {
        let before = Utc::now();
        let cid = format!("cid-{}", i);
        ledger.store.store(&inv, &cid, "f").unwrap();
        assert!(ledger.store.get(&inv, &cid).unwrap().timestamp >= before);
    }
}

#[test]
fn stored_bytes_decode_to_returned_record() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let inv = ledger.as_caller(&alice);

    let stored = ledger.store.store(&inv, "Qm\u{e9}t\u{e9}", "r\u{e9}sum\u{e9}.pdf").unwrap();
    let raw = cidstore::StateBackend::get_state(&ledger.state, stored.key().as_bytes())
        .unwrap()
        .unwrap();
    assert_eq!(Record::from_bytes(&raw).unwrap(), stored);

    let text = String::from_utf8(raw).unwrap();
    assert!(text.starts_with(r#"{"cid":"#));
    assert!(text.contains(r#""fileName":"#));
}

#[test]
fn non_ascii_and_empty_cids_stay_in_partition() {
    let ledger = Ledger::new();
    let alice = StaticIdentity::new("alice");
    let inv = ledger.as_caller(&alice);

    for cid in ["", "\u{10ffff}", "\u{7f}", "zzz"] {
        ledger.store.store(&inv, cid, "f").unwrap();
    }
    let listed: Vec<String> = ledger
        .store
        .get_all(&inv)
        .unwrap()
        .into_iter()
        .map(|r| r.cid)
        .collect();
    assert_eq!(listed, vec!["", "zzz", "\u{7f}", "\u{10ffff}"]);
}
