//! Composite key construction for CID records.
//!
//! Every record lives under a flat world-state key of the form
//! `cid_{owner}_{cid}`. The owner segment precedes the cid segment, so all
//! records of one owner share the prefix `cid_{owner}_` and sort together.
//!
//! Keys are raw bytes rather than `String`: the partition upper bound is the
//! single byte `0xFF`, which is not valid UTF-8 on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace prefix shared by every record key.
pub const KEY_PREFIX: &str = "cid";

/// Separator between key segments. Not escaped inside owner or cid.
const SEP: char = '_';

/// Pseudo-cid that sorts after every UTF-8 cid under byte-lexical ordering.
///
/// No UTF-8 encoded string contains the byte `0xFF`, so `[0xFF]` compares
/// greater than any real cid sharing the same owner prefix.
pub const PARTITION_END: u8 = 0xFF;

/// A world-state key addressing one record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeKey(Vec<u8>);

impl CompositeKey {
    /// Key for a record: `cid_{owner}_{cid}`.
    pub fn new(owner: &str, cid: &str) -> Self {
        let mut key = Self::owner_prefix(owner).0;
        key.extend_from_slice(cid.as_bytes());
        CompositeKey(key)
    }

    /// Prefix shared by every key of `owner`: `cid_{owner}_`.
    ///
    /// Equal to `CompositeKey::new(owner, "")`, the inclusive lower bound of
    /// the owner's partition.
    pub fn owner_prefix(owner: &str) -> Self {
        CompositeKey(format!("{KEY_PREFIX}{SEP}{owner}{SEP}").into_bytes())
    }

    /// Exclusive upper bound of `owner`'s partition: `cid_{owner}_\xFF`.
    pub fn partition_end(owner: &str) -> Self {
        let mut key = Self::owner_prefix(owner).0;
        key.push(PARTITION_END);
        CompositeKey(key)
    }

    /// Prefix shared by every record key of every owner: `cid_`.
    pub fn namespace_start() -> Self {
        CompositeKey(format!("{KEY_PREFIX}{SEP}").into_bytes())
    }

    /// Exclusive upper bound of the whole record namespace: `cid_\xFF`.
    pub fn namespace_end() -> Self {
        let mut key = Self::namespace_start().0;
        key.push(PARTITION_END);
        CompositeKey(key)
    }

    /// Wrap raw key bytes, e.g. a key returned by a range scan.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        CompositeKey(bytes.into())
    }

    /// Raw key bytes as written to the world state.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the key, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Half-open key interval `[start, end)` covering one owner's partition.
pub fn owner_range(owner: &str) -> (CompositeKey, CompositeKey) {
    (
        CompositeKey::new(owner, ""),
        CompositeKey::partition_end(owner),
    )
}

impl AsRef<[u8]> for CompositeKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for CompositeKey {
    /// Renders the key as escaped ASCII; the `0xFF` bound byte shows as `\xff`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_key_format_is_bit_exact() {
        let key = CompositeKey::new("alice", "Qm123");
        assert_eq!(key.as_bytes(), b"cid_alice_Qm123");
    }

    #[test]
    fn test_empty_cid_is_owner_prefix() {
        assert_eq!(CompositeKey::new("alice", ""), CompositeKey::owner_prefix("alice"));
        assert_eq!(CompositeKey::owner_prefix("alice").as_bytes(), b"cid_alice_");
    }

    #[test]
    fn test_partition_end_appends_ff() {
        let end = CompositeKey::partition_end("alice");
        assert_eq!(end.as_bytes(), b"cid_alice_\xff");
        assert_eq!(end.to_string(), "cid_alice_\\xff");
    }

    #[test]
    fn test_namespace_bounds() {
        assert_eq!(CompositeKey::namespace_start().as_bytes(), b"cid_");
        assert_eq!(CompositeKey::namespace_end().as_bytes(), b"cid_\xff");
    }

    #[test]
    fn test_underscore_is_not_escaped() {
        // Known ambiguity: both pairs map to the same key.
        assert_eq!(
            CompositeKey::new("a", "b_c"),
            CompositeKey::new("a_b", "c")
        );
    }

    #[test]
    fn test_keys_of_one_owner_order_by_cid() {
        let a = CompositeKey::new("alice", "A");
        let b = CompositeKey::new("alice", "B");
        assert!(a < b);
    }

    proptest! {
        #[test]
        fn prop_cid_key_within_owner_range(owner in "[a-zA-Z0-9:=/,. -]{1,24}", cid in ".*") {
            let (start, end) = owner_range(&owner);
            let key = CompositeKey::new(&owner, &cid);
            prop_assert!(start <= key);
            prop_assert!(key < end);
        }

        #[test]
        fn prop_key_order_follows_cid_order(owner in "[a-z]{1,8}", a in ".*", b in ".*") {
            let ka = CompositeKey::new(&owner, &a);
            let kb = CompositeKey::new(&owner, &b);
            prop_assert_eq!(ka.cmp(&kb), a.as_bytes().cmp(b.as_bytes()));
        }
    }
}
