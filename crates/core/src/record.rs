//! The CID record and its wire encoding.
//!
//! A record is stored as a JSON object with exactly four fields, in this
//! order: `cid`, `owner`, `timestamp`, `fileName`. The timestamp is RFC 3339
//! text with sub-second precision so a decode returns the same instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key::CompositeKey;

/// A CID entry with ownership and file metadata.
///
/// `owner` and `timestamp` are assigned by the store at write time;
/// `cid` and `file_name` come from the caller unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Content identifier, opaque to the store.
    pub cid: String,
    /// Principal ID of the identity that stored the record.
    pub owner: String,
    /// Wall-clock time the record was stored.
    pub timestamp: DateTime<Utc>,
    /// Caller-supplied label.
    pub file_name: String,
}

impl Record {
    /// Create a record stamped with the current time.
    pub fn new(
        cid: impl Into<String>,
        owner: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self::with_timestamp(cid, owner, file_name, Utc::now())
    }

    /// Create a record with an explicit timestamp.
    pub fn with_timestamp(
        cid: impl Into<String>,
        owner: impl Into<String>,
        file_name: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            cid: cid.into(),
            owner: owner.into(),
            timestamp,
            file_name: file_name.into(),
        }
    }

    /// World-state key this record is stored under.
    pub fn key(&self) -> CompositeKey {
        CompositeKey::new(&self.owner, &self.cid)
    }

    /// Encode to the wire format.
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode from the wire format.
    pub fn from_bytes(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
