//! Results returned by the executor.

use cidstore_core::Record;
use serde::{Deserialize, Serialize};

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Output {
    /// Command completed with no value.
    Unit,
    /// A single record.
    Record(Record),
    /// Records in ascending key order.
    Records(Vec<Record>),
}
