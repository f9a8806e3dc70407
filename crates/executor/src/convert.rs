//! Error conversion from internal error types.
//!
//! This module provides conversions from [`StoreError`] to the executor's
//! [`Error`] type.

use crate::Error;
use cidstore_core::StoreError;

/// Convert a StoreError to an executor Error.
///
/// The full error chain is flattened into the `reason` text so nothing is
/// lost when the error is serialized for the invoker.
impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        let reason = err.to_string();
        match err {
            StoreError::Identity(_) => Error::Identity { reason },
            StoreError::Serialization { .. } => Error::Serialization { reason },
            StoreError::Deserialization { .. } => Error::Deserialization { reason },
            StoreError::BackendWrite { .. } => Error::BackendWrite { reason },
            StoreError::BackendRead { .. } => Error::BackendRead { reason },
            StoreError::BackendScan { .. } => Error::BackendScan { reason },
            StoreError::NotFound { cid } => Error::NotFound { cid },
            StoreError::ReadOnly { .. } => Error::AccessDenied { reason },
        }
    }
}

/// Convert a cidstore_core::StoreResult to an executor Result.
pub fn convert_result<T>(result: cidstore_core::StoreResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
