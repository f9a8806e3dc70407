//! Fixed caller identities for embedded hosts and tests.

use cidstore_core::{IdentityError, IdentityResolver};

/// Resolver that always reports the same caller, or always fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticIdentity {
    /// Resolves to this principal ID
    Principal(String),
    /// Resolution fails with this reason
    Unresolvable(String),
}

impl StaticIdentity {
    /// Resolver for a fixed principal ID.
    pub fn new(id: impl Into<String>) -> Self {
        StaticIdentity::Principal(id.into())
    }

    /// Resolver that always fails.
    pub fn unresolvable(reason: impl Into<String>) -> Self {
        StaticIdentity::Unresolvable(reason.into())
    }
}

impl IdentityResolver for StaticIdentity {
    fn caller_id(&self) -> Result<String, IdentityError> {
        match self {
            StaticIdentity::Principal(id) => Ok(id.clone()),
            StaticIdentity::Unresolvable(reason) => Err(IdentityError::new(reason.clone())),
        }
    }
}
