//! Typed IDs for type-safe entity references.
//!
//! Account numbers are plain integers issued by the accounts system; wrapping
//! them prevents accidentally passing a bare count or amount where an account
//! number is expected.

use serde::{Deserialize, Serialize};

/// Unique identifier for a customer account.
///
/// Valid account numbers are positive. Zero and negative values are
/// representable because they arrive from untrusted callers; they are
/// rejected by purchase validation, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Creates an account ID from a raw account number.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw account number.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Returns true if this is a valid (positive) account number.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for AccountId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AccountId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
