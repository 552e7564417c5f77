//! Caller, token and pool identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque caller identity. The host runtime authenticates callers before
/// they reach us, so this is treated as trusted input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Token identifier, a principal-style contract address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Composite registry key. Pool ids are only unique per exchange, so the
/// registry always keys on the pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PoolKey {
    pub pool_id: String,
    pub dex_id: String,
}

impl PoolKey {
    pub fn new(pool_id: impl Into<String>, dex_id: impl Into<String>) -> Self {
        Self {
            pool_id: pool_id.into(),
            dex_id: dex_id.into(),
        }
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // An empty dex id marks a key that never resolved to an exchange.
        if self.dex_id.is_empty() {
            f.write_str(&self.pool_id)
        } else {
            write!(f, "{}@{}", self.pool_id, self.dex_id)
        }
    }
}
