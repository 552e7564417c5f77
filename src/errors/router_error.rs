//! Custom error types for the routing core
//!
//! Every fallible operation returns one of these as a tagged value; nothing
//! panics across the public boundary. Each variant also carries a stable
//! numeric code so a ledger-style harness can branch on receipts without
//! parsing messages.

use thiserror::Error;

use crate::types::PoolKey;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("caller {caller} lacks permission: has {held}, needs {required}")]
    Unauthorized {
        caller: String,
        held: String,
        required: String,
    },

    #[error("permission ordinal {0} is outside 0..=3")]
    InvalidLevel(u8),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("token pair is degenerate: {0} on both sides")]
    InvalidTokenPair(String),

    #[error("fee {0} bps exceeds 10000")]
    InvalidFee(u16),

    #[error("pool already registered: {0}")]
    AlreadyExists(PoolKey),

    #[error("pool not found: {0}")]
    PoolNotFound(PoolKey),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("pool not found: {0}")]
    PoolNotFound(PoolKey),

    #[error("token {token} is not traded in pool {pool}")]
    TokenMismatch { pool: PoolKey, token: String },

    #[error("pool {0} has an empty reserve")]
    ZeroReserve(PoolKey),

    #[error("swap arithmetic overflowed the 128-bit domain")]
    Overflow,
}

/// Umbrella error returned by the router façade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error(transparent)]
    Permission(#[from] PermissionError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl PermissionError {
    pub fn code(&self) -> u32 {
        match self {
            PermissionError::Unauthorized { .. } => 100,
            PermissionError::InvalidLevel(_) => 101,
        }
    }
}

impl RegistryError {
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::InvalidTokenPair(_) => 102,
            RegistryError::InvalidFee(_) => 103,
            RegistryError::AlreadyExists(_) => 104,
            RegistryError::PoolNotFound(_) => 105,
        }
    }
}

impl EngineError {
    pub fn code(&self) -> u32 {
        match self {
            EngineError::PoolNotFound(_) => 105,
            EngineError::TokenMismatch { .. } => 106,
            EngineError::ZeroReserve(_) => 107,
            EngineError::Overflow => 108,
        }
    }
}

impl RouterError {
    pub fn code(&self) -> u32 {
        match self {
            RouterError::Permission(e) => e.code(),
            RouterError::Registry(e) => e.code(),
            RouterError::Engine(e) => e.code(),
        }
    }
}

pub type RouterResult<T> = Result<T, RouterError>;
