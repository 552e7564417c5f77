//! Permission levels for privileged operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered capability levels. Authorization is a plain `level >= required`
/// comparison on the ordinal, nothing hierarchical beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    None = 0,
    Read = 1,
    Execute = 2,
    Admin = 3,
}

impl PermissionLevel {
    /// Wire ordinal, as accepted by `grant-contract-permission`.
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PermissionLevel {
    type Error = u8;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(PermissionLevel::None),
            1 => Ok(PermissionLevel::Read),
            2 => Ok(PermissionLevel::Execute),
            3 => Ok(PermissionLevel::Admin),
            other => Err(other),
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PermissionLevel::None => "none",
            PermissionLevel::Read => "read",
            PermissionLevel::Execute => "execute",
            PermissionLevel::Admin => "admin",
        };
        f.write_str(name)
    }
}
