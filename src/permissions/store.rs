//! Principal-to-level permission mapping

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::errors::PermissionError;
use crate::types::{PermissionLevel, Principal};

/// Single flat mapping from principal to level. The owner (deployer) is
/// seeded as `Admin` at construction; everyone else defaults to `None`
/// until granted.
#[derive(Debug, Clone)]
pub struct PermissionStore {
    owner: Principal,
    levels: BTreeMap<Principal, PermissionLevel>,
}

impl PermissionStore {
    pub fn new(owner: Principal) -> Self {
        let mut levels = BTreeMap::new();
        levels.insert(owner.clone(), PermissionLevel::Admin);
        Self { owner, levels }
    }

    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    /// Current level for a principal; absent entries read as `None`.
    pub fn level_of(&self, principal: &Principal) -> PermissionLevel {
        self.levels
            .get(principal)
            .copied()
            .unwrap_or(PermissionLevel::None)
    }

    /// Record `target -> level`. Only the owner or a principal already
    /// holding `Admin` may grant. Granting `None` is the revoke path;
    /// there is no separate removal.
    pub fn grant(
        &mut self,
        granter: &Principal,
        target: Principal,
        level: PermissionLevel,
    ) -> Result<bool, PermissionError> {
        if *granter != self.owner && self.level_of(granter) < PermissionLevel::Admin {
            debug!(%granter, %target, %level, "grant rejected");
            return Err(PermissionError::Unauthorized {
                caller: granter.to_string(),
                held: self.level_of(granter).to_string(),
                required: PermissionLevel::Admin.to_string(),
            });
        }

        self.levels.insert(target.clone(), level);
        info!(%granter, %target, %level, "permission granted");
        Ok(true)
    }

    /// Gate check used by the router before any mutation.
    pub fn require_at_least(
        &self,
        principal: &Principal,
        required: PermissionLevel,
    ) -> Result<(), PermissionError> {
        let held = self.level_of(principal);
        if held >= required {
            Ok(())
        } else {
            Err(PermissionError::Unauthorized {
                caller: principal.to_string(),
                held: held.to_string(),
                required: required.to_string(),
            })
        }
    }
}
