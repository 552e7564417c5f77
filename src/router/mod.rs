//! Public façade combining permissions, registry and engine
//!
//! Every mutating entry point runs its permission check before touching
//! state, and all validation happens before any write, so each call is an
//! all-or-nothing transition. Read-only entry points are open.

use tracing::warn;

use crate::arbitrage;
use crate::errors::{EngineError, PermissionError, RouterResult};
use crate::permissions::PermissionStore;
use crate::pools::PoolRegistry;
use crate::types::{
    ArbitrageQuote, LiquidityPool, PermissionLevel, PoolKey, Principal, TokenId,
};

pub struct Router {
    permissions: PermissionStore,
    registry: PoolRegistry,
}

impl Router {
    /// `owner` is the deploying identity; it starts with `Admin` and is the
    /// root of all grants.
    pub fn new(owner: Principal) -> Self {
        Self {
            permissions: PermissionStore::new(owner),
            registry: PoolRegistry::new(),
        }
    }

    /// Register or (for admins) replace a pool record. Requires `Execute`.
    /// Non-admin callers cannot overwrite a live key; that policy keeps a
    /// merely-`Execute` principal from clobbering someone else's pool.
    #[allow(clippy::too_many_arguments)]
    pub fn register_pool(
        &mut self,
        caller: &Principal,
        pool_id: &str,
        dex_id: &str,
        token_a: TokenId,
        token_b: TokenId,
        reserve_a: u128,
        reserve_b: u128,
        fee_bps: u16,
    ) -> RouterResult<bool> {
        self.permissions
            .require_at_least(caller, PermissionLevel::Execute)
            .inspect_err(|e| warn!(%caller, error = %e, "register-pool refused"))?;

        let overwrite = self.permissions.level_of(caller) >= PermissionLevel::Admin;
        let pool = LiquidityPool {
            pool_id: pool_id.to_string(),
            dex_id: dex_id.to_string(),
            token_a,
            token_b,
            reserve_a,
            reserve_b,
            fee_bps,
        };
        Ok(self.registry.register(pool, overwrite)?)
    }

    /// Overwrite both reserves of an existing pool. Requires `Execute`.
    pub fn update_reserves(
        &mut self,
        caller: &Principal,
        pool_id: &str,
        dex_id: &str,
        new_reserve_a: u128,
        new_reserve_b: u128,
    ) -> RouterResult<bool> {
        self.permissions
            .require_at_least(caller, PermissionLevel::Execute)
            .inspect_err(|e| warn!(%caller, error = %e, "update-reserves refused"))?;

        let key = PoolKey::new(pool_id, dex_id);
        Ok(self
            .registry
            .update_reserves(&key, new_reserve_a, new_reserve_b)?)
    }

    /// Read-only lookup; absent keys are `None`, never an error.
    pub fn get_liquidity_pool(&self, pool_id: &str, dex_id: &str) -> Option<LiquidityPool> {
        self.registry.get(&PoolKey::new(pool_id, dex_id)).cloned()
    }

    /// Read-only two-leg simulation, open to any caller. Pools are
    /// addressed by id alone, matching the host call surface; ids resolve
    /// against the registry in deterministic key order.
    pub fn simulate_arbitrage(
        &self,
        source_pool_id: &str,
        dest_pool_id: &str,
        token_in: &TokenId,
        amount_in: u128,
    ) -> RouterResult<ArbitrageQuote> {
        let source = self
            .registry
            .resolve_pool_id(source_pool_id)
            .map(LiquidityPool::key)
            .ok_or_else(|| EngineError::PoolNotFound(PoolKey::new(source_pool_id, "")))?;
        let dest = self
            .registry
            .resolve_pool_id(dest_pool_id)
            .map(LiquidityPool::key)
            .ok_or_else(|| EngineError::PoolNotFound(PoolKey::new(dest_pool_id, "")))?;

        Ok(arbitrage::simulate_arbitrage(
            &self.registry,
            &source,
            &dest,
            token_in,
            amount_in,
        )?)
    }

    /// Grant a permission level by wire ordinal. Owner/`Admin` only.
    pub fn grant_permission(
        &mut self,
        caller: &Principal,
        target: Principal,
        level_ordinal: u8,
    ) -> RouterResult<bool> {
        let level = PermissionLevel::try_from(level_ordinal)
            .map_err(PermissionError::InvalidLevel)?;
        Ok(self.permissions.grant(caller, target, level)?)
    }

    /// Read-only permission lookup; unknown principals are `None`-level.
    pub fn get_permission(&self, principal: &Principal) -> PermissionLevel {
        self.permissions.level_of(principal)
    }

    pub fn owner(&self) -> &Principal {
        self.permissions.owner()
    }

    pub fn registry(&self) -> &PoolRegistry {
        &self.registry
    }
}
