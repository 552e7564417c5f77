//! Keyed in-memory pool store

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::errors::RegistryError;
use crate::pools::validation::validate_pool;
use crate::types::{LiquidityPool, PoolKey};

/// Owns every `LiquidityPool` record, keyed by `(pool_id, dex_id)`.
/// A `BTreeMap` keeps iteration order deterministic, which matters for
/// pool-id resolution and for reproducible reporting.
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: BTreeMap<PoolKey, LiquidityPool>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Validation runs before any write, so a rejected
    /// registration leaves the registry exactly as it was. Duplicate keys
    /// are refused unless `overwrite` is set (the router sets it for
    /// `Admin` callers only, so a non-admin cannot clobber a live pool).
    pub fn register(
        &mut self,
        pool: LiquidityPool,
        overwrite: bool,
    ) -> Result<bool, RegistryError> {
        validate_pool(&pool)?;

        let key = pool.key();
        if !overwrite && self.pools.contains_key(&key) {
            debug!(pool = %key, "duplicate registration rejected");
            return Err(RegistryError::AlreadyExists(key));
        }

        info!(
            pool = %key,
            token_a = %pool.token_a,
            token_b = %pool.token_b,
            reserve_a = pool.reserve_a,
            reserve_b = pool.reserve_b,
            fee_bps = pool.fee_bps,
            "pool registered"
        );
        self.pools.insert(key, pool);
        Ok(true)
    }

    pub fn get(&self, key: &PoolKey) -> Option<&LiquidityPool> {
        self.pools.get(key)
    }

    /// Replace both reserves of an existing pool in one step.
    pub fn update_reserves(
        &mut self,
        key: &PoolKey,
        new_reserve_a: u128,
        new_reserve_b: u128,
    ) -> Result<bool, RegistryError> {
        let pool = self
            .pools
            .get_mut(key)
            .ok_or_else(|| RegistryError::PoolNotFound(key.clone()))?;

        pool.reserve_a = new_reserve_a;
        pool.reserve_b = new_reserve_b;
        debug!(pool = %key, reserve_a = new_reserve_a, reserve_b = new_reserve_b, "reserves updated");
        Ok(true)
    }

    /// First pool whose `pool_id` matches, in key order. The public
    /// simulate surface addresses pools by id alone; with cross-exchange
    /// routes ids are distinct in practice, and key order makes the
    /// ambiguous case deterministic.
    pub fn resolve_pool_id(&self, pool_id: &str) -> Option<&LiquidityPool> {
        self.pools
            .iter()
            .find(|(key, _)| key.pool_id == pool_id)
            .map(|(_, pool)| pool)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PoolKey, &LiquidityPool)> {
        self.pools.iter()
    }
}
