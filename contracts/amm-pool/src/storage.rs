use amm_types::{AmmConfig, AmmError, Pool, PoolId, MAX_POOLS_PER_PAGE};
use soroban_sdk::{contracttype, Address, Env, Vec};

// ============================================================================
// SOROBAN RESOURCE LIMITS - Storage layout for the pool ledger:
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// - Each pool record (~150 bytes) is stored as a separate entry
// - Each (pool, account) contribution is stored as a separate entry so a
//   pool record never grows with its depositor count
// - Zero contributions are removed to save storage
// - The pool list uses indexed storage (PoolCount + PoolAt) instead of Vec
//
// Operation footprints:
// - create_pool: pool + contribution + index + counter + 2 token legs
// - add/remove liquidity: pool + contribution + 2 token legs
// - swap: pool + 2 token legs
// ============================================================================

/// Storage keys for the AMM contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract configuration (Instance storage)
    Config,
    /// Number of pools ever created (Instance storage)
    PoolCount,
    /// Pool record: pool_id -> Pool (Persistent storage)
    Pool(PoolId),
    /// Pool id at creation index (Persistent storage)
    PoolAt(u32),
    /// Contribution in asset A terms: (pool_id, account) -> u128 (Persistent storage)
    Contribution(PoolId, Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> AmmConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_default()
}

pub fn set_config(env: &Env, config: &AmmConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Pools ===

fn read_pool(env: &Env, id: &PoolId) -> Option<Pool> {
    let key = DataKey::Pool(id.clone());
    let pool: Option<Pool> = env.storage().persistent().get(&key);
    if pool.is_some() {
        extend_persistent_ttl(env, &key);
    }
    pool
}

/// True iff a record is present and its invariant is non-zero
pub fn has_pool(env: &Env, id: &PoolId) -> bool {
    read_pool(env, id).is_some_and(|pool| pool.is_created(env))
}

pub fn get_pool(env: &Env, id: &PoolId) -> Result<Pool, AmmError> {
    read_pool(env, id)
        .filter(|pool| pool.is_created(env))
        .ok_or(AmmError::PoolNotFound)
}

/// Only creation path for a pool record
pub fn insert_pool(env: &Env, id: &PoolId, pool: &Pool) -> Result<(), AmmError> {
    if has_pool(env, id) {
        return Err(AmmError::AlreadyExists);
    }
    set_pool(env, id, pool);
    push_pool_index(env, id);
    Ok(())
}

/// Write back a record obtained through `get_pool`
pub fn set_pool(env: &Env, id: &PoolId, pool: &Pool) {
    let key = DataKey::Pool(id.clone());
    env.storage().persistent().set(&key, pool);
    extend_persistent_ttl(env, &key);
}

// === Pool Index ===

pub fn get_pool_count(env: &Env) -> u32 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::PoolCount)
        .unwrap_or(0)
}

fn push_pool_index(env: &Env, id: &PoolId) {
    let count = get_pool_count(env);

    let key = DataKey::PoolAt(count);
    env.storage().persistent().set(&key, id);
    extend_persistent_ttl(env, &key);

    env.storage()
        .instance()
        .set(&DataKey::PoolCount, &(count + 1));
}

pub fn get_pool_at(env: &Env, index: u32) -> Option<PoolId> {
    env.storage().persistent().get(&DataKey::PoolAt(index))
}

/// Pool ids in creation order, at most `MAX_POOLS_PER_PAGE` per call
pub fn get_pools_paginated(env: &Env, start_index: u32, limit: u32) -> Vec<PoolId> {
    let safe_limit = limit.min(MAX_POOLS_PER_PAGE);
    let end_index = start_index
        .saturating_add(safe_limit)
        .min(get_pool_count(env));

    let mut pools: Vec<PoolId> = Vec::new(env);
    for i in start_index..end_index {
        if let Some(id) = get_pool_at(env, i) {
            pools.push_back(id);
        }
    }
    pools
}

// === Contributions ===

pub fn get_contribution(env: &Env, id: &PoolId, account: &Address) -> u128 {
    let key = DataKey::Contribution(id.clone(), account.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_contribution(env: &Env, id: &PoolId, account: &Address, amount: u128) {
    let key = DataKey::Contribution(id.clone(), account.clone());
    if amount == 0 {
        // Remove empty contribution
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}
