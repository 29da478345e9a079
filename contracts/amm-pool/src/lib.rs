#![no_std]

mod custody;
mod invariants;
mod liquidity;
mod storage;
mod swap;

#[cfg(feature = "certora")]
mod certora_specs;

#[cfg(test)]
mod testutils;

use amm_types::{AmmConfig, AmmError, Pool, PoolId, PoolIdScheme};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use storage::{
    get_config, get_contribution, get_pool, get_pool_at, get_pool_count, get_pools_paginated,
    has_config, has_pool, set_config,
};

#[contract]
pub struct AmmPool;

#[contractimpl]
impl AmmPool {
    /// Choose the pool id derivation.
    ///
    /// Optional: without it the contract derives ids with `PoolIdScheme::Xor`.
    /// Can only run once, and only while no pool exists.
    pub fn initialize(env: Env, id_scheme: PoolIdScheme) -> Result<(), AmmError> {
        if has_config(&env) || get_pool_count(&env) > 0 {
            return Err(AmmError::AlreadyInitialized);
        }
        set_config(&env, &AmmConfig::new(id_scheme));
        Ok(())
    }

    /// Create a pool for an asset pair with its first deposit
    ///
    /// `caller` must have approved this contract for at least `amount_a`
    /// of `asset_a` and `amount_b` of `asset_b`.
    ///
    /// # Returns
    /// The id of the new pool
    pub fn create_pool(
        env: Env,
        caller: Address,
        asset_a: Address,
        asset_b: Address,
        amount_a: u128,
        amount_b: u128,
    ) -> Result<PoolId, AmmError> {
        caller.require_auth();
        liquidity::create_pool(&env, caller, asset_a, asset_b, amount_a, amount_b)
    }

    /// Add liquidity at the pool's current ratio
    ///
    /// # Returns
    /// (amount_a, amount_b) - Token amounts deposited
    pub fn add_liquidity(
        env: Env,
        caller: Address,
        pool_id: PoolId,
        amount_a: u128,
    ) -> Result<(u128, u128), AmmError> {
        caller.require_auth();
        liquidity::add_liquidity(&env, caller, pool_id, amount_a)
    }

    /// Remove liquidity at the pool's current ratio
    ///
    /// # Returns
    /// (amount_a, amount_b) - Token amounts withdrawn
    pub fn remove_liquidity(
        env: Env,
        caller: Address,
        pool_id: PoolId,
        amount_a: u128,
    ) -> Result<(u128, u128), AmmError> {
        caller.require_auth();
        liquidity::remove_liquidity(&env, caller, pool_id, amount_a)
    }

    /// Execute a swap
    ///
    /// # Arguments
    /// * `caller` - Pays the input asset and receives the output asset
    /// * `a_to_b` - True if swapping asset A for asset B
    /// * `amount_in` - Exact amount of the input asset
    ///
    /// # Returns
    /// Amount of the output asset received
    pub fn swap(
        env: Env,
        caller: Address,
        pool_id: PoolId,
        a_to_b: bool,
        amount_in: u128,
    ) -> Result<u128, AmmError> {
        caller.require_auth();
        swap::execute_swap(&env, caller, pool_id, a_to_b, amount_in)
    }

    // === View Functions ===

    /// Pool id for an unordered asset pair
    pub fn derive_id(env: Env, asset_a: Address, asset_b: Address) -> PoolId {
        amm_math::derive_id(&env, get_config(&env).id_scheme, &asset_a, &asset_b)
    }

    /// True if a live pool is recorded for the id
    pub fn exists(env: Env, pool_id: PoolId) -> bool {
        has_pool(&env, &pool_id)
    }

    /// Get the full pool record
    pub fn get_pool(env: Env, pool_id: PoolId) -> Result<Pool, AmmError> {
        get_pool(&env, &pool_id)
    }

    /// Amount of asset B matching `amount_a` at the current reserves
    pub fn proportional_amount(env: Env, pool_id: PoolId, amount_a: u128) -> Result<u128, AmmError> {
        liquidity::proportional_amount(&env, &pool_id, amount_a)
    }

    /// Output a swap would produce right now
    pub fn quote(env: Env, pool_id: PoolId, a_to_b: bool, amount_in: u128) -> Result<u128, AmmError> {
        swap::quote(&env, &pool_id, a_to_b, amount_in)
    }

    /// Contribution credited to `account`, in asset A terms
    pub fn get_contribution(env: Env, pool_id: PoolId, account: Address) -> Result<u128, AmmError> {
        if !has_pool(&env, &pool_id) {
            return Err(AmmError::PoolNotFound);
        }
        Ok(get_contribution(&env, &pool_id, &account))
    }

    /// Get contract configuration
    pub fn get_config(env: Env) -> AmmConfig {
        get_config(&env)
    }

    /// Get total number of pools created
    pub fn pool_count(env: Env) -> u32 {
        get_pool_count(&env)
    }

    /// Get pool id at creation index
    pub fn pool_at(env: Env, index: u32) -> Option<PoolId> {
        get_pool_at(&env, index)
    }

    /// Get pool ids with pagination
    /// Returns up to `limit` ids (capped at 50) starting from `start_index`
    pub fn pools_paginated(env: Env, start_index: u32, limit: u32) -> Vec<PoolId> {
        get_pools_paginated(&env, start_index, limit)
    }
}
