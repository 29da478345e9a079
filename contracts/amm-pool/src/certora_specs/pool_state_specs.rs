// ============================================================================
// POOL STATE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Creation rejects zero amounts
// 2. A created pool has the deposited reserves and their product as k
// 3. A pool can only be created once per unordered pair
//
// ============================================================================

use amm_types::AmmError;
use soroban_sdk::{Address, Env};

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;

use crate::{invariants, AmmPool};

/// RULE: create_pool with a zero amount always fails with ZeroAmount
#[rule]
pub fn create_pool_rejects_zero(
    env: Env,
    caller: Address,
    asset_a: Address,
    asset_b: Address,
    amount_a: u128,
    amount_b: u128,
) {
    cvlr_assume!(amount_a == 0 || amount_b == 0);

    let result = AmmPool::create_pool(env, caller, asset_a, asset_b, amount_a, amount_b);
    cvlr_assert!(result == Err(AmmError::ZeroAmount));
}

/// RULE: a created pool records the first deposit
#[rule]
pub fn create_pool_records_deposit(
    env: Env,
    caller: Address,
    asset_a: Address,
    asset_b: Address,
    amount_a: u128,
    amount_b: u128,
) {
    cvlr_assume!(amount_a > 0 && amount_b > 0);
    cvlr_assume!(asset_a != asset_b);

    if let Ok(id) = AmmPool::create_pool(
        env.clone(),
        caller.clone(),
        asset_a,
        asset_b,
        amount_a,
        amount_b,
    ) {
        let pool = AmmPool::get_pool(env.clone(), id.clone());
        cvlr_assert!(pool.is_ok());
        if let Ok(pool) = pool {
            cvlr_assert!(invariants::reserves_positive(&pool));
            cvlr_assert!(pool.reserve_a == amount_a);
            cvlr_assert!(pool.reserve_b == amount_b);
            cvlr_assert!(pool.invariant_k == amm_math::invariant_of(&env, amount_a, amount_b));
        }
        cvlr_assert!(super::model::contribution(&env, &id, &caller) == amount_a);
    }
}

/// RULE: a second creation for the reversed pair fails with AlreadyExists
#[rule]
pub fn create_pool_once(
    env: Env,
    caller: Address,
    asset_a: Address,
    asset_b: Address,
    amount_a: u128,
    amount_b: u128,
) {
    cvlr_assume!(amount_a > 0 && amount_b > 0);
    cvlr_assume!(asset_a != asset_b);

    let first = AmmPool::create_pool(
        env.clone(),
        caller.clone(),
        asset_a.clone(),
        asset_b.clone(),
        amount_a,
        amount_b,
    );
    cvlr_assume!(first.is_ok());

    let second = AmmPool::create_pool(env, caller, asset_b, asset_a, amount_a, amount_b);
    cvlr_assert!(second == Err(AmmError::AlreadyExists));
}
