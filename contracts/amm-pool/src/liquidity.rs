use crate::custody::{pull, push};
use crate::invariants;
use crate::storage::{get_config, get_contribution, get_pool, insert_pool, set_contribution, set_pool};
use amm_math::derive_id;
use amm_types::{AmmError, Pool, PoolId};
use soroban_sdk::{Address, Env, Symbol};

/// Create a pool for an unordered asset pair and credit the first deposit.
///
/// The caller's `amount_a:amount_b` ratio becomes the pool's price baseline.
/// The record is written before any asset moves; a failed transfer aborts
/// the invocation and the host discards the record with it.
pub fn create_pool(
    env: &Env,
    caller: Address,
    asset_a: Address,
    asset_b: Address,
    amount_a: u128,
    amount_b: u128,
) -> Result<PoolId, AmmError> {
    if amount_a == 0 || amount_b == 0 {
        return Err(AmmError::ZeroAmount);
    }
    if asset_a == asset_b {
        return Err(AmmError::IdenticalAssets);
    }

    let config = get_config(env);
    let id = derive_id(env, config.id_scheme, &asset_a, &asset_b);

    // Effects
    let pool = Pool::new(env, asset_a.clone(), asset_b.clone(), amount_a, amount_b);
    debug_assert!(invariants::reserves_positive(&pool));
    insert_pool(env, &id, &pool)?;
    set_contribution(env, &id, &caller, amount_a);

    // Interactions
    pull(env, &asset_a, &caller, amount_a)?;
    pull(env, &asset_b, &caller, amount_b)?;

    env.events().publish(
        (Symbol::new(env, "pool_created"),),
        (id.clone(), asset_a, asset_b, caller, amount_a, amount_b),
    );

    Ok(id)
}

/// Deposit `amount_a` plus the matching amount of B at the live ratio
///
/// # Returns
/// (amount_a, amount_b) - Token amounts deposited
pub fn add_liquidity(
    env: &Env,
    caller: Address,
    id: PoolId,
    amount_a: u128,
) -> Result<(u128, u128), AmmError> {
    let mut pool = get_pool(env, &id)?;
    if amount_a == 0 {
        return Err(AmmError::ZeroAmount);
    }

    let amount_b = amm_math::proportional_amount(env, pool.reserve_a, pool.reserve_b, amount_a)?;
    let before = pool.clone();

    // Effects. invariant_k keeps its creation value.
    pool.reserve_a = pool
        .reserve_a
        .checked_add(amount_a)
        .ok_or(AmmError::ArithmeticOverflow)?;
    pool.reserve_b = pool
        .reserve_b
        .checked_add(amount_b)
        .ok_or(AmmError::ArithmeticOverflow)?;
    let contribution = get_contribution(env, &id, &caller)
        .checked_add(amount_a)
        .ok_or(AmmError::ArithmeticOverflow)?;

    debug_assert!(invariants::invariant_unchanged(&before, &pool));
    debug_assert!(invariants::assets_unchanged(&before, &pool));
    set_pool(env, &id, &pool);
    set_contribution(env, &id, &caller, contribution);

    // Interactions
    pull(env, &pool.asset_a, &caller, amount_a)?;
    pull(env, &pool.asset_b, &caller, amount_b)?;

    env.events().publish(
        (Symbol::new(env, "liquidity_added"),),
        (id, caller, amount_a, amount_b),
    );

    Ok((amount_a, amount_b))
}

/// Withdraw `amount_a` of contribution plus the matching amount of B
///
/// # Returns
/// (amount_a, amount_b) - Token amounts paid out
pub fn remove_liquidity(
    env: &Env,
    caller: Address,
    id: PoolId,
    amount_a: u128,
) -> Result<(u128, u128), AmmError> {
    let mut pool = get_pool(env, &id)?;
    if amount_a == 0 {
        return Err(AmmError::ZeroAmount);
    }

    let contribution = get_contribution(env, &id, &caller);
    if !invariants::withdrawal_within_contribution(contribution, amount_a) {
        return Err(AmmError::InsufficientContribution);
    }

    let amount_b = amm_math::proportional_amount(env, pool.reserve_a, pool.reserve_b, amount_a)?;
    let before = pool.clone();

    // Effects - all state settles before any asset leaves custody
    pool.reserve_a = pool
        .reserve_a
        .checked_sub(amount_a)
        .ok_or(AmmError::InsufficientReserve)?;
    pool.reserve_b = pool
        .reserve_b
        .checked_sub(amount_b)
        .ok_or(AmmError::InsufficientReserve)?;

    debug_assert!(invariants::invariant_unchanged(&before, &pool));
    debug_assert!(invariants::assets_unchanged(&before, &pool));
    set_pool(env, &id, &pool);
    set_contribution(env, &id, &caller, contribution - amount_a);

    // Interactions
    push(env, &pool.asset_a, &caller, amount_a)?;
    push(env, &pool.asset_b, &caller, amount_b)?;

    env.events().publish(
        (Symbol::new(env, "liquidity_removed"),),
        (id, caller, amount_a, amount_b),
    );

    Ok((amount_a, amount_b))
}

/// B amount matching `amount_a` at the pool's current reserves
pub fn proportional_amount(env: &Env, id: &PoolId, amount_a: u128) -> Result<u128, AmmError> {
    let pool = get_pool(env, id)?;
    amm_math::proportional_amount(env, pool.reserve_a, pool.reserve_b, amount_a)
}
