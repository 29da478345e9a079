use crate::custody::{pull, push};
use crate::invariants;
use crate::storage::{get_pool, set_pool};
use amm_types::{AmmError, Pool, PoolId};
use soroban_sdk::{Address, Env, Symbol};

/// Output for `amount_in` against a pool record, without side effects
fn compute_output(env: &Env, pool: &Pool, a_to_b: bool, amount_in: u128) -> Result<u128, AmmError> {
    if amount_in == 0 {
        return Err(AmmError::ZeroAmount);
    }
    let (reserve_in, reserve_out) = pool.reserves_for(a_to_b);
    amm_math::output_for_input(env, &pool.invariant_k, reserve_in, reserve_out, amount_in)
}

/// Quote an exact-input swap against the pool's recorded invariant
pub fn quote(env: &Env, id: &PoolId, a_to_b: bool, amount_in: u128) -> Result<u128, AmmError> {
    let pool = get_pool(env, id)?;
    compute_output(env, &pool, a_to_b, amount_in)
}

/// Execute an exact-input swap
///
/// Reserves are updated and written back before either transfer. If a
/// transfer fails the error aborts the invocation and the host rolls the
/// reserve update back. `invariant_k` is left untouched.
///
/// # Returns
/// Amount of the output asset paid to `caller`
pub fn execute_swap(
    env: &Env,
    caller: Address,
    id: PoolId,
    a_to_b: bool,
    amount_in: u128,
) -> Result<u128, AmmError> {
    let mut pool = get_pool(env, &id)?;
    let amount_out = compute_output(env, &pool, a_to_b, amount_in)?;
    let before = pool.clone();

    let (asset_in, asset_out) = if a_to_b {
        pool.reserve_a = pool
            .reserve_a
            .checked_add(amount_in)
            .ok_or(AmmError::InsufficientReserve)?;
        pool.reserve_b = pool
            .reserve_b
            .checked_sub(amount_out)
            .ok_or(AmmError::InsufficientReserve)?;
        (pool.asset_a.clone(), pool.asset_b.clone())
    } else {
        pool.reserve_b = pool
            .reserve_b
            .checked_add(amount_in)
            .ok_or(AmmError::InsufficientReserve)?;
        pool.reserve_a = pool
            .reserve_a
            .checked_sub(amount_out)
            .ok_or(AmmError::InsufficientReserve)?;
        (pool.asset_b.clone(), pool.asset_a.clone())
    };

    debug_assert!(invariants::swap_reserves_consistent(
        &before, &pool, a_to_b, amount_in, amount_out
    ));
    debug_assert!(invariants::invariant_unchanged(&before, &pool));
    debug_assert!(invariants::assets_unchanged(&before, &pool));
    set_pool(env, &id, &pool);

    // Caller pays input asset, receives output asset
    pull(env, &asset_in, &caller, amount_in)?;
    push(env, &asset_out, &caller, amount_out)?;

    env.events().publish(
        (Symbol::new(env, "swap"),),
        (id, caller, a_to_b, amount_in, amount_out),
    );

    Ok(amount_out)
}
