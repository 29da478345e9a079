// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over pool records that express the properties every entry
// point must preserve. They are checked by the unit tests and by the
// Certora rules under `certora_specs`.
//
// INVARIANT CATEGORIES:
//
// 1. EXISTENCE INVARIANTS
//    - A live pool has a non-zero invariant and positive reserves at creation
//    - Asset sides never change after creation
//
// 2. INVARIANT-VALUE INVARIANTS
//    - invariant_k is fixed at creation and never recomputed
//
// 3. PROPORTIONALITY INVARIANTS
//    - Deposits and withdrawals follow the live ratio, B side rounded down
//
// 4. SWAP INVARIANTS
//    - Input side grows by exactly the input, output side shrinks by exactly
//      the output, output side never reaches zero
//
// ============================================================================

use amm_types::Pool;
use soroban_sdk::{Env, U256};

// ============================================================================
// EXISTENCE INVARIANTS
// ============================================================================

/// Invariant: both reserves are positive
///
/// Holds from creation until liquidity is withdrawn down to zero.
pub fn reserves_positive(pool: &Pool) -> bool {
    pool.reserve_a > 0 && pool.reserve_b > 0
}

/// Invariant: asset sides are fixed at creation
pub fn assets_unchanged(before: &Pool, after: &Pool) -> bool {
    before.asset_a == after.asset_a && before.asset_b == after.asset_b
}

// ============================================================================
// INVARIANT-VALUE INVARIANTS
// ============================================================================

/// Invariant: invariant_k is never touched after creation
///
/// Property:
///   after.invariant_k == before.invariant_k
pub fn invariant_unchanged(before: &Pool, after: &Pool) -> bool {
    before.invariant_k == after.invariant_k
}

// ============================================================================
// PROPORTIONALITY INVARIANTS
// ============================================================================

/// Invariant: amount_b is the floor of the live ratio applied to amount_a
///
/// Property:
///   amount_b * reserve_a <= reserve_b * amount_a < (amount_b + 1) * reserve_a
pub fn proportional_floor(
    env: &Env,
    reserve_a: u128,
    reserve_b: u128,
    amount_a: u128,
    amount_b: u128,
) -> bool {
    let ra = U256::from_u128(env, reserve_a);
    let exact = U256::from_u128(env, reserve_b).mul(&U256::from_u128(env, amount_a));
    let lower = U256::from_u128(env, amount_b).mul(&ra);
    let upper = lower.add(&ra);
    lower <= exact && exact < upper
}

/// Invariant: a withdrawal never exceeds what the account contributed
pub fn withdrawal_within_contribution(contribution: u128, amount_a: u128) -> bool {
    amount_a <= contribution
}

// ============================================================================
// SWAP INVARIANTS
// ============================================================================

/// Invariant: reserves move by exactly the swapped amounts
///
/// Property (a_to_b):
///   after.reserve_a == before.reserve_a + amount_in
///   after.reserve_b == before.reserve_b - amount_out
pub fn swap_reserves_consistent(
    before: &Pool,
    after: &Pool,
    a_to_b: bool,
    amount_in: u128,
    amount_out: u128,
) -> bool {
    let (in_before, out_before) = before.reserves_for(a_to_b);
    let (in_after, out_after) = after.reserves_for(a_to_b);

    in_before.checked_add(amount_in) == Some(in_after)
        && out_before.checked_sub(amount_out) == Some(out_after)
}

/// Invariant: a swap leaves a positive reserve on the output side
pub fn output_below_reserve(reserve_out: u128, amount_out: u128) -> bool {
    amount_out < reserve_out
}
