// ============================================================================
// SWAP INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A swap pays exactly what quote promised
// 2. Reserves move by exactly the swapped amounts, k never changes
// 3. Quotes never mutate state
//
// ============================================================================

use amm_types::PoolId;
use soroban_sdk::{Address, Env};

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;

use super::model::PoolSnapshot;
use crate::AmmPool;

/// RULE: swap output equals the quote taken just before it
#[rule]
pub fn swap_matches_quote(env: Env, caller: Address, id: PoolId, a_to_b: bool, amount_in: u128) {
    let quoted = AmmPool::quote(env.clone(), id.clone(), a_to_b, amount_in);
    let executed = AmmPool::swap(env, caller, id, a_to_b, amount_in);

    if let (Ok(quoted), Ok(executed)) = (quoted, executed) {
        cvlr_assert!(quoted == executed);
    }
}

/// RULE: swap moves reserves by exactly the traded amounts and keeps k
#[rule]
pub fn swap_updates_reserves(env: Env, caller: Address, id: PoolId, a_to_b: bool, amount_in: u128) {
    let before = PoolSnapshot::capture(&env, &id);
    cvlr_assume!(before.exists);

    if let Ok(amount_out) = AmmPool::swap(env.clone(), caller, id.clone(), a_to_b, amount_in) {
        let after = PoolSnapshot::capture(&env, &id);
        cvlr_assert!(before.same_identity(&after));
        if a_to_b {
            cvlr_assert!(after.reserve_a == before.reserve_a + amount_in);
            cvlr_assert!(after.reserve_b == before.reserve_b - amount_out);
            cvlr_assert!(after.reserve_b > 0);
        } else {
            cvlr_assert!(after.reserve_b == before.reserve_b + amount_in);
            cvlr_assert!(after.reserve_a == before.reserve_a - amount_out);
            cvlr_assert!(after.reserve_a > 0);
        }
    }
}

/// RULE: quote is read-only
#[rule]
pub fn quote_is_read_only(env: Env, id: PoolId, a_to_b: bool, amount_in: u128) {
    let before = PoolSnapshot::capture(&env, &id);
    let _ = AmmPool::quote(env.clone(), id.clone(), a_to_b, amount_in);
    cvlr_assert!(PoolSnapshot::capture(&env, &id).unchanged(&before));
}
