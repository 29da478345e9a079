// ============================================================================
// LIQUIDITY INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. add_liquidity credits exactly amount_a and keeps k
// 2. remove_liquidity debits exactly amount_a and keeps k
// 3. Withdrawals beyond contribution fail and change nothing
//
// ============================================================================

use amm_types::{AmmError, PoolId};
use soroban_sdk::{Address, Env};

use cvlr::asserts::{cvlr_assert, cvlr_assume};
use cvlr_soroban_derive::rule;

use super::model::{contribution, PoolSnapshot};
use crate::{invariants, AmmPool};

/// RULE: add_liquidity increases contribution and reserves, not k
#[rule]
pub fn add_liquidity_credits_contribution(env: Env, caller: Address, id: PoolId, amount_a: u128) {
    let before = PoolSnapshot::capture(&env, &id);
    let contribution_before = contribution(&env, &id, &caller);
    cvlr_assume!(before.exists);

    if let Ok((added_a, added_b)) = AmmPool::add_liquidity(env.clone(), caller.clone(), id.clone(), amount_a) {
        let after = PoolSnapshot::capture(&env, &id);
        cvlr_assert!(added_a == amount_a);
        cvlr_assert!(after.reserve_a == before.reserve_a + added_a);
        cvlr_assert!(after.reserve_b == before.reserve_b + added_b);
        cvlr_assert!(before.same_identity(&after));
        cvlr_assert!(contribution(&env, &id, &caller) == contribution_before + amount_a);
    }
}

/// RULE: remove_liquidity decreases contribution and reserves, not k
#[rule]
pub fn remove_liquidity_debits_contribution(env: Env, caller: Address, id: PoolId, amount_a: u128) {
    let before = PoolSnapshot::capture(&env, &id);
    let contribution_before = contribution(&env, &id, &caller);
    cvlr_assume!(before.exists);

    if let Ok((removed_a, removed_b)) =
        AmmPool::remove_liquidity(env.clone(), caller.clone(), id.clone(), amount_a)
    {
        let after = PoolSnapshot::capture(&env, &id);
        cvlr_assert!(removed_a == amount_a);
        cvlr_assert!(after.reserve_a == before.reserve_a - removed_a);
        cvlr_assert!(after.reserve_b == before.reserve_b - removed_b);
        cvlr_assert!(before.same_identity(&after));
        cvlr_assert!(contribution(&env, &id, &caller) == contribution_before - amount_a);
    }
}

/// RULE: withdrawing more than contributed fails and changes nothing
#[rule]
pub fn remove_beyond_contribution_fails(env: Env, caller: Address, id: PoolId, amount_a: u128) {
    let before = PoolSnapshot::capture(&env, &id);
    cvlr_assume!(before.exists);
    cvlr_assume!(!invariants::withdrawal_within_contribution(
        contribution(&env, &id, &caller),
        amount_a
    ));

    let result = AmmPool::remove_liquidity(env.clone(), caller, id.clone(), amount_a);
    cvlr_assert!(result == Err(AmmError::InsufficientContribution));
    cvlr_assert!(PoolSnapshot::capture(&env, &id).unchanged(&before));
}
