// ============================================================================
// MATH INVARIANT SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. Pool id derivation is commutative under both schemes
// 2. proportional_amount is the floor of the live ratio
// 3. A swap quote never reaches the output reserve
//
// ============================================================================

use amm_types::PoolIdScheme;
use soroban_sdk::{Address, Env};

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};
use cvlr_soroban_derive::rule;

use crate::invariants;

/// RULE: XOR derivation does not depend on argument order
#[rule]
pub fn derive_id_xor_commutative(env: Env, a: Address, b: Address) {
    let ab = amm_math::derive_id(&env, PoolIdScheme::Xor, &a, &b);
    let ba = amm_math::derive_id(&env, PoolIdScheme::Xor, &b, &a);
    cvlr_assert!(ab == ba);
}

/// RULE: sorted-hash derivation does not depend on argument order
#[rule]
pub fn derive_id_sorted_commutative(env: Env, a: Address, b: Address) {
    let ab = amm_math::derive_id(&env, PoolIdScheme::SortedHash, &a, &b);
    let ba = amm_math::derive_id(&env, PoolIdScheme::SortedHash, &b, &a);
    cvlr_assert!(ab == ba);
}

/// RULE: proportional_amount rounds the B side down
#[rule]
pub fn proportional_amount_is_floor(env: Env, reserve_a: u128, reserve_b: u128, amount_a: u128) {
    cvlr_assume!(reserve_a > 0);

    if let Ok(amount_b) = amm_math::proportional_amount(&env, reserve_a, reserve_b, amount_a) {
        cvlr_assert!(invariants::proportional_floor(
            &env, reserve_a, reserve_b, amount_a, amount_b
        ));
    }
}

/// RULE: a successful quote always leaves output reserve behind
#[rule]
pub fn output_below_output_reserve(
    env: Env,
    reserve_in: u128,
    reserve_out: u128,
    k: u128,
    amount_in: u128,
) {
    let k = soroban_sdk::U256::from_u128(&env, k);
    if let Ok(out) = amm_math::output_for_input(&env, &k, reserve_in, reserve_out, amount_in) {
        cvlr_assert!(invariants::output_below_reserve(reserve_out, out));
    }
}

/// RULE: Sanity - a successful quote is reachable
#[rule]
pub fn sanity_output_for_input(env: Env, reserve_in: u128, reserve_out: u128, amount_in: u128) {
    cvlr_assume!(reserve_in > 0 && reserve_out > 0 && amount_in > 0);
    let k = amm_math::invariant_of(&env, reserve_in, reserve_out);
    let result = amm_math::output_for_input(&env, &k, reserve_in, reserve_out, amount_in);
    cvlr_satisfy!(result.is_ok());
}
