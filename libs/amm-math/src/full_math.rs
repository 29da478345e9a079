use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns floor((a * b) / denominator), or `None` when the denominator is
/// zero or the quotient does not fit in a u128
pub fn mul_div_floor(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    product.div(&U256::from_u128(env, denominator)).to_u128()
}

/// floor(numerator / denominator) for a 256-bit numerator
pub fn div_floor_u256(env: &Env, numerator: &U256, denominator: u128) -> Option<U256> {
    if denominator == 0 {
        return None;
    }
    Some(numerator.div(&U256::from_u128(env, denominator)))
}

/// Convert a token-side amount to the i128 used by the token interface
pub fn to_token_amount(amount: u128) -> Option<i128> {
    i128::try_from(amount).ok()
}
