use crate::full_math::{div_floor_u256, mul_div_floor};
use amm_types::AmmError;
use soroban_sdk::{Env, U256};

/// Constant product `a * b` without overflow
pub fn invariant_of(env: &Env, reserve_a: u128, reserve_b: u128) -> U256 {
    U256::from_u128(env, reserve_a).mul(&U256::from_u128(env, reserve_b))
}

/// Amount of B matching `amount_a` at the current reserve ratio
///
/// floor(reserve_b * amount_a / reserve_a). The B side is always rounded
/// down, so the depositor pays and the withdrawer receives the truncated
/// amount.
pub fn proportional_amount(
    env: &Env,
    reserve_a: u128,
    reserve_b: u128,
    amount_a: u128,
) -> Result<u128, AmmError> {
    if reserve_a == 0 {
        return Err(AmmError::InsufficientReserve);
    }
    mul_div_floor(env, reserve_b, amount_a, reserve_a).ok_or(AmmError::ArithmeticOverflow)
}

/// Output of an exact-input swap against a fixed invariant
///
/// reserve_out - floor(k / (reserve_in + amount_in)). `k` is the pool's
/// recorded invariant, which may differ from `reserve_in * reserve_out`.
/// Fails with `InsufficientReserve` rather than underflow when the floor
/// term exceeds `reserve_out`, rather than drain the output side when it
/// reaches zero, and when `reserve_in + amount_in` does not fit `u128`.
pub fn output_for_input(
    env: &Env,
    invariant_k: &U256,
    reserve_in: u128,
    reserve_out: u128,
    amount_in: u128,
) -> Result<u128, AmmError> {
    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(AmmError::InsufficientReserve)?;

    let remaining = div_floor_u256(env, invariant_k, new_reserve_in)
        .ok_or(AmmError::InsufficientReserve)?
        .to_u128()
        .ok_or(AmmError::InsufficientReserve)?;

    if remaining == 0 {
        return Err(AmmError::InsufficientReserve);
    }

    reserve_out
        .checked_sub(remaining)
        .ok_or(AmmError::InsufficientReserve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    const E18: u128 = 1_000_000_000_000_000_000;

    // === proportional_amount ===

    #[test]
    fn test_proportional_exact_ratio() {
        let env = Env::default();
        assert_eq!(proportional_amount(&env, 100, 200, 50), Ok(100));
    }

    #[test]
    fn test_proportional_truncates() {
        let env = Env::default();
        // 10 * 1 / 3 = 3.33 -> 3
        assert_eq!(proportional_amount(&env, 3, 10, 1), Ok(3));
        // Tiny deposits may need no B at all
        assert_eq!(proportional_amount(&env, 1_000, 1, 999), Ok(0));
    }

    #[test]
    fn test_proportional_zero_reserve() {
        let env = Env::default();
        assert_eq!(
            proportional_amount(&env, 0, 10, 1),
            Err(AmmError::InsufficientReserve)
        );
    }

    #[test]
    fn test_proportional_overflow() {
        let env = Env::default();
        assert_eq!(
            proportional_amount(&env, 1, u128::MAX, 2),
            Err(AmmError::ArithmeticOverflow)
        );
    }

    #[test]
    fn test_proportional_large_reserves() {
        let env = Env::default();
        let out = proportional_amount(&env, 100_000 * E18, 50_000 * E18, 1_000 * E18);
        assert_eq!(out, Ok(500 * E18));
    }

    // === output_for_input ===

    #[test]
    fn test_output_balanced_pool() {
        let env = Env::default();
        let k = invariant_of(&env, 1_000_000, 1_000_000);
        // 1_000_000 - floor(1e12 / 1_001_000) = 1_000_000 - 999_000
        assert_eq!(
            output_for_input(&env, &k, 1_000_000, 1_000_000, 1_000),
            Ok(1_000_000 - 999_000)
        );
    }

    #[test]
    fn test_output_regression_value() {
        let env = Env::default();
        // 490196078431372549020 is produced by reserve_in = 101_000e18;
        // 100_000e18 would give 495049504950495049505
        let reserve_in = 101_000 * E18;
        let reserve_out = 50_000 * E18;
        let k = invariant_of(&env, reserve_in, reserve_out);

        let out = output_for_input(&env, &k, reserve_in, reserve_out, 1_000 * E18);
        assert_eq!(out, Ok(490_196_078_431_372_549_020));
    }

    #[test]
    fn test_output_uses_given_invariant() {
        let env = Env::default();
        // Invariant recorded at (1000, 1000) while reserves moved to (1100, 1100)
        let stale_k = invariant_of(&env, 1_000, 1_000);
        let fresh_k = invariant_of(&env, 1_100, 1_100);

        let stale = output_for_input(&env, &stale_k, 1_100, 1_100, 100).unwrap();
        let fresh = output_for_input(&env, &fresh_k, 1_100, 1_100, 100).unwrap();
        // 1100 - floor(1_000_000 / 1200) = 1100 - 833
        assert_eq!(stale, 267);
        // 1100 - floor(1_210_000 / 1200) = 1100 - 1008
        assert_eq!(fresh, 92);
    }

    #[test]
    fn test_output_would_drain_pool() {
        let env = Env::default();
        let k = invariant_of(&env, 1_000, 1_000);
        // floor(1e6 / (1000 + 1e7)) == 0 -> whole reserve
        assert_eq!(
            output_for_input(&env, &k, 1_000, 1_000, 10_000_000),
            Err(AmmError::InsufficientReserve)
        );
    }

    #[test]
    fn test_output_stale_invariant_underflow() {
        let env = Env::default();
        // Reserves shrank to (100, 100) but k still reflects (1000, 1000)
        let k = invariant_of(&env, 1_000, 1_000);
        assert_eq!(
            output_for_input(&env, &k, 100, 100, 10),
            Err(AmmError::InsufficientReserve)
        );
    }

    #[test]
    fn test_output_oversized_input() {
        let env = Env::default();
        let k = invariant_of(&env, 1_000, 1_000);
        // Same error whether the input drains the pool or overflows the sum
        assert_eq!(
            output_for_input(&env, &k, u128::MAX, 1_000, 1),
            Err(AmmError::InsufficientReserve)
        );
        assert_eq!(
            output_for_input(&env, &k, 1_000, 1_000, u128::MAX),
            Err(AmmError::InsufficientReserve)
        );
    }

    #[test]
    fn test_output_never_exceeds_reserve() {
        let env = Env::default();
        let k = invariant_of(&env, 5_000, 7_000);
        for amount_in in [1u128, 10, 100, 1_000, 10_000, 100_000] {
            if let Ok(out) = output_for_input(&env, &k, 5_000, 7_000, amount_in) {
                assert!(out < 7_000);
            }
        }
    }
}
