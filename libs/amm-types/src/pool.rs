use soroban_sdk::{contracttype, Address, Env, U256};

/// Durable pool record - Persistent storage, keyed by `PoolId`
///
/// Per-account contributions live in their own storage entries rather than
/// inside this record so that the record stays a fixed size.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Asset fixed as side A by the first depositor
    pub asset_a: Address,
    /// Asset fixed as side B by the first depositor
    pub asset_b: Address,
    /// Amount of asset A held in custody for this pool
    pub reserve_a: u128,
    /// Amount of asset B held in custody for this pool
    pub reserve_b: u128,
    /// `reserve_a * reserve_b` as recorded at creation.
    /// Not refreshed by deposits, withdrawals or swaps.
    pub invariant_k: U256,
}

impl Pool {
    pub fn new(env: &Env, asset_a: Address, asset_b: Address, amount_a: u128, amount_b: u128) -> Self {
        let invariant_k = U256::from_u128(env, amount_a).mul(&U256::from_u128(env, amount_b));
        Self {
            asset_a,
            asset_b,
            reserve_a: amount_a,
            reserve_b: amount_b,
            invariant_k,
        }
    }

    /// A record only counts as a pool while its invariant is non-zero
    pub fn is_created(&self, env: &Env) -> bool {
        self.invariant_k != U256::from_u32(env, 0)
    }

    /// Reserves ordered as (input side, output side) for a swap direction
    pub fn reserves_for(&self, a_to_b: bool) -> (u128, u128) {
        if a_to_b {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_new_pool_records_product() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        let pool = Pool::new(&env, a.clone(), b.clone(), 100, 200);
        assert_eq!(pool.asset_a, a);
        assert_eq!(pool.asset_b, b);
        assert_eq!(pool.reserve_a, 100);
        assert_eq!(pool.reserve_b, 200);
        assert_eq!(pool.invariant_k, U256::from_u32(&env, 20_000));
        assert!(pool.is_created(&env));
    }

    #[test]
    fn test_product_beyond_u128() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        // 1e23 * 1e23 = 1e46 > u128::MAX
        let amount = 100_000_000_000_000_000_000_000u128;
        let pool = Pool::new(&env, a, b, amount, amount);
        let expected = U256::from_u128(&env, amount).mul(&U256::from_u128(&env, amount));
        assert_eq!(pool.invariant_k, expected);
        assert!(pool.invariant_k.to_u128().is_none());
    }

    #[test]
    fn test_zero_invariant_is_not_created() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        let pool = Pool::new(&env, a, b, 0, 500);
        assert!(!pool.is_created(&env));
    }

    #[test]
    fn test_reserves_for_direction() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);

        let pool = Pool::new(&env, a, b, 3, 10);
        assert_eq!(pool.reserves_for(true), (3, 10));
        assert_eq!(pool.reserves_for(false), (10, 3));
    }
}
