// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

use amm_types::{Pool, PoolId};
use soroban_sdk::{Address, Env, U256};

use crate::{invariants, storage};

/// Captures pool state for before/after comparisons
#[derive(Clone)]
pub struct PoolSnapshot {
    pub exists: bool,
    pub reserve_a: u128,
    pub reserve_b: u128,
    pub invariant_k: Option<U256>,
    pub record: Option<Pool>,
}

impl PoolSnapshot {
    pub fn capture(env: &Env, id: &PoolId) -> Self {
        match storage::get_pool(env, id) {
            Ok(pool) => Self {
                exists: true,
                reserve_a: pool.reserve_a,
                reserve_b: pool.reserve_b,
                invariant_k: Some(pool.invariant_k.clone()),
                record: Some(pool),
            },
            Err(_) => Self {
                exists: false,
                reserve_a: 0,
                reserve_b: 0,
                invariant_k: None,
                record: None,
            },
        }
    }

    pub fn unchanged(&self, other: &Self) -> bool {
        self.exists == other.exists
            && self.reserve_a == other.reserve_a
            && self.reserve_b == other.reserve_b
            && self.invariant_k == other.invariant_k
    }

    /// True if both snapshots hold a record with the same assets and invariant
    pub fn same_identity(&self, other: &Self) -> bool {
        match (&self.record, &other.record) {
            (Some(before), Some(after)) => {
                invariants::invariant_unchanged(before, after)
                    && invariants::assets_unchanged(before, after)
            }
            _ => false,
        }
    }
}

/// Captures an account's contribution to a pool
pub fn contribution(env: &Env, id: &PoolId, account: &Address) -> u128 {
    storage::get_contribution(env, id, account)
}
