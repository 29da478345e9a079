#![no_std]

mod config;
mod error;
mod pool;

pub use config::*;
pub use error::*;
pub use pool::*;

use soroban_sdk::BytesN;

/// Canonical identifier of an unordered asset pair
pub type PoolId = BytesN<32>;

/// Maximum number of pool ids returned by a single paginated query.
/// Keeps enumeration well inside Soroban's 100 read-entry limit.
pub const MAX_POOLS_PER_PAGE: u32 = 50;
