use soroban_sdk::contracterror;

/// Errors returned by every fallible AMM entry point.
///
/// Discriminants are part of the contract ABI and must never be reused.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AmmError {
    /// No pool is recorded for the id, or its invariant is zero
    PoolNotFound = 1,
    /// A pool is already recorded for the derived id
    AlreadyExists = 2,
    /// An amount that must be positive was zero
    ZeroAmount = 3,
    /// Caller asked to withdraw more than they contributed
    InsufficientContribution = 4,
    /// Reserves cannot cover the requested movement
    InsufficientReserve = 5,
    /// A token `transfer_from` or `transfer` call failed
    AssetTransferFailed = 6,
    /// Both sides of a pool name the same asset
    IdenticalAssets = 7,
    /// An intermediate value does not fit the target integer type
    ArithmeticOverflow = 8,
    /// Configuration can only be written once, before any pool exists
    AlreadyInitialized = 9,
}
