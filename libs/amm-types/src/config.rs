use soroban_sdk::contracttype;

/// How a pool id is derived from its two asset addresses.
///
/// Both schemes are commutative. `Xor` folds the two asset fingerprints
/// together and is therefore not injective: any pairs whose fingerprints
/// XOR to the same value share an id (every `(x, x)` pair maps to zero).
/// `SortedHash` hashes the ordered pair and has no such collision class.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolIdScheme {
    Xor,
    SortedHash,
}

/// Contract-wide configuration - Instance storage, written at most once
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AmmConfig {
    /// Pool id derivation used by every entry point
    pub id_scheme: PoolIdScheme,
}

impl Default for AmmConfig {
    fn default() -> Self {
        Self {
            id_scheme: PoolIdScheme::Xor,
        }
    }
}

impl AmmConfig {
    pub fn new(id_scheme: PoolIdScheme) -> Self {
        Self { id_scheme }
    }
}
