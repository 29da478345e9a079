use amm_types::{PoolId, PoolIdScheme};
use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env};

/// Fixed-width identifier of an asset: sha256 of the address XDR.
/// Account and contract addresses encode to different lengths, hashing
/// gives every asset the same 32-byte width.
pub fn asset_fingerprint(env: &Env, asset: &Address) -> [u8; 32] {
    let encoded = asset.clone().to_xdr(env);
    env.crypto().sha256(&encoded).to_bytes().to_array()
}

/// Pool id as the bitwise XOR of both asset fingerprints
pub fn derive_id_xor(env: &Env, a: &Address, b: &Address) -> PoolId {
    let fa = asset_fingerprint(env, a);
    let fb = asset_fingerprint(env, b);

    let mut id = [0u8; 32];
    for (out, (x, y)) in id.iter_mut().zip(fa.iter().zip(fb.iter())) {
        *out = x ^ y;
    }
    BytesN::from_array(env, &id)
}

/// Pool id as sha256(XDR(lower) || XDR(higher))
pub fn derive_id_sorted(env: &Env, a: &Address, b: &Address) -> PoolId {
    let (lower, higher) = if a < b { (a, b) } else { (b, a) };

    let mut preimage = lower.clone().to_xdr(env);
    preimage.append(&higher.clone().to_xdr(env));
    env.crypto().sha256(&preimage).to_bytes()
}

/// Derive the pool id for an unordered pair. Never fails.
pub fn derive_id(env: &Env, scheme: PoolIdScheme, a: &Address, b: &Address) -> PoolId {
    match scheme {
        PoolIdScheme::Xor => derive_id_xor(env, a, b),
        PoolIdScheme::SortedHash => derive_id_sorted(env, a, b),
    }
}
