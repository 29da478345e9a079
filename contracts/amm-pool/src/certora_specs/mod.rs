// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Formal verification rules for the two-asset constant-product AMM.
//
// STRUCTURE:
//
// - model.rs            : State snapshots for before/after comparisons
// - math_specs.rs       : Pool id derivation and pricing formulas
// - pool_state_specs.rs : Pool creation and existence
// - liquidity_specs.rs  : Add/remove liquidity
// - swap_specs.rs       : Quote and swap execution
//
// USAGE:
// - Unit tests: cargo test -p amm-pool
// - Certora build: cargo build --features certora -p amm-pool
// - Verification: certoraSorobanProver amm_pool.conf
//
// ============================================================================

pub mod model;

pub mod liquidity_specs;
pub mod math_specs;
pub mod pool_state_specs;
pub mod swap_specs;
