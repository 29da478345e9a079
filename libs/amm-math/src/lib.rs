#![no_std]

pub mod constant_product;
pub mod full_math;
pub mod pool_id;

pub use constant_product::*;
pub use full_math::*;
pub use pool_id::*;
