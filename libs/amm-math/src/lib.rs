#![no_std]

pub mod fixed_point;
pub mod full_math;
pub mod sqrt;

pub use fixed_point::*;
pub use full_math::*;
pub use sqrt::*;
