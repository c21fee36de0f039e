use soroban_sdk::{Env, U256};

/// UQ112.112 scale factor (2^112)
pub const Q112: u128 = 1u128 << 112;

/// Encode the ratio `numerator / denominator` as a UQ112.112 fixed-point
/// number: `(numerator << 112) / denominator`, truncating.
///
/// Both operands must fit in 112 bits, which the pair's reserve bound
/// guarantees; the result then fits in 224 bits. The codec exists solely
/// for oracle accumulation - balance accounting stays in exact integers.
pub fn fraction(env: &Env, numerator: i128, denominator: i128) -> U256 {
    if denominator <= 0 {
        panic!("Division by zero");
    }
    if numerator < 0 {
        panic!("Negative amount");
    }

    let scaled = U256::from_u128(env, numerator as u128).mul(&U256::from_u128(env, Q112));
    scaled.div(&U256::from_u128(env, denominator as u128))
}
