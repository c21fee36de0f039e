use soroban_sdk::{Env, U256};

/// Floor integer square root of a 256-bit value.
///
/// Binary search over the result range. Every caller passes a product of
/// two i128 amounts, so the root fits in 127 bits and the squared probe
/// never overflows 256 bits. Exactness matters: protocol-fee share mints
/// are computed from root differences, and an off-by-one changes revenue.
pub fn isqrt(env: &Env, value: &U256) -> i128 {
    let mut lo: u128 = 0;
    let mut hi: u128 = 1u128 << 127;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        let mid_256 = U256::from_u128(env, mid);
        if mid_256.mul(&mid_256).le(value) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo as i128
}
