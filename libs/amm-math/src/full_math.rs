use soroban_sdk::{Bytes, Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
///
/// Amounts are token quantities and therefore non-negative; a negative
/// operand indicates a caller bug and panics.
pub fn mul_div(env: &Env, a: i128, b: i128, denominator: i128) -> i128 {
    if denominator <= 0 {
        panic!("Division by zero");
    }
    if a < 0 || b < 0 {
        panic!("Negative amount");
    }

    let a_256 = U256::from_u128(env, a as u128);
    let b_256 = U256::from_u128(env, b as u128);
    let denom_256 = U256::from_u128(env, denominator as u128);

    let product = a_256.mul(&b_256);
    let result = product.div(&denom_256);

    i128_from_u256(&result)
}

/// Product of two non-negative i128 amounts as a U256.
///
/// Used for the constant-product checkpoint `k = reserve0 * reserve1`,
/// which exceeds 128 bits for large reserves.
pub fn wide_mul(env: &Env, a: i128, b: i128) -> U256 {
    if a < 0 || b < 0 {
        panic!("Negative amount");
    }
    U256::from_u128(env, a as u128).mul(&U256::from_u128(env, b as u128))
}

/// Addition modulo 2^256.
///
/// Host U256 arithmetic traps on overflow, so the wraparound case is
/// computed from the headroom left below U256::MAX. Oracle accumulators
/// rely on this: consumers difference two readings modulo 2^256.
pub fn wrapping_add(env: &Env, a: &U256, b: &U256) -> U256 {
    let max = u256_max(env);
    let headroom = max.sub(a);
    if b.le(&headroom) {
        a.add(b)
    } else {
        // a + b - 2^256 == b - (max - a) - 1
        b.sub(&headroom).sub(&U256::from_u32(env, 1))
    }
}

fn u256_max(env: &Env) -> U256 {
    U256::from_be_bytes(env, &Bytes::from_array(env, &[0xffu8; 32]))
}

/// Convert U256 to i128, panics if the value does not fit
fn i128_from_u256(value: &U256) -> i128 {
    match value.to_u128() {
        Some(v) if v <= i128::MAX as u128 => v as i128,
        _ => panic!("U256 overflow when converting to i128"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    // === mul_div tests ===

    #[test]
    fn test_mul_div_basic() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 10, 20, 5), 40);
    }

    #[test]
    fn test_mul_div_wide_intermediate() {
        let env = Env::default();
        // (2^100 * 2^100) / 2^100 = 2^100 overflows i128 in the middle
        let large = 1i128 << 100;
        assert_eq!(mul_div(&env, large, large, large), large);
    }

    #[test]
    fn test_mul_div_rounds_down() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 1, 1, 2), 0);
        assert_eq!(mul_div(&env, 3, 1, 2), 1);
        assert_eq!(mul_div(&env, 5, 1, 3), 1);
    }

    #[test]
    fn test_mul_div_zero_numerator() {
        let env = Env::default();
        assert_eq!(mul_div(&env, 0, 100, 50), 0);
        assert_eq!(mul_div(&env, 100, 0, 50), 0);
    }

    #[test]
    fn test_mul_div_share_formula() {
        let env = Env::default();
        // liquidity = amount * total_supply / reserve, floored
        let amount = 1_000_000_000_000_000_000i128;
        let total_supply = 2_000_000_000_000_000_000i128;
        let reserve = 3_000_000_000_000_000_000i128;
        assert_eq!(mul_div(&env, amount, total_supply, reserve), 666_666_666_666_666_666);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn test_mul_div_zero_denominator() {
        let env = Env::default();
        mul_div(&env, 10, 20, 0);
    }

    #[test]
    #[should_panic(expected = "Negative amount")]
    fn test_mul_div_negative_operand() {
        let env = Env::default();
        mul_div(&env, -1, 20, 5);
    }

    #[test]
    #[should_panic(expected = "U256 overflow")]
    fn test_mul_div_result_too_large() {
        let env = Env::default();
        mul_div(&env, i128::MAX, i128::MAX, 1);
    }

    // === wide_mul tests ===

    #[test]
    fn test_wide_mul_matches_native() {
        let env = Env::default();
        let product = wide_mul(&env, 123_456, 789_012);
        assert_eq!(product, U256::from_u128(&env, 123_456u128 * 789_012u128));
    }

    #[test]
    fn test_wide_mul_exceeds_128_bits() {
        let env = Env::default();
        let big = (1i128 << 112) - 1;
        let product = wide_mul(&env, big, big);
        // (2^112 - 1)^2 = 2^224 - 2^113 + 1
        let expected = U256::from_u128(&env, 1u128 << 112)
            .mul(&U256::from_u128(&env, 1u128 << 112))
            .sub(&U256::from_u128(&env, 1u128 << 113))
            .add(&U256::from_u32(&env, 1));
        assert_eq!(product, expected);
    }

    // === wrapping_add tests ===

    #[test]
    fn test_wrapping_add_no_wrap() {
        let env = Env::default();
        let a = U256::from_u128(&env, 1000);
        let b = U256::from_u128(&env, 234);
        assert_eq!(wrapping_add(&env, &a, &b), U256::from_u128(&env, 1234));
    }

    #[test]
    fn test_wrapping_add_wraps_to_zero() {
        let env = Env::default();
        let max = u256_max(&env);
        let one = U256::from_u32(&env, 1);
        assert_eq!(wrapping_add(&env, &max, &one), U256::from_u32(&env, 0));
    }

    #[test]
    fn test_wrapping_add_wraps_past_boundary() {
        let env = Env::default();
        let max = u256_max(&env);
        let a = max.sub(&U256::from_u32(&env, 4));
        let b = U256::from_u32(&env, 10);
        // (2^256 - 5) + 10 = 5 mod 2^256
        assert_eq!(wrapping_add(&env, &a, &b), U256::from_u32(&env, 5));
    }

    #[test]
    fn test_wrapping_add_at_exact_boundary() {
        let env = Env::default();
        let max = u256_max(&env);
        let a = max.sub(&U256::from_u32(&env, 9));
        let b = U256::from_u32(&env, 9);
        assert_eq!(wrapping_add(&env, &a, &b), max);
    }
}
