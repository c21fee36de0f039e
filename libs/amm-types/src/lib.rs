#![no_std]

mod pair;

pub use pair::*;

/// Liquidity shares permanently locked on the first mint.
///
/// Keeps total supply from ever returning to zero, so a drained pool can
/// never be re-initialized at an attacker-chosen price.
pub const MINIMUM_LIQUIDITY: i128 = 1000;

/// Largest reserve a pair may hold (112 bits).
///
/// The oracle codec encodes reserve ratios as UQ112.112, so both reserves
/// must stay below 2^112.
pub const MAX_RESERVE: i128 = (1i128 << 112) - 1;

/// Denominator of the swap fee: balances are scaled by this before the
/// constant-product check.
pub const FEE_SCALE: i128 = 1000;

/// Numerator of the swap fee: 3 / 1000 = 0.3% charged on every input amount.
pub const SWAP_FEE: i128 = 3;

/// Weight of `root_k` in the protocol-fee denominator `root_k * 5 + root_k_last`,
/// which dilutes exactly 1/6 of fee growth to the protocol recipient.
pub const PROTOCOL_FEE_WEIGHT: i128 = 5;
