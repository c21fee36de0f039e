use soroban_sdk::{contracttype, Address, Env, U256};

/// Pair configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug)]
pub struct PairConfig {
    /// Factory contract address
    pub factory: Address,
    /// Token0 address (lower address)
    pub token0: Address,
    /// Token1 address (higher address)
    pub token1: Address,
}

/// Current pair state - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug)]
pub struct PairState {
    /// Tracked balance of token0 as of the last update
    pub reserve0: i128,
    /// Tracked balance of token1 as of the last update
    pub reserve1: i128,
    /// Ledger timestamp of the last reserve update, truncated to 32 bits
    pub block_timestamp_last: u32,
    /// Cumulative token0 price, UQ112.112-seconds, wraps modulo 2^256
    pub price0_cumulative_last: U256,
    /// Cumulative token1 price, UQ112.112-seconds, wraps modulo 2^256
    pub price1_cumulative_last: U256,
    /// reserve0 * reserve1 at the last protocol-fee checkpoint (zero when the
    /// fee switch is off)
    pub k_last: U256,
}

impl PairState {
    pub fn new(env: &Env) -> Self {
        Self {
            reserve0: 0,
            reserve1: 0,
            block_timestamp_last: 0,
            price0_cumulative_last: U256::from_u32(env, 0),
            price1_cumulative_last: U256::from_u32(env, 0),
            k_last: U256::from_u32(env, 0),
        }
    }
}
