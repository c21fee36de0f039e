use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PairError {
    AlreadyInitialized = 100,
    IdenticalTokens = 101,
    TokenOrder = 102,
    InsufficientLiquidityMinted = 103,
    InsufficientLiquidityBurned = 104,
    InsufficientOutputAmount = 105,
    InsufficientLiquidity = 106,
    InvalidRecipient = 107,
    InsufficientInputAmount = 108,
    KInvariantViolation = 109,
    Overflow = 110,
    Locked = 111,
    InvalidAmount = 112,
    InsufficientBalance = 113,
    InsufficientAllowance = 114,
}
