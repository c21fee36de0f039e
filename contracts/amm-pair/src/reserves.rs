//! The reserve ledger and its price oracle. `update` is the only place
//! reserves and the cumulative-price accumulators change.

use amm_math::{fraction, wrapping_add};
use amm_types::{PairConfig, PairState, MAX_RESERVE};
use soroban_sdk::{token, Env, U256};

use crate::errors::PairError;
use crate::events;
use crate::storage;

/// Read the pair's actual holdings of both pooled tokens.
///
/// Counterparties push funds in before calling mint/swap; the pair only
/// ever observes balances, it never pulls.
pub fn pool_balances(env: &Env, config: &PairConfig) -> (i128, i128) {
    let this = env.current_contract_address();
    let balance0 = token::Client::new(env, &config.token0).balance(&this);
    let balance1 = token::Client::new(env, &config.token1).balance(&this);
    (balance0, balance1)
}

/// Commit new reserves and advance the oracle, called exactly once at the
/// end of every mutating operation.
///
/// Accumulation must use the reserves that prevailed *during* the elapsed
/// interval - the pre-update values still held in `state` - not the
/// balances being committed. Timestamps truncate to 32 bits and the
/// elapsed difference wraps; the accumulators wrap modulo 2^256 and
/// consumers difference readings under the same modulus.
pub fn update(
    env: &Env,
    state: &mut PairState,
    balance0: i128,
    balance1: i128,
) -> Result<(), PairError> {
    if balance0 > MAX_RESERVE || balance1 > MAX_RESERVE {
        return Err(PairError::Overflow);
    }

    let block_timestamp = env.ledger().timestamp() as u32;
    let time_elapsed = block_timestamp.wrapping_sub(state.block_timestamp_last);

    if time_elapsed > 0 && state.reserve0 != 0 && state.reserve1 != 0 {
        // fraction() yields < 2^224 and time_elapsed < 2^32, so the product
        // stays under 2^256 and the host multiply cannot trap
        let elapsed = U256::from_u32(env, time_elapsed);
        let price0 = fraction(env, state.reserve1, state.reserve0).mul(&elapsed);
        let price1 = fraction(env, state.reserve0, state.reserve1).mul(&elapsed);
        state.price0_cumulative_last = wrapping_add(env, &state.price0_cumulative_last, &price0);
        state.price1_cumulative_last = wrapping_add(env, &state.price1_cumulative_last, &price1);
    }

    state.reserve0 = balance0;
    state.reserve1 = balance1;
    state.block_timestamp_last = block_timestamp;
    storage::set_state(env, state);

    events::sync(env, balance0, balance1);
    Ok(())
}
