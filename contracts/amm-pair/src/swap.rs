use amm_math::wide_mul;
use amm_types::{FEE_SCALE, SWAP_FEE};
use soroban_sdk::{token, Address, Bytes, Env};

use crate::errors::PairError;
use crate::events;
use crate::reserves;
use crate::storage;
use crate::SwapCallbackClient;

/// Execute a swap.
///
/// Output tokens are paid out optimistically before any input is verified;
/// when `data` is present the recipient's `swap_callback` runs next, free
/// to route repayment however it likes (flash swaps). Only then are actual
/// balances read and the fee-adjusted constant product enforced, under the
/// lock the caller already holds.
pub fn swap(
    env: &Env,
    sender: &Address,
    amount0_out: i128,
    amount1_out: i128,
    to: &Address,
    data: &Option<Bytes>,
) -> Result<(), PairError> {
    if amount0_out < 0 || amount1_out < 0 {
        return Err(PairError::InvalidAmount);
    }
    if amount0_out == 0 && amount1_out == 0 {
        return Err(PairError::InsufficientOutputAmount);
    }

    let config = storage::get_config(env);
    let mut state = storage::get_state(env);

    if amount0_out >= state.reserve0 || amount1_out >= state.reserve1 {
        return Err(PairError::InsufficientLiquidity);
    }
    if to == &config.token0 || to == &config.token1 {
        return Err(PairError::InvalidRecipient);
    }

    let this = env.current_contract_address();

    if amount0_out > 0 {
        token::Client::new(env, &config.token0).transfer(&this, to, &amount0_out);
    }
    if amount1_out > 0 {
        token::Client::new(env, &config.token1).transfer(&this, to, &amount1_out);
    }
    if let Some(data) = data {
        SwapCallbackClient::new(env, to).swap_callback(sender, &amount0_out, &amount1_out, data);
    }

    let (balance0, balance1) = reserves::pool_balances(env, &config);

    let amount0_in = input_amount(balance0, state.reserve0, amount0_out);
    let amount1_in = input_amount(balance1, state.reserve1, amount1_out);
    if amount0_in == 0 && amount1_in == 0 {
        return Err(PairError::InsufficientInputAmount);
    }

    // (balance0*1000 - in0*3) * (balance1*1000 - in1*3) >= reserve0*reserve1*1000^2
    // keeps the pool on or above the constant-product curve net of the 0.3%
    // fee, whatever mix of inputs and outputs the caller chose
    let adjusted0 = balance0 * FEE_SCALE - amount0_in * SWAP_FEE;
    let adjusted1 = balance1 * FEE_SCALE - amount1_in * SWAP_FEE;
    let adjusted_k = wide_mul(env, adjusted0, adjusted1);
    let required_k = wide_mul(env, state.reserve0 * FEE_SCALE, state.reserve1 * FEE_SCALE);
    if adjusted_k.lt(&required_k) {
        return Err(PairError::KInvariantViolation);
    }

    reserves::update(env, &mut state, balance0, balance1)?;
    events::swap(
        env,
        sender,
        amount0_in,
        amount1_in,
        amount0_out,
        amount1_out,
        to,
    );
    Ok(())
}

/// Net input supplied on one side this call: whatever the balance exceeds
/// the post-payout reserve by.
fn input_amount(balance: i128, reserve: i128, amount_out: i128) -> i128 {
    let expected = reserve - amount_out;
    if balance > expected {
        balance - expected
    } else {
        0
    }
}

/// Transfer any balance in excess of the reserves to `to` without touching
/// pool state. Recovery valve for tokens pushed in outside a mint/swap.
pub fn skim(env: &Env, to: &Address) {
    let config = storage::get_config(env);
    let state = storage::get_state(env);
    let this = env.current_contract_address();

    let (balance0, balance1) = reserves::pool_balances(env, &config);
    let excess0 = balance0 - state.reserve0;
    let excess1 = balance1 - state.reserve1;
    if excess0 > 0 {
        token::Client::new(env, &config.token0).transfer(&this, to, &excess0);
    }
    if excess1 > 0 {
        token::Client::new(env, &config.token1).transfer(&this, to, &excess1);
    }
}
