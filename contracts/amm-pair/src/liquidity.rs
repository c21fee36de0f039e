use amm_math::{isqrt, mul_div, wide_mul};
use amm_types::{PairState, MINIMUM_LIQUIDITY, PROTOCOL_FEE_WEIGHT};
use soroban_sdk::{token, Address, Env, U256};

use crate::errors::PairError;
use crate::events;
use crate::reserves;
use crate::shares;
use crate::storage;
use crate::FactoryClient;

/// Mint the protocol's share of fee growth since the last checkpoint.
///
/// Growth of sqrt(k) between checkpoints encodes trading fees compounded
/// into the reserves. `total_supply * (root_k - root_k_last) /
/// (root_k * 5 + root_k_last)` converts that growth into a dilutive share
/// mint worth exactly 1/6 of the accrued fee value. Returns whether the
/// fee switch is on; callers re-checkpoint `k_last` after their body when
/// it is.
fn mint_protocol_fee(env: &Env, state: &mut PairState) -> bool {
    let config = storage::get_config(env);
    let fee_to = FactoryClient::new(env, &config.factory).get_fee_to();
    let zero = U256::from_u32(env, 0);

    match fee_to {
        Some(recipient) => {
            if state.k_last != zero {
                let root_k = isqrt(env, &wide_mul(env, state.reserve0, state.reserve1));
                let root_k_last = isqrt(env, &state.k_last);
                if root_k > root_k_last {
                    let liquidity = mul_div(
                        env,
                        storage::get_total_supply(env),
                        root_k - root_k_last,
                        root_k * PROTOCOL_FEE_WEIGHT + root_k_last,
                    );
                    if liquidity > 0 {
                        shares::mint(env, &recipient, liquidity);
                    }
                }
            }
            true
        }
        None => {
            // stop tracking once the switch is off
            if state.k_last != zero {
                state.k_last = zero;
            }
            false
        }
    }
}

/// Add liquidity. Both tokens were transferred in before this call; the
/// newly supplied amounts are whatever the balances exceed the reserves by.
pub fn mint(env: &Env, sender: &Address, to: &Address) -> Result<i128, PairError> {
    let config = storage::get_config(env);
    let mut state = storage::get_state(env);

    let (balance0, balance1) = reserves::pool_balances(env, &config);
    let amount0 = balance0 - state.reserve0;
    let amount1 = balance1 - state.reserve1;

    let fee_on = mint_protocol_fee(env, &mut state);
    // read after the fee mint so protocol shares dilute this deposit too
    let total_supply = storage::get_total_supply(env);

    let liquidity = if total_supply == 0 {
        let liquidity = isqrt(env, &wide_mul(env, amount0, amount1)) - MINIMUM_LIQUIDITY;
        if liquidity <= 0 {
            return Err(PairError::InsufficientLiquidityMinted);
        }
        shares::lock(env, MINIMUM_LIQUIDITY);
        liquidity
    } else {
        // the scarcer side of the deposit decides; unbalanced deposits
        // donate the excess to existing holders
        let liquidity = mul_div(env, amount0, total_supply, state.reserve0)
            .min(mul_div(env, amount1, total_supply, state.reserve1));
        if liquidity == 0 {
            return Err(PairError::InsufficientLiquidityMinted);
        }
        liquidity
    };
    shares::mint(env, to, liquidity);

    reserves::update(env, &mut state, balance0, balance1)?;
    if fee_on {
        state.k_last = wide_mul(env, state.reserve0, state.reserve1);
        storage::set_state(env, &state);
    }

    events::mint(env, sender, amount0, amount1);
    Ok(liquidity)
}

/// Remove liquidity. The shares to redeem were transferred to the pair
/// before this call; payout is pro-rata on actual balances so fee growth
/// not yet synced into reserves pays out too.
pub fn burn(env: &Env, sender: &Address, to: &Address) -> Result<(i128, i128), PairError> {
    let config = storage::get_config(env);
    let mut state = storage::get_state(env);
    let this = env.current_contract_address();

    let (balance0, balance1) = reserves::pool_balances(env, &config);
    let liquidity = storage::get_balance(env, &this);

    let fee_on = mint_protocol_fee(env, &mut state);
    let total_supply = storage::get_total_supply(env);

    let amount0 = mul_div(env, liquidity, balance0, total_supply);
    let amount1 = mul_div(env, liquidity, balance1, total_supply);
    if amount0 == 0 || amount1 == 0 {
        return Err(PairError::InsufficientLiquidityBurned);
    }

    shares::burn(env, &this, liquidity);
    token::Client::new(env, &config.token0).transfer(&this, to, &amount0);
    token::Client::new(env, &config.token1).transfer(&this, to, &amount1);

    let (balance0, balance1) = reserves::pool_balances(env, &config);
    reserves::update(env, &mut state, balance0, balance1)?;
    if fee_on {
        state.k_last = wide_mul(env, state.reserve0, state.reserve1);
        storage::set_state(env, &state);
    }

    events::burn(env, sender, amount0, amount1, to);
    Ok((amount0, amount1))
}
