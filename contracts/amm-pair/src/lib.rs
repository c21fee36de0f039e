#![no_std]

mod errors;
mod events;
mod invariants;
mod liquidity;
mod reserves;
mod shares;
mod storage;
mod swap;

use amm_types::{PairConfig, PairState};
use soroban_sdk::{contract, contractclient, contractimpl, Address, Bytes, Env, U256};

pub use crate::errors::PairError;

/// The factory surface the pair consumes: one fee-switch read per mint/burn.
#[contractclient(name = "FactoryClient")]
pub trait FactoryInterface {
    fn get_fee_to(env: Env) -> Option<Address>;
}

/// Receiver hook for flash swaps.
///
/// Invoked on `to` after the optimistic payout when swap data is present.
/// Repayment must land before the hook returns: the fee-adjusted invariant
/// is re-validated immediately afterwards, under the pair's lock, so the
/// hook cannot re-enter.
#[contractclient(name = "SwapCallbackClient")]
pub trait SwapCallback {
    fn swap_callback(env: Env, sender: Address, amount0_out: i128, amount1_out: i128, data: Bytes);
}

#[contract]
pub struct Pair;

#[contractimpl]
impl Pair {
    /// Initialize a new pair; called once by the factory at deployment.
    /// Tokens arrive pre-sorted: `token0 < token1`.
    pub fn initialize(
        env: Env,
        factory: Address,
        token0: Address,
        token1: Address,
    ) -> Result<(), PairError> {
        if storage::has_config(&env) {
            return Err(PairError::AlreadyInitialized);
        }
        if token0 == token1 {
            return Err(PairError::IdenticalTokens);
        }
        if token0 >= token1 {
            return Err(PairError::TokenOrder);
        }

        storage::set_config(
            &env,
            &PairConfig {
                factory,
                token0,
                token1,
            },
        );
        storage::set_state(&env, &PairState::new(&env));
        Ok(())
    }

    /// Add liquidity and mint shares to `to`.
    ///
    /// Both tokens must have been transferred to the pair before this call;
    /// the pair never pulls funds.
    ///
    /// # Returns
    /// Amount of liquidity shares minted
    pub fn mint(env: Env, sender: Address, to: Address) -> Result<i128, PairError> {
        sender.require_auth();
        storage::lock(&env)?;
        let liquidity = liquidity::mint(&env, &sender, &to)?;
        storage::unlock(&env);
        Ok(liquidity)
    }

    /// Redeem the shares previously transferred to the pair and pay both
    /// tokens out to `to`.
    ///
    /// # Returns
    /// (amount0, amount1) - Token amounts paid out
    pub fn burn(env: Env, sender: Address, to: Address) -> Result<(i128, i128), PairError> {
        sender.require_auth();
        storage::lock(&env)?;
        let amounts = liquidity::burn(&env, &sender, &to)?;
        storage::unlock(&env);
        Ok(amounts)
    }

    /// Swap: pay out the requested amounts to `to`, optionally hand control
    /// to `to`'s `swap_callback`, then enforce the fee-adjusted constant
    /// product against actual balances.
    pub fn swap(
        env: Env,
        sender: Address,
        amount0_out: i128,
        amount1_out: i128,
        to: Address,
        data: Option<Bytes>,
    ) -> Result<(), PairError> {
        sender.require_auth();
        storage::lock(&env)?;
        swap::swap(&env, &sender, amount0_out, amount1_out, &to, &data)?;
        storage::unlock(&env);
        Ok(())
    }

    /// Transfer balance in excess of the reserves to `to`
    pub fn skim(env: Env, to: Address) -> Result<(), PairError> {
        storage::lock(&env)?;
        swap::skim(&env, &to);
        storage::unlock(&env);
        Ok(())
    }

    /// Force the reserves to match actual balances without moving funds
    pub fn sync(env: Env) -> Result<(), PairError> {
        storage::lock(&env)?;
        let config = storage::get_config(&env);
        let mut state = storage::get_state(&env);
        let (balance0, balance1) = reserves::pool_balances(&env, &config);
        reserves::update(&env, &mut state, balance0, balance1)?;
        storage::unlock(&env);
        Ok(())
    }

    // === Liquidity-share token ===

    /// Transfer liquidity shares
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PairError> {
        from.require_auth();
        shares::transfer(&env, &from, &to, amount)
    }

    /// Set a liquidity-share spending allowance
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), PairError> {
        owner.require_auth();
        shares::approve(&env, &owner, &spender, amount)
    }

    /// Transfer liquidity shares out of `from` against `spender`'s allowance
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PairError> {
        spender.require_auth();
        shares::spend_allowance(&env, &from, &spender, amount)?;
        shares::transfer(&env, &from, &to, amount)
    }

    // === View Functions ===

    /// Get tracked reserves and the timestamp of their last update
    pub fn get_reserves(env: Env) -> (i128, i128, u32) {
        let state = storage::get_state(&env);
        (state.reserve0, state.reserve1, state.block_timestamp_last)
    }

    /// Cumulative token0 price (UQ112.112-seconds, wraps mod 2^256)
    pub fn price0_cumulative_last(env: Env) -> U256 {
        storage::get_state(&env).price0_cumulative_last
    }

    /// Cumulative token1 price (UQ112.112-seconds, wraps mod 2^256)
    pub fn price1_cumulative_last(env: Env) -> U256 {
        storage::get_state(&env).price1_cumulative_last
    }

    /// reserve0 * reserve1 at the last protocol-fee checkpoint
    pub fn k_last(env: Env) -> U256 {
        storage::get_state(&env).k_last
    }

    /// Liquidity-share total supply, locked floor included
    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    /// Liquidity-share balance of `owner`
    pub fn balance(env: Env, owner: Address) -> i128 {
        storage::get_balance(&env, &owner)
    }

    /// Remaining liquidity-share allowance from `owner` to `spender`
    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &owner, &spender)
    }

    /// Get token0 address
    pub fn token0(env: Env) -> Address {
        storage::get_config(&env).token0
    }

    /// Get token1 address
    pub fn token1(env: Env) -> Address {
        storage::get_config(&env).token1
    }

    /// Get factory address
    pub fn factory(env: Env) -> Address {
        storage::get_config(&env).factory
    }
}
