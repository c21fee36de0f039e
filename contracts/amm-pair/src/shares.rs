//! The liquidity-share ledger: a minimal fungible balance book owned by the
//! pair itself. Covers exactly what pool accounting needs - balances,
//! allowances, mint/burn and the permanently locked minimum - nothing more.

use crate::errors::PairError;
use crate::events;
use crate::storage;
use soroban_sdk::{Address, Env};

pub fn mint(env: &Env, to: &Address, amount: i128) {
    storage::set_balance(env, to, storage::get_balance(env, to) + amount);
    storage::set_total_supply(env, storage::get_total_supply(env) + amount);
    events::lp_mint(env, to, amount);
}

/// Raise total supply without crediting any holder.
///
/// Soroban has no burn address, so the minimum-liquidity floor is held as
/// supply that no account owns: it can never be transferred and never
/// burned (burn only consumes shares credited to the pair's own balance).
pub fn lock(env: &Env, amount: i128) {
    storage::set_total_supply(env, storage::get_total_supply(env) + amount);
    events::lp_lock(env, amount);
}

/// Destroy `amount` shares held by `from`. Callers read the balance first;
/// burning more than is held is a bug, not an input error.
pub fn burn(env: &Env, from: &Address, amount: i128) {
    storage::set_balance(env, from, storage::get_balance(env, from) - amount);
    storage::set_total_supply(env, storage::get_total_supply(env) - amount);
    events::lp_burn(env, from, amount);
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), PairError> {
    if amount < 0 {
        return Err(PairError::InvalidAmount);
    }
    let from_balance = storage::get_balance(env, from);
    if from_balance < amount {
        return Err(PairError::InsufficientBalance);
    }
    storage::set_balance(env, from, from_balance - amount);
    storage::set_balance(env, to, storage::get_balance(env, to) + amount);
    events::transfer(env, from, to, amount);
    Ok(())
}

pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), PairError> {
    if amount < 0 {
        return Err(PairError::InvalidAmount);
    }
    storage::set_allowance(env, owner, spender, amount);
    events::approve(env, owner, spender, amount);
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), PairError> {
    if amount < 0 {
        return Err(PairError::InvalidAmount);
    }
    let allowance = storage::get_allowance(env, owner, spender);
    if allowance < amount {
        return Err(PairError::InsufficientAllowance);
    }
    storage::set_allowance(env, owner, spender, allowance - amount);
    Ok(())
}
