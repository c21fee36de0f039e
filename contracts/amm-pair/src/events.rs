//! Event publish helpers. The event log is the pair's externally observable
//! audit trail: every reserve change, share move and swap lands here.

use soroban_sdk::{Address, Env, Symbol};

/// New reserves committed by the reserve ledger
pub fn sync(env: &Env, reserve0: i128, reserve1: i128) {
    env.events()
        .publish((Symbol::new(env, "sync"),), (reserve0, reserve1));
}

/// Liquidity added
pub fn mint(env: &Env, sender: &Address, amount0: i128, amount1: i128) {
    env.events()
        .publish((Symbol::new(env, "mint"), sender.clone()), (amount0, amount1));
}

/// Liquidity removed
pub fn burn(env: &Env, sender: &Address, amount0: i128, amount1: i128, to: &Address) {
    env.events().publish(
        (Symbol::new(env, "burn"), sender.clone()),
        (amount0, amount1, to.clone()),
    );
}

/// Swap executed
pub fn swap(
    env: &Env,
    sender: &Address,
    amount0_in: i128,
    amount1_in: i128,
    amount0_out: i128,
    amount1_out: i128,
    to: &Address,
) {
    env.events().publish(
        (Symbol::new(env, "swap"), sender.clone()),
        (amount0_in, amount1_in, amount0_out, amount1_out, to.clone()),
    );
}

/// Liquidity shares moved between holders
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "transfer"), from.clone(), to.clone()),
        amount,
    );
}

/// Liquidity-share spending allowance set
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "approve"), owner.clone(), spender.clone()),
        amount,
    );
}

/// Liquidity shares created
pub fn lp_mint(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "lp_mint"), to.clone()), amount);
}

/// Liquidity shares destroyed
pub fn lp_burn(env: &Env, from: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "lp_burn"), from.clone()), amount);
}

/// Supply raised without a holder: the permanently locked minimum
pub fn lp_lock(env: &Env, amount: i128) {
    env.events().publish((Symbol::new(env, "lp_lock"),), amount);
}
