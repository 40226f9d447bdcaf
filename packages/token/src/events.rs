// SEP-41 token events

use soroban_sdk::{symbol_short, Address, Env};

/// Topics: ("transfer", from, to)
/// Data: amount
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
}

/// Topics: ("mint", admin, to)
/// Data: amount
pub fn emit_mint(env: &Env, admin: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("mint"), admin.clone(), to.clone()),
        amount,
    );
}

/// Topics: ("burn", from)
/// Data: amount
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish((symbol_short!("burn"), from.clone()), amount);
}

/// Topics: ("approve", from, spender)
/// Data: (amount, expiration_ledger)
pub fn emit_approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    env.events().publish(
        (symbol_short!("approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
}
