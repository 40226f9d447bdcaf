//! Market events

use soroban_sdk::{Address, Bytes, Env, Symbol};

/// Topics: ("MarketInit",)
/// Data: (owner, payment_token, reserve_ratio_ppm, initial_supply, gas_price_ceiling)
pub fn emit_market_initialized(
    env: &Env,
    owner: &Address,
    payment_token: &Address,
    reserve_ratio_ppm: u32,
    initial_supply: i128,
    gas_price_ceiling: u64,
) {
    env.events().publish(
        (Symbol::new(env, "MarketInit"),),
        (
            owner.clone(),
            payment_token.clone(),
            reserve_ratio_ppm,
            initial_supply,
            gas_price_ceiling,
        ),
    );
}

/// Topics: ("Mint", depositor)
/// Data: (minted, deposit)
pub fn emit_mint(env: &Env, depositor: &Address, minted: i128, deposit: i128) {
    env.events().publish(
        (Symbol::new(env, "Mint"), depositor.clone()),
        (minted, deposit),
    );
}

/// Topics: ("Burn", seller)
/// Data: (burned, refund)
pub fn emit_burn(env: &Env, seller: &Address, burned: i128, refund: i128) {
    env.events().publish(
        (Symbol::new(env, "Burn"), seller.clone()),
        (burned, refund),
    );
}

/// Acknowledges a transfer-with-notify into the market
pub fn emit_tokens_received(
    env: &Env,
    operator: &Address,
    from: &Address,
    amount: i128,
    data: &Bytes,
) {
    env.events().publish(
        (Symbol::new(env, "TokensReceived"), operator.clone(), from.clone()),
        (amount, data.clone()),
    );
}

pub fn emit_gas_ceiling_updated(env: &Env, old_ceiling: u64, new_ceiling: u64) {
    env.events().publish(
        (Symbol::new(env, "GasCeilingUpdated"),),
        (old_ceiling, new_ceiling),
    );
}
