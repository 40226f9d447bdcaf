//! Launcher events

use soroban_sdk::{Address, BytesN, Env, Symbol};

pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "LauncherInit"),),
        (admin.clone(),),
    );
}

/// Emitted when a new market is deployed
pub fn emit_market_deployed(
    env: &Env,
    market: &Address,
    deployer: &Address,
    payment_token: &Address,
    reserve_ratio_ppm: u32,
    initial_supply: i128,
) {
    env.events().publish(
        (Symbol::new(env, "MarketDeployed"),),
        (
            market.clone(),
            deployer.clone(),
            payment_token.clone(),
            reserve_ratio_ppm,
            initial_supply,
        ),
    );
}

pub fn emit_wasm_hash_updated(env: &Env, new_hash: &BytesN<32>) {
    env.events().publish(
        (Symbol::new(env, "WasmHashUpdated"),),
        (new_hash.clone(),),
    );
}
