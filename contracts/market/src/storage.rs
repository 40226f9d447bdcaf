// Market storage module for LBC Swap

use soroban_sdk::{contracttype, Env};

use crate::error::MarketError;
use crate::types::MarketConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum MarketDataKey {
    Config,
    ReserveBalance,
    GasPriceCeiling,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &MarketDataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &MarketConfig) {
    env.storage().persistent().set(&MarketDataKey::Config, config);
    extend_ttl(env, &MarketDataKey::Config);
}

pub fn read_config(env: &Env) -> Result<MarketConfig, MarketError> {
    let config = env
        .storage()
        .persistent()
        .get(&MarketDataKey::Config)
        .ok_or(MarketError::NotInitialized)?;
    extend_ttl(env, &MarketDataKey::Config);
    Ok(config)
}

// ============================================================
// RESERVE
// ============================================================

pub fn write_reserve_balance(env: &Env, reserve: i128) {
    env.storage().persistent().set(&MarketDataKey::ReserveBalance, &reserve);
    extend_ttl(env, &MarketDataKey::ReserveBalance);
}

pub fn read_reserve_balance(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&MarketDataKey::ReserveBalance)
        .unwrap_or(0)
}

// ============================================================
// GAS PRICE CEILING
// ============================================================

pub fn write_gas_price_ceiling(env: &Env, ceiling: u64) {
    env.storage().persistent().set(&MarketDataKey::GasPriceCeiling, &ceiling);
    extend_ttl(env, &MarketDataKey::GasPriceCeiling);
}

pub fn read_gas_price_ceiling(env: &Env) -> Result<u64, MarketError> {
    env.storage()
        .persistent()
        .get(&MarketDataKey::GasPriceCeiling)
        .ok_or(MarketError::NotInitialized)
}
