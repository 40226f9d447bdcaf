// Launcher storage module for LBC Swap

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::types::{LauncherConfig, MarketRecord};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum LauncherDataKey {
    Config,
    Initialized,
    MarketList,
    /// Effective deployment salt -> market address
    Market(BytesN<32>),
    Record(Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &LauncherDataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&LauncherDataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&LauncherDataKey::Initialized, &true);
    extend_ttl(env, &LauncherDataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &LauncherConfig) {
    env.storage().persistent().set(&LauncherDataKey::Config, config);
    extend_ttl(env, &LauncherDataKey::Config);
}

pub fn read_config(env: &Env) -> Option<LauncherConfig> {
    env.storage().persistent().get(&LauncherDataKey::Config)
}

// ============================================================
// MARKET REGISTRY
// ============================================================

pub fn init_market_list(env: &Env) {
    let list: Vec<Address> = Vec::new(env);
    env.storage().persistent().set(&LauncherDataKey::MarketList, &list);
    extend_ttl(env, &LauncherDataKey::MarketList);
}

pub fn read_market_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&LauncherDataKey::MarketList)
        .unwrap_or(Vec::new(env))
}

pub fn market_exists(env: &Env, salt: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&LauncherDataKey::Market(salt.clone()))
}

pub fn read_market_record(env: &Env, market: &Address) -> Option<MarketRecord> {
    env.storage()
        .persistent()
        .get(&LauncherDataKey::Record(market.clone()))
}

pub fn register_market(env: &Env, effective_salt: &BytesN<32>, record: &MarketRecord) {
    let key = LauncherDataKey::Market(effective_salt.clone());
    env.storage().persistent().set(&key, &record.market);
    extend_ttl(env, &key);

    let record_key = LauncherDataKey::Record(record.market.clone());
    env.storage().persistent().set(&record_key, record);
    extend_ttl(env, &record_key);

    let mut list = read_market_list(env);
    list.push_back(record.market.clone());
    env.storage().persistent().set(&LauncherDataKey::MarketList, &list);
    extend_ttl(env, &LauncherDataKey::MarketList);
}
