// Token ledger storage

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{AllowanceValue, TokenMetadata};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum TokenDataKey {
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_LIFETIME: u32 = 6_307_200;
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &TokenDataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// METADATA
// ============================================================

pub fn write_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().persistent().set(&TokenDataKey::Metadata, metadata);
    extend_ttl(env, &TokenDataKey::Metadata);
}

pub fn read_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().persistent().get(&TokenDataKey::Metadata)
}

// ============================================================
// SUPPLY & BALANCES
// ============================================================

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&TokenDataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().persistent().set(&TokenDataKey::TotalSupply, &supply);
    extend_ttl(env, &TokenDataKey::TotalSupply);
}

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = TokenDataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            extend_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = TokenDataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    extend_ttl(env, &key);
}

// ============================================================
// ALLOWANCES
// ============================================================

pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = TokenDataKey::Allowance(from.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or_default()
}

pub fn write_allowance(env: &Env, from: &Address, spender: &Address, value: &AllowanceValue) {
    let key = TokenDataKey::Allowance(from.clone(), spender.clone());
    if value.amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, value);
    extend_ttl(env, &key);
}
