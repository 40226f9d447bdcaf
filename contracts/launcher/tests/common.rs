#![allow(dead_code)]

use lbcswap_launcher::{LbcLauncher, LbcLauncherClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

pub const HALF_RATIO: u32 = 500_000;
pub const INITIAL_SUPPLY: i128 = 100_000_000;

pub fn setup_launcher(env: &Env) -> (LbcLauncherClient<'_>, Address) {
    let admin = Address::generate(env);
    let launcher_id = env.register(LbcLauncher, ());
    let client = LbcLauncherClient::new(env, &launcher_id);
    client.initialize(&admin, &wasm_hash(env, 0));
    (client, admin)
}

pub fn wasm_hash(env: &Env, fill: u8) -> BytesN<32> {
    BytesN::from_array(env, &[fill; 32])
}

pub fn salt(env: &Env, fill: u8) -> BytesN<32> {
    BytesN::from_array(env, &[fill; 32])
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}
