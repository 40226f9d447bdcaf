mod common;

use common::*;
use lbcswap_launcher::{LauncherConfig, LauncherError, LbcLauncher, LbcLauncherClient};
use soroban_sdk::{testutils::Address as _, Address, Env};

#[test]
fn test_initialization_success() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = setup_launcher(&env);

    let config = client.get_config();
    assert_eq!(config.admin, admin);
    assert_eq!(config.market_wasm_hash, wasm_hash(&env, 0));
    assert_eq!(client.get_market_count(), 0);
    assert_eq!(client.get_markets().len(), 0);
}

#[test]
fn test_config_compares_by_value() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = setup_launcher(&env);

    let expected = LauncherConfig {
        admin,
        market_wasm_hash: wasm_hash(&env, 0),
    };
    assert_eq!(client.get_config(), expected);
    assert_eq!(client.try_get_config(), Ok(Ok(expected)));
}

#[test]
#[should_panic(expected = "Error(Contract, #1000)")]
fn test_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, admin) = setup_launcher(&env);
    client.initialize(&admin, &wasm_hash(&env, 1));
}

#[test]
fn test_deploy_before_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let launcher_id = env.register(LbcLauncher, ());
    let client = LbcLauncherClient::new(&env, &launcher_id);
    let deployer = Address::generate(&env);

    let result = client.try_deploy_market(
        &deployer,
        &salt(&env, 1),
        &create_token(&env),
        &HALF_RATIO,
        &INITIAL_SUPPLY,
        &None,
    );
    assert_eq!(result, Err(Ok(LauncherError::NotInitialized)));
    assert_eq!(client.try_get_config(), Err(Ok(LauncherError::NotInitialized)));
}

#[test]
fn test_admin_updates_wasm_hash() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = setup_launcher(&env);
    client.set_market_wasm_hash(&wasm_hash(&env, 7));

    assert_eq!(client.get_config().market_wasm_hash, wasm_hash(&env, 7));
}

#[test]
fn test_wasm_hash_update_requires_admin_auth() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = setup_launcher(&env);
    env.set_auths(&[]);

    assert!(client.try_set_market_wasm_hash(&wasm_hash(&env, 7)).is_err());
    assert_eq!(client.get_config().market_wasm_hash, wasm_hash(&env, 0));
}
