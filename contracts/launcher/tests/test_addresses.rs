mod common;

use common::*;
use soroban_sdk::{testutils::Address as _, Address, Env};

#[test]
fn test_market_address_is_deterministic() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = setup_launcher(&env);
    let deployer = Address::generate(&env);

    let first = client.market_address(&deployer, &salt(&env, 3));
    let second = client.market_address(&deployer, &salt(&env, 3));
    assert_eq!(first, second);
}

#[test]
fn test_salt_changes_address() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = setup_launcher(&env);
    let deployer = Address::generate(&env);

    assert_ne!(
        client.market_address(&deployer, &salt(&env, 1)),
        client.market_address(&deployer, &salt(&env, 2))
    );
}

#[test]
fn test_salt_is_namespaced_by_deployer() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = setup_launcher(&env);
    let alice = Address::generate(&env);
    let mallory = Address::generate(&env);

    assert_ne!(
        client.market_address(&alice, &salt(&env, 9)),
        client.market_address(&mallory, &salt(&env, 9))
    );
}

#[test]
fn test_nothing_deployed_yet() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _) = setup_launcher(&env);
    let deployer = Address::generate(&env);

    assert!(!client.is_market_deployed(&deployer, &salt(&env, 1)));
    let predicted = client.market_address(&deployer, &salt(&env, 1));
    assert_eq!(client.get_market(&predicted), None);
}
