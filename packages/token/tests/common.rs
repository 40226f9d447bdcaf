#![allow(dead_code)]

use soroban_sdk::{contract, contractimpl, testutils::Address as _, Address, Env};

/// Empty contract whose storage hosts the ledger under test
#[contract]
pub struct LedgerHost;

#[contractimpl]
impl LedgerHost {}

pub struct Setup {
    pub env: Env,
    pub host: Address,
    pub alice: Address,
    pub bob: Address,
}

pub fn setup() -> Setup {
    let env = Env::default();
    let host = env.register(LedgerHost, ());
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    Setup { env, host, alice, bob }
}

impl Setup {
    pub fn run<T>(&self, f: impl FnOnce(&Env) -> T) -> T {
        self.env.as_contract(&self.host, || f(&self.env))
    }
}
