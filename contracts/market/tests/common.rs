#![allow(dead_code)]

use lbcswap_market::{LbcMarket, LbcMarketClient};
use soroban_sdk::{
    testutils::{Address as _, Events},
    token::{StellarAssetClient, TokenClient},
    Address, Bytes, Env, Symbol, TryFromVal, Val, Vec,
};

// Test constants
pub const UNIT: i128 = 10_000_000; // 7 decimals
pub const HALF_RATIO: u32 = 500_000;
pub const INITIAL_SUPPLY: i128 = 10 * UNIT;
pub const DEFAULT_CEILING: u64 = 100;

pub struct MarketTest<'a> {
    pub env: Env,
    pub market: LbcMarketClient<'a>,
    pub payment: TokenClient<'a>,
    pub owner: Address,
}

/// Market with a 0.5 reserve ratio and 10 tokens pre-minted to the owner
pub fn setup_market<'a>() -> MarketTest<'a> {
    setup_custom_market(HALF_RATIO, INITIAL_SUPPLY, None)
}

pub fn setup_custom_market<'a>(
    reserve_ratio_ppm: u32,
    initial_supply: i128,
    gas_price_ceiling: Option<u64>,
) -> MarketTest<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let payment_token = create_payment_token(&env);
    let market_id = env.register(
        LbcMarket,
        (
            owner.clone(),
            payment_token.clone(),
            reserve_ratio_ppm,
            initial_supply,
            gas_price_ceiling,
        ),
    );

    let market = LbcMarketClient::new(&env, &market_id);
    let payment = TokenClient::new(&env, &payment_token);
    MarketTest { env, market, payment, owner }
}

/// Create the payment token (stands in for native XLM)
pub fn create_payment_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

impl MarketTest<'_> {
    /// New account holding `amount` of the payment token
    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.fund(&user, amount);
        user
    }

    pub fn fund(&self, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, &self.payment.address).mint(to, &amount);
    }

    /// Deposit at the current ceiling and return the minted amount
    pub fn deposit(&self, depositor: &Address, amount: i128) -> i128 {
        self.market.deposit(depositor, &amount, &DEFAULT_CEILING)
    }

    /// Send tokens back to the market and return the refund received
    pub fn redeem(&self, seller: &Address, amount: i128) -> i128 {
        let before = self.payment.balance(seller);
        self.market
            .transfer_and_call(seller, &self.market.address, &amount, &Bytes::new(&self.env));
        self.payment.balance(seller) - before
    }

    pub fn market_payment_balance(&self) -> i128 {
        self.payment.balance(&self.market.address)
    }
}

/// Last event named `name` published by `contract`
pub fn last_event(env: &Env, contract: &Address, name: &str) -> Option<(Vec<Val>, Val)> {
    let wanted = Symbol::new(env, name);
    let mut found = None;
    for (id, topics, data) in env.events().all().iter() {
        if id != *contract {
            continue;
        }
        if let Some(first) = topics.get(0) {
            if let Ok(symbol) = Symbol::try_from_val(env, &first) {
                if symbol == wanted {
                    found = Some((topics.clone(), data));
                }
            }
        }
    }
    found
}
