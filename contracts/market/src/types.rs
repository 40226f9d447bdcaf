use soroban_sdk::{contracttype, Address};

/// Immutable market configuration, written by the constructor
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketConfig {
    pub owner: Address,
    /// SEP-41 token deposits are paid in and refunds paid out with
    pub payment_token: Address,
    pub reserve_ratio_ppm: u32,
}

/// Snapshot of everything a front-end needs to quote the curve
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketInfo {
    pub owner: Address,
    pub payment_token: Address,
    pub token: Address,
    pub reserve_ratio_ppm: u32,
    pub reserve_balance: i128,
    pub total_supply: i128,
    pub gas_price_ceiling: u64,
}
