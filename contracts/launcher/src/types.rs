//! Launcher type definitions

use soroban_sdk::{contracttype, Address, BytesN};

/// Launcher configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LauncherConfig {
    pub admin: Address,
    pub market_wasm_hash: BytesN<32>,
}

/// Registry entry for a deployed market
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketRecord {
    pub market: Address,
    /// Owner of the market and holder of its initial supply
    pub deployer: Address,
    pub salt: BytesN<32>,
    pub payment_token: Address,
    pub reserve_ratio_ppm: u32,
    pub initial_supply: i128,
    /// `None` means the market picked its default
    pub gas_price_ceiling: Option<u64>,
    pub created_ledger: u32,
}
