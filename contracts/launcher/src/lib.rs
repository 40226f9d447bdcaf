#![no_std]

//! # LBC Swap Launcher
//!
//! Deterministic deployment of bonding-curve markets.
//!
//! ## Responsibilities:
//! 1. Deploy markets at addresses derived from (deployer, salt)
//! 2. Validate market parameters before paying for a deployment
//! 3. Keep a registry of every market it deployed

use soroban_sdk::{contract, contractimpl, log, xdr::ToXdr, Address, BytesN, Env, Vec};

use lbcswap_curve::is_valid_reserve_ratio;

mod error;
mod events;
mod storage;
mod types;

pub use error::LauncherError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct LbcLauncher;

#[contractimpl]
impl LbcLauncher {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Initialize launcher
    pub fn initialize(
        env: Env,
        admin: Address,
        market_wasm_hash: BytesN<32>,
    ) -> Result<(), LauncherError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(LauncherError::AlreadyInitialized);
        }

        write_config(&env, &LauncherConfig {
            admin: admin.clone(),
            market_wasm_hash,
        });
        set_initialized(&env);
        init_market_list(&env);

        emit_initialized(&env, &admin);
        Ok(())
    }

    /// Deploy a market owned by `deployer`
    ///
    /// # Arguments
    /// * `deployer` - Market owner; receives the initial supply
    /// * `salt` - Caller-chosen salt, namespaced by `deployer`
    /// * `payment_token` - SEP-41 token the market accepts
    /// * `reserve_ratio_ppm` - Curve reserve ratio, 1..=1_000_000 ppm
    /// * `initial_supply` - Tokens pre-minted to `deployer`
    /// * `gas_price_ceiling` - Optional ceiling; the market default applies when `None`
    pub fn deploy_market(
        env: Env,
        deployer: Address,
        salt: BytesN<32>,
        payment_token: Address,
        reserve_ratio_ppm: u32,
        initial_supply: i128,
        gas_price_ceiling: Option<u64>,
    ) -> Result<Address, LauncherError> {
        deployer.require_auth();

        let config = read_config(&env).ok_or(LauncherError::NotInitialized)?;

        if !is_valid_reserve_ratio(reserve_ratio_ppm) {
            return Err(LauncherError::InvalidReserveRatio);
        }
        if initial_supply <= 0 {
            return Err(LauncherError::InvalidInitialSupply);
        }
        if gas_price_ceiling == Some(0) {
            return Err(LauncherError::ZeroGasPrice);
        }

        let effective_salt = Self::effective_salt(&env, &deployer, &salt);
        if market_exists(&env, &effective_salt) {
            return Err(LauncherError::MarketAlreadyExists);
        }

        // === DEPLOY MARKET ===
        let market = env
            .deployer()
            .with_current_contract(effective_salt.clone())
            .deploy_v2(
                config.market_wasm_hash,
                (
                    deployer.clone(),
                    payment_token.clone(),
                    reserve_ratio_ppm,
                    initial_supply,
                    gas_price_ceiling,
                ),
            );

        // === REGISTER MARKET ===
        let record = MarketRecord {
            market: market.clone(),
            deployer: deployer.clone(),
            salt,
            payment_token: payment_token.clone(),
            reserve_ratio_ppm,
            initial_supply,
            gas_price_ceiling,
            created_ledger: env.ledger().sequence(),
        };
        register_market(&env, &effective_salt, &record);

        log!(&env, "market deployed: ratio {} supply {}", reserve_ratio_ppm, initial_supply);
        emit_market_deployed(
            &env,
            &market,
            &deployer,
            &payment_token,
            reserve_ratio_ppm,
            initial_supply,
        );

        Ok(market)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Address `deploy_market(deployer, salt, ..)` deploys to
    pub fn market_address(env: Env, deployer: Address, salt: BytesN<32>) -> Address {
        let effective_salt = Self::effective_salt(&env, &deployer, &salt);
        env.deployer()
            .with_current_contract(effective_salt)
            .deployed_address()
    }

    pub fn is_market_deployed(env: Env, deployer: Address, salt: BytesN<32>) -> bool {
        let effective_salt = Self::effective_salt(&env, &deployer, &salt);
        market_exists(&env, &effective_salt)
    }

    pub fn get_market(env: Env, market: Address) -> Option<MarketRecord> {
        read_market_record(&env, &market)
    }

    pub fn get_markets(env: Env) -> Vec<Address> {
        read_market_list(&env)
    }

    pub fn get_market_count(env: Env) -> u32 {
        read_market_list(&env).len()
    }

    pub fn get_config(env: Env) -> Result<LauncherConfig, LauncherError> {
        read_config(&env).ok_or(LauncherError::NotInitialized)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Update the market WASM hash used by future deployments
    pub fn set_market_wasm_hash(env: Env, new_hash: BytesN<32>) -> Result<(), LauncherError> {
        let mut config = read_config(&env).ok_or(LauncherError::NotInitialized)?;
        config.admin.require_auth();

        config.market_wasm_hash = new_hash.clone();
        write_config(&env, &config);

        emit_wasm_hash_updated(&env, &new_hash);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    /// sha256(deployer || salt): a salt cannot be taken by another deployer
    fn effective_salt(env: &Env, deployer: &Address, salt: &BytesN<32>) -> BytesN<32> {
        let mut data = deployer.clone().to_xdr(env);
        data.extend_from_array(&salt.to_array());
        env.crypto().sha256(&data).to_bytes()
    }
}
