#![no_std]

//! # LBC Swap Market
//!
//! Continuous-token market on a single bonding curve.
//!
//! ## Responsibilities:
//! 1. Mint the reserve token against payment-token deposits
//! 2. Burn tokens sent back with a notification and refund from the reserve
//! 3. Gas-price ceiling against front-running (owner-controlled)
//! 4. SEP-41 surface of the reserve token, which lives in this contract

use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, token, Address, Bytes, Env, String,
};

use lbcswap_curve::{is_valid_reserve_ratio, purchase_return, sale_return};

mod constants;
mod error;
mod events;
mod receiver;
mod storage;
mod types;

pub use constants::*;
pub use error::MarketError;
use events::*;
pub use receiver::{TokenReceiver, TokenReceiverClient};
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct LbcMarket;

#[contractimpl]
impl LbcMarket {
    // ========================================================
    // CONSTRUCTION
    // ========================================================

    /// Create the market and its token
    ///
    /// # Arguments
    /// * `owner` - Receives the initial supply and controls the gas-price ceiling
    /// * `payment_token` - SEP-41 token deposits are paid in
    /// * `reserve_ratio_ppm` - Curve reserve ratio, 1..=1_000_000 ppm
    /// * `initial_supply` - Tokens pre-minted to `owner` (> 0)
    /// * `gas_price_ceiling` - Highest accepted gas price; defaults to `DEFAULT_GAS_PRICE_CEILING`
    pub fn __constructor(
        env: Env,
        owner: Address,
        payment_token: Address,
        reserve_ratio_ppm: u32,
        initial_supply: i128,
        gas_price_ceiling: Option<u64>,
    ) {
        if !is_valid_reserve_ratio(reserve_ratio_ppm) {
            panic_with_error!(&env, MarketError::InvalidReserveRatio);
        }
        if initial_supply <= 0 {
            panic_with_error!(&env, MarketError::InvalidInitialSupply);
        }
        let ceiling = gas_price_ceiling.unwrap_or(DEFAULT_GAS_PRICE_CEILING);
        if ceiling == 0 {
            panic_with_error!(&env, MarketError::ZeroGasPrice);
        }

        let config = MarketConfig {
            owner: owner.clone(),
            payment_token: payment_token.clone(),
            reserve_ratio_ppm,
        };
        write_config(&env, &config);
        write_reserve_balance(&env, 0);
        write_gas_price_ceiling(&env, ceiling);

        lbcswap_token::write_metadata(
            &env,
            &lbcswap_token::TokenMetadata {
                name: String::from_str(&env, TOKEN_NAME),
                symbol: String::from_str(&env, TOKEN_SYMBOL),
                decimals: TOKEN_DECIMALS,
            },
        );
        let this = env.current_contract_address();
        if let Err(err) = lbcswap_token::mint(&env, &this, &owner, initial_supply) {
            panic_with_error!(&env, MarketError::from(err));
        }

        emit_market_initialized(
            &env,
            &owner,
            &payment_token,
            reserve_ratio_ppm,
            initial_supply,
            ceiling,
        );
    }

    // ========================================================
    // MINT PATH
    // ========================================================

    /// Deposit payment tokens and receive newly minted tokens
    ///
    /// The deposit is credited to the reserve before pricing, so the curve is
    /// evaluated against the post-deposit reserve. Returns the minted amount.
    pub fn deposit(
        env: Env,
        depositor: Address,
        amount: i128,
        gas_price: u64,
    ) -> Result<i128, MarketError> {
        depositor.require_auth();

        if amount <= 0 {
            return Err(MarketError::ZeroDeposit);
        }
        if gas_price > read_gas_price_ceiling(&env)? {
            return Err(MarketError::GasPriceExceeded);
        }

        let config = read_config(&env)?;
        let (minted, new_reserve) = Self::quote_deposit(&env, &config, amount)?;

        // effects
        write_reserve_balance(&env, new_reserve);
        let this = env.current_contract_address();
        lbcswap_token::mint(&env, &this, &depositor, minted)?;

        // interactions
        token::Client::new(&env, &config.payment_token).transfer(&depositor, &this, &amount);

        log!(&env, "deposit: amount {} minted {} reserve {}", amount, minted, new_reserve);
        emit_mint(&env, &depositor, minted, amount);

        Ok(minted)
    }

    // ========================================================
    // BURN PATH
    // ========================================================

    /// Notification entry point for tokens sent with `transfer_and_call`
    ///
    /// Only this market's own token is trusted. Its notifications are
    /// dispatched internally, so an external call naming this market as
    /// `token` still has to pass `require_auth` for the market's address.
    pub fn on_token_received(
        env: Env,
        token: Address,
        operator: Address,
        from: Address,
        amount: i128,
        data: Bytes,
    ) -> Result<(), MarketError> {
        if token != env.current_contract_address() {
            return Err(MarketError::UntrustedCaller);
        }
        token.require_auth();

        Self::settle_redemption(&env, &operator, &from, amount, &data)?;
        Ok(())
    }

    // ========================================================
    // ADMIN
    // ========================================================

    /// Replace the gas-price ceiling (owner only)
    pub fn set_gas_price_ceiling(
        env: Env,
        caller: Address,
        new_ceiling: u64,
    ) -> Result<(), MarketError> {
        caller.require_auth();

        let config = read_config(&env)?;
        if caller != config.owner {
            return Err(MarketError::Unauthorized);
        }
        if new_ceiling == 0 {
            return Err(MarketError::ZeroGasPrice);
        }

        let old_ceiling = read_gas_price_ceiling(&env)?;
        write_gas_price_ceiling(&env, new_ceiling);

        emit_gas_ceiling_updated(&env, old_ceiling, new_ceiling);
        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn owner(env: Env) -> Result<Address, MarketError> {
        Ok(read_config(&env)?.owner)
    }

    pub fn reserve_balance(env: Env) -> i128 {
        read_reserve_balance(&env)
    }

    pub fn gas_price_ceiling(env: Env) -> Result<u64, MarketError> {
        read_gas_price_ceiling(&env)
    }

    pub fn reserve_ratio(env: Env) -> Result<u32, MarketError> {
        Ok(read_config(&env)?.reserve_ratio_ppm)
    }

    /// Address of the reserve token (this contract)
    pub fn token_address(env: Env) -> Address {
        env.current_contract_address()
    }

    pub fn payment_token(env: Env) -> Result<Address, MarketError> {
        Ok(read_config(&env)?.payment_token)
    }

    pub fn get_market_info(env: Env) -> Result<MarketInfo, MarketError> {
        let config = read_config(&env)?;
        Ok(MarketInfo {
            owner: config.owner,
            payment_token: config.payment_token,
            token: env.current_contract_address(),
            reserve_ratio_ppm: config.reserve_ratio_ppm,
            reserve_balance: read_reserve_balance(&env),
            total_supply: lbcswap_token::total_supply(&env),
            gas_price_ceiling: read_gas_price_ceiling(&env)?,
        })
    }

    /// Curve purchase formula on arbitrary inputs
    pub fn calculate_purchase_return(
        _env: Env,
        supply: i128,
        deposit: i128,
        reserve_ratio_ppm: u32,
        reserve_balance: i128,
    ) -> Result<i128, MarketError> {
        Ok(purchase_return(supply, deposit, reserve_ratio_ppm, reserve_balance)?)
    }

    /// Curve sale formula on arbitrary inputs
    pub fn calculate_sale_return(
        _env: Env,
        supply: i128,
        sell: i128,
        reserve_ratio_ppm: u32,
        reserve_balance: i128,
    ) -> Result<i128, MarketError> {
        Ok(sale_return(supply, sell, reserve_ratio_ppm, reserve_balance)?)
    }

    /// Tokens a deposit of `amount` would mint right now
    pub fn preview_deposit(env: Env, amount: i128) -> Result<i128, MarketError> {
        if amount <= 0 {
            return Err(MarketError::ZeroDeposit);
        }
        let config = read_config(&env)?;
        let (minted, _) = Self::quote_deposit(&env, &config, amount)?;
        Ok(minted)
    }

    /// Refund for sending `amount` tokens back right now
    pub fn preview_redeem(env: Env, amount: i128) -> Result<i128, MarketError> {
        if amount <= 0 {
            return Err(MarketError::ZeroAmount);
        }
        let config = read_config(&env)?;
        Self::quote_redemption(&env, &config, amount)
    }

    // ========================================================
    // TOKEN INTERFACE
    // ========================================================

    pub fn name(env: Env) -> String {
        Self::metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        Self::metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        Self::metadata(&env).decimals
    }

    pub fn total_supply(env: Env) -> i128 {
        lbcswap_token::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        lbcswap_token::balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        lbcswap_token::allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), MarketError> {
        from.require_auth();
        lbcswap_token::approve(&env, &from, &spender, amount, expiration_ledger)?;
        Ok(())
    }

    /// Plain transfer; tokens for the market must go through `transfer_and_call`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), MarketError> {
        from.require_auth();
        if to == env.current_contract_address() {
            return Err(MarketError::NotifyRequired);
        }
        lbcswap_token::transfer(&env, &from, &to, amount)?;
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), MarketError> {
        spender.require_auth();
        if to == env.current_contract_address() {
            return Err(MarketError::NotifyRequired);
        }
        lbcswap_token::spend_allowance(&env, &from, &spender, amount)?;
        lbcswap_token::transfer(&env, &from, &to, amount)?;
        Ok(())
    }

    /// Transfer, then notify `to` through `on_token_received`
    ///
    /// Sending to the market itself redeems the tokens against the reserve.
    pub fn transfer_and_call(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
        data: Bytes,
    ) -> Result<(), MarketError> {
        from.require_auth();
        lbcswap_token::transfer(&env, &from, &to, amount)?;
        Self::notify(&env, &from, &from, &to, amount, &data)
    }

    pub fn transfer_from_and_call(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
        data: Bytes,
    ) -> Result<(), MarketError> {
        spender.require_auth();
        lbcswap_token::spend_allowance(&env, &from, &spender, amount)?;
        lbcswap_token::transfer(&env, &from, &to, amount)?;
        Self::notify(&env, &spender, &from, &to, amount, &data)
    }
}

// ============================================================
// INTERNAL HELPERS
// ============================================================

impl LbcMarket {
    fn metadata(env: &Env) -> lbcswap_token::TokenMetadata {
        match lbcswap_token::metadata(env) {
            Some(metadata) => metadata,
            None => panic_with_error!(env, MarketError::NotInitialized),
        }
    }

    /// Minted amount and post-deposit reserve for a deposit of `amount`
    fn quote_deposit(
        env: &Env,
        config: &MarketConfig,
        amount: i128,
    ) -> Result<(i128, i128), MarketError> {
        let supply = lbcswap_token::total_supply(env);
        if supply == 0 {
            return Err(MarketError::EmptySupply);
        }

        let new_reserve = read_reserve_balance(env)
            .checked_add(amount)
            .ok_or(MarketError::MathOverflow)?;
        let minted = purchase_return(supply, amount, config.reserve_ratio_ppm, new_reserve)?;
        if minted == 0 {
            return Err(MarketError::DepositTooSmall);
        }
        Ok((minted, new_reserve))
    }

    /// Refund for burning `amount` out of the current supply
    fn quote_redemption(env: &Env, config: &MarketConfig, amount: i128) -> Result<i128, MarketError> {
        let supply = lbcswap_token::total_supply(env);
        if amount > supply {
            return Err(MarketError::AmountExceedsSupply);
        }
        let reserve = read_reserve_balance(env);
        if reserve == 0 {
            return Ok(0);
        }
        Ok(sale_return(supply, amount, config.reserve_ratio_ppm, reserve)?)
    }

    fn notify(
        env: &Env,
        operator: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
        data: &Bytes,
    ) -> Result<(), MarketError> {
        let this = env.current_contract_address();
        if *to == this {
            Self::settle_redemption(env, operator, from, amount, data)?;
        } else {
            TokenReceiverClient::new(env, to).on_token_received(&this, operator, from, &amount, data);
        }
        Ok(())
    }

    /// Burn tokens the market has just received and refund `from`
    ///
    /// The supply used for pricing still includes the received tokens.
    fn settle_redemption(
        env: &Env,
        operator: &Address,
        from: &Address,
        amount: i128,
        data: &Bytes,
    ) -> Result<i128, MarketError> {
        if amount <= 0 {
            return Err(MarketError::ZeroAmount);
        }

        let config = read_config(env)?;
        let refund = Self::quote_redemption(env, &config, amount)?;

        // effects
        let this = env.current_contract_address();
        lbcswap_token::burn(env, &this, amount)?;
        let reserve = read_reserve_balance(env) - refund;
        write_reserve_balance(env, reserve);

        // interactions
        if refund > 0 {
            token::Client::new(env, &config.payment_token).transfer(&this, from, &refund);
        }

        log!(env, "redeem: burned {} refund {} reserve {}", amount, refund, reserve);
        emit_tokens_received(env, operator, from, amount, data);
        emit_burn(env, from, amount, refund);

        Ok(refund)
    }
}
