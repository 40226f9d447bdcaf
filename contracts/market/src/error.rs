// Market error module for LBC Swap

use lbcswap_curve::CurveError;
use lbcswap_token::TokenError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    // Configuration errors (100-199)
    NotInitialized = 100,
    InvalidReserveRatio = 101,
    InvalidInitialSupply = 102,
    ZeroGasPrice = 103,

    // Mint errors (200-299)
    ZeroDeposit = 200,
    GasPriceExceeded = 201,
    DepositTooSmall = 202,
    EmptySupply = 203,

    // Burn errors (300-399)
    UntrustedCaller = 300,
    ZeroAmount = 301,
    NotifyRequired = 302,

    // Authorization errors (400-499)
    Unauthorized = 400,

    // Token ledger errors (500-599)
    NegativeAmount = 500,
    InsufficientBalance = 501,
    InsufficientAllowance = 502,
    InvalidExpiration = 503,
    TokenOverflow = 504,

    // Curve errors (700-799)
    InvalidSupply = 700,
    InvalidReserveBalance = 701,
    InvalidCurveAmount = 702,
    AmountExceedsSupply = 703,
    MathOverflow = 704,
}

impl From<CurveError> for MarketError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InvalidSupply => MarketError::InvalidSupply,
            CurveError::InvalidReserveBalance => MarketError::InvalidReserveBalance,
            CurveError::InvalidAmount => MarketError::InvalidCurveAmount,
            CurveError::AmountExceedsSupply => MarketError::AmountExceedsSupply,
            CurveError::InvalidReserveRatio => MarketError::InvalidReserveRatio,
            CurveError::Overflow => MarketError::MathOverflow,
        }
    }
}

impl From<TokenError> for MarketError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::NegativeAmount => MarketError::NegativeAmount,
            TokenError::InsufficientBalance => MarketError::InsufficientBalance,
            TokenError::InsufficientAllowance => MarketError::InsufficientAllowance,
            TokenError::InvalidExpiration => MarketError::InvalidExpiration,
            TokenError::Overflow => MarketError::TokenOverflow,
        }
    }
}
