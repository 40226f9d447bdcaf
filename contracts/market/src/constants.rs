// Market constants

/// Gas-price ceiling used when the deployer does not pick one (base fee, stroops)
pub const DEFAULT_GAS_PRICE_CEILING: u64 = 100;

pub const TOKEN_NAME: &str = "MITHRIL";
pub const TOKEN_SYMBOL: &str = "MIT";
pub const TOKEN_DECIMALS: u32 = 7;
