// Launcher error module for LBC Swap

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LauncherError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Deployment errors (1100-1199)
    MarketAlreadyExists = 1100,
    InvalidReserveRatio = 1101,
    InvalidInitialSupply = 1102,
    ZeroGasPrice = 1103,
}
