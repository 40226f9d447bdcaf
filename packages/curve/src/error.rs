// Curve errors

use soroban_sdk::contracterror;

/// Rejections from the purchase/sale formulas
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CurveError {
    /// Token supply must be positive
    InvalidSupply = 1,
    /// Reserve balance must be positive
    InvalidReserveBalance = 2,
    /// Deposit or sell amount must be positive
    InvalidAmount = 3,
    /// Sell amount is larger than the supply
    AmountExceedsSupply = 4,
    /// Reserve ratio must be 1..=1_000_000 ppm
    InvalidReserveRatio = 5,
    /// Intermediate or result does not fit
    Overflow = 6,
}
