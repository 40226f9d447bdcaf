// SPDX-License-Identifier: MIT
// Continuous token purchase / sale formulas
//
// purchase: minted = supply * ((1 + deposit / reserve) ^ r - 1)
// sale:     refund = reserve * (1 - (1 - sell / supply) ^ (1 / r))
//
// with r = reserve_ratio_ppm / 1_000_000. Rounding always favours the reserve:
// minted amounts round down and the share of reserve left behind by a sale
// rounds up.

use crate::constants::{MAX_RESERVE_RATIO_PPM, MIN_RESERVE_RATIO_PPM, OVERFLOW_GROWTH_BOUND};
use crate::error::CurveError;
use crate::power::{exp_q64, ln_ratio, pow_ratio};
use crate::q64::{div_round_up, mul_div_ceil, mul_div_floor, mul_q64, u128_to_i128_checked, ONE_X64};

/// True for ratios in 1..=1_000_000 ppm
#[inline]
pub fn is_valid_reserve_ratio(reserve_ratio_ppm: u32) -> bool {
    (MIN_RESERVE_RATIO_PPM..=MAX_RESERVE_RATIO_PPM).contains(&reserve_ratio_ppm)
}

/// Tokens issued for `deposit` against a curve holding `reserve_balance`
///
/// # Arguments
/// * `supply` - Current token supply (> 0)
/// * `deposit` - Deposited value (> 0)
/// * `reserve_ratio_ppm` - Reserve ratio in parts per million
/// * `reserve_balance` - Reserve the curve is priced against (> 0)
pub fn purchase_return(
    supply: i128,
    deposit: i128,
    reserve_ratio_ppm: u32,
    reserve_balance: i128,
) -> Result<i128, CurveError> {
    if supply <= 0 {
        return Err(CurveError::InvalidSupply);
    }
    if reserve_balance <= 0 {
        return Err(CurveError::InvalidReserveBalance);
    }
    if deposit <= 0 {
        return Err(CurveError::InvalidAmount);
    }
    if !is_valid_reserve_ratio(reserve_ratio_ppm) {
        return Err(CurveError::InvalidReserveRatio);
    }

    let supply = supply as u128;
    let deposit = deposit as u128;
    let reserve = reserve_balance as u128;

    let minted = if reserve_ratio_ppm == MAX_RESERVE_RATIO_PPM {
        mul_div_floor(supply, deposit, reserve)
    } else {
        let grown_reserve = reserve.checked_add(deposit).ok_or(CurveError::Overflow)?;
        let growth = pow_ratio(grown_reserve, reserve, reserve_ratio_ppm, MAX_RESERVE_RATIO_PPM)
            .ok_or(CurveError::Overflow)?;
        mul_q64(supply, growth - ONE_X64)
    };

    minted
        .and_then(u128_to_i128_checked)
        .ok_or(CurveError::Overflow)
}

/// Reserve value returned for burning `sell` tokens
///
/// Selling the whole supply returns the whole reserve, with no dust left on
/// either side.
///
/// # Arguments
/// * `supply` - Current token supply, including the tokens being sold (> 0)
/// * `sell` - Tokens to burn (0 < sell <= supply)
/// * `reserve_ratio_ppm` - Reserve ratio in parts per million
/// * `reserve_balance` - Current reserve (> 0)
pub fn sale_return(
    supply: i128,
    sell: i128,
    reserve_ratio_ppm: u32,
    reserve_balance: i128,
) -> Result<i128, CurveError> {
    if supply <= 0 {
        return Err(CurveError::InvalidSupply);
    }
    if reserve_balance <= 0 {
        return Err(CurveError::InvalidReserveBalance);
    }
    if sell <= 0 {
        return Err(CurveError::InvalidAmount);
    }
    if sell > supply {
        return Err(CurveError::AmountExceedsSupply);
    }
    if !is_valid_reserve_ratio(reserve_ratio_ppm) {
        return Err(CurveError::InvalidReserveRatio);
    }

    if sell == supply {
        return Ok(reserve_balance);
    }

    let supply = supply as u128;
    let sell = sell as u128;
    let reserve = reserve_balance as u128;

    if reserve_ratio_ppm == MAX_RESERVE_RATIO_PPM {
        return mul_div_floor(reserve, sell, supply)
            .and_then(u128_to_i128_checked)
            .ok_or(CurveError::Overflow);
    }

    // growth = (supply / remaining) ^ (1 / r); the reserve kept is reserve / growth
    let remaining = supply - sell;
    let ln = ln_ratio(supply, remaining).ok_or(CurveError::Overflow)?;
    let y = mul_div_floor(ln, MAX_RESERVE_RATIO_PPM as u128, reserve_ratio_ppm as u128)
        .ok_or(CurveError::Overflow)?;

    let kept = match exp_q64(y) {
        Some(growth) => mul_div_ceil(reserve, ONE_X64, growth).ok_or(CurveError::Overflow)?,
        // growth is above 2^63, so the exact share kept is below reserve / 2^63
        None => div_round_up(reserve, OVERFLOW_GROWTH_BOUND),
    };

    let refund = reserve.saturating_sub(kept);
    u128_to_i128_checked(refund).ok_or(CurveError::Overflow)
}
