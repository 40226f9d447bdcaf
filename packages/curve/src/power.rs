// SPDX-License-Identifier: MIT
// Fractional powers of integer ratios in Q64.64
//
// a^b = exp(b * ln a). Both halves are evaluated with truncated series whose
// terms are all non-negative and rounded down, so every result here is at or
// below the exact mathematical value.

use crate::constants::{LN2_Q64_CEIL, LN2_Q64_FLOOR, MAX_EXP_SHIFT, MAX_SERIES_TERMS};
use crate::q64::{div_q64, mul_div_floor, mul_q64, ONE_X64};

/// Natural log of num / den in Q64.64, for num >= den > 0
///
/// The ratio is reduced to y = num / (den * 2^k) in [1, 2) using bit lengths,
/// then ln y = 2 * atanh((y - 1) / (y + 1)) is summed directly from the
/// integers, which keeps full relative precision when num is close to den.
pub fn ln_ratio(num: u128, den: u128) -> Option<u128> {
    if den == 0 || num < den {
        return None;
    }
    if num == den {
        return Some(0);
    }

    // bits(num) - bits(den), so den << k has the same bit length as num
    let mut k = den.leading_zeros() - num.leading_zeros();
    let mut scaled = den << k;
    if scaled > num {
        k -= 1;
        scaled >>= 1;
    }

    let frac = ln_from_atanh(num - scaled, num.checked_add(scaled)?)?;

    (k as u128).checked_mul(LN2_Q64_FLOOR)?.checked_add(frac)
}

/// 2 * atanh(diff / sum) in Q64.64, with diff / sum in [0, 1/3)
fn ln_from_atanh(diff: u128, sum: u128) -> Option<u128> {
    if diff == 0 {
        return Some(0);
    }

    let z = div_q64(diff, sum)?;
    let z_sq = mul_q64(z, z)?;

    // sum of z^(2i+1) / (2i+1)
    let mut power = z;
    let mut acc: u128 = 0;
    let mut i: u32 = 0;
    while power > 0 && i < MAX_SERIES_TERMS {
        acc = acc.checked_add(power / (2 * i as u128 + 1))?;
        power = mul_q64(power, z_sq)?;
        i += 1;
    }

    acc.checked_mul(2)
}

/// e^y for y >= 0 in Q64.64
///
/// Returns None when the result would need a shift above MAX_EXP_SHIFT,
/// which only happens for exact values above 2^63.
pub fn exp_q64(y: u128) -> Option<u128> {
    let k = y / LN2_Q64_CEIL;
    if k > MAX_EXP_SHIFT {
        return None;
    }
    let f = y - k * LN2_Q64_CEIL;

    let mut term = ONE_X64;
    let mut acc = ONE_X64;
    let mut i: u32 = 1;
    while term > 0 && i <= MAX_SERIES_TERMS {
        term = mul_div_floor(term, f, ONE_X64 * i as u128)?;
        acc = acc.checked_add(term)?;
        i += 1;
    }

    // acc < 2^65, so the shift stays below 2^127
    Some(acc << k)
}

/// (num / den) ^ (exp_num / exp_den) in Q64.64, for num >= den > 0
pub fn pow_ratio(num: u128, den: u128, exp_num: u32, exp_den: u32) -> Option<u128> {
    if exp_den == 0 {
        return None;
    }
    let ln = ln_ratio(num, den)?;
    let y = mul_div_floor(ln, exp_num as u128, exp_den as u128)?;
    exp_q64(y)
}
