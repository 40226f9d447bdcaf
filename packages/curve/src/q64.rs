// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic with full-width intermediates

use crate::constants::{MASK_64, Q64};

pub const ONE_X64: u128 = Q64;

/// Full 256-bit product of two u128 values, returned as (hi, lo)
#[inline]
pub fn full_mul(a: u128, b: u128) -> (u128, u128) {
    let a_hi = a >> 64;
    let a_lo = a & MASK_64;
    let b_hi = b >> 64;
    let b_lo = b & MASK_64;

    let term_ll = a_lo * b_lo;
    let term_lh = a_lo * b_hi;
    let term_hl = a_hi * b_lo;
    let term_hh = a_hi * b_hi;

    // Middle column can carry at most once past 2^128
    let (mid, carry_a) = term_lh.overflowing_add(term_hl);
    let (mid, carry_b) = mid.overflowing_add(term_ll >> 64);
    let carry = (carry_a as u128) + (carry_b as u128);

    let lo = (mid << 64) | (term_ll & MASK_64);
    let hi = term_hh + (mid >> 64) + (carry << 64);

    (hi, lo)
}

/// Quotient and remainder of (a * b) / denominator
/// Returns None on zero denominator or when the quotient needs more than 128 bits
pub fn mul_div_rem(a: u128, b: u128, denominator: u128) -> Option<(u128, u128)> {
    if denominator == 0 {
        return None;
    }

    let (hi, lo) = full_mul(a, b);

    if hi == 0 {
        return Some((lo / denominator, lo % denominator));
    }

    if hi >= denominator {
        return None;
    }

    // Restoring long division, one bit of `lo` at a time.
    // rem < denominator holds at the top of every iteration.
    let mut rem = hi;
    let mut quot: u128 = 0;
    for shift in (0..128).rev() {
        let top_bit_set = rem >> 127 == 1;
        rem = (rem << 1) | ((lo >> shift) & 1);
        quot <<= 1;
        if top_bit_set || rem >= denominator {
            rem = rem.wrapping_sub(denominator);
            quot |= 1;
        }
    }

    Some((quot, rem))
}

/// floor((a * b) / denominator)
#[inline]
pub fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Option<u128> {
    mul_div_rem(a, b, denominator).map(|(q, _)| q)
}

/// ceil((a * b) / denominator)
#[inline]
pub fn mul_div_ceil(a: u128, b: u128, denominator: u128) -> Option<u128> {
    let (q, r) = mul_div_rem(a, b, denominator)?;
    if r == 0 {
        Some(q)
    } else {
        q.checked_add(1)
    }
}

/// Multiply two Q64.64 numbers, rounding down
#[inline]
pub fn mul_q64(a: u128, b: u128) -> Option<u128> {
    mul_div_floor(a, b, Q64)
}

/// Divide raw values into a Q64.64 result: (a * 2^64) / b, rounding down
#[inline]
pub fn div_q64(a: u128, b: u128) -> Option<u128> {
    mul_div_floor(a, Q64, b)
}

/// Divide with rounding up
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> u128 {
    if denominator == 0 { return 0; }
    let result = numerator / denominator;
    if numerator % denominator != 0 {
        result.saturating_add(1)
    } else {
        result
    }
}

/// Checked narrowing back to the contract-facing amount type
#[inline]
pub fn u128_to_i128_checked(x: u128) -> Option<i128> {
    if x > i128::MAX as u128 { None } else { Some(x as i128) }
}
