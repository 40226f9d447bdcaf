// LBC Swap Curve Package
//
// Pure fixed-point formulas for a continuous-token bonding curve. Nothing in
// this crate touches storage; every function is deterministic in its inputs.

#![no_std]

pub mod constants;
pub mod error;
pub mod formula;
pub mod power;
pub mod q64;

pub use constants::*;
pub use error::CurveError;

pub use formula::{is_valid_reserve_ratio, purchase_return, sale_return};

pub use power::{exp_q64, ln_ratio, pow_ratio};

pub use q64::{
    full_mul,
    mul_div_rem,
    mul_div_floor,
    mul_div_ceil,
    mul_q64,
    div_q64,
    div_round_up,
    u128_to_i128_checked,
    ONE_X64,
};
