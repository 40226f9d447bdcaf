// Token ledger operations
//
// Every mutating function validates before it writes and emits the matching
// SEP-41 event. Callers are expected to have checked authorization already.

use soroban_sdk::{Address, Env};

use crate::error::TokenError;
use crate::events::{emit_approve, emit_burn, emit_mint, emit_transfer};
use crate::storage::{
    read_allowance, read_balance, read_metadata, read_total_supply, write_allowance,
    write_balance, write_total_supply,
};
use crate::types::{AllowanceValue, TokenMetadata};

fn check_nonnegative(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::NegativeAmount);
    }
    Ok(())
}

fn credit(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    write_balance(env, to, balance);
    Ok(())
}

fn debit(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    let balance = read_balance(env, from);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    write_balance(env, from, balance - amount);
    Ok(())
}

// ============================================================
// METADATA
// ============================================================

pub fn metadata(env: &Env) -> Option<TokenMetadata> {
    read_metadata(env)
}

// ============================================================
// READERS
// ============================================================

pub fn total_supply(env: &Env) -> i128 {
    read_total_supply(env)
}

pub fn balance(env: &Env, id: &Address) -> i128 {
    read_balance(env, id)
}

/// Spendable allowance; zero once the expiration ledger has passed
pub fn allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    let value = read_allowance(env, from, spender);
    if value.expiration_ledger < env.ledger().sequence() {
        0
    } else {
        value.amount
    }
}

// ============================================================
// SUPPLY CHANGES
// ============================================================

/// Credit `to` with newly issued tokens; `admin` is the issuing authority
pub fn mint(env: &Env, admin: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative(amount)?;

    let supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    credit(env, to, amount)?;
    write_total_supply(env, supply);

    emit_mint(env, admin, to, amount);
    Ok(())
}

/// Destroy tokens held by `from`
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative(amount)?;

    debit(env, from, amount)?;
    // supply always covers any single balance
    write_total_supply(env, read_total_supply(env) - amount);

    emit_burn(env, from, amount);
    Ok(())
}

// ============================================================
// TRANSFERS & ALLOWANCES
// ============================================================

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative(amount)?;

    debit(env, from, amount)?;
    credit(env, to, amount)?;

    emit_transfer(env, from, to, amount);
    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), TokenError> {
    check_nonnegative(amount)?;
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(TokenError::InvalidExpiration);
    }

    write_allowance(
        env,
        from,
        spender,
        &AllowanceValue { amount, expiration_ledger },
    );

    emit_approve(env, from, spender, amount, expiration_ledger);
    Ok(())
}

/// Consume `amount` of the allowance `from` granted to `spender`
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    check_nonnegative(amount)?;

    let available = allowance(env, from, spender);
    if available < amount {
        return Err(TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        let value = read_allowance(env, from, spender);
        write_allowance(
            env,
            from,
            spender,
            &AllowanceValue {
                amount: available - amount,
                expiration_ledger: value.expiration_ledger,
            },
        );
    }
    Ok(())
}
