mod common;

use common::*;
use lbcswap_market::MarketError;
use soroban_sdk::IntoVal;

#[test]
fn test_first_deposit_matches_curve() {
    let t = setup_market();
    let alice = t.funded_user(10 * UNIT);

    let minted = t.deposit(&alice, 10 * UNIT);

    // 10 * (sqrt(2) - 1) tokens, priced against the credited reserve
    assert_eq!(minted, 41_421_356);
    assert_eq!(t.market.balance(&alice), minted);
    assert_eq!(t.market.total_supply(), INITIAL_SUPPLY + minted);
    assert_eq!(t.market.reserve_balance(), 10 * UNIT);
}

#[test]
fn test_deposit_moves_payment() {
    let t = setup_market();
    let alice = t.funded_user(25 * UNIT);

    t.deposit(&alice, 10 * UNIT);

    assert_eq!(t.payment.balance(&alice), 15 * UNIT);
    assert_eq!(t.market_payment_balance(), 10 * UNIT);
}

#[test]
fn test_second_depositor_receives_fewer_tokens() {
    let t = setup_market();
    let alice = t.funded_user(10 * UNIT);
    let bob = t.funded_user(10 * UNIT);

    let first = t.deposit(&alice, 10 * UNIT);
    let second = t.deposit(&bob, 10 * UNIT);

    assert_eq!(second, 31_783_724);
    assert!(second < first);
    assert_eq!(t.market.reserve_balance(), 20 * UNIT);
    assert_eq!(t.market.total_supply(), INITIAL_SUPPLY + first + second);
}

#[test]
fn test_marginal_return_never_increases() {
    let t = setup_market();
    let alice = t.funded_user(100 * UNIT);

    let mut previous = i128::MAX;
    for _ in 0..8 {
        let minted = t.deposit(&alice, 5 * UNIT);
        assert!(minted <= previous);
        previous = minted;
    }
}

#[test]
fn test_linear_market() {
    let t = setup_custom_market(1_000_000, INITIAL_SUPPLY, None);
    let alice = t.funded_user(5 * UNIT);

    // linear curve: supply * deposit / reserve, with reserve = deposit
    assert_eq!(t.deposit(&alice, 5 * UNIT), INITIAL_SUPPLY);
}

#[test]
fn test_mint_event() {
    let t = setup_market();
    let alice = t.funded_user(10 * UNIT);
    t.deposit(&alice, 10 * UNIT);

    let (topics, data) = last_event(&t.env, &t.market.address, "Mint").unwrap();
    let depositor: soroban_sdk::Address = topics.get(1).unwrap().into_val(&t.env);
    let (minted, deposit): (i128, i128) = data.into_val(&t.env);
    assert_eq!(depositor, alice);
    assert_eq!(minted, 41_421_356);
    assert_eq!(deposit, 10 * UNIT);
}

// ============================================================
// REJECTIONS
// ============================================================

#[test]
fn test_zero_deposit() {
    let t = setup_market();
    let alice = t.funded_user(10 * UNIT);

    let result = t.market.try_deposit(&alice, &0, &DEFAULT_CEILING);
    assert_eq!(result, Err(Ok(MarketError::ZeroDeposit)));

    let result = t.market.try_deposit(&alice, &-1, &DEFAULT_CEILING);
    assert_eq!(result, Err(Ok(MarketError::ZeroDeposit)));
    assert_eq!(t.market.reserve_balance(), 0);
}

#[test]
fn test_gas_price_at_ceiling_succeeds() {
    let t = setup_custom_market(HALF_RATIO, INITIAL_SUPPLY, Some(250));
    let alice = t.funded_user(UNIT);

    let minted = t.market.deposit(&alice, &UNIT, &250);
    assert!(minted > 0);
}

#[test]
fn test_gas_price_above_ceiling_rejected() {
    let t = setup_custom_market(HALF_RATIO, INITIAL_SUPPLY, Some(250));
    let alice = t.funded_user(UNIT);

    let result = t.market.try_deposit(&alice, &UNIT, &251);
    assert_eq!(result, Err(Ok(MarketError::GasPriceExceeded)));
    assert_eq!(t.market.reserve_balance(), 0);
    assert_eq!(t.market.total_supply(), INITIAL_SUPPLY);
    assert_eq!(t.payment.balance(&alice), UNIT);
}

#[test]
#[should_panic(expected = "Error(Contract, #201)")]
fn test_gas_price_above_ceiling_panics() {
    let t = setup_market();
    let alice = t.funded_user(UNIT);
    t.market.deposit(&alice, &UNIT, &(DEFAULT_CEILING + 1));
}

#[test]
fn test_deposit_too_small() {
    // a single base unit of supply cannot issue a fraction of a token
    let t = setup_custom_market(HALF_RATIO, 1, None);
    let alice = t.funded_user(10);

    let result = t.market.try_deposit(&alice, &1, &DEFAULT_CEILING);
    assert_eq!(result, Err(Ok(MarketError::DepositTooSmall)));
    assert_eq!(t.market.reserve_balance(), 0);
}

#[test]
fn test_failed_payment_rolls_back() {
    let t = setup_market();
    let broke = t.funded_user(UNIT);

    let result = t.market.try_deposit(&broke, &(2 * UNIT), &DEFAULT_CEILING);
    assert!(result.is_err());
    assert_eq!(t.market.reserve_balance(), 0);
    assert_eq!(t.market.total_supply(), INITIAL_SUPPLY);
    assert_eq!(t.market.balance(&broke), 0);
}

#[test]
fn test_deposit_after_supply_exhausted() {
    let t = setup_market();
    t.fund(&t.owner, 10 * UNIT);
    t.deposit(&t.owner, 10 * UNIT);

    let all = t.market.total_supply();
    t.redeem(&t.owner, all);

    let result = t.market.try_deposit(&t.owner, &UNIT, &DEFAULT_CEILING);
    assert_eq!(result, Err(Ok(MarketError::EmptySupply)));
}
