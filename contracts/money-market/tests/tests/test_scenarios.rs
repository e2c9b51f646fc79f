use cosmwasm_std::{coin, Addr, Decimal, Uint128};
use meridian_money_market::error::ContractError;
use meridian_testing::{
    event_attribute,
    integration::{
        helpers::{bnb_money_market, ukava_money_market},
        mock_env::{MockEnv, MockEnvBuilder},
    },
};

use super::helpers::assert_err;

const ONE_BNB: u128 = 100_000_000;
const ONE_KAVA: u128 = 1_000_000;

fn setup() -> MockEnv {
    MockEnvBuilder::new(Addr::unchecked("owner"))
        .money_market(bnb_money_market())
        .money_market(ukava_money_market())
        .price("bnb:usd", Decimal::from_ratio(300u128, 1u128))
        .price("kava:usd", Decimal::one())
        .build()
}

#[test]
fn sequential_deposits_merge_into_one_record() {
    let mut mock_env = setup();
    let money_market = mock_env.money_market.clone();

    let alice = Addr::unchecked("alice");
    mock_env.fund_account(&alice, &[coin(200 * ONE_BNB, "bnb")]);

    money_market.deposit(&mut mock_env, &alice, &[coin(100 * ONE_BNB, "bnb")]).unwrap();
    money_market.deposit(&mut mock_env, &alice, &[coin(100 * ONE_BNB, "bnb")]).unwrap();

    let deposit = money_market.query_deposit(&mut mock_env, &alice).unwrap();
    assert_eq!(deposit.amount, vec![coin(200 * ONE_BNB, "bnb")]);

    let totals = money_market.query_market_totals(&mut mock_env, "bnb");
    assert_eq!(totals.cash.u128(), 200 * ONE_BNB);

    let balance = mock_env.query_balance(&money_market.contract_addr, "bnb").unwrap();
    assert_eq!(balance.amount.u128(), 200 * ONE_BNB);
    assert!(mock_env.query_all_balances(&alice).is_empty());
}

#[test]
fn full_withdraw_returns_funds_and_deletes_record() {
    let mut mock_env = setup();
    let money_market = mock_env.money_market.clone();

    let alice = Addr::unchecked("alice");
    mock_env.fund_account(&alice, &[coin(100 * ONE_BNB, "bnb")]);

    money_market.deposit(&mut mock_env, &alice, &[coin(100 * ONE_BNB, "bnb")]).unwrap();
    mock_env.increment_by_blocks(10);
    money_market.withdraw(&mut mock_env, &alice, &[coin(100 * ONE_BNB, "bnb")]).unwrap();

    assert_eq!(money_market.query_deposit(&mut mock_env, &alice), None);
    let balance = mock_env.query_balance(&alice, "bnb").unwrap();
    assert_eq!(balance.amount.u128(), 100 * ONE_BNB);

    let totals = money_market.query_market_totals(&mut mock_env, "bnb");
    assert_eq!(totals.cash, Uint128::zero());
}

#[test]
fn collateral_stays_locked_until_interest_is_repaid() {
    let mut mock_env = setup();
    let money_market = mock_env.money_market.clone();

    let alice = Addr::unchecked("alice");
    mock_env.fund_account(&alice, &[coin(10 * ONE_KAVA, "ukava")]);

    money_market.deposit(&mut mock_env, &alice, &[coin(10 * ONE_KAVA, "ukava")]).unwrap();
    money_market.borrow(&mut mock_env, &alice, &[coin(8 * ONE_KAVA, "ukava")]).unwrap();

    let res = money_market.withdraw(&mut mock_env, &alice, &[coin(1, "ukava")]);
    assert_err(
        res,
        ContractError::LTVExceeded {
            action: "withdraw".to_string(),
        },
    );

    // one month of interest at 80% utilization
    mock_env.increment_by_time(2_592_000);
    money_market.repay(&mut mock_env, &alice, &[coin(8 * ONE_KAVA, "ukava")]).unwrap();

    let borrow = money_market.query_borrow(&mut mock_env, &alice).unwrap();
    assert!(!borrow.amount[0].amount.is_zero());

    let res = money_market.withdraw(&mut mock_env, &alice, &[coin(10 * ONE_KAVA, "ukava")]);
    assert_err(
        res,
        ContractError::LTVExceeded {
            action: "withdraw".to_string(),
        },
    );

    money_market.withdraw(&mut mock_env, &alice, &[coin(5 * ONE_KAVA, "ukava")]).unwrap();
    let balance = mock_env.query_balance(&alice, "ukava").unwrap();
    assert_eq!(balance.amount.u128(), 5 * ONE_KAVA);

    let ltv = money_market.query_account_ltv(&mut mock_env, &alice);
    assert!(ltv.within_limit);
}

#[test]
fn begin_block_accrues_every_market() {
    let mut mock_env = setup();
    let money_market = mock_env.money_market.clone();

    let alice = Addr::unchecked("alice");
    mock_env.fund_account(&alice, &[coin(10 * ONE_KAVA, "ukava")]);
    money_market.deposit(&mut mock_env, &alice, &[coin(10 * ONE_KAVA, "ukava")]).unwrap();
    money_market.borrow(&mut mock_env, &alice, &[coin(5 * ONE_KAVA, "ukava")]).unwrap();

    mock_env.increment_by_time(86_400);
    let res = money_market.begin_block(&mut mock_env).unwrap();

    let accrued: Vec<_> = res
        .events
        .iter()
        .filter(|event| event.ty == "wasm-interest_accrued")
        .collect();
    assert_eq!(accrued.len(), 2);

    // 50% utilization on a curve without a base rate
    let ukava_events = [accrued[1].clone()];
    assert_eq!(event_attribute(&ukava_events, "wasm-interest_accrued", "denom"), Some("ukava"));
    assert_eq!(
        event_attribute(&ukava_events, "wasm-interest_accrued", "borrow_rate_apy"),
        Some("0.05")
    );

    let now = mock_env.block_time();
    for denom in ["bnb", "ukava"] {
        let state = money_market.query_accrual_state(&mut mock_env, denom);
        assert_eq!(state.previous_accrual_time, now);
    }

    let state = money_market.query_accrual_state(&mut mock_env, "ukava");
    assert!(state.borrow_interest_factor > Decimal::one());
    let totals = money_market.query_market_totals(&mut mock_env, "ukava");
    assert!(totals.borrowed.u128() > 5 * ONE_KAVA);
}

#[test]
fn undercollateralized_borrower_is_liquidated() {
    let mut mock_env = setup();
    let money_market = mock_env.money_market.clone();
    let oracle = mock_env.oracle.clone();

    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");
    let keeper = Addr::unchecked("keeper");
    mock_env.fund_account(&alice, &[coin(ONE_BNB, "bnb")]);
    mock_env.fund_account(&bob, &[coin(1_000 * ONE_KAVA, "ukava")]);

    money_market.deposit(&mut mock_env, &bob, &[coin(1_000 * ONE_KAVA, "ukava")]).unwrap();
    money_market.deposit(&mut mock_env, &alice, &[coin(ONE_BNB, "bnb")]).unwrap();
    money_market.borrow(&mut mock_env, &alice, &[coin(150 * ONE_KAVA, "ukava")]).unwrap();

    let res = money_market.liquidate(&mut mock_env, &keeper, &alice);
    assert_err(
        res,
        ContractError::NotEligibleForLiquidation {
            address: alice.to_string(),
        },
    );

    // 1 bnb at 200 usd only supports 120 usd of debt
    oracle.set_price(&mut mock_env, "bnb:usd", Decimal::from_ratio(200u128, 1u128));
    assert_eq!(
        oracle.query_price(&mut mock_env, "bnb:usd").price,
        Decimal::from_ratio(200u128, 1u128)
    );
    assert_eq!(
        money_market.query_ltv_index(&mut mock_env, None)[0].address,
        alice.to_string()
    );

    money_market.liquidate(&mut mock_env, &keeper, &alice).unwrap();

    let liquidator = mock_env.liquidator.clone();
    assert_eq!(mock_env.query_balance(&keeper, "bnb").unwrap().amount.u128(), 5_000_000);
    assert_eq!(mock_env.query_balance(&liquidator, "bnb").unwrap().amount.u128(), 95_000_000);

    assert_eq!(money_market.query_deposit(&mut mock_env, &alice), None);
    assert_eq!(money_market.query_borrow(&mut mock_env, &alice), None);
    assert!(money_market.query_ltv_index(&mut mock_env, None).is_empty());

    let totals = money_market.query_market_totals(&mut mock_env, "ukava");
    assert_eq!(totals.borrowed, Uint128::zero());
    assert_eq!(totals.cash.u128(), 850 * ONE_KAVA);
}

/// Pool coins net of reserves back every deposit, and deposits back every borrow. Effective
/// deposits round down and effective debts round up, so each borrower may add one unit of dust.
fn assert_ukava_conserved(mock_env: &mut MockEnv) {
    let money_market = mock_env.money_market.clone();
    let totals = money_market.query_market_totals(mock_env, "ukava");
    let deposited: u128 = money_market
        .query_deposits(mock_env)
        .iter()
        .flat_map(|deposit| deposit.amount.iter())
        .filter(|coin| coin.denom == "ukava")
        .map(|coin| coin.amount.u128())
        .sum();
    let borrows = money_market.query_borrows(mock_env);
    let dust = borrows.len() as u128;
    let borrowed: u128 = borrows
        .iter()
        .flat_map(|borrow| borrow.amount.iter())
        .filter(|coin| coin.denom == "ukava")
        .map(|coin| coin.amount.u128())
        .sum();

    let pool = totals.cash.u128() + totals.borrowed.u128();
    let reserves = totals.reserves.u128();
    assert!(totals.cash.u128() >= reserves, "reserves exceed cash: {totals:?}");
    assert!(deposited <= pool - reserves, "deposits {deposited} not backed: {totals:?}");
    assert!(borrowed <= pool - reserves + dust, "borrows {borrowed} draw on reserves: {totals:?}");
    assert!(borrowed <= deposited + dust, "borrows {borrowed} exceed deposits {deposited}");
}

#[test]
fn borrows_never_draw_on_reserves() {
    let mut mock_env = setup();
    let money_market = mock_env.money_market.clone();

    let alice = Addr::unchecked("alice");
    let bob = Addr::unchecked("bob");
    let carol = Addr::unchecked("carol");
    mock_env.fund_account(&alice, &[coin(1_000 * ONE_KAVA, "ukava")]);
    mock_env.fund_account(&bob, &[coin(10 * ONE_BNB, "bnb"), coin(100 * ONE_KAVA, "ukava")]);
    mock_env.fund_account(&carol, &[coin(10 * ONE_BNB, "bnb")]);

    money_market.deposit(&mut mock_env, &alice, &[coin(1_000 * ONE_KAVA, "ukava")]).unwrap();
    assert_ukava_conserved(&mut mock_env);

    money_market.deposit(&mut mock_env, &bob, &[coin(10 * ONE_BNB, "bnb")]).unwrap();
    money_market.borrow(&mut mock_env, &bob, &[coin(800 * ONE_KAVA, "ukava")]).unwrap();
    assert_ukava_conserved(&mut mock_env);

    mock_env.increment_by_time(31_536_000);
    money_market.begin_block(&mut mock_env).unwrap();
    assert_ukava_conserved(&mut mock_env);

    let owed = money_market.query_borrow(&mut mock_env, &bob).unwrap().amount;
    money_market.repay(&mut mock_env, &bob, &owed).unwrap();
    assert_eq!(money_market.query_borrow(&mut mock_env, &bob), None);
    assert_ukava_conserved(&mut mock_env);

    let totals = money_market.query_market_totals(&mut mock_env, "ukava");
    assert!(!totals.reserves.is_zero());
    let lendable = totals.cash - totals.reserves;

    money_market.deposit(&mut mock_env, &carol, &[coin(10 * ONE_BNB, "bnb")]).unwrap();
    let res = money_market.borrow(&mut mock_env, &carol, &[coin(lendable.u128() + 1, "ukava")]);
    assert_err(
        res,
        ContractError::InsufficientModAccountBalance {
            denom: "ukava".to_string(),
            available: lendable,
            requested: lendable + Uint128::one(),
        },
    );

    money_market.borrow(&mut mock_env, &carol, &[coin(lendable.u128(), "ukava")]).unwrap();
    assert_ukava_conserved(&mut mock_env);

    let totals = money_market.query_market_totals(&mut mock_env, "ukava");
    assert_eq!(totals.cash, totals.reserves);
    assert_eq!(mock_env.query_balance(&carol, "ukava").unwrap().amount, lendable);
}
