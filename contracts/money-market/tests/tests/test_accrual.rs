use cosmwasm_std::{coins, Decimal, Uint128};
use meridian_money_market::contract::{execute, sudo};
use meridian_testing::{event_attribute, mock_env_at_block_time, mock_info};
use meridian_types::money_market::{
    AccrualState, Borrow, Deposit, ExecuteMsg, MarketTotalsResponse, QueryMsg, SudoMsg,
    UpdateMoneyMarketParams,
};

use super::helpers::{
    th_attribute, th_borrow, th_deposit, th_env, th_events, th_query, th_setup, th_start_time,
    MockDeps, OWNER,
};

const SECONDS_PER_YEAR: u64 = 31_536_000;

fn query_accrual_state(deps: &MockDeps, time: u64, denom: &str) -> AccrualState {
    th_query(
        deps.as_ref(),
        mock_env_at_block_time(time),
        QueryMsg::AccrualState {
            denom: denom.to_string(),
        },
    )
}

fn query_totals(deps: &MockDeps, time: u64, denom: &str) -> MarketTotalsResponse {
    th_query(
        deps.as_ref(),
        mock_env_at_block_time(time),
        QueryMsg::MarketTotals {
            denom: denom.to_string(),
        },
    )
}

#[test]
fn interest_accrues_over_a_year() {
    let mut deps = th_setup();
    th_deposit(deps.as_mut(), th_env(), "alice", &coins(1_000_000, "bnb")).unwrap();
    th_borrow(deps.as_mut(), th_env(), "alice", &coins(600_000, "bnb")).unwrap();

    let later = th_start_time() + SECONDS_PER_YEAR;
    let res = execute(
        deps.as_mut(),
        mock_env_at_block_time(later),
        mock_info("keeper"),
        ExecuteMsg::AccrueInterest {},
    )
    .unwrap();

    // 60% utilization: 5% base rate plus 0.6 * 10%
    assert_eq!(
        event_attribute(&res.events, "interest_accrued", "borrow_rate_apy"),
        Some("0.11")
    );

    let state = query_accrual_state(&deps, later, "bnb");
    assert_eq!(state.previous_accrual_time, later);
    assert!(state.borrow_interest_factor > Decimal::percent(110));
    assert!(state.borrow_interest_factor <= Decimal::percent(111));
    assert!(state.supply_interest_factor > Decimal::one());

    let totals = query_totals(&deps, later, "bnb");
    let interest = totals.borrowed - Uint128::new(600_000);
    assert!(interest >= Uint128::new(65_990) && interest <= Uint128::new(66_000));
    assert_eq!(totals.reserves, interest * Decimal::percent(5));

    // a debt is never synced below its share of the borrowed total
    let borrow: Option<Borrow> = th_query(
        deps.as_ref(),
        mock_env_at_block_time(later),
        QueryMsg::Borrow {
            address: "alice".to_string(),
        },
    );
    let owed = borrow.unwrap().amount[0].amount;
    assert!(owed >= totals.borrowed && owed <= totals.borrowed + Uint128::one());

    // suppliers and reserves never claim more than the pool holds
    let deposit: Option<Deposit> = th_query(
        deps.as_ref(),
        mock_env_at_block_time(later),
        QueryMsg::Deposit {
            address: "alice".to_string(),
        },
    );
    let supplied = deposit.unwrap().amount[0].amount;
    assert!(supplied > Uint128::new(1_000_000));
    assert!(supplied + totals.reserves <= totals.cash + totals.borrowed);
}

#[test]
fn accrual_runs_once_per_block() {
    let mut deps = th_setup();
    th_deposit(deps.as_mut(), th_env(), "alice", &coins(1_000_000, "bnb")).unwrap();
    th_borrow(deps.as_mut(), th_env(), "alice", &coins(600_000, "bnb")).unwrap();

    let later = th_start_time() + 3_600;
    let res = sudo(deps.as_mut(), mock_env_at_block_time(later), SudoMsg::BeginBlock {}).unwrap();
    assert_eq!(event_attribute(&res.events, "interest_accrued", "denom"), Some("bnb"));
    let state = query_accrual_state(&deps, later, "bnb");

    let res = sudo(deps.as_mut(), mock_env_at_block_time(later), SudoMsg::BeginBlock {}).unwrap();
    assert!(res.events.is_empty());
    assert_eq!(query_accrual_state(&deps, later, "bnb"), state);
}

#[test]
fn queries_match_accrued_state() {
    let mut deps = th_setup();
    th_deposit(deps.as_mut(), th_env(), "alice", &coins(1_000_000, "bnb")).unwrap();
    th_borrow(deps.as_mut(), th_env(), "alice", &coins(600_000, "bnb")).unwrap();

    let later = th_start_time() + 86_400;
    let simulated = query_accrual_state(&deps, later, "bnb");

    sudo(deps.as_mut(), mock_env_at_block_time(later), SudoMsg::BeginBlock {}).unwrap();
    assert_eq!(query_accrual_state(&deps, later, "bnb"), simulated);
}

#[test]
fn interest_below_one_unit_is_deferred() {
    let mut deps = th_setup();
    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();
    th_borrow(deps.as_mut(), th_env(), "alice", &coins(10, "bnb")).unwrap();

    let next_block = th_start_time() + 6;
    let res =
        sudo(deps.as_mut(), mock_env_at_block_time(next_block), SudoMsg::BeginBlock {}).unwrap();
    assert!(th_events(&res, "interest_accrued")
        .into_iter()
        .all(|event| th_attribute(event, "denom") != "bnb"));
    let state = query_accrual_state(&deps, next_block, "bnb");
    assert_eq!(state.previous_accrual_time, th_start_time());
    assert_eq!(state.borrow_interest_factor, Decimal::one());

    // two years at 6% add up to one whole unit of interest
    let later = th_start_time() + 2 * SECONDS_PER_YEAR;
    sudo(deps.as_mut(), mock_env_at_block_time(later), SudoMsg::BeginBlock {}).unwrap();
    let state = query_accrual_state(&deps, later, "bnb");
    assert_eq!(state.previous_accrual_time, later);
    assert!(state.borrow_interest_factor > Decimal::one());
    assert_eq!(query_totals(&deps, later, "bnb").borrowed, Uint128::new(11));
}

#[test]
fn market_without_borrows_only_moves_the_clock() {
    let mut deps = th_setup();
    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();

    let later = th_start_time() + 100;
    sudo(deps.as_mut(), mock_env_at_block_time(later), SudoMsg::BeginBlock {}).unwrap();

    let state = query_accrual_state(&deps, later, "bnb");
    assert_eq!(
        state,
        AccrualState {
            previous_accrual_time: later,
            borrow_interest_factor: Decimal::one(),
            supply_interest_factor: Decimal::one(),
            total_reserves: Uint128::zero(),
        }
    );
}

#[test]
fn market_update_accrues_under_old_parameters() {
    let mut deps = th_setup();
    th_deposit(deps.as_mut(), th_env(), "alice", &coins(1_000_000, "bnb")).unwrap();
    th_borrow(deps.as_mut(), th_env(), "alice", &coins(600_000, "bnb")).unwrap();

    let later = th_start_time() + SECONDS_PER_YEAR;
    let res = execute(
        deps.as_mut(),
        mock_env_at_block_time(later),
        mock_info(OWNER),
        ExecuteMsg::UpdateMoneyMarket {
            denom: "bnb".to_string(),
            params: UpdateMoneyMarketParams {
                reserve_factor: Some(Decimal::percent(50)),
                ..Default::default()
            },
        },
    )
    .unwrap();

    let reserves_added: u128 = event_attribute(&res.events, "interest_accrued", "reserves_added")
        .unwrap()
        .parse()
        .unwrap();
    assert!(reserves_added < 3_301);

    let totals = query_totals(&deps, later, "bnb");
    assert_eq!(totals.reserves, Uint128::new(reserves_added));
}
