use cosmwasm_std::{coins, BankMsg, CosmosMsg, SubMsg, Uint128};
use cw_utils::PaymentError;
use meridian_money_market::{contract::execute, error::ContractError};
use meridian_testing::mock_info_with_funds;
use meridian_types::money_market::{Deposit, ExecuteMsg, MarketTotalsResponse, QueryMsg};

use super::helpers::{th_borrow, th_deposit, th_env, th_query, th_setup, th_withdraw};

fn query_deposit(deps: &super::helpers::MockDeps, user: &str) -> Option<Deposit> {
    th_query(
        deps.as_ref(),
        th_env(),
        QueryMsg::Deposit {
            address: user.to_string(),
        },
    )
}

#[test]
fn withdrawing_everything_deletes_the_record() {
    let mut deps = th_setup();

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();
    let res = th_withdraw(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();

    assert_eq!(
        res.messages,
        vec![SubMsg::new(CosmosMsg::Bank(BankMsg::Send {
            to_address: "alice".to_string(),
            amount: coins(100, "bnb"),
        }))]
    );
    assert_eq!(query_deposit(&deps, "alice"), None);

    let totals: MarketTotalsResponse = th_query(
        deps.as_ref(),
        th_env(),
        QueryMsg::MarketTotals {
            denom: "bnb".to_string(),
        },
    );
    assert_eq!(totals.cash, Uint128::zero());
}

#[test]
fn partial_withdraw_keeps_remainder() {
    let mut deps = th_setup();

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();
    th_withdraw(deps.as_mut(), th_env(), "alice", &coins(40, "bnb")).unwrap();

    assert_eq!(query_deposit(&deps, "alice").unwrap().amount, coins(60, "bnb"));
}

#[test]
fn withdrawing_more_than_deposited() {
    let mut deps = th_setup();

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();

    let err = th_withdraw(deps.as_mut(), th_env(), "alice", &coins(101, "bnb")).unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientBalance {
            denom: "bnb".to_string(),
            available: Uint128::new(100),
            requested: Uint128::new(101),
        }
    );

    let err = th_withdraw(deps.as_mut(), th_env(), "alice", &coins(1, "usdx")).unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientBalance {
            denom: "usdx".to_string(),
            available: Uint128::zero(),
            requested: Uint128::one(),
        }
    );
}

#[test]
fn withdrawing_without_deposit() {
    let mut deps = th_setup();

    let err = th_withdraw(deps.as_mut(), th_env(), "alice", &coins(1, "bnb")).unwrap_err();
    assert_eq!(err, ContractError::DepositNotFound {});
}

#[test]
fn withdrawing_with_funds_attached() {
    let mut deps = th_setup();

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();

    let err = execute(
        deps.as_mut(),
        th_env(),
        mock_info_with_funds("alice", &coins(1, "bnb")),
        ExecuteMsg::Withdraw {
            amount: coins(10, "bnb"),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Payment(PaymentError::NonPayable {}));
}

#[test]
fn withdraw_cannot_leave_borrow_uncovered() {
    let mut deps = th_setup();

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();
    th_borrow(deps.as_mut(), th_env(), "alice", &coins(60, "bnb")).unwrap();

    let err = th_withdraw(deps.as_mut(), th_env(), "alice", &coins(1, "bnb")).unwrap_err();
    assert_eq!(
        err,
        ContractError::LTVExceeded {
            action: "withdraw".to_string()
        }
    );

    // collateral in another denom frees part of the bnb deposit
    th_deposit(deps.as_mut(), th_env(), "alice", &coins(10, "usdx")).unwrap();
    th_withdraw(deps.as_mut(), th_env(), "alice", &coins(13, "bnb")).unwrap();

    let err = th_withdraw(deps.as_mut(), th_env(), "alice", &coins(1, "bnb")).unwrap_err();
    assert_eq!(
        err,
        ContractError::LTVExceeded {
            action: "withdraw".to_string()
        }
    );
}
