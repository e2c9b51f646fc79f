use cosmwasm_std::{attr, coin, coins, Addr, Decimal, Uint128};
use cw_utils::PaymentError;
use meridian_money_market::{contract::execute, error::ContractError};
use meridian_testing::mock_info_with_funds;
use meridian_types::money_market::{
    Deposit, ExecuteMsg, InterestFactor, LtvIndexEntry, MarketTotalsResponse, QueryMsg,
};
use meridian_utils::error::ValidationError;

use super::helpers::{th_borrow, th_deposit, th_env, th_query, th_setup};

#[test]
fn sequential_deposits_accumulate_into_one_record() {
    let mut deps = th_setup();

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();
    let res = th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();
    assert_eq!(
        res.attributes,
        vec![
            attr("action", "deposit"),
            attr("sender", "alice"),
            attr("amount", "100bnb"),
            attr("deposit", "200bnb"),
        ]
    );
    assert!(res.messages.is_empty());

    let deposit: Option<Deposit> = th_query(
        deps.as_ref(),
        th_env(),
        QueryMsg::Deposit {
            address: "alice".to_string(),
        },
    );
    assert_eq!(
        deposit,
        Some(Deposit {
            depositor: Addr::unchecked("alice"),
            amount: coins(200, "bnb"),
            index: vec![InterestFactor {
                denom: "bnb".to_string(),
                value: Decimal::one(),
            }],
        })
    );

    let totals: MarketTotalsResponse = th_query(
        deps.as_ref(),
        th_env(),
        QueryMsg::MarketTotals {
            denom: "bnb".to_string(),
        },
    );
    assert_eq!(totals.cash, Uint128::new(200));
    assert_eq!(totals.borrowed, Uint128::zero());
}

#[test]
fn depositing_several_denoms_keeps_them_sorted() {
    let mut deps = th_setup();

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(50, "usdx")).unwrap();
    th_deposit(deps.as_mut(), th_env(), "alice", &coins(10, "bnb")).unwrap();

    let deposit: Option<Deposit> = th_query(
        deps.as_ref(),
        th_env(),
        QueryMsg::Deposit {
            address: "alice".to_string(),
        },
    );
    assert_eq!(deposit.unwrap().amount, vec![coin(10, "bnb"), coin(50, "usdx")]);
}

#[test]
fn depositing_unsupported_denom() {
    let mut deps = th_setup();

    let err = th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "fake")).unwrap_err();
    assert_eq!(
        err,
        ContractError::InvalidDepositDenom {
            denom: "fake".to_string()
        }
    );

    let deposit: Option<Deposit> = th_query(
        deps.as_ref(),
        th_env(),
        QueryMsg::Deposit {
            address: "alice".to_string(),
        },
    );
    assert_eq!(deposit, None);
}

#[test]
fn depositing_with_mismatched_funds() {
    let mut deps = th_setup();

    let err = execute(
        deps.as_mut(),
        th_env(),
        mock_info_with_funds("alice", &coins(50, "bnb")),
        ExecuteMsg::Deposit {
            amount: coins(100, "bnb"),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::InsufficientFunds {
            denom: "bnb".to_string(),
            expected: Uint128::new(100),
            received: Uint128::new(50),
        }
    );

    let err = execute(
        deps.as_mut(),
        th_env(),
        mock_info_with_funds("alice", &[coin(100, "bnb"), coin(5, "usdx")]),
        ExecuteMsg::Deposit {
            amount: coins(100, "bnb"),
        },
    )
    .unwrap_err();
    assert_eq!(
        err,
        ContractError::UnexpectedFunds {
            denom: "usdx".to_string()
        }
    );
}

#[test]
fn depositing_empty_or_repeated_coins() {
    let mut deps = th_setup();

    let err = th_deposit(deps.as_mut(), th_env(), "alice", &[]).unwrap_err();
    assert_eq!(err, ContractError::ZeroAmount {});

    let err = th_deposit(deps.as_mut(), th_env(), "alice", &[coin(10, "bnb"), coin(5, "bnb")])
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Validation(ValidationError::DuplicateDenom {
            denom: "bnb".to_string()
        })
    );
}

#[test]
fn deposit_by_borrower_refreshes_ltv_index() {
    let mut deps = th_setup();

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();
    th_borrow(deps.as_mut(), th_env(), "alice", &coins(30, "bnb")).unwrap();

    let index: Vec<LtvIndexEntry> = th_query(
        deps.as_ref(),
        th_env(),
        QueryMsg::LtvIndex {
            limit: None,
        },
    );
    assert_eq!(
        index,
        vec![LtvIndexEntry {
            address: "alice".to_string(),
            ratio: Decimal::percent(30),
        }]
    );

    th_deposit(deps.as_mut(), th_env(), "alice", &coins(100, "bnb")).unwrap();

    let index: Vec<LtvIndexEntry> = th_query(
        deps.as_ref(),
        th_env(),
        QueryMsg::LtvIndex {
            limit: None,
        },
    );
    assert_eq!(
        index,
        vec![LtvIndexEntry {
            address: "alice".to_string(),
            ratio: Decimal::percent(15),
        }]
    );
}

#[test]
fn nonpayable_messages_reject_funds() {
    let mut deps = th_setup();

    let err = execute(
        deps.as_mut(),
        th_env(),
        mock_info_with_funds("alice", &coins(1, "bnb")),
        ExecuteMsg::AccrueInterest {},
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Payment(PaymentError::NonPayable {}));
}
