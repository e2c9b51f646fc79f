use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use mars_owner::OwnerError;
use meridian_types::error::MeridianError;
use meridian_utils::error::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Meridian(#[from] MeridianError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Owner(#[from] OwnerError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Amount must contain at least one coin and every coin must be greater than zero")]
    ZeroAmount {},

    #[error("invalid deposit denom: {denom}")]
    InvalidDepositDenom {
        denom: String,
    },

    #[error("invalid borrow denom: {denom}")]
    InvalidBorrowDenom {
        denom: String,
    },

    #[error("insufficient funds: expected {expected}{denom}, received {received}{denom}")]
    InsufficientFunds {
        denom: String,
        expected: Uint128,
        received: Uint128,
    },

    #[error("unexpected funds: {denom} was sent but not declared")]
    UnexpectedFunds {
        denom: String,
    },

    #[error("subtraction results in negative {denom} amount: available {available}, requested {requested}")]
    InsufficientBalance {
        denom: String,
        available: Uint128,
        requested: Uint128,
    },

    #[error("fails global asset borrow limit validation for {denom}: limit {limit}, requested total {requested}")]
    BorrowLimitExceeded {
        denom: String,
        limit: Uint128,
        requested: Uint128,
    },

    #[error("module account has insufficient {denom} balance: available {available}, requested {requested}")]
    InsufficientModAccountBalance {
        denom: String,
        available: Uint128,
        requested: Uint128,
    },

    #[error("proposed {action} outside loan-to-value range")]
    LTVExceeded {
        action: String,
    },

    #[error("account {address} has no deposits or borrows")]
    AccountNotFound {
        address: String,
    },

    #[error("deposit not found")]
    DepositNotFound {},

    #[error("no outstanding borrow")]
    NoOutstandingBorrow {},

    #[error("borrower {address} is within the valid loan-to-value range and cannot be liquidated")]
    NotEligibleForLiquidation {
        address: String,
    },

    #[error("Cannot liquidate own position")]
    CannotLiquidateSelf {},

    #[error("Money market for {denom} is already initialized")]
    MoneyMarketAlreadyInitialized {
        denom: String,
    },

    #[error("Money market for {denom} is not initialized")]
    MoneyMarketNotInitialized {
        denom: String,
    },
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Std(e) => e,
            e => StdError::generic_err(e.to_string()),
        }
    }
}
