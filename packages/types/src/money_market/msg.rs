use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, Decimal, Uint128};
use mars_owner::OwnerUpdate;

use crate::money_market::{BorrowLimit, InterestRateModel, MoneyMarket};

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract's owner
    pub owner: String,
    /// Contract configuration
    pub config: CreateOrUpdateConfig,
    /// Markets open from genesis
    pub money_markets: Vec<MoneyMarket>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Manages owner state
    UpdateOwner(OwnerUpdate),

    /// Update contract config (only owner can call)
    UpdateConfig {
        config: CreateOrUpdateConfig,
    },

    /// Open a new money market (only owner can call)
    InitMoneyMarket {
        money_market: MoneyMarket,
    },

    /// Update parameters of an existing money market (only owner can call).
    /// Interest is accrued under the old parameters first.
    UpdateMoneyMarket {
        denom: String,
        params: UpdateMoneyMarketParams,
    },

    /// Accrue interest on every market up to the current block time
    AccrueInterest {},

    /// Supply coins to the pool. The coins must be sent along with the message and match
    /// `amount` exactly.
    Deposit {
        amount: Vec<Coin>,
    },

    /// Withdraw previously deposited coins
    Withdraw {
        amount: Vec<Coin>,
    },

    /// Borrow coins against deposited collateral
    Borrow {
        amount: Vec<Coin>,
    },

    /// Repay a loan. The coins must be sent along with the message and match `amount` exactly.
    /// Any amount above what is owed is refunded to the sender.
    Repay {
        amount: Vec<Coin>,
        /// Repay the loan of another account
        on_behalf_of: Option<String>,
    },

    /// Seize the deposits of an account outside its loan to value range and clear its debt
    Liquidate {
        borrower: String,
    },
}

#[cw_serde]
pub enum SudoMsg {
    /// Invoked by the chain at the start of every block
    BeginBlock {},
}

#[cw_serde]
pub struct CreateOrUpdateConfig {
    pub oracle: Option<String>,
    pub liquidator: Option<String>,
}

#[cw_serde]
#[derive(Default)]
pub struct UpdateMoneyMarketParams {
    pub borrow_limit: Option<BorrowLimit>,
    pub spot_market_id: Option<String>,
    pub conversion_factor: Option<Uint128>,
    pub interest_rate_model: Option<InterestRateModel>,
    pub reserve_factor: Option<Decimal>,
    pub auction_size: Option<Uint128>,
    pub keeper_reward_percentage: Option<Decimal>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get config
    #[returns(crate::money_market::ConfigResponse)]
    Config {},

    /// Get money market parameters
    #[returns(crate::money_market::MoneyMarket)]
    MoneyMarket {
        denom: String,
    },

    /// Enumerate money markets with pagination
    #[returns(Vec<crate::money_market::MoneyMarket>)]
    MoneyMarkets {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Get the interest accumulator of a denom as of the last accrual
    #[returns(crate::money_market::AccrualState)]
    AccrualState {
        denom: String,
    },

    /// Get pooled cash, borrows, reserves and current rates of a denom
    #[returns(crate::money_market::MarketTotalsResponse)]
    MarketTotals {
        denom: String,
    },

    /// Get an account's deposit with interest applied up to the current block
    #[returns(Option<crate::money_market::Deposit>)]
    Deposit {
        address: String,
    },

    /// Get an account's borrow with interest applied up to the current block
    #[returns(Option<crate::money_market::Borrow>)]
    Borrow {
        address: String,
    },

    /// Enumerate deposits with pagination
    #[returns(Vec<crate::money_market::Deposit>)]
    Deposits {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Enumerate borrows with pagination
    #[returns(Vec<crate::money_market::Borrow>)]
    Borrows {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Get the collateral and debt valuation of an account
    #[returns(crate::money_market::AccountLtvResponse)]
    AccountLtv {
        address: String,
    },

    /// List borrowers with the highest loan to value ratios first
    #[returns(Vec<crate::money_market::LtvIndexEntry>)]
    LtvIndex {
        limit: Option<u32>,
    },
}
