use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Decimal, Uint128};

/// Global configuration
#[cw_serde]
pub struct Config<T> {
    /// Price oracle queried for collateral and debt valuation
    pub oracle: T,
    /// Auction house receiving seized collateral lots
    pub liquidator: T,
}

/// Interest factor of a denom at the moment a ledger record was last written.
#[cw_serde]
pub struct InterestFactor {
    pub denom: String,
    pub value: Decimal,
}

/// Supplied funds of a single account across every denom it deposited.
#[cw_serde]
pub struct Deposit {
    pub depositor: Addr,
    pub amount: Vec<Coin>,
    pub index: Vec<InterestFactor>,
}

/// Outstanding debt of a single account, principal plus interest as of `index`.
#[cw_serde]
pub struct Borrow {
    pub borrower: Addr,
    pub amount: Vec<Coin>,
    pub index: Vec<InterestFactor>,
}

impl Deposit {
    pub fn new(depositor: Addr) -> Self {
        Self {
            depositor,
            amount: vec![],
            index: vec![],
        }
    }
}

impl Borrow {
    pub fn new(borrower: Addr) -> Self {
        Self {
            borrower,
            amount: vec![],
            index: vec![],
        }
    }
}

#[cw_serde]
pub struct ConfigResponse {
    /// The contract's owner
    pub owner: Option<String>,
    /// The contract's proposed owner
    pub proposed_new_owner: Option<String>,
    pub oracle: String,
    pub liquidator: String,
}

#[cw_serde]
pub struct MarketTotalsResponse {
    pub denom: String,
    /// Coins held by the pool and available to withdraw or borrow
    pub cash: Uint128,
    /// Outstanding debt including accrued interest
    pub borrowed: Uint128,
    pub reserves: Uint128,
    pub utilization_rate: Decimal,
    /// Annual borrow rate at the current utilization
    pub borrow_apy: Decimal,
    pub borrow_interest_factor: Decimal,
    pub supply_interest_factor: Decimal,
}

#[cw_serde]
pub struct AccountLtvResponse {
    pub address: String,
    /// Value of all deposits
    pub collateral_value: Decimal,
    /// Value of all deposits weighted by each market's loan to value
    pub borrowable_value: Decimal,
    /// Value of all borrows
    pub borrow_value: Decimal,
    /// `borrow_value / collateral_value`
    pub ltv: Decimal,
    /// Whether `borrow_value <= borrowable_value`
    pub within_limit: bool,
}

#[cw_serde]
pub struct LtvIndexEntry {
    pub address: String,
    pub ratio: Decimal,
}
