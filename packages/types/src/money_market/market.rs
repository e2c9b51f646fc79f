use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Decimal, Uint128};
use meridian_utils::{
    error::ValidationError,
    helpers::{
        decimal_param_le_one, decimal_param_lt_one, string_param_not_empty, uint_param_gt_zero,
        validate_native_denom,
    },
};

use crate::money_market::InterestRateModel;

/// Static parameters of a single lending market. These only change through governance.
#[cw_serde]
pub struct MoneyMarket {
    /// Denom of the asset
    pub denom: String,
    pub borrow_limit: BorrowLimit,
    /// Oracle market used to price the asset (e.g. `bnb:usd`)
    pub spot_market_id: String,
    /// Number of base units in one whole unit of the asset (1_000_000 for a 6 decimal coin)
    pub conversion_factor: Uint128,
    pub interest_rate_model: InterestRateModel,
    /// Portion of accrued borrow interest that is kept as reserves
    pub reserve_factor: Decimal,
    /// Maximum amount of collateral sold in a single auction lot
    pub auction_size: Uint128,
    /// Share of seized collateral paid to the keeper triggering a liquidation
    pub keeper_reward_percentage: Decimal,
}

#[cw_serde]
#[derive(Default)]
pub struct BorrowLimit {
    /// When set, total borrows of the denom may not exceed `maximum_limit`
    pub has_max_limit: bool,
    pub maximum_limit: Uint128,
    /// Share of a deposit's value that may be borrowed against it
    pub loan_to_value: Decimal,
}

impl MoneyMarket {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_native_denom(&self.denom)?;
        self.borrow_limit.validate()?;
        string_param_not_empty(&self.spot_market_id, "spot_market_id")?;
        uint_param_gt_zero(self.conversion_factor, "conversion_factor")?;
        self.interest_rate_model.validate()?;
        decimal_param_lt_one(self.reserve_factor, "reserve_factor")?;
        uint_param_gt_zero(self.auction_size, "auction_size")?;
        decimal_param_le_one(self.keeper_reward_percentage, "keeper_reward_percentage")?;
        Ok(())
    }
}

impl BorrowLimit {
    pub fn validate(&self) -> Result<(), ValidationError> {
        decimal_param_le_one(self.loan_to_value, "loan_to_value")
    }
}

/// Per-denom interest accumulator.
#[cw_serde]
#[derive(Eq)]
pub struct AccrualState {
    /// Block time (seconds) interest was last accrued at
    pub previous_accrual_time: u64,
    /// Cumulative growth of one unit of debt since the market was created
    pub borrow_interest_factor: Decimal,
    /// Cumulative growth of one unit of deposit since the market was created
    pub supply_interest_factor: Decimal,
    /// Interest retained by the protocol and not owed to suppliers
    pub total_reserves: Uint128,
}

impl AccrualState {
    pub fn new(current_time: u64) -> Self {
        Self {
            previous_accrual_time: current_time,
            borrow_interest_factor: Decimal::one(),
            supply_interest_factor: Decimal::one(),
            total_reserves: Uint128::zero(),
        }
    }
}
