use cosmwasm_std::{Decimal, Uint128};
use meridian_types::{
    error::MeridianError,
    money_market::{AccrualState, MoneyMarket},
};
use meridian_utils::math::{
    checked_mul_ratio_ceil, checked_mul_ratio_floor, multiply_uint128_by_decimal,
};

pub const SECONDS_PER_YEAR: u64 = 31536000u64;

/// Share of the pool that is lent out: `borrows / (cash + borrows - reserves)`, capped at one.
pub fn calculate_utilization_ratio(
    cash: Uint128,
    borrows: Uint128,
    reserves: Uint128,
) -> Result<Decimal, MeridianError> {
    if borrows.is_zero() {
        return Ok(Decimal::zero());
    }

    let gross = cash.checked_add(borrows)?;
    if gross < reserves {
        return Ok(Decimal::one());
    }

    let total_supply = gross - reserves;
    if total_supply.is_zero() {
        return Ok(Decimal::zero());
    }

    Ok(Decimal::checked_from_ratio(borrows, total_supply)?.min(Decimal::one()))
}

/// Convert an annual rate to the per-second multiplier `(1 + apy)^(1 / SECONDS_PER_YEAR)`.
///
/// The root is found by bisection over the 18 decimal atomics, returning the largest multiplier
/// whose compounded value over a year does not exceed `1 + apy`. The search is bounded by
/// `1 + apy / SECONDS_PER_YEAR`, which is never below the true root.
pub fn apy_to_spy(apy: Decimal) -> Result<Decimal, MeridianError> {
    if apy.is_zero() {
        return Ok(Decimal::one());
    }

    let target = Decimal::one().checked_add(apy)?;
    let exponent = SECONDS_PER_YEAR as u32;

    let linear_step = apy.checked_div(Decimal::from_ratio(SECONDS_PER_YEAR, 1u64))?;
    let mut lo = Decimal::one().atomics().u128();
    let mut hi = Decimal::one()
        .checked_add(linear_step)?
        .atomics()
        .u128()
        .checked_add(1)
        .ok_or_else(|| MeridianError::InvalidAnnualRate {
            rate: apy.to_string(),
        })?;

    // compounding with truncation is monotonic in the base, so pow(lo) <= target holds throughout
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        let compounded = Decimal::raw(mid).checked_pow(exponent);
        match compounded {
            Ok(value) if value <= target => lo = mid,
            _ => hi = mid,
        }
    }

    Ok(Decimal::raw(lo))
}

/// Growth of one unit of debt after `elapsed` seconds at a per-second multiplier of `spy`.
pub fn calculate_borrow_interest_factor(
    spy: Decimal,
    elapsed: u64,
) -> Result<Decimal, MeridianError> {
    let exponent = u32::try_from(elapsed).map_err(|_| MeridianError::ElapsedTimeTooLarge {
        seconds: elapsed,
    })?;
    Ok(spy.checked_pow(exponent)?)
}

/// Multiplier applied to the supply factor when `new_interest` is distributed over the pool.
pub fn calculate_supply_interest_factor(
    new_interest: Uint128,
    cash: Uint128,
    borrows: Uint128,
    reserves: Uint128,
) -> Result<Decimal, MeridianError> {
    let gross = cash.checked_add(borrows)?;
    if gross <= reserves {
        return Ok(Decimal::one());
    }

    let total_supply = gross - reserves;
    Ok(Decimal::checked_from_ratio(new_interest, total_supply)?.checked_add(Decimal::one())?)
}

/// Pre-accrual balances of a market's pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolBalances {
    pub cash: Uint128,
    pub borrowed: Uint128,
}

/// Result of advancing a market's accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accrual {
    pub state: AccrualState,
    pub borrow_rate_apy: Decimal,
    /// Interest added to the borrowed total
    pub interest: Uint128,
    /// Part of `interest` retained as reserves
    pub reserves_added: Uint128,
}

/// Advance the accumulator of `market` to `current_time`.
///
/// Returns `None` when nothing should be written: the clock has not moved, or the interest owed
/// on the current borrows rounds down to zero while the borrow rate is positive. In the latter
/// case the accrual time is left untouched so the elapsed seconds are charged once they add up
/// to at least one unit of interest. A market without borrows only has its accrual time moved.
pub fn compute_accrual(
    market: &MoneyMarket,
    state: &AccrualState,
    balances: PoolBalances,
    current_time: u64,
) -> Result<Option<Accrual>, MeridianError> {
    if current_time <= state.previous_accrual_time {
        return Ok(None);
    }
    let elapsed = current_time - state.previous_accrual_time;

    let reserves_prior = state.total_reserves;
    let utilization =
        calculate_utilization_ratio(balances.cash, balances.borrowed, reserves_prior)?;
    let borrow_rate_apy = market.interest_rate_model.get_borrow_rate(utilization)?;

    // nothing to charge interest on, only the clock moves
    if balances.borrowed.is_zero() {
        return Ok(Some(Accrual {
            state: AccrualState {
                previous_accrual_time: current_time,
                ..state.clone()
            },
            borrow_rate_apy,
            interest: Uint128::zero(),
            reserves_added: Uint128::zero(),
        }));
    }

    let borrow_rate_spy = apy_to_spy(borrow_rate_apy)?;
    let interest_factor = calculate_borrow_interest_factor(borrow_rate_spy, elapsed)?;

    let borrowed_new = multiply_uint128_by_decimal(balances.borrowed, interest_factor)?;
    let interest = borrowed_new.checked_sub(balances.borrowed)?;
    if interest.is_zero() && !borrow_rate_apy.is_zero() {
        return Ok(None);
    }

    let reserves_added = multiply_uint128_by_decimal(interest, market.reserve_factor)?;
    let supply_interest = interest.checked_sub(reserves_added)?;
    let supply_factor = calculate_supply_interest_factor(
        supply_interest,
        balances.cash,
        balances.borrowed,
        reserves_prior,
    )?;

    Ok(Some(Accrual {
        state: AccrualState {
            borrow_interest_factor: state.borrow_interest_factor.checked_mul(interest_factor)?,
            supply_interest_factor: state.supply_interest_factor.checked_mul(supply_factor)?,
            total_reserves: reserves_prior.checked_add(reserves_added)?,
            previous_accrual_time: current_time,
        },
        borrow_rate_apy,
        interest,
        reserves_added,
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalingOperation {
    Truncate,
    Ceil,
}

/// Bring an amount recorded against `factor_at_write` up to `current_factor`.
/// Deposits are truncated and debts ceiled so that rounding always accumulates in favor of
/// the protocol.
pub fn compute_synced_amount(
    amount: Uint128,
    factor_at_write: Decimal,
    current_factor: Decimal,
    scaling_operation: ScalingOperation,
) -> Result<Uint128, MeridianError> {
    if factor_at_write == current_factor {
        return Ok(amount);
    }

    let numerator = current_factor.atomics();
    let denominator = factor_at_write.atomics();
    match scaling_operation {
        ScalingOperation::Truncate => Ok(checked_mul_ratio_floor(amount, numerator, denominator)?),
        ScalingOperation::Ceil => Ok(checked_mul_ratio_ceil(amount, numerator, denominator)?),
    }
}
