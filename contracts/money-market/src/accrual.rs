use cosmwasm_std::{Event, Order, StdResult, Storage, Uint128};
use meridian_interest_rate::{compute_accrual, Accrual, PoolBalances};
use meridian_types::money_market::{AccrualState, MoneyMarket};

use crate::{
    error::ContractError,
    events::build_interest_accrued_event,
    pool::{borrowed_total, pool_balance},
    state::{ACCRUAL_STATES, BORROWED_COINS, MONEY_MARKETS},
};

fn pool_balances(store: &dyn Storage, denom: &str) -> StdResult<PoolBalances> {
    Ok(PoolBalances {
        cash: pool_balance(store, denom)?,
        borrowed: borrowed_total(store, denom)?,
    })
}

/// Accrue interest on every money market up to `current_time`.
///
/// Must run before any ledger operation reads interest factors. Returns one event per market
/// whose accumulator moved.
pub fn accrue_all(store: &mut dyn Storage, current_time: u64) -> Result<Vec<Event>, ContractError> {
    let markets = MONEY_MARKETS
        .range(store, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;

    let mut events = vec![];
    for (_, market) in markets {
        if let Some(event) = accrue(store, &market, current_time)? {
            events.push(event);
        }
    }
    Ok(events)
}

/// Advance the accumulator of a single market. The borrowed total grows by the accrued interest
/// and the reserve share is added to the market's reserves; the accrual time is written last.
pub fn accrue(
    store: &mut dyn Storage,
    market: &MoneyMarket,
    current_time: u64,
) -> Result<Option<Event>, ContractError> {
    let denom = market.denom.as_str();
    let state = ACCRUAL_STATES.load(store, denom)?;
    let balances = pool_balances(store, denom)?;

    let Some(accrual) = compute_accrual(market, &state, balances, current_time)? else {
        return Ok(None);
    };

    let Accrual {
        state: new_state,
        interest,
        ..
    } = &accrual;

    if !interest.is_zero() {
        BORROWED_COINS.save(store, denom, &balances.borrowed.checked_add(*interest)?)?;
    }
    ACCRUAL_STATES.save(store, denom, new_state)?;

    Ok(Some(build_interest_accrued_event(denom, &accrual)))
}

/// Accrual state and borrowed total of `denom` as they would be after accruing up to
/// `current_time`, without writing them. Matches the stored values once `accrue_all` has run for
/// `current_time`.
pub fn accrued_state(
    store: &dyn Storage,
    denom: &str,
    current_time: u64,
) -> Result<(AccrualState, Uint128), ContractError> {
    let market = MONEY_MARKETS.load(store, denom)?;
    let state = ACCRUAL_STATES.load(store, denom)?;
    let balances = pool_balances(store, denom)?;

    match compute_accrual(&market, &state, balances, current_time)? {
        Some(accrual) => Ok((accrual.state, balances.borrowed.checked_add(accrual.interest)?)),
        None => Ok((state, balances.borrowed)),
    }
}
