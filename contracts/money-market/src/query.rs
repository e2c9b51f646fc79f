use cosmwasm_std::{Addr, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;
use meridian_interest_rate::calculate_utilization_ratio;
use meridian_types::money_market::{
    AccountLtvResponse, AccrualState, Borrow, ConfigResponse, Deposit, LtvIndexEntry,
    MarketTotalsResponse, MoneyMarket,
};

use crate::{
    accrual::accrued_state,
    error::ContractError,
    health::account_valuation,
    pool::pool_balance,
    state::{BORROWS, CONFIG, DEPOSITS, LTV_INDEX, MONEY_MARKETS, OWNER},
    user::User,
};

const DEFAULT_LIMIT: u32 = 5;
const MAX_LIMIT: u32 = 10;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let owner_state = OWNER.query(deps.storage)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: owner_state.owner,
        proposed_new_owner: owner_state.proposed,
        oracle: config.oracle.to_string(),
        liquidator: config.liquidator.to_string(),
    })
}

pub fn query_money_market(deps: Deps, denom: String) -> StdResult<MoneyMarket> {
    MONEY_MARKETS
        .load(deps.storage, &denom)
        .map_err(|_| StdError::generic_err(format!("failed to load money market for: {denom}")))
}

pub fn query_money_markets(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<MoneyMarket>> {
    let start = start_after.map(|denom| Bound::ExclusiveRaw(denom.into_bytes()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    MONEY_MARKETS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (_, market) = item?;
            Ok(market)
        })
        .collect()
}

pub fn query_accrual_state(
    deps: Deps,
    env: Env,
    denom: String,
) -> Result<AccrualState, ContractError> {
    let (state, _) = accrued_state(deps.storage, &denom, env.block.time.seconds())?;
    Ok(state)
}

pub fn query_market_totals(
    deps: Deps,
    env: Env,
    denom: String,
) -> Result<MarketTotalsResponse, ContractError> {
    let market = MONEY_MARKETS.load(deps.storage, &denom)?;
    let (state, borrowed) = accrued_state(deps.storage, &denom, env.block.time.seconds())?;
    let cash = pool_balance(deps.storage, &denom)?;

    let utilization_rate = calculate_utilization_ratio(cash, borrowed, state.total_reserves)?;
    let borrow_apy = market.interest_rate_model.get_borrow_rate(utilization_rate)?;

    Ok(MarketTotalsResponse {
        denom,
        cash,
        borrowed,
        reserves: state.total_reserves,
        utilization_rate,
        borrow_apy,
        borrow_interest_factor: state.borrow_interest_factor,
        supply_interest_factor: state.supply_interest_factor,
    })
}

pub fn query_deposit(
    deps: Deps,
    env: Env,
    addr: Addr,
) -> Result<Option<Deposit>, ContractError> {
    User(&addr).deposit(deps.storage, env.block.time.seconds())
}

pub fn query_borrow(deps: Deps, env: Env, addr: Addr) -> Result<Option<Borrow>, ContractError> {
    User(&addr).borrow(deps.storage, env.block.time.seconds())
}

pub fn query_deposits(
    deps: Deps,
    env: Env,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<Vec<Deposit>, ContractError> {
    let start = start_after.map(|addr| Bound::ExclusiveRaw(addr.into_bytes()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let current_time = env.block.time.seconds();

    DEPOSITS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|addr| match addr {
            Ok(addr) => User(&addr).deposit(deps.storage, current_time).transpose(),
            Err(err) => Some(Err(err.into())),
        })
        .collect()
}

pub fn query_borrows(
    deps: Deps,
    env: Env,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<Vec<Borrow>, ContractError> {
    let start = start_after.map(|addr| Bound::ExclusiveRaw(addr.into_bytes()));
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let current_time = env.block.time.seconds();

    BORROWS
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|addr| match addr {
            Ok(addr) => User(&addr).borrow(deps.storage, current_time).transpose(),
            Err(err) => Some(Err(err.into())),
        })
        .collect()
}

pub fn query_account_ltv(
    deps: Deps,
    env: Env,
    addr: Addr,
) -> Result<AccountLtvResponse, ContractError> {
    let current_time = env.block.time.seconds();
    let user = User(&addr);
    let deposit = user.deposit(deps.storage, current_time)?.map(|d| d.amount).unwrap_or_default();
    let borrow = user.borrow(deps.storage, current_time)?.map(|b| b.amount).unwrap_or_default();

    let valuation = account_valuation(deps.storage, deps.querier, &deposit, &borrow)?;

    Ok(AccountLtvResponse {
        address: addr.to_string(),
        collateral_value: valuation.collateral_value,
        borrowable_value: valuation.borrowable_value,
        borrow_value: valuation.borrow_value,
        ltv: valuation.ltv(),
        within_limit: valuation.is_within_limit(),
    })
}

pub fn query_ltv_index(deps: Deps, limit: Option<u32>) -> StdResult<Vec<LtvIndexEntry>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    Ok(LTV_INDEX
        .highest(deps.storage, limit)?
        .into_iter()
        .map(|(addr, ratio)| LtvIndexEntry {
            address: addr.to_string(),
            ratio,
        })
        .collect())
}
