use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Storage};
use meridian_types::money_market::{AccrualState, MoneyMarket, UpdateMoneyMarketParams};

use crate::{
    accrual::accrue,
    error::ContractError,
    state::{ACCRUAL_STATES, MONEY_MARKETS, OWNER},
};

/// Initialize a money market if it does not exist yet (only owner can call)
pub fn init_money_market(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    money_market: MoneyMarket,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let denom = money_market.denom.clone();
    create_money_market(deps.storage, env.block.time.seconds(), money_market)?;

    Ok(Response::new().add_attribute("action", "init_money_market").add_attribute("denom", denom))
}

/// Validate and store a new money market with a fresh interest accumulator
pub fn create_money_market(
    store: &mut dyn Storage,
    block_time: u64,
    money_market: MoneyMarket,
) -> Result<(), ContractError> {
    money_market.validate()?;

    if MONEY_MARKETS.has(store, &money_market.denom) {
        return Err(ContractError::MoneyMarketAlreadyInitialized {
            denom: money_market.denom,
        });
    }

    MONEY_MARKETS.save(store, &money_market.denom, &money_market)?;
    ACCRUAL_STATES.save(store, &money_market.denom, &AccrualState::new(block_time))?;

    Ok(())
}

/// Update money market parameters (only owner can call).
///
/// Interest is accrued up to the current block under the old parameters first, so the new
/// curve and reserve factor never apply to time that has already passed.
pub fn update_money_market(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
    params: UpdateMoneyMarketParams,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let market = MONEY_MARKETS.may_load(deps.storage, &denom)?.ok_or_else(|| {
        ContractError::MoneyMarketNotInitialized {
            denom: denom.clone(),
        }
    })?;

    // Destructuring a struct's fields into separate variables in order to force
    // compile error if we add more params
    let UpdateMoneyMarketParams {
        borrow_limit,
        spot_market_id,
        conversion_factor,
        interest_rate_model,
        reserve_factor,
        auction_size,
        keeper_reward_percentage,
    } = params;

    let updated_market = MoneyMarket {
        denom: market.denom.clone(),
        borrow_limit: borrow_limit.unwrap_or_else(|| market.borrow_limit.clone()),
        spot_market_id: spot_market_id.unwrap_or_else(|| market.spot_market_id.clone()),
        conversion_factor: conversion_factor.unwrap_or(market.conversion_factor),
        interest_rate_model: interest_rate_model
            .unwrap_or_else(|| market.interest_rate_model.clone()),
        reserve_factor: reserve_factor.unwrap_or(market.reserve_factor),
        auction_size: auction_size.unwrap_or(market.auction_size),
        keeper_reward_percentage: keeper_reward_percentage
            .unwrap_or(market.keeper_reward_percentage),
    };
    updated_market.validate()?;

    let mut response = Response::new();
    if let Some(event) = accrue(deps.storage, &market, env.block.time.seconds())? {
        response = response.add_event(event);
    }

    MONEY_MARKETS.save(deps.storage, &denom, &updated_market)?;

    Ok(response.add_attribute("action", "update_money_market").add_attribute("denom", denom))
}
