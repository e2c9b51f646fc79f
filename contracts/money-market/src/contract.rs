use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};
use meridian_types::money_market::{ExecuteMsg, InstantiateMsg, QueryMsg, SudoMsg};

use crate::{
    accrual::accrue_all, borrow, config, deposit, error::ContractError, instantiate, liquidate,
    market, query, repay, withdraw,
};

pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    instantiate::instantiate(deps, env, msg)
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateOwner(update) => config::update_owner(deps, info, update),
        ExecuteMsg::UpdateConfig {
            config,
        } => config::update_config(deps, info, config),
        ExecuteMsg::InitMoneyMarket {
            money_market,
        } => market::init_money_market(deps, env, info, money_market),
        ExecuteMsg::UpdateMoneyMarket {
            denom,
            params,
        } => market::update_money_market(deps, env, info, denom, params),
        ExecuteMsg::AccrueInterest {} => {
            cw_utils::nonpayable(&info)?;
            let events = accrue_all(deps.storage, env.block.time.seconds())?;
            Ok(Response::new().add_events(events).add_attribute("action", "accrue_interest"))
        }
        ExecuteMsg::Deposit {
            amount,
        } => deposit::deposit(deps, env, info, amount),
        ExecuteMsg::Withdraw {
            amount,
        } => {
            cw_utils::nonpayable(&info)?;
            withdraw::withdraw(deps, env, info, amount)
        }
        ExecuteMsg::Borrow {
            amount,
        } => {
            cw_utils::nonpayable(&info)?;
            borrow::borrow(deps, env, info, amount)
        }
        ExecuteMsg::Repay {
            amount,
            on_behalf_of,
        } => repay::repay(deps, env, info, amount, on_behalf_of),
        ExecuteMsg::Liquidate {
            borrower,
        } => {
            cw_utils::nonpayable(&info)?;
            liquidate::liquidate(deps, env, info, borrower)
        }
    }
}

#[entry_point]
pub fn sudo(deps: DepsMut, env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::BeginBlock {} => {
            let events = accrue_all(deps.storage, env.block.time.seconds())?;
            Ok(Response::new().add_events(events).add_attribute("action", "begin_block"))
        }
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let res = match msg {
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
        QueryMsg::MoneyMarket {
            denom,
        } => to_json_binary(&query::query_money_market(deps, denom)?),
        QueryMsg::MoneyMarkets {
            start_after,
            limit,
        } => to_json_binary(&query::query_money_markets(deps, start_after, limit)?),
        QueryMsg::AccrualState {
            denom,
        } => to_json_binary(&query::query_accrual_state(deps, env, denom)?),
        QueryMsg::MarketTotals {
            denom,
        } => to_json_binary(&query::query_market_totals(deps, env, denom)?),
        QueryMsg::Deposit {
            address,
        } => {
            let addr = deps.api.addr_validate(&address)?;
            to_json_binary(&query::query_deposit(deps, env, addr)?)
        }
        QueryMsg::Borrow {
            address,
        } => {
            let addr = deps.api.addr_validate(&address)?;
            to_json_binary(&query::query_borrow(deps, env, addr)?)
        }
        QueryMsg::Deposits {
            start_after,
            limit,
        } => to_json_binary(&query::query_deposits(deps, env, start_after, limit)?),
        QueryMsg::Borrows {
            start_after,
            limit,
        } => to_json_binary(&query::query_borrows(deps, env, start_after, limit)?),
        QueryMsg::AccountLtv {
            address,
        } => {
            let addr = deps.api.addr_validate(&address)?;
            to_json_binary(&query::query_account_ltv(deps, env, addr)?)
        }
        QueryMsg::LtvIndex {
            limit,
        } => to_json_binary(&query::query_ltv_index(deps, limit)?),
    };
    res.map_err(Into::into)
}
