use cosmwasm_std::{Coin, DepsMut, Env, MessageInfo, Response};
use meridian_types::money_market::Deposit;

use crate::{
    accrual::accrue_all,
    error::ContractError,
    events::coins_to_string,
    health::{account_valuation, update_ltv_index},
    helpers::{assert_funds_match, validate_coins},
    ledger,
    pool::increase_pool_balance,
    state::MONEY_MARKETS,
    user::{supply_factor, User},
};

pub fn deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Vec<Coin>,
) -> Result<Response, ContractError> {
    validate_coins(&amount)?;
    assert_funds_match(&amount, &info.funds)?;
    for coin in &amount {
        if !MONEY_MARKETS.has(deps.storage, &coin.denom) {
            return Err(ContractError::InvalidDepositDenom {
                denom: coin.denom.clone(),
            });
        }
    }

    let current_time = env.block.time.seconds();
    let accrual_events = accrue_all(deps.storage, current_time)?;

    let user = User(&info.sender);
    let mut deposit = user
        .deposit(deps.storage, current_time)?
        .unwrap_or_else(|| Deposit::new(info.sender.clone()));
    for coin in &amount {
        let factor = supply_factor(deps.storage, &coin.denom, current_time)?;
        ledger::increase(&mut deposit.amount, &mut deposit.index, coin, factor)?;
    }

    // only borrowers have an LTV index entry to refresh
    let valuation = match user.borrow(deps.storage, current_time)? {
        Some(borrow) => Some(account_valuation(
            deps.storage,
            deps.querier,
            &deposit.amount,
            &borrow.amount,
        )?),
        None => None,
    };

    increase_pool_balance(deps.storage, &amount)?;
    user.save_deposit(deps.storage, &deposit)?;

    let mut response = Response::new().add_events(accrual_events);
    if let Some(valuation) = valuation {
        let event = update_ltv_index(deps.storage, &info.sender, Some(&valuation))?;
        response = response.add_event(event);
    }

    Ok(response
        .add_attribute("action", "deposit")
        .add_attribute("sender", &info.sender)
        .add_attribute("amount", coins_to_string(&amount))
        .add_attribute("deposit", coins_to_string(&deposit.amount)))
}
