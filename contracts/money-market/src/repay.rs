use cosmwasm_std::{Addr, Coin, DepsMut, Env, MessageInfo, Response};
use meridian_utils::helpers::{build_send_coins_msg, option_string_to_addr};

use crate::{
    accrual::accrue_all,
    error::ContractError,
    events::coins_to_string,
    health::{account_valuation, update_ltv_index},
    helpers::{assert_funds_match, validate_coins},
    ledger,
    pool::{decrease_borrowed, increase_pool_balance},
    user::User,
};

pub fn repay(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Vec<Coin>,
    on_behalf_of: Option<String>,
) -> Result<Response, ContractError> {
    validate_coins(&amount)?;
    assert_funds_match(&amount, &info.funds)?;
    let owner_addr: Addr = option_string_to_addr(deps.api, on_behalf_of, info.sender.clone())?;

    let current_time = env.block.time.seconds();
    let accrual_events = accrue_all(deps.storage, current_time)?;

    let user = User(&owner_addr);
    let mut borrow =
        user.borrow(deps.storage, current_time)?.ok_or(ContractError::NoOutstandingBorrow {})?;

    // repayments above the outstanding debt of a denom are refunded to the payer
    let mut repaid = Vec::with_capacity(amount.len());
    let mut refund = vec![];
    for coin in &amount {
        let owed = ledger::amount_of(&borrow.amount, &coin.denom);
        if owed.is_zero() {
            return Err(ContractError::InsufficientBalance {
                denom: coin.denom.clone(),
                available: owed,
                requested: coin.amount,
            });
        }
        let repay_amount = coin.amount.min(owed);
        if coin.amount > repay_amount {
            refund.push(Coin {
                denom: coin.denom.clone(),
                amount: coin.amount - repay_amount,
            });
        }
        repaid.push(Coin {
            denom: coin.denom.clone(),
            amount: repay_amount,
        });
    }

    for coin in &repaid {
        ledger::decrease(&mut borrow.amount, &mut borrow.index, coin)?;
    }

    let valuation = if borrow.amount.is_empty() {
        None
    } else {
        let deposit_amount = user
            .deposit(deps.storage, current_time)?
            .map(|deposit| deposit.amount)
            .unwrap_or_default();
        Some(account_valuation(deps.storage, deps.querier, &deposit_amount, &borrow.amount)?)
    };

    increase_pool_balance(deps.storage, &repaid)?;
    decrease_borrowed(deps.storage, &repaid)?;
    user.save_borrow(deps.storage, &borrow)?;
    let ltv_event = update_ltv_index(deps.storage, &owner_addr, valuation.as_ref())?;

    let mut response = Response::new().add_events(accrual_events).add_event(ltv_event);
    if !refund.is_empty() {
        response = response.add_message(build_send_coins_msg(&info.sender, &refund));
    }

    Ok(response
        .add_attribute("action", "repay")
        .add_attribute("sender", &info.sender)
        .add_attribute("on_behalf_of", user)
        .add_attribute("amount", coins_to_string(&repaid))
        .add_attribute("refund", coins_to_string(&refund)))
}
