use cosmwasm_std::{Coin, DepsMut, Env, MessageInfo, Response};
use meridian_utils::helpers::build_send_coins_msg;

use crate::{
    accrual::accrue_all,
    error::ContractError,
    events::coins_to_string,
    health::{account_valuation, update_ltv_index},
    helpers::validate_coins,
    ledger,
    pool::{assert_lendable_liquidity, decrease_pool_balance},
    user::User,
};

pub fn withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Vec<Coin>,
) -> Result<Response, ContractError> {
    validate_coins(&amount)?;

    let current_time = env.block.time.seconds();
    let accrual_events = accrue_all(deps.storage, current_time)?;

    let user = User(&info.sender);
    let mut deposit =
        user.deposit(deps.storage, current_time)?.ok_or(ContractError::DepositNotFound {})?;
    for coin in &amount {
        ledger::decrease(&mut deposit.amount, &mut deposit.index, coin)?;
    }

    let borrow = user.borrow(deps.storage, current_time)?;
    let valuation = match &borrow {
        Some(borrow) => {
            let valuation =
                account_valuation(deps.storage, deps.querier, &deposit.amount, &borrow.amount)?;
            if !valuation.is_within_limit() {
                return Err(ContractError::LTVExceeded {
                    action: "withdraw".to_string(),
                });
            }
            Some(valuation)
        }
        None => None,
    };

    assert_lendable_liquidity(deps.storage, &amount)?;

    decrease_pool_balance(deps.storage, &amount)?;
    user.save_deposit(deps.storage, &deposit)?;

    let mut response = Response::new().add_events(accrual_events);
    if let Some(valuation) = valuation {
        let event = update_ltv_index(deps.storage, &info.sender, Some(&valuation))?;
        response = response.add_event(event);
    }

    Ok(response
        .add_message(build_send_coins_msg(&info.sender, &amount))
        .add_attribute("action", "withdraw")
        .add_attribute("sender", &info.sender)
        .add_attribute("amount", coins_to_string(&amount))
        .add_attribute("deposit", coins_to_string(&deposit.amount)))
}
