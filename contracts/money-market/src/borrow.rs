use cosmwasm_std::{Coin, DepsMut, Env, MessageInfo, Response};
use meridian_types::money_market::Borrow;
use meridian_utils::helpers::build_send_coins_msg;

use crate::{
    accrual::accrue_all,
    error::ContractError,
    events::coins_to_string,
    health::{account_valuation, update_ltv_index},
    helpers::validate_coins,
    ledger,
    pool::{assert_lendable_liquidity, borrowed_total, decrease_pool_balance, increase_borrowed},
    state::MONEY_MARKETS,
    user::{borrow_factor, User},
};

pub fn borrow(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Vec<Coin>,
) -> Result<Response, ContractError> {
    validate_coins(&amount)?;

    let mut markets = Vec::with_capacity(amount.len());
    for coin in &amount {
        let market = MONEY_MARKETS.may_load(deps.storage, &coin.denom)?.ok_or_else(|| {
            ContractError::InvalidBorrowDenom {
                denom: coin.denom.clone(),
            }
        })?;
        markets.push(market);
    }

    let current_time = env.block.time.seconds();
    let accrual_events = accrue_all(deps.storage, current_time)?;

    for (coin, market) in amount.iter().zip(&markets) {
        let limit = &market.borrow_limit;
        if !limit.has_max_limit {
            continue;
        }
        let requested = borrowed_total(deps.storage, &coin.denom)?.checked_add(coin.amount)?;
        if requested > limit.maximum_limit {
            return Err(ContractError::BorrowLimitExceeded {
                denom: coin.denom.clone(),
                limit: limit.maximum_limit,
                requested,
            });
        }
    }

    assert_lendable_liquidity(deps.storage, &amount)?;

    let user = User(&info.sender);
    let mut borrow = user
        .borrow(deps.storage, current_time)?
        .unwrap_or_else(|| Borrow::new(info.sender.clone()));
    for coin in &amount {
        let factor = borrow_factor(deps.storage, &coin.denom, current_time)?;
        ledger::increase(&mut borrow.amount, &mut borrow.index, coin, factor)?;
    }

    let deposit_amount =
        user.deposit(deps.storage, current_time)?.map(|deposit| deposit.amount).unwrap_or_default();
    let valuation = account_valuation(deps.storage, deps.querier, &deposit_amount, &borrow.amount)?;
    if !valuation.is_within_limit() {
        return Err(ContractError::LTVExceeded {
            action: "borrow".to_string(),
        });
    }

    decrease_pool_balance(deps.storage, &amount)?;
    increase_borrowed(deps.storage, &amount)?;
    user.save_borrow(deps.storage, &borrow)?;
    let ltv_event = update_ltv_index(deps.storage, &info.sender, Some(&valuation))?;

    Ok(Response::new()
        .add_events(accrual_events)
        .add_event(ltv_event)
        .add_message(build_send_coins_msg(&info.sender, &amount))
        .add_attribute("action", "borrow")
        .add_attribute("sender", &info.sender)
        .add_attribute("amount", coins_to_string(&amount))
        .add_attribute("borrow", coins_to_string(&borrow.amount)))
}
