use cosmwasm_std::{Coin, Decimal, DepsMut, Env, MessageInfo, Response};
use meridian_types::money_market::{Borrow, Deposit};
use meridian_utils::{
    helpers::build_send_coins_msg,
    math::{multiply_uint128_by_decimal, uint128_checked_div_with_ceil},
};

use crate::{
    accrual::accrue_all,
    error::ContractError,
    events::{build_collateral_auction_event, coins_to_string},
    health::{update_ltv_index, Valuer},
    pool::{assert_pool_liquidity, decrease_borrowed, decrease_pool_balance},
    state::{CONFIG, MONEY_MARKETS},
    user::User,
};

/// Seize all deposits of a borrower outside its loan to value range and clear its debt.
///
/// The keeper is paid `keeper_reward_percentage` of every deposited denom. The rest is sent to
/// the liquidator contract in lots of at most `auction_size`, each tagged with the share of the
/// cleared debt value it is expected to cover.
pub fn liquidate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    borrower: String,
) -> Result<Response, ContractError> {
    let borrower_addr = deps.api.addr_validate(&borrower)?;
    if borrower_addr == info.sender {
        return Err(ContractError::CannotLiquidateSelf {});
    }

    let current_time = env.block.time.seconds();
    let accrual_events = accrue_all(deps.storage, current_time)?;

    let user = User(&borrower_addr);
    let (deposit, borrow) = match (
        user.deposit(deps.storage, current_time)?,
        user.borrow(deps.storage, current_time)?,
    ) {
        (Some(deposit), Some(borrow)) => (deposit, borrow),
        (None, None) => {
            return Err(ContractError::AccountNotFound {
                address: borrower_addr.to_string(),
            })
        }
        (None, Some(_)) => return Err(ContractError::DepositNotFound {}),
        (Some(_), None) => {
            return Err(ContractError::NotEligibleForLiquidation {
                address: borrower_addr.to_string(),
            })
        }
    };

    let config = CONFIG.load(deps.storage)?;
    let mut valuer = Valuer::new(deps.storage, deps.querier, &config.oracle);
    let valuation = valuer.valuation(&deposit.amount, &borrow.amount)?;
    if valuation.is_within_limit() {
        return Err(ContractError::NotEligibleForLiquidation {
            address: borrower_addr.to_string(),
        });
    }

    assert_pool_liquidity(deps.storage, &deposit.amount)?;

    let mut keeper_reward = vec![];
    let mut lots = vec![];
    for coin in &deposit.amount {
        let market = MONEY_MARKETS.load(deps.storage, &coin.denom)?;

        let reward = multiply_uint128_by_decimal(coin.amount, market.keeper_reward_percentage)?;
        if !reward.is_zero() {
            keeper_reward.push(Coin {
                denom: coin.denom.clone(),
                amount: reward,
            });
        }

        let mut remaining = coin.amount.checked_sub(reward)?;
        let lot_count = uint128_checked_div_with_ceil(remaining, market.auction_size)?.u128();
        for _ in 0..lot_count {
            let lot = remaining.min(market.auction_size);
            lots.push(Coin {
                denom: coin.denom.clone(),
                amount: lot,
            });
            remaining = remaining.checked_sub(lot)?;
        }
    }

    let mut lot_values = Vec::with_capacity(lots.len());
    for lot in &lots {
        lot_values.push(valuer.value(lot)?);
    }
    let auction_value =
        lot_values.iter().try_fold(Decimal::zero(), |total, value| total.checked_add(*value))?;

    let mut response = Response::new().add_events(accrual_events);
    for (i, (lot, value)) in lots.iter().zip(lot_values).enumerate() {
        let debt_share = value.checked_div(auction_value).unwrap_or_default();
        response = response
            .add_message(build_send_coins_msg(&config.liquidator, std::slice::from_ref(lot)))
            .add_event(build_collateral_auction_event(&borrower_addr, lot, i as u32, debt_share));
    }
    if !keeper_reward.is_empty() {
        response = response.add_message(build_send_coins_msg(&info.sender, &keeper_reward));
    }

    decrease_pool_balance(deps.storage, &deposit.amount)?;
    decrease_borrowed(deps.storage, &borrow.amount)?;
    user.save_deposit(deps.storage, &Deposit::new(borrower_addr.clone()))?;
    user.save_borrow(deps.storage, &Borrow::new(borrower_addr.clone()))?;
    let ltv_event = update_ltv_index(deps.storage, &borrower_addr, None)?;

    Ok(response
        .add_event(ltv_event)
        .add_attribute("action", "liquidate")
        .add_attribute("keeper", &info.sender)
        .add_attribute("borrower", &borrower_addr)
        .add_attribute("seized", coins_to_string(&deposit.amount))
        .add_attribute("keeper_reward", coins_to_string(&keeper_reward))
        .add_attribute("debt_cleared", coins_to_string(&borrow.amount))
        .add_attribute("ltv", valuation.ltv().to_string()))
}
