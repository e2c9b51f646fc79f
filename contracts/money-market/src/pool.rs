use cosmwasm_std::{Coin, StdResult, Storage, Uint128};

use crate::{
    error::ContractError,
    state::{ACCRUAL_STATES, BORROWED_COINS, POOL_BALANCES},
};

pub fn pool_balance(store: &dyn Storage, denom: &str) -> StdResult<Uint128> {
    Ok(POOL_BALANCES.may_load(store, denom)?.unwrap_or_default())
}

/// Ensure the pool holds enough of every coin to pay it out
pub fn assert_pool_liquidity(store: &dyn Storage, coins: &[Coin]) -> Result<(), ContractError> {
    for coin in coins {
        let available = pool_balance(store, &coin.denom)?;
        if available < coin.amount {
            return Err(ContractError::InsufficientModAccountBalance {
                denom: coin.denom.clone(),
                available,
                requested: coin.amount,
            });
        }
    }
    Ok(())
}

/// Ensure every coin can be paid out of the pool without drawing on the market's reserves.
///
/// Reserves sit in the pool's cash but belong to the protocol, so only `cash - total_reserves`
/// may be lent or withdrawn. Expects the markets to be accrued up to the current block.
pub fn assert_lendable_liquidity(store: &dyn Storage, coins: &[Coin]) -> Result<(), ContractError> {
    for coin in coins {
        let reserves = ACCRUAL_STATES
            .may_load(store, &coin.denom)?
            .map(|state| state.total_reserves)
            .unwrap_or_default();
        let available = pool_balance(store, &coin.denom)?.saturating_sub(reserves);
        if available < coin.amount {
            return Err(ContractError::InsufficientModAccountBalance {
                denom: coin.denom.clone(),
                available,
                requested: coin.amount,
            });
        }
    }
    Ok(())
}

pub fn increase_pool_balance(store: &mut dyn Storage, coins: &[Coin]) -> Result<(), ContractError> {
    for coin in coins {
        let balance = pool_balance(store, &coin.denom)?.checked_add(coin.amount)?;
        POOL_BALANCES.save(store, &coin.denom, &balance)?;
    }
    Ok(())
}

pub fn decrease_pool_balance(store: &mut dyn Storage, coins: &[Coin]) -> Result<(), ContractError> {
    assert_pool_liquidity(store, coins)?;
    for coin in coins {
        let balance = pool_balance(store, &coin.denom)? - coin.amount;
        POOL_BALANCES.save(store, &coin.denom, &balance)?;
    }
    Ok(())
}

pub fn borrowed_total(store: &dyn Storage, denom: &str) -> StdResult<Uint128> {
    Ok(BORROWED_COINS.may_load(store, denom)?.unwrap_or_default())
}

pub fn increase_borrowed(store: &mut dyn Storage, coins: &[Coin]) -> Result<(), ContractError> {
    for coin in coins {
        let total = borrowed_total(store, &coin.denom)?.checked_add(coin.amount)?;
        BORROWED_COINS.save(store, &coin.denom, &total)?;
    }
    Ok(())
}

/// Saturates at zero: individual debts are rounded up when synced, so their sum may slightly
/// exceed the tracked total.
pub fn decrease_borrowed(store: &mut dyn Storage, coins: &[Coin]) -> StdResult<()> {
    for coin in coins {
        let total = borrowed_total(store, &coin.denom)?.saturating_sub(coin.amount);
        BORROWED_COINS.save(store, &coin.denom, &total)?;
    }
    Ok(())
}
