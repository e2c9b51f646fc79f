//! Operations on the `(amount, index)` pairs held by deposit and borrow records.
//!
//! Coins are kept sorted by denom with no zero amounts, and `index` holds exactly one interest
//! factor per denom present in `amount`.

use cosmwasm_std::{Coin, Decimal, StdError, Uint128};
use meridian_interest_rate::{compute_synced_amount, ScalingOperation};
use meridian_types::money_market::InterestFactor;

use crate::error::ContractError;

pub fn amount_of(amount: &[Coin], denom: &str) -> Uint128 {
    amount.iter().find(|coin| coin.denom == denom).map(|coin| coin.amount).unwrap_or_default()
}

/// Sync every coin from the factor it was written against to the current one.
pub fn sync(
    amount: &[Coin],
    index: &[InterestFactor],
    mut current_factor: impl FnMut(&str) -> Result<Decimal, ContractError>,
    scaling_operation: ScalingOperation,
) -> Result<(Vec<Coin>, Vec<InterestFactor>), ContractError> {
    let mut synced_amount = Vec::with_capacity(amount.len());
    let mut synced_index = Vec::with_capacity(amount.len());

    for coin in amount {
        let factor_at_write = index
            .iter()
            .find(|factor| factor.denom == coin.denom)
            .map(|factor| factor.value)
            .ok_or_else(|| {
                StdError::not_found(format!("interest factor for {}", coin.denom))
            })?;
        let factor = current_factor(&coin.denom)?;

        synced_amount.push(Coin {
            denom: coin.denom.clone(),
            amount: compute_synced_amount(
                coin.amount,
                factor_at_write,
                factor,
                scaling_operation,
            )?,
        });
        synced_index.push(InterestFactor {
            denom: coin.denom.clone(),
            value: factor,
        });
    }

    Ok((synced_amount, synced_index))
}

/// Add `coin` to a synced record. `factor` is the current factor of the denom.
pub fn increase(
    amount: &mut Vec<Coin>,
    index: &mut Vec<InterestFactor>,
    coin: &Coin,
    factor: Decimal,
) -> Result<(), ContractError> {
    if coin.amount.is_zero() {
        return Ok(());
    }

    match amount.binary_search_by(|c| c.denom.as_str().cmp(&coin.denom)) {
        Ok(pos) => {
            amount[pos].amount = amount[pos].amount.checked_add(coin.amount)?;
        }
        Err(pos) => amount.insert(pos, coin.clone()),
    }

    match index.iter_mut().find(|f| f.denom == coin.denom) {
        Some(existing) => existing.value = factor,
        None => index.push(InterestFactor {
            denom: coin.denom.clone(),
            value: factor,
        }),
    }

    Ok(())
}

/// Subtract `coin` from a synced record, dropping the denom once it reaches zero.
pub fn decrease(
    amount: &mut Vec<Coin>,
    index: &mut Vec<InterestFactor>,
    coin: &Coin,
) -> Result<(), ContractError> {
    let available = amount_of(amount, &coin.denom);
    let remaining =
        available.checked_sub(coin.amount).map_err(|_| ContractError::InsufficientBalance {
            denom: coin.denom.clone(),
            available,
            requested: coin.amount,
        })?;

    if remaining.is_zero() {
        amount.retain(|c| c.denom != coin.denom);
        index.retain(|f| f.denom != coin.denom);
    } else if let Some(existing) = amount.iter_mut().find(|c| c.denom == coin.denom) {
        existing.amount = remaining;
    }

    Ok(())
}
