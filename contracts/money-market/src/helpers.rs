use std::collections::HashSet;

use cosmwasm_std::{Addr, Coin, Decimal, QuerierWrapper, StdResult};
use meridian_types::oracle::{self, PriceResponse};
use meridian_utils::error::ValidationError;

use crate::{error::ContractError, ledger::amount_of};

/// Ensure an operation amount holds at least one coin, no zero coins and no repeated denoms
pub fn validate_coins(coins: &[Coin]) -> Result<(), ContractError> {
    if coins.is_empty() || coins.iter().any(|coin| coin.amount.is_zero()) {
        return Err(ContractError::ZeroAmount {});
    }

    let mut seen = HashSet::new();
    for coin in coins {
        if !seen.insert(coin.denom.as_str()) {
            return Err(ValidationError::DuplicateDenom {
                denom: coin.denom.clone(),
            }
            .into());
        }
    }

    Ok(())
}

/// Ensure the coins attached to a message are exactly the declared amount
pub fn assert_funds_match(declared: &[Coin], sent: &[Coin]) -> Result<(), ContractError> {
    for coin in declared {
        let received = amount_of(sent, &coin.denom);
        if received < coin.amount {
            return Err(ContractError::InsufficientFunds {
                denom: coin.denom.clone(),
                expected: coin.amount,
                received,
            });
        }
    }

    for coin in sent {
        if amount_of(declared, &coin.denom) < coin.amount {
            return Err(ContractError::UnexpectedFunds {
                denom: coin.denom.clone(),
            });
        }
    }

    Ok(())
}

pub fn query_price(
    querier: &QuerierWrapper,
    oracle_addr: &Addr,
    market_id: &str,
) -> StdResult<Decimal> {
    let res: PriceResponse = querier.query_wasm_smart(
        oracle_addr,
        &oracle::QueryMsg::Price {
            market_id: market_id.to_string(),
        },
    )?;
    Ok(res.price)
}
