use cosmwasm_std::{Addr, Decimal, StdResult, Storage};
use meridian_interest_rate::ScalingOperation;
use meridian_types::money_market::{Borrow, Deposit};

use crate::{
    accrual::accrued_state,
    error::ContractError,
    ledger,
    state::{BORROWS, DEPOSITS},
};

/// A helper class providing an intuitive UI for managing an account's ledger records.
///
/// Records are always returned synced to the interest factors at `current_time`, so callers
/// only ever deal with effective amounts:
///
/// ```rust
/// let user = User(&user_addr);
/// let mut deposit = user.deposit(deps.storage, now)?.unwrap_or_else(|| Deposit::new(addr));
/// ledger::increase(&mut deposit.amount, &mut deposit.index, &coin, factor)?;
/// user.save_deposit(deps.storage, &deposit)?;
/// ```
#[derive(Clone, Copy)]
pub struct User<'a>(pub &'a Addr);

impl<'a> From<User<'a>> for String {
    fn from(user: User) -> String {
        user.0.to_string()
    }
}

impl<'a> User<'a> {
    /// Load the user's deposit with supply interest applied up to `current_time`
    pub fn deposit(
        &self,
        store: &dyn Storage,
        current_time: u64,
    ) -> Result<Option<Deposit>, ContractError> {
        let Some(deposit) = DEPOSITS.may_load(store, self.0)? else {
            return Ok(None);
        };

        let (amount, index) = ledger::sync(
            &deposit.amount,
            &deposit.index,
            |denom| supply_factor(store, denom, current_time),
            ScalingOperation::Truncate,
        )?;

        Ok(Some(Deposit {
            depositor: deposit.depositor,
            amount,
            index,
        }))
    }

    /// Load the user's borrow with borrow interest applied up to `current_time`
    pub fn borrow(
        &self,
        store: &dyn Storage,
        current_time: u64,
    ) -> Result<Option<Borrow>, ContractError> {
        let Some(borrow) = BORROWS.may_load(store, self.0)? else {
            return Ok(None);
        };

        let (amount, index) = ledger::sync(
            &borrow.amount,
            &borrow.index,
            |denom| borrow_factor(store, denom, current_time),
            ScalingOperation::Ceil,
        )?;

        Ok(Some(Borrow {
            borrower: borrow.borrower,
            amount,
            index,
        }))
    }

    /// Save the deposit, or delete it once it holds no coins
    pub fn save_deposit(&self, store: &mut dyn Storage, deposit: &Deposit) -> StdResult<()> {
        if deposit.amount.is_empty() {
            DEPOSITS.remove(store, self.0);
            Ok(())
        } else {
            DEPOSITS.save(store, self.0, deposit)
        }
    }

    /// Save the borrow, or delete it once fully repaid
    pub fn save_borrow(&self, store: &mut dyn Storage, borrow: &Borrow) -> StdResult<()> {
        if borrow.amount.is_empty() {
            BORROWS.remove(store, self.0);
            Ok(())
        } else {
            BORROWS.save(store, self.0, borrow)
        }
    }
}

pub fn supply_factor(
    store: &dyn Storage,
    denom: &str,
    current_time: u64,
) -> Result<Decimal, ContractError> {
    Ok(accrued_state(store, denom, current_time)?.0.supply_interest_factor)
}

pub fn borrow_factor(
    store: &dyn Storage,
    denom: &str,
    current_time: u64,
) -> Result<Decimal, ContractError> {
    Ok(accrued_state(store, denom, current_time)?.0.borrow_interest_factor)
}
