use cosmwasm_std::{Addr, Decimal, Empty, Order, StdResult, Storage};
use cw_storage_plus::Map;

/// Borrowers ordered by loan to value ratio.
///
/// Entries are keyed by `(ratio atomics, address)` so a descending range yields the accounts
/// closest to liquidation first. A second map remembers the ratio each address was inserted
/// under, so a stale entry can be located and deleted before the new one is written.
pub struct LtvIndex<'a> {
    entries: Map<'a, (u128, &'a Addr), Empty>,
    ratios: Map<'a, &'a Addr, Decimal>,
}

impl<'a> LtvIndex<'a> {
    pub const fn new(entries_namespace: &'a str, ratios_namespace: &'a str) -> Self {
        Self {
            entries: Map::new(entries_namespace),
            ratios: Map::new(ratios_namespace),
        }
    }

    pub fn ratio(&self, store: &dyn Storage, addr: &Addr) -> StdResult<Option<Decimal>> {
        self.ratios.may_load(store, addr)
    }

    /// Replace the entry of `addr` with one at `ratio`
    pub fn set(&self, store: &mut dyn Storage, addr: &Addr, ratio: Decimal) -> StdResult<()> {
        self.remove(store, addr)?;
        self.entries.save(store, (ratio.atomics().u128(), addr), &Empty {})?;
        self.ratios.save(store, addr, &ratio)
    }

    pub fn remove(&self, store: &mut dyn Storage, addr: &Addr) -> StdResult<()> {
        if let Some(previous) = self.ratios.may_load(store, addr)? {
            self.entries.remove(store, (previous.atomics().u128(), addr));
            self.ratios.remove(store, addr);
        }
        Ok(())
    }

    /// Up to `limit` borrowers with the highest ratios, highest first
    pub fn highest(&self, store: &dyn Storage, limit: usize) -> StdResult<Vec<(Addr, Decimal)>> {
        self.entries
            .keys(store, None, None, Order::Descending)
            .take(limit)
            .map(|key| {
                let (atomics, addr) = key?;
                Ok((addr, Decimal::raw(atomics)))
            })
            .collect()
    }
}
