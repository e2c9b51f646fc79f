use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use mars_owner::Owner;
use meridian_types::money_market::{AccrualState, Borrow, Config, Deposit, MoneyMarket};

use crate::ltv_index::LtvIndex;

pub const OWNER: Owner = Owner::new("owner");
pub const CONFIG: Item<Config<Addr>> = Item::new("config");

pub const MONEY_MARKETS: Map<&str, MoneyMarket> = Map::new("money_markets");
pub const ACCRUAL_STATES: Map<&str, AccrualState> = Map::new("accrual_states");

/// Coins held by the pool per denom, available to withdraw or borrow
pub const POOL_BALANCES: Map<&str, Uint128> = Map::new("pool_balances");
/// Outstanding debt per denom, including accrued interest
pub const BORROWED_COINS: Map<&str, Uint128> = Map::new("borrowed_coins");

pub const DEPOSITS: Map<&Addr, Deposit> = Map::new("deposits");
pub const BORROWS: Map<&Addr, Borrow> = Map::new("borrows");

pub const LTV_INDEX: LtvIndex = LtvIndex::new("ltv_index", "ltv_ratios");
