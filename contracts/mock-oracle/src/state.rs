use cosmwasm_std::Decimal;
use cw_storage_plus::Map;

pub const MARKET_PRICES: Map<&str, Decimal> = Map::new("market_prices");
