use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

#[cw_serde]
pub struct MarketPrice {
    pub market_id: String,
    pub price: Decimal,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub prices: Vec<MarketPrice>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // Meant to simulate price changes for tests. Not available in prod.
    SetPrice(MarketPrice),
}
