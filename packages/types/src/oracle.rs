use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Decimal;

/// Queries the money market sends to the price oracle. Prices are looked up by spot market id
/// (e.g. `bnb:usd`) rather than by denom, since several denoms may share a feed.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(PriceResponse)]
    Price {
        market_id: String,
    },
}

#[cw_serde]
pub struct PriceResponse {
    pub market_id: String,
    pub price: Decimal,
}
