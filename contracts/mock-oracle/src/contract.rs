#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use meridian_types::oracle::{PriceResponse, QueryMsg};

use crate::{
    msg::{ExecuteMsg, InstantiateMsg, MarketPrice},
    state::MARKET_PRICES,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    for item in msg.prices {
        MARKET_PRICES.save(deps.storage, &item.market_id, &item.price)?;
    }
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SetPrice(item) => set_price(deps, item),
    }
}

fn set_price(deps: DepsMut, item: MarketPrice) -> StdResult<Response> {
    MARKET_PRICES.save(deps.storage, &item.market_id, &item.price)?;
    Ok(Response::new()
        .add_attribute("action", "set_price")
        .add_attribute("market_id", item.market_id)
        .add_attribute("price", item.price.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Price {
            market_id,
        } => to_json_binary(&query_price(deps, market_id)?),
    }
}

fn query_price(deps: Deps, market_id: String) -> StdResult<PriceResponse> {
    let price = MARKET_PRICES.load(deps.storage, &market_id)?;
    Ok(PriceResponse {
        market_id,
        price,
    })
}
