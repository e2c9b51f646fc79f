use cosmwasm_std::{DepsMut, MessageInfo, Response};
use mars_owner::OwnerUpdate;
use meridian_types::money_market::CreateOrUpdateConfig;
use meridian_utils::helpers::option_string_to_addr;

use crate::{
    error::ContractError,
    state::{CONFIG, OWNER},
};

pub fn update_owner(
    deps: DepsMut,
    info: MessageInfo,
    update: OwnerUpdate,
) -> Result<Response, ContractError> {
    Ok(OWNER.update(deps, info, update)?)
}

/// Update config
pub fn update_config(
    deps: DepsMut,
    info: MessageInfo,
    new_config: CreateOrUpdateConfig,
) -> Result<Response, ContractError> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;

    // Destructuring a struct's fields into separate variables in order to force
    // compile error if we add more params
    let CreateOrUpdateConfig {
        oracle,
        liquidator,
    } = new_config;

    config.oracle = option_string_to_addr(deps.api, oracle, config.oracle)?;
    config.liquidator = option_string_to_addr(deps.api, liquidator, config.liquidator)?;

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_config")
        .add_attribute("oracle", &config.oracle)
        .add_attribute("liquidator", &config.liquidator))
}
