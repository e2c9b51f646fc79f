use cosmwasm_std::{DepsMut, Env, Response};
use cw2::set_contract_version;
use mars_owner::OwnerInit::SetInitialOwner;
use meridian_types::{
    error::MeridianError,
    money_market::{Config, CreateOrUpdateConfig, InstantiateMsg},
};

use crate::{
    contract::{CONTRACT_NAME, CONTRACT_VERSION},
    error::ContractError,
    market::create_money_market,
    state::{CONFIG, OWNER},
};

pub fn instantiate(
    deps: DepsMut,
    env: Env,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;

    // Destructuring a struct's fields into separate variables in order to force
    // compile error if we add more params
    let CreateOrUpdateConfig {
        oracle,
        liquidator,
    } = msg.config;

    let (Some(oracle), Some(liquidator)) = (oracle, liquidator) else {
        return Err(MeridianError::InstantiateParamsUnavailable {}.into());
    };

    let config = Config {
        oracle: deps.api.addr_validate(&oracle)?,
        liquidator: deps.api.addr_validate(&liquidator)?,
    };
    CONFIG.save(deps.storage, &config)?;

    OWNER.initialize(
        deps.storage,
        deps.api,
        SetInitialOwner {
            owner: msg.owner,
        },
    )?;

    let block_time = env.block.time.seconds();
    for money_market in msg.money_markets {
        create_money_market(deps.storage, block_time, money_market)?;
    }

    Ok(Response::default())
}
