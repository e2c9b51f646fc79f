use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn mock_money_market_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        meridian_money_market::contract::execute,
        meridian_money_market::contract::instantiate,
        meridian_money_market::contract::query,
    )
    .with_sudo(meridian_money_market::contract::sudo);
    Box::new(contract)
}

pub fn mock_oracle_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        meridian_mock_oracle::contract::execute,
        meridian_mock_oracle::contract::instantiate,
        meridian_mock_oracle::contract::query,
    );
    Box::new(contract)
}
