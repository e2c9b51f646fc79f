use std::collections::HashMap;

use cosmwasm_std::{to_json_binary, Addr, Binary, ContractResult, Decimal, QuerierResult};
use meridian_types::oracle::{PriceResponse, QueryMsg};

#[derive(Default)]
pub struct OracleQuerier {
    pub prices: HashMap<String, Decimal>,
}

impl OracleQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        let oracle = Addr::unchecked("oracle");
        if *contract_addr != oracle {
            panic!("[mock]: Oracle request made to {contract_addr} should be {oracle}");
        }

        let ret: ContractResult<Binary> = match query {
            QueryMsg::Price {
                market_id,
            } => match self.prices.get(&market_id) {
                Some(price) => to_json_binary(&PriceResponse {
                    market_id,
                    price: *price,
                })
                .into(),
                None => Err(format!("[mock]: could not find oracle price for {market_id}")).into(),
            },
        };

        Ok(ret).into()
    }
}
