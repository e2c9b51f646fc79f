use cosmwasm_std::{
    from_json,
    testing::{MockQuerier, MOCK_CONTRACT_ADDR},
    Addr, Coin, Decimal, Empty, Querier, QuerierResult, QueryRequest, StdResult, SystemError,
    SystemResult, WasmQuery,
};
use meridian_types::oracle;

use crate::oracle_querier::OracleQuerier;

pub struct MeridianMockQuerier {
    base: MockQuerier<Empty>,
    oracle_querier: OracleQuerier,
}

impl Querier for MeridianMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {e}"),
                    request: bin_request.into(),
                })
            }
        };

        self.handle_query(&request)
    }
}

impl MeridianMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        MeridianMockQuerier {
            base,
            oracle_querier: OracleQuerier::default(),
        }
    }

    /// Set new balances for contract address
    pub fn set_contract_balances(&mut self, contract_balances: &[Coin]) {
        let contract_addr = Addr::unchecked(MOCK_CONTRACT_ADDR);
        self.base.update_balance(contract_addr.to_string(), contract_balances.to_vec());
    }

    pub fn set_oracle_price(&mut self, market_id: &str, price: Decimal) {
        self.oracle_querier.prices.insert(market_id.to_string(), price);
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr,
                msg,
            }) => {
                let contract_addr = Addr::unchecked(contract_addr);

                let parse_oracle_query: StdResult<oracle::QueryMsg> = from_json(msg);
                if let Ok(oracle_query) = parse_oracle_query {
                    return self.oracle_querier.handle_query(&contract_addr, oracle_query);
                }

                panic!("[mock]: Unsupported wasm query: {msg:?}");
            }

            _ => self.base.handle_query(request),
        }
    }
}
