#![allow(dead_code)]

use std::{collections::HashMap, mem::take};

use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, Addr, Coin, Decimal, StdResult, Uint128};
use cw_multi_test::{App, AppResponse, BankSudo, BasicApp, Executor, SudoMsg};
use meridian_mock_oracle::msg::{
    ExecuteMsg as OracleExecuteMsg, InstantiateMsg as OracleInstantiateMsg, MarketPrice,
};
use meridian_types::{
    money_market::{
        self, AccountLtvResponse, AccrualState, Borrow, ConfigResponse, CreateOrUpdateConfig,
        Deposit, LtvIndexEntry, MarketTotalsResponse, MoneyMarket, UpdateMoneyMarketParams,
    },
    oracle::{self, PriceResponse},
};

use crate::integration::mock_contracts::{mock_money_market_contract, mock_oracle_contract};

pub struct MockEnv {
    pub app: App,
    pub owner: Addr,
    pub liquidator: Addr,
    pub oracle: Oracle,
    pub money_market: MoneyMarketContract,
}

#[derive(Clone)]
pub struct Oracle {
    pub contract_addr: Addr,
}

#[derive(Clone)]
pub struct MoneyMarketContract {
    pub contract_addr: Addr,
}

impl MockEnv {
    pub fn increment_by_blocks(&mut self, num_of_blocks: u64) {
        self.app.update_block(|block| {
            block.height += num_of_blocks;
            // assume block time = 6 sec
            block.time = block.time.plus_seconds(num_of_blocks * 6);
        })
    }

    pub fn increment_by_time(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.height += seconds / 6;
            // assume block time = 6 sec
            block.time = block.time.plus_seconds(seconds);
        })
    }

    pub fn block_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn fund_accounts(&mut self, addrs: &[&Addr], amount: u128, denoms: &[&str]) {
        for addr in addrs {
            let coins: Vec<_> = denoms.iter().map(|&d| coin(amount, d)).collect();
            self.fund_account(addr, &coins);
        }
    }

    pub fn fund_account(&mut self, addr: &Addr, coins: &[Coin]) {
        self.app
            .sudo(SudoMsg::Bank(BankSudo::Mint {
                to_address: addr.to_string(),
                amount: coins.to_vec(),
            }))
            .unwrap();
    }

    pub fn query_balance(&self, addr: &Addr, denom: &str) -> StdResult<Coin> {
        self.app.wrap().query_balance(addr, denom)
    }

    pub fn query_all_balances(&self, addr: &Addr) -> HashMap<String, Uint128> {
        let res: Vec<Coin> = self.app.wrap().query_all_balances(addr).unwrap();
        res.into_iter().map(|r| (r.denom, r.amount)).collect()
    }
}

impl Oracle {
    pub fn set_price(&self, env: &mut MockEnv, market_id: &str, price: Decimal) {
        env.app
            .execute_contract(
                env.owner.clone(),
                self.contract_addr.clone(),
                &OracleExecuteMsg::SetPrice(MarketPrice {
                    market_id: market_id.to_string(),
                    price,
                }),
                &[],
            )
            .unwrap();
    }

    pub fn query_price(&self, env: &mut MockEnv, market_id: &str) -> PriceResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &oracle::QueryMsg::Price {
                    market_id: market_id.to_string(),
                },
            )
            .unwrap()
    }
}

impl MoneyMarketContract {
    pub fn init_money_market(
        &self,
        env: &mut MockEnv,
        market: MoneyMarket,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            env.owner.clone(),
            self.contract_addr.clone(),
            &money_market::ExecuteMsg::InitMoneyMarket {
                money_market: market,
            },
            &[],
        )
    }

    pub fn update_money_market(
        &self,
        env: &mut MockEnv,
        denom: &str,
        params: UpdateMoneyMarketParams,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            env.owner.clone(),
            self.contract_addr.clone(),
            &money_market::ExecuteMsg::UpdateMoneyMarket {
                denom: denom.to_string(),
                params,
            },
            &[],
        )
    }

    pub fn deposit(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        coins: &[Coin],
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &money_market::ExecuteMsg::Deposit {
                amount: coins.to_vec(),
            },
            coins,
        )
    }

    pub fn withdraw(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        coins: &[Coin],
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &money_market::ExecuteMsg::Withdraw {
                amount: coins.to_vec(),
            },
            &[],
        )
    }

    pub fn borrow(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        coins: &[Coin],
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &money_market::ExecuteMsg::Borrow {
                amount: coins.to_vec(),
            },
            &[],
        )
    }

    pub fn repay(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        coins: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.repay_on_behalf_of(env, sender, coins, None)
    }

    pub fn repay_on_behalf_of(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        coins: &[Coin],
        on_behalf_of: Option<&Addr>,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &money_market::ExecuteMsg::Repay {
                amount: coins.to_vec(),
                on_behalf_of: on_behalf_of.map(|addr| addr.to_string()),
            },
            coins,
        )
    }

    pub fn liquidate(
        &self,
        env: &mut MockEnv,
        keeper: &Addr,
        borrower: &Addr,
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            keeper.clone(),
            self.contract_addr.clone(),
            &money_market::ExecuteMsg::Liquidate {
                borrower: borrower.to_string(),
            },
            &[],
        )
    }

    pub fn accrue_interest(&self, env: &mut MockEnv, sender: &Addr) -> AnyResult<AppResponse> {
        env.app.execute_contract(
            sender.clone(),
            self.contract_addr.clone(),
            &money_market::ExecuteMsg::AccrueInterest {},
            &[],
        )
    }

    pub fn begin_block(&self, env: &mut MockEnv) -> AnyResult<AppResponse> {
        env.app.wasm_sudo(self.contract_addr.clone(), &money_market::SudoMsg::BeginBlock {})
    }

    pub fn query_config(&self, env: &mut MockEnv) -> ConfigResponse {
        env.app
            .wrap()
            .query_wasm_smart(self.contract_addr.clone(), &money_market::QueryMsg::Config {})
            .unwrap()
    }

    pub fn query_money_market(&self, env: &mut MockEnv, denom: &str) -> MoneyMarket {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &money_market::QueryMsg::MoneyMarket {
                    denom: denom.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_accrual_state(&self, env: &mut MockEnv, denom: &str) -> AccrualState {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &money_market::QueryMsg::AccrualState {
                    denom: denom.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_market_totals(&self, env: &mut MockEnv, denom: &str) -> MarketTotalsResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &money_market::QueryMsg::MarketTotals {
                    denom: denom.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_deposit(&self, env: &mut MockEnv, user: &Addr) -> Option<Deposit> {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &money_market::QueryMsg::Deposit {
                    address: user.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_borrow(&self, env: &mut MockEnv, user: &Addr) -> Option<Borrow> {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &money_market::QueryMsg::Borrow {
                    address: user.to_string(),
                },
            )
            .unwrap()
    }

    /// Every deposit record, walking all pages
    pub fn query_deposits(&self, env: &mut MockEnv) -> Vec<Deposit> {
        let mut deposits: Vec<Deposit> = vec![];
        loop {
            let page: Vec<Deposit> = env
                .app
                .wrap()
                .query_wasm_smart(
                    self.contract_addr.clone(),
                    &money_market::QueryMsg::Deposits {
                        start_after: deposits.last().map(|d| d.depositor.to_string()),
                        limit: None,
                    },
                )
                .unwrap();
            if page.is_empty() {
                return deposits;
            }
            deposits.extend(page);
        }
    }

    /// Every borrow record, walking all pages
    pub fn query_borrows(&self, env: &mut MockEnv) -> Vec<Borrow> {
        let mut borrows: Vec<Borrow> = vec![];
        loop {
            let page: Vec<Borrow> = env
                .app
                .wrap()
                .query_wasm_smart(
                    self.contract_addr.clone(),
                    &money_market::QueryMsg::Borrows {
                        start_after: borrows.last().map(|b| b.borrower.to_string()),
                        limit: None,
                    },
                )
                .unwrap();
            if page.is_empty() {
                return borrows;
            }
            borrows.extend(page);
        }
    }

    pub fn query_account_ltv(&self, env: &mut MockEnv, user: &Addr) -> AccountLtvResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &money_market::QueryMsg::AccountLtv {
                    address: user.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_ltv_index(&self, env: &mut MockEnv, limit: Option<u32>) -> Vec<LtvIndexEntry> {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &money_market::QueryMsg::LtvIndex {
                    limit,
                },
            )
            .unwrap()
    }
}

pub struct MockEnvBuilder {
    app: BasicApp,
    owner: Addr,
    liquidator: Addr,
    money_markets: Vec<MoneyMarket>,
    prices: Vec<MarketPrice>,
}

impl MockEnvBuilder {
    pub fn new(owner: Addr) -> Self {
        Self {
            app: App::default(),
            owner,
            liquidator: Addr::unchecked("auction"),
            money_markets: vec![],
            prices: vec![],
        }
    }

    pub fn liquidator(&mut self, liquidator: Addr) -> &mut Self {
        self.liquidator = liquidator;
        self
    }

    pub fn money_market(&mut self, market: MoneyMarket) -> &mut Self {
        self.money_markets.push(market);
        self
    }

    pub fn price(&mut self, market_id: &str, price: Decimal) -> &mut Self {
        self.prices.push(MarketPrice {
            market_id: market_id.to_string(),
            price,
        });
        self
    }

    pub fn build(&mut self) -> MockEnv {
        let oracle_addr = self.deploy_oracle();
        let money_market_addr = self.deploy_money_market(&oracle_addr);

        MockEnv {
            app: take(&mut self.app),
            owner: self.owner.clone(),
            liquidator: self.liquidator.clone(),
            oracle: Oracle {
                contract_addr: oracle_addr,
            },
            money_market: MoneyMarketContract {
                contract_addr: money_market_addr,
            },
        }
    }

    fn deploy_oracle(&mut self) -> Addr {
        let code_id = self.app.store_code(mock_oracle_contract());

        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &OracleInstantiateMsg {
                    prices: take(&mut self.prices),
                },
                &[],
                "oracle",
                None,
            )
            .unwrap()
    }

    fn deploy_money_market(&mut self, oracle: &Addr) -> Addr {
        let code_id = self.app.store_code(mock_money_market_contract());

        self.app
            .instantiate_contract(
                code_id,
                self.owner.clone(),
                &money_market::InstantiateMsg {
                    owner: self.owner.to_string(),
                    config: CreateOrUpdateConfig {
                        oracle: Some(oracle.to_string()),
                        liquidator: Some(self.liquidator.to_string()),
                    },
                    money_markets: take(&mut self.money_markets),
                },
                &[],
                "money-market",
                None,
            )
            .unwrap()
    }
}
