use std::collections::HashMap;

use cosmwasm_std::{Addr, Coin, Decimal, Event, QuerierWrapper, Storage};
use meridian_types::{error::MeridianError, money_market::MoneyMarket};

use crate::{
    error::ContractError,
    events::build_ltv_index_updated_event,
    helpers::query_price,
    state::{CONFIG, LTV_INDEX, MONEY_MARKETS},
};

/// Oracle valuation of an account's deposits and borrows.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AccountValuation {
    pub collateral_value: Decimal,
    /// Collateral value weighted by each market's loan to value
    pub borrowable_value: Decimal,
    pub borrow_value: Decimal,
}

impl AccountValuation {
    /// An account is within its loan to value range while its borrows are covered by the
    /// weighted value of its deposits.
    pub fn is_within_limit(&self) -> bool {
        self.borrow_value <= self.borrowable_value
    }

    /// `borrow_value / collateral_value`, saturating at `Decimal::MAX`
    pub fn ltv(&self) -> Decimal {
        if self.borrow_value.is_zero() {
            return Decimal::zero();
        }
        self.borrow_value.checked_div(self.collateral_value).unwrap_or(Decimal::MAX)
    }
}

/// Prices every coin through the market's spot market id, querying each id at most once.
pub struct Valuer<'a> {
    store: &'a dyn Storage,
    querier: QuerierWrapper<'a>,
    oracle_addr: &'a Addr,
    markets: HashMap<String, MoneyMarket>,
    prices: HashMap<String, Decimal>,
}

impl<'a> Valuer<'a> {
    pub fn new(store: &'a dyn Storage, querier: QuerierWrapper<'a>, oracle_addr: &'a Addr) -> Self {
        Self {
            store,
            querier,
            oracle_addr,
            markets: HashMap::new(),
            prices: HashMap::new(),
        }
    }

    fn market(&mut self, denom: &str) -> Result<MoneyMarket, ContractError> {
        if let Some(market) = self.markets.get(denom) {
            return Ok(market.clone());
        }
        let market = MONEY_MARKETS.may_load(self.store, denom)?.ok_or_else(|| {
            ContractError::MoneyMarketNotInitialized {
                denom: denom.to_string(),
            }
        })?;
        self.markets.insert(denom.to_string(), market.clone());
        Ok(market)
    }

    fn price(&mut self, market_id: &str) -> Result<Decimal, ContractError> {
        if let Some(price) = self.prices.get(market_id) {
            return Ok(*price);
        }
        let price = query_price(&self.querier, self.oracle_addr, market_id)?;
        self.prices.insert(market_id.to_string(), price);
        Ok(price)
    }

    /// `amount / conversion_factor * price`
    pub fn value(&mut self, coin: &Coin) -> Result<Decimal, ContractError> {
        let market = self.market(&coin.denom)?;
        let price = self.price(&market.spot_market_id)?;
        let whole_units = Decimal::checked_from_ratio(coin.amount, market.conversion_factor)
            .map_err(MeridianError::from)?;
        Ok(whole_units.checked_mul(price)?)
    }

    pub fn valuation(
        &mut self,
        deposit: &[Coin],
        borrow: &[Coin],
    ) -> Result<AccountValuation, ContractError> {
        let mut valuation = AccountValuation::default();

        for coin in deposit {
            let ltv = self.market(&coin.denom)?.borrow_limit.loan_to_value;
            let value = self.value(coin)?;
            valuation.collateral_value = valuation.collateral_value.checked_add(value)?;
            valuation.borrowable_value =
                valuation.borrowable_value.checked_add(value.checked_mul(ltv)?)?;
        }

        for coin in borrow {
            let value = self.value(coin)?;
            valuation.borrow_value = valuation.borrow_value.checked_add(value)?;
        }

        Ok(valuation)
    }
}

/// Value an account's deposit and borrow amounts with the configured oracle
pub fn account_valuation(
    store: &dyn Storage,
    querier: QuerierWrapper,
    deposit: &[Coin],
    borrow: &[Coin],
) -> Result<AccountValuation, ContractError> {
    let config = CONFIG.load(store)?;
    Valuer::new(store, querier, &config.oracle).valuation(deposit, borrow)
}

/// Re-key the account in the LTV index after its records changed. `valuation` is `None` once the
/// account no longer borrows, which drops it from the index.
pub fn update_ltv_index(
    store: &mut dyn Storage,
    addr: &Addr,
    valuation: Option<&AccountValuation>,
) -> Result<Event, ContractError> {
    match valuation {
        Some(valuation) => {
            let ratio = valuation.ltv();
            LTV_INDEX.set(store, addr, ratio)?;
            Ok(build_ltv_index_updated_event(addr, Some(ratio)))
        }
        None => {
            LTV_INDEX.remove(store, addr)?;
            Ok(build_ltv_index_updated_event(addr, None))
        }
    }
}
