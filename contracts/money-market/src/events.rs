use cosmwasm_std::{Addr, Coin, Decimal, Event};
use meridian_interest_rate::Accrual;

pub fn coins_to_string(coins: &[Coin]) -> String {
    coins.iter().map(|coin| coin.to_string()).collect::<Vec<_>>().join(",")
}

pub fn build_interest_accrued_event(denom: &str, accrual: &Accrual) -> Event {
    Event::new("interest_accrued")
        .add_attribute("denom", denom)
        .add_attribute("borrow_rate_apy", accrual.borrow_rate_apy.to_string())
        .add_attribute("interest", accrual.interest)
        .add_attribute("reserves_added", accrual.reserves_added)
        .add_attribute("total_reserves", accrual.state.total_reserves)
        .add_attribute("borrow_interest_factor", accrual.state.borrow_interest_factor.to_string())
        .add_attribute("supply_interest_factor", accrual.state.supply_interest_factor.to_string())
        .add_attribute("accrual_time", accrual.state.previous_accrual_time.to_string())
}

pub fn build_ltv_index_updated_event(addr: &Addr, ratio: Option<Decimal>) -> Event {
    let event = Event::new("ltv_index_updated").add_attribute("address", addr);
    match ratio {
        Some(ratio) => event.add_attribute("ratio", ratio.to_string()),
        None => event.add_attribute("removed", "true"),
    }
}

pub fn build_collateral_auction_event(
    borrower: &Addr,
    lot: &Coin,
    lot_index: u32,
    debt_share: Decimal,
) -> Event {
    Event::new("collateral_auction")
        .add_attribute("borrower", borrower)
        .add_attribute("lot", lot.to_string())
        .add_attribute("lot_index", lot_index.to_string())
        .add_attribute("debt_share", debt_share.to_string())
}
