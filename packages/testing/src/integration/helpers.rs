use cosmwasm_std::{Decimal, Uint128};
use meridian_types::money_market::{BorrowLimit, InterestRateModel, MoneyMarket};

/// Market with a flat 5% borrow rate below the kink
pub fn default_money_market(
    denom: &str,
    spot_market_id: &str,
    loan_to_value: Decimal,
) -> MoneyMarket {
    MoneyMarket {
        denom: denom.to_string(),
        borrow_limit: BorrowLimit {
            has_max_limit: false,
            maximum_limit: Uint128::zero(),
            loan_to_value,
        },
        spot_market_id: spot_market_id.to_string(),
        conversion_factor: Uint128::new(1_000_000),
        interest_rate_model: InterestRateModel {
            base_rate_apy: Decimal::percent(5),
            base_multiplier: Decimal::percent(10),
            kink: Decimal::percent(80),
            jump_multiplier: Decimal::percent(50),
        },
        reserve_factor: Decimal::percent(5),
        auction_size: Uint128::new(100_000_000_000),
        keeper_reward_percentage: Decimal::percent(5),
    }
}

pub fn bnb_money_market() -> MoneyMarket {
    MoneyMarket {
        conversion_factor: Uint128::new(100_000_000),
        ..default_money_market("bnb", "bnb:usd", Decimal::percent(60))
    }
}

pub fn ukava_money_market() -> MoneyMarket {
    MoneyMarket {
        interest_rate_model: InterestRateModel {
            base_rate_apy: Decimal::zero(),
            base_multiplier: Decimal::percent(10),
            kink: Decimal::percent(80),
            jump_multiplier: Decimal::percent(50),
        },
        ..default_money_market("ukava", "kava:usd", Decimal::percent(80))
    }
}
