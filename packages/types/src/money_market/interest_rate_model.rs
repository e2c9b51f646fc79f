use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;
use meridian_utils::{error::ValidationError, helpers::decimal_param_le_one};

use crate::error::MeridianError;

/// Kinked ("jump rate") borrow curve. All rates are annual.
#[cw_serde]
#[derive(Eq, Default)]
pub struct InterestRateModel {
    /// Borrow rate when utilization is zero
    pub base_rate_apy: Decimal,
    /// Slope applied to utilization up to the kink
    pub base_multiplier: Decimal,
    /// Utilization at which the curve switches to the jump multiplier
    pub kink: Decimal,
    /// Slope applied to utilization above the kink
    pub jump_multiplier: Decimal,
}

impl InterestRateModel {
    pub fn validate(&self) -> Result<(), ValidationError> {
        decimal_param_le_one(self.base_rate_apy, "base_rate_apy")?;
        decimal_param_le_one(self.kink, "kink")?;
        Ok(())
    }

    pub fn get_borrow_rate(
        &self,
        current_utilization_rate: Decimal,
    ) -> Result<Decimal, MeridianError> {
        if current_utilization_rate <= self.kink {
            return Ok(current_utilization_rate
                .checked_mul(self.base_multiplier)?
                .checked_add(self.base_rate_apy)?);
        }

        let normal_rate = self.kink.checked_mul(self.base_multiplier)?;
        let excess_utilization = current_utilization_rate.checked_sub(self.kink)?;
        let jump_rate = excess_utilization.checked_mul(self.jump_multiplier)?;

        Ok(normal_rate.checked_add(jump_rate)?.checked_add(self.base_rate_apy)?)
    }
}
