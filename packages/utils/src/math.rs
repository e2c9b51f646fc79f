use std::convert::TryInto;

use cosmwasm_std::{Decimal, Fraction, StdResult, Uint128, Uint256};

pub fn uint128_checked_div_with_ceil(
    numerator: Uint128,
    denominator: Uint128,
) -> StdResult<Uint128> {
    let mut result = numerator.checked_div(denominator)?;

    if !numerator.checked_rem(denominator)?.is_zero() {
        result += Uint128::one();
    }

    Ok(result)
}

/// Compute `amount * numerator / denominator`, rounding down. The product is held in 256 bits
/// so only the final quotient has to fit in a Uint128.
pub fn checked_mul_ratio_floor(
    amount: Uint128,
    numerator: Uint128,
    denominator: Uint128,
) -> StdResult<Uint128> {
    let (quotient, _) = mul_ratio_u256(amount, numerator, denominator)?;
    Ok(quotient.try_into()?)
}

/// Compute `amount * numerator / denominator`, rounding up.
pub fn checked_mul_ratio_ceil(
    amount: Uint128,
    numerator: Uint128,
    denominator: Uint128,
) -> StdResult<Uint128> {
    let (mut quotient, remainder) = mul_ratio_u256(amount, numerator, denominator)?;
    if !remainder.is_zero() {
        quotient += Uint256::one();
    }
    Ok(quotient.try_into()?)
}

fn mul_ratio_u256(
    amount: Uint128,
    numerator: Uint128,
    denominator: Uint128,
) -> StdResult<(Uint256, Uint256)> {
    let product = amount.full_mul(numerator);
    let denominator = Uint256::from(denominator);
    let quotient = product.checked_div(denominator)?;
    let remainder = product.checked_rem(denominator)?;
    Ok((quotient, remainder))
}

/// Multiply Uint128 by Decimal, rounding down to the nearest integer.
pub fn multiply_uint128_by_decimal(a: Uint128, b: Decimal) -> StdResult<Uint128> {
    checked_mul_ratio_floor(a, b.numerator(), b.denominator())
}
