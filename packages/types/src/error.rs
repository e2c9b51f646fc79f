use cosmwasm_std::{
    CheckedFromRatioError, CheckedMultiplyFractionError, ConversionOverflowError,
    DivideByZeroError, OverflowError, StdError,
};
use meridian_utils::error::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MeridianError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("All params should be available during instantiation")]
    InstantiateParamsUnavailable {},

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    CheckedFromRatio(#[from] CheckedFromRatioError),

    #[error("{0}")]
    CheckedMultiplyFraction(#[from] CheckedMultiplyFractionError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Elapsed time of {seconds} seconds cannot be applied in a single accrual")]
    ElapsedTimeTooLarge {
        seconds: u64,
    },

    #[error("Cannot convert annual rate {rate} to a per-second rate")]
    InvalidAnnualRate {
        rate: String,
    },
}

impl From<MeridianError> for StdError {
    fn from(source: MeridianError) -> Self {
        match source {
            MeridianError::Std(e) => e,
            e => StdError::generic_err(e.to_string()),
        }
    }
}
