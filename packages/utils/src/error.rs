use thiserror::Error;

/// Raised when governance supplies malformed money market or contract parameters.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid param: {param_name} is {invalid_value}, but it should be {predicate}")]
    InvalidParam {
        param_name: String,
        invalid_value: String,
        predicate: String,
    },

    #[error("Invalid param: {param_name} must not be empty")]
    EmptyParam {
        param_name: String,
    },

    #[error("Invalid denom: {reason}")]
    InvalidDenom {
        reason: String,
    },

    #[error("Denom {denom} is listed more than once")]
    DuplicateDenom {
        denom: String,
    },
}
