mod interest_rate_model;
mod market;
mod msg;
mod types;

pub use interest_rate_model::*;
pub use market::*;
pub use msg::*;
pub use types::*;
