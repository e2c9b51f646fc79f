pub mod error;
pub mod money_market;
pub mod oracle;
