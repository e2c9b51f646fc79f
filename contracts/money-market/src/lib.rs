pub mod accrual;
pub mod borrow;
pub mod config;
pub mod contract;
pub mod deposit;
pub mod error;
mod events;
pub mod health;
pub mod helpers;
pub mod instantiate;
pub mod ledger;
pub mod liquidate;
pub mod ltv_index;
pub mod market;
pub mod pool;
pub mod query;
pub mod repay;
pub mod state;
pub mod user;
pub mod withdraw;
