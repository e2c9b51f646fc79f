#![cfg(not(target_arch = "wasm32"))]

/// cosmwasm_std::testing overrides and custom test helpers
mod helpers;
pub mod integration;
mod meridian_mock_querier;
mod mocks;
mod oracle_querier;

pub use helpers::*;
pub use meridian_mock_querier::MeridianMockQuerier;
pub use mocks::*;
