pub mod helpers;
pub mod mock_contracts;
pub mod mock_env;
