use cosmwasm_std::{
    testing::{MockApi, MockQuerier, MockStorage, MOCK_CONTRACT_ADDR},
    Addr, BlockInfo, Coin, ContractInfo, Env, MessageInfo, OwnedDeps, Timestamp, TransactionInfo,
};

use super::meridian_mock_querier::MeridianMockQuerier;

/// Block time every unit test starts from
pub const GENESIS_TIME: u64 = 1_571_797_419;

/// Seconds between two consecutive mock blocks
const BLOCK_SECONDS: u64 = 6;

/// Env at `GENESIS_TIME`
pub fn mock_env() -> Env {
    mock_env_at_block_time(GENESIS_TIME)
}

/// Env at the given block time, with a height consistent with it
pub fn mock_env_at_block_time(seconds: u64) -> Env {
    Env {
        block: BlockInfo {
            height: 1 + seconds.saturating_sub(GENESIS_TIME) / BLOCK_SECONDS,
            time: Timestamp::from_seconds(seconds),
            chain_id: "meridian-testnet-1".to_string(),
        },
        transaction: Some(TransactionInfo {
            index: 0,
        }),
        contract: ContractInfo {
            address: Addr::unchecked(MOCK_CONTRACT_ADDR),
        },
    }
}

/// quick mock info with just the sender
pub fn mock_info(sender: &str) -> MessageInfo {
    MessageInfo {
        sender: Addr::unchecked(sender),
        funds: vec![],
    }
}

/// mock info carrying funds
pub fn mock_info_with_funds(sender: &str, funds: &[Coin]) -> MessageInfo {
    MessageInfo {
        sender: Addr::unchecked(sender),
        funds: funds.to_vec(),
    }
}

/// mock_dependencies replacement for cosmwasm_std::testing::mock_dependencies
pub fn mock_dependencies(
    contract_balance: &[Coin],
) -> OwnedDeps<MockStorage, MockApi, MeridianMockQuerier> {
    let contract_addr = Addr::unchecked(MOCK_CONTRACT_ADDR);
    let custom_querier: MeridianMockQuerier =
        MeridianMockQuerier::new(MockQuerier::new(&[(contract_addr.as_ref(), contract_balance)]));

    OwnedDeps {
        storage: MockStorage::default(),
        api: MockApi::default(),
        querier: custom_querier,
        custom_query_type: Default::default(),
    }
}
