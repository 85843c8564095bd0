pub mod config;
pub mod delegation_client;
pub mod errors;

pub use delegation_addresses::{
    cluster::RpcCluster,
    consts::{DELEGATION_PROGRAM_ID, LAMPORTS_PER_SOL},
};
pub use delegation_core::{
    DelegateOperation, DelegatedAccount, TransactionReceipt,
};
pub use delegation_providers::rpc_provider_config::RpcProviderConfig;

pub use config::DelegationClientConfig;
pub use delegation_client::{find_delegate_account, DelegationClient};
