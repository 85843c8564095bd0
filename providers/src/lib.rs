pub mod rpc_account_provider;
pub mod rpc_provider_config;
pub mod rpc_transaction_executor;

pub use delegation_addresses::cluster::RpcCluster;
