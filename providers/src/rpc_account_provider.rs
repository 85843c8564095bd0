use async_trait::async_trait;
use delegation_core::{errors::CoreResult, AccountProvider};
use solana_account_decoder::UiAccountEncoding;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_rpc_client_api::config::RpcAccountInfoConfig;
use solana_sdk::{account::Account, pubkey::Pubkey};

use crate::rpc_provider_config::RpcProviderConfig;

pub struct RpcAccountProvider {
    rpc_client: RpcClient,
}

impl RpcAccountProvider {
    pub fn new(config: RpcProviderConfig) -> Self {
        let rpc_client = RpcClient::new_with_commitment(
            config.url().to_string(),
            config.commitment_config(),
        );
        Self { rpc_client }
    }
}

#[async_trait]
impl AccountProvider for RpcAccountProvider {
    async fn get_account(
        &self,
        pubkey: &Pubkey,
    ) -> CoreResult<Option<Account>> {
        let response = self
            .rpc_client
            .get_account_with_config(
                pubkey,
                RpcAccountInfoConfig {
                    commitment: Some(self.rpc_client.commitment()),
                    min_context_slot: None,
                    encoding: Some(UiAccountEncoding::Base64Zstd),
                    data_slice: None,
                },
            )
            .await?;
        Ok(response.value)
    }
}
