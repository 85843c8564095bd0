use async_trait::async_trait;
use delegation_core::{
    errors::{CoreError, CoreResult},
    DelegateOperation, TransactionExecutor, TransactionReceipt,
};
use log::*;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use crate::rpc_provider_config::RpcProviderConfig;

/// Submits operations as single instruction transactions signed and paid for
/// by the configured keypair. Every call is one attempt, failures are handed
/// back to the caller.
pub struct RpcTransactionExecutor {
    rpc_client: RpcClient,
    payer: Keypair,
}

impl RpcTransactionExecutor {
    pub fn new(config: RpcProviderConfig, payer: Keypair) -> Self {
        let rpc_client = RpcClient::new_with_commitment(
            config.url().to_string(),
            config.commitment_config(),
        );
        Self { rpc_client, payer }
    }

    pub fn url(&self) -> String {
        self.rpc_client.url()
    }
}

#[async_trait]
impl TransactionExecutor for RpcTransactionExecutor {
    fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    async fn execute(
        &self,
        program_id: &Pubkey,
        operation: &DelegateOperation,
    ) -> CoreResult<TransactionReceipt> {
        let payer = self.payer.pubkey();
        let ix = operation.instruction(program_id, &payer)?;
        trace!("{} instruction data: {:?}", operation, ix.data);

        let blockhash = self.rpc_client.get_latest_blockhash().await?;
        let tx = Transaction::new_signed_with_payer(
            &[ix],
            Some(&payer),
            &[&self.payer],
            blockhash,
        );

        let signature =
            match self.rpc_client.send_and_confirm_transaction(&tx).await {
                Ok(signature) => signature,
                Err(err) => match err.get_transaction_error() {
                    Some(tx_err) => {
                        warn!("{} was rejected: {}", operation, tx_err);
                        return Err(CoreError::SubmissionRejected(
                            tx_err.to_string(),
                        ));
                    }
                    None => return Err(err.into()),
                },
            };
        debug!("{} confirmed with signature {}", operation, signature);
        Ok(signature.into())
    }
}
