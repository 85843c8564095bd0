use async_trait::async_trait;
use solana_sdk::{account::Account, pubkey::Pubkey};

use crate::{
    errors::CoreResult, operation::DelegateOperation,
    receipt::TransactionReceipt,
};

/// Builds, signs and submits a [DelegateOperation] on behalf of its payer.
/// Retries, timeouts and cancellation are up to the implementation.
#[async_trait]
pub trait TransactionExecutor {
    /// The identity that signs and pays for submitted operations.
    fn payer(&self) -> Pubkey;

    async fn execute(
        &self,
        program_id: &Pubkey,
        operation: &DelegateOperation,
    ) -> CoreResult<TransactionReceipt>;
}

#[async_trait]
pub trait AccountProvider {
    async fn get_account(&self, pubkey: &Pubkey)
        -> CoreResult<Option<Account>>;
}
