use delegation_addresses::pda::delegate_pda_with_bump_from_pubkey;
use delegation_core::{
    AccountProvider, DelegateOperation, DelegatedAccount, TransactionExecutor,
    TransactionReceipt,
};
use delegation_providers::{
    rpc_account_provider::RpcAccountProvider,
    rpc_transaction_executor::RpcTransactionExecutor,
};
use log::*;
use solana_sdk::{pubkey::Pubkey, signature::Keypair};

use crate::{
    config::DelegationClientConfig,
    errors::{ClientError, ClientResult},
};

/// Derives the delegated account `owner` has under `program_id` together with
/// its canonical bump. Pure, no cluster access.
pub fn find_delegate_account(
    owner: &Pubkey,
    program_id: &Pubkey,
) -> ClientResult<(Pubkey, u8)> {
    Ok(delegate_pda_with_bump_from_pubkey(owner, program_id)?)
}

/// The API to manage the delegated account of the payer on a cluster.
/// Submissions go through the executor exactly once, retrying is left to
/// the caller.
pub struct DelegationClient<E: TransactionExecutor, A: AccountProvider> {
    program_id: Pubkey,
    executor: E,
    account_provider: A,
}

impl DelegationClient<RpcTransactionExecutor, RpcAccountProvider> {
    /// Loads the payer from the configured keypair file and connects to the
    /// configured cluster.
    pub fn try_new(config: DelegationClientConfig) -> ClientResult<Self> {
        let payer = config.read_keypair()?;
        Ok(Self::new_with_payer(config, payer))
    }

    pub fn new_with_payer(
        config: DelegationClientConfig,
        payer: Keypair,
    ) -> Self {
        let executor = RpcTransactionExecutor::new(
            config.rpc_provider_config.clone(),
            payer,
        );
        let account_provider =
            RpcAccountProvider::new(config.rpc_provider_config);
        Self::with_executor_and_provider(
            config.program_id,
            executor,
            account_provider,
        )
    }
}

impl<E: TransactionExecutor, A: AccountProvider> DelegationClient<E, A> {
    pub fn with_executor_and_provider(
        program_id: Pubkey,
        executor: E,
        account_provider: A,
    ) -> Self {
        Self {
            program_id,
            executor,
            account_provider,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn payer(&self) -> Pubkey {
        self.executor.payer()
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Creates the delegated account of the payer.
    /// Passing `None` sends the instruction without an amount argument,
    /// `Some(0)` sends an explicit zero deposit.
    pub async fn initialize_delegate(
        &self,
        amount: Option<u64>,
    ) -> ClientResult<TransactionReceipt> {
        self.execute(DelegateOperation::initialize_delegate(amount))
            .await
    }

    pub async fn withdraw(
        &self,
        amount: u64,
    ) -> ClientResult<TransactionReceipt> {
        self.execute(DelegateOperation::withdraw(amount)).await
    }

    /// Delegated account of `owner` under the program of this client.
    pub fn delegate_account_of(
        &self,
        owner: &Pubkey,
    ) -> ClientResult<(Pubkey, u8)> {
        find_delegate_account(owner, &self.program_id)
    }

    /// Delegated account of the payer under the program of this client.
    pub fn own_delegate_account(&self) -> ClientResult<(Pubkey, u8)> {
        self.delegate_account_of(&self.payer())
    }

    /// Fetches and decodes the delegated account of `owner`, `None` if it
    /// was not initialized yet.
    pub async fn fetch_delegate_account(
        &self,
        owner: &Pubkey,
    ) -> ClientResult<Option<DelegatedAccount>> {
        let (address, _) = self.delegate_account_of(owner)?;
        let account = match self
            .account_provider
            .get_account(&address)
            .await
            .map_err(|source| ClientError::AccountFetchFailed {
                address,
                source,
            })? {
            Some(account) => account,
            None => {
                debug!("Delegated account {} not found", address);
                return Ok(None);
            }
        };

        if account.owner != self.program_id {
            return Err(ClientError::InvalidAccountOwner {
                address,
                owner: account.owner,
            });
        }

        DelegatedAccount::try_from_account_data(&account.data)
            .map(Some)
            .map_err(|source| ClientError::AccountFetchFailed {
                address,
                source,
            })
    }

    async fn execute(
        &self,
        operation: DelegateOperation,
    ) -> ClientResult<TransactionReceipt> {
        debug!("Submitting {} to program {}", operation, self.program_id);
        match self.executor.execute(&self.program_id, &operation).await {
            Ok(receipt) => {
                info!("{} confirmed: {}", operation, receipt);
                Ok(receipt)
            }
            Err(source) => {
                warn!("Failed to submit {}: {}", operation, source);
                Err(ClientError::SubmissionFailed { operation, source })
            }
        }
    }
}
