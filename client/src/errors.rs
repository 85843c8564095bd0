use std::path::PathBuf;

use delegation_addresses::DerivationError;
use delegation_core::{errors::CoreError, DelegateOperation};
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to submit {operation}: {source}")]
    SubmissionFailed {
        operation: DelegateOperation,
        source: CoreError,
    },
    #[error("DerivationError: {0}")]
    DerivationError(#[from] DerivationError),
    #[error("Failed to fetch delegated account {address}: {source}")]
    AccountFetchFailed { address: Pubkey, source: CoreError },
    #[error(
        "Account {address} is owned by {owner} instead of the delegation \
         program"
    )]
    InvalidAccountOwner { address: Pubkey, owner: Pubkey },
    #[error("Failed to read keypair from {}: {reason}", path.display())]
    KeypairRead { path: PathBuf, reason: String },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
