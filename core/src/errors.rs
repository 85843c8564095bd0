use delegation_addresses::DerivationError;
use thiserror::Error;

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("RpcClientError: {0}")]
    RpcClientError(#[from] solana_rpc_client_api::client_error::Error),
    #[error("DerivationError: {0}")]
    DerivationError(#[from] DerivationError),
    #[error("Submission rejected: {0}")]
    SubmissionRejected(String),
    #[error("Failed to encode instruction: {0}")]
    FailedToEncodeInstruction(String),
    #[error("Failed to parse delegated account: {0}")]
    FailedToParseDelegatedAccount(String),
}
