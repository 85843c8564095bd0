use delegation_client::errors::ClientError;
use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    ClientError(#[from] ClientError),
    #[error("Deposit of {0} SOL does not fit into lamports")]
    DepositOverflow(u64),
    #[error("JsonError: {0}")]
    JsonError(#[from] serde_json::Error),
}
