pub mod delegated_account;
pub mod discriminator;
pub mod errors;
pub mod operation;
pub mod receipt;
mod traits;

pub use delegated_account::DelegatedAccount;
pub use operation::DelegateOperation;
pub use receipt::TransactionReceipt;
pub use traits::*;
