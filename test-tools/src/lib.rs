pub mod account_provider_stub;
pub mod accounts;
pub mod transaction_executor_stub;
