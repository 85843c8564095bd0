pub mod cluster;
pub mod consts;
pub mod errors;
pub mod pda;

pub use cluster::RpcCluster;
pub use errors::{DerivationError, DerivationResult};
pub use pda::{create_program_address, derive_program_address};
