use thiserror::Error;

pub type DerivationResult<T> = std::result::Result<T, DerivationError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DerivationError {
    #[error("At least one seed is required")]
    NoSeeds,
    #[error("Too many seeds: {count}")]
    TooManySeeds { count: usize },
    #[error("Seed at index {index} is {len} bytes long")]
    SeedTooLong { index: usize, len: usize },
    #[error("Derived address lies on the ed25519 curve")]
    OnCurve,
    #[error("Unable to find a bump that yields an off-curve address")]
    NoValidBumpFound,
}
