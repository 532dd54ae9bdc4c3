use thiserror::Error;

/// Errors surfaced by the pricing core.
///
/// A price that cannot be discovered is not an error: resolvers return zero
/// for that case. Only missing preconditions and backend failures end up here.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Required record not initialized: {0}")]
    NotInitialized(&'static str),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid pricing configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid reserves for pool {pool}: reserves must be non-negative")]
    InvalidReserves { pool: String },
}

pub type Result<T> = std::result::Result<T, PricingError>;
