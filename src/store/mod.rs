//! Read interfaces to the entity store and the pair registry.
//!
//! The pricing core never writes: it loads records through [`EntityStore`],
//! asks [`PairRegistry`] for pool addresses, and hands derived values back to
//! the caller. Every load is optional; callers decide what absence means.

mod memory;

pub use memory::{MemoryStore, PairIndex, Snapshot};

use crate::{
    error::Result,
    models::{Bundle, Pool, Token},
};

/// Load-by-key access to indexed entities.
pub trait EntityStore {
    fn load_pool(&self, address: &str) -> Result<Option<Pool>>;
    fn load_token(&self, address: &str) -> Result<Option<Token>>;
    fn load_bundle(&self, id: &str) -> Result<Option<Bundle>>;
}

/// Factory-style pair lookup.
///
/// Returns the pair address for two tokens in either order, or
/// [`ZERO_ADDRESS`](crate::utils::ZERO_ADDRESS) when no pair exists.
pub trait PairRegistry {
    fn get_pair(&self, token_a: &str, token_b: &str) -> Result<String>;
}

impl<T: EntityStore + ?Sized> EntityStore for &T {
    fn load_pool(&self, address: &str) -> Result<Option<Pool>> {
        (**self).load_pool(address)
    }

    fn load_token(&self, address: &str) -> Result<Option<Token>> {
        (**self).load_token(address)
    }

    fn load_bundle(&self, id: &str) -> Result<Option<Bundle>> {
        (**self).load_bundle(id)
    }
}

impl<T: PairRegistry + ?Sized> PairRegistry for &T {
    fn get_pair(&self, token_a: &str, token_b: &str) -> Result<String> {
        (**self).get_pair(token_a, token_b)
    }
}
