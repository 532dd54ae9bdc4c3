use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::{EntityStore, PairRegistry};
use crate::{
    error::Result,
    models::{Bundle, Pool, Token},
    utils::ZERO_ADDRESS,
};

/// Serialized store contents, as exported by an indexer.
#[derive(Debug, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub pools: Vec<Pool>,
    #[serde(default)]
    pub tokens: Vec<Token>,
    #[serde(default)]
    pub bundle: Option<Bundle>,
}

/// In-memory entity store keyed by lowercase address.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pools: FxHashMap<String, Pool>,
    tokens: FxHashMap<String, Token>,
    bundles: FxHashMap<String, Bundle>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut store = Self::new();
        for pool in snapshot.pools {
            store.insert_pool(pool);
        }
        for token in snapshot.tokens {
            store.insert_token(token);
        }
        if let Some(bundle) = snapshot.bundle {
            store.insert_bundle(bundle);
        }
        store
    }

    pub fn insert_pool(&mut self, pool: Pool) {
        self.pools.insert(pool.address.to_lowercase(), pool);
    }

    pub fn insert_token(&mut self, token: Token) {
        self.tokens.insert(token.address.to_lowercase(), token);
    }

    pub fn insert_bundle(&mut self, bundle: Bundle) {
        self.bundles.insert(bundle.id.clone(), bundle);
    }

    pub fn pools(&self) -> impl Iterator<Item = &Pool> {
        self.pools.values()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }
}

impl EntityStore for MemoryStore {
    fn load_pool(&self, address: &str) -> Result<Option<Pool>> {
        Ok(self.pools.get(&address.to_lowercase()).cloned())
    }

    fn load_token(&self, address: &str) -> Result<Option<Token>> {
        Ok(self.tokens.get(&address.to_lowercase()).cloned())
    }

    fn load_bundle(&self, id: &str) -> Result<Option<Bundle>> {
        Ok(self.bundles.get(id).cloned())
    }
}

/// Pair registry built from pair-creation events.
///
/// Lookups are order-independent, matching a V2 factory's `getPair`.
#[derive(Debug, Default, Clone)]
pub struct PairIndex {
    pairs: FxHashMap<(String, String), String>,
}

impl PairIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every pool of a store, as if replaying its creation events.
    pub fn from_pools<'a>(pools: impl IntoIterator<Item = &'a Pool>) -> Self {
        let mut index = Self::new();
        for pool in pools {
            index.register(&pool.token0, &pool.token1, &pool.address);
        }
        index
    }

    pub fn register(&mut self, token_a: &str, token_b: &str, pair: &str) {
        self.pairs.insert(pair_key(token_a, token_b), pair.to_lowercase());
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl PairRegistry for PairIndex {
    fn get_pair(&self, token_a: &str, token_b: &str) -> Result<String> {
        Ok(self
            .pairs
            .get(&pair_key(token_a, token_b))
            .cloned()
            .unwrap_or_else(|| ZERO_ADDRESS.to_string()))
    }
}

/// Sorted lowercase key so (a, b) and (b, a) hit the same entry.
fn pair_key(token_a: &str, token_b: &str) -> (String, String) {
    let a = token_a.to_lowercase();
    let b = token_b.to_lowercase();
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
