pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod store;
pub mod utils;

pub use config::{PricingConfig, Settings};
pub use error::{PricingError, Result};
pub use pricing::{PriceOracle, SwapValuation, SyncRefresh, TokenPriceResolver};
pub use store::{EntityStore, MemoryStore, PairIndex, PairRegistry};
