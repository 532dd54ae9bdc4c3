//! Derived pricing for constant-product pools.
//!
//! - [`reference`] - reference-currency USD price from the designated anchor pools
//! - [`resolver`] - single-hop derived price of any token via the anchor whitelist
//! - [`tracked`] - whitelist-tracked USD volume and liquidity
//! - [`valuation`] - per-event figures (swap, mint/burn, sync) built on the above
//!
//! [`PriceOracle`] ties them to one configuration, store and pair registry.

pub mod reference;
pub mod resolver;
pub mod tracked;
pub mod valuation;

use bigdecimal::BigDecimal;
use std::sync::Arc;

pub use reference::reference_price_usd;
pub use resolver::TokenPriceResolver;
pub use tracked::TrackedValuation;
pub use valuation::{SwapValuation, SyncRefresh};

use crate::{
    config::PricingConfig,
    error::{PricingError, Result},
    models::{Token, BUNDLE_ID},
    store::{EntityStore, PairRegistry},
};

/// Read-only pricing facade.
///
/// Holds no state besides its inputs: every call reads the store afresh, so
/// repeated calls over unchanged store contents return identical results.
/// Callers must apply one event's writes before pricing the next one.
pub struct PriceOracle<S, R> {
    config: Arc<PricingConfig>,
    store: S,
    registry: R,
}

impl<S: EntityStore, R: PairRegistry> PriceOracle<S, R> {
    pub fn new(config: Arc<PricingConfig>, store: S, registry: R) -> Self {
        Self {
            config,
            store,
            registry,
        }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Aggregate the reference-currency USD price from the anchor pools.
    pub fn reference_price_usd(&self) -> Result<BigDecimal> {
        reference_price_usd(&self.config.anchor_pools, &self.store)
    }

    /// Derived price of `token` in reference-currency units (0 if undiscoverable).
    pub fn resolve_reference_price(&self, token: &str) -> Result<BigDecimal> {
        TokenPriceResolver::new(&self.config, &self.store, &self.registry)
            .resolve_reference_price(token)
    }

    /// Reference-currency USD price as currently stored in the bundle.
    pub fn stored_reference_price(&self) -> Result<BigDecimal> {
        self.store
            .load_bundle(BUNDLE_ID)?
            .map(|bundle| bundle.reference_price_usd)
            .ok_or(PricingError::NotInitialized("bundle"))
    }

    pub fn tracked_volume_usd(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> Result<BigDecimal> {
        let price = self.stored_reference_price()?;
        Ok(self.tracked_volume_usd_with_price(amount0, token0, amount1, token1, &price))
    }

    pub fn tracked_volume_usd_with_price(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
        reference_price_usd: &BigDecimal,
    ) -> BigDecimal {
        TrackedValuation::new(&self.config.anchor_set, reference_price_usd)
            .volume_usd(amount0, token0, amount1, token1)
    }

    pub fn tracked_liquidity_usd(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> Result<BigDecimal> {
        let price = self.stored_reference_price()?;
        Ok(self.tracked_liquidity_usd_with_price(amount0, token0, amount1, token1, &price))
    }

    pub fn tracked_liquidity_usd_with_price(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
        reference_price_usd: &BigDecimal,
    ) -> BigDecimal {
        TrackedValuation::new(&self.config.anchor_set, reference_price_usd)
            .liquidity_usd(amount0, token0, amount1, token1)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use bigdecimal::BigDecimal;
    use std::{str::FromStr, sync::Arc};

    use crate::{
        config::{AnchorPool, AnchorPools, AnchorSet, PricingConfig},
        models::PoolSide,
    };

    pub const WREF: &str = "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c";
    pub const USDC: &str = "0xe9e7cea3dedca5984780bafc599bd69add087d56";
    pub const USDT: &str = "0x55d398326f99059ff775485246999027b3197955";
    pub const CAKE: &str = "0x0e09fabb73bd3ade0a17ecc321fd13a19e81ce82";
    pub const DOGE: &str = "0xba2ae424d960c26247dd6c32edc70b295c744c43";

    // usdc is token1
    pub const USDC_POOL: &str = "0x1b96b92314c44b159149f7e0303511fb2fc4774f";
    // usdt is token0
    pub const USDT_POOL: &str = "0x20bcc3b8a0091ddac2d0bc30f68e6cbb97de59cd";
    // dai is token0
    pub const DAI_POOL: &str = "0xf3010261b58b2874639ca2e860e9005e3be5de0b";

    pub fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    pub fn config() -> Arc<PricingConfig> {
        let anchor_pools = AnchorPools {
            primary: AnchorPool::new(USDC_POOL, PoolSide::Token1).unwrap(),
            secondary: AnchorPool::new(USDT_POOL, PoolSide::Token0).unwrap(),
            tertiary: AnchorPool::new(DAI_POOL, PoolSide::Token0).unwrap(),
        };

        Arc::new(
            PricingConfig::new(
                WREF,
                AnchorSet::new(&[WREF, USDC, USDT]).unwrap(),
                anchor_pools,
                dec("2"),
            )
            .unwrap(),
        )
    }
}
