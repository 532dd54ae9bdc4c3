use bigdecimal::BigDecimal;
use log::{debug, warn};

use crate::{
    config::PricingConfig,
    error::Result,
    store::{EntityStore, PairRegistry},
    utils::{is_zero_address, one, zero},
};

/// Single-hop price discovery in reference-currency units.
///
/// Walks the anchor whitelist in its configured order and prices the token
/// through the first anchor pair that is deep enough:
///
/// `derived(token) = pool.price(bridge side) * derived(bridge token)`
///
/// The first qualifying anchor wins even when a later one is deeper. That
/// tie-break is observable in the resulting prices, so the whitelist order is
/// part of the configuration contract.
pub struct TokenPriceResolver<'a, S, R> {
    config: &'a PricingConfig,
    store: &'a S,
    registry: &'a R,
}

impl<'a, S: EntityStore, R: PairRegistry> TokenPriceResolver<'a, S, R> {
    pub fn new(config: &'a PricingConfig, store: &'a S, registry: &'a R) -> Self {
        Self {
            config,
            store,
            registry,
        }
    }

    /// Derived price of `token` in reference-currency units.
    ///
    /// Returns 1 for the wrapped reference token itself and 0 when no anchor
    /// pair qualifies. Zero means "unknown", not "worthless".
    pub fn resolve_reference_price(&self, token: &str) -> Result<BigDecimal> {
        if self.config.is_reference_token(token) {
            return Ok(one());
        }

        for anchor in self.config.anchor_set.iter() {
            if let Some(price) = self.price_via_anchor(token, anchor)? {
                return Ok(price);
            }
        }

        debug!("No qualifying anchor pair for token {}", token);
        Ok(zero())
    }

    /// Price `token` through its pair with `anchor`, if that pair qualifies.
    fn price_via_anchor(&self, token: &str, anchor: &str) -> Result<Option<BigDecimal>> {
        let pair_address = self.registry.get_pair(token, anchor)?;
        if is_zero_address(&pair_address) {
            return Ok(None);
        }

        let Some(pool) = self.store.load_pool(&pair_address)? else {
            warn!(
                "Pair {} registered for {}/{} but not found in store, skipping",
                pair_address, token, anchor
            );
            return Ok(None);
        };

        let Some(side) = pool.side_of(token) else {
            warn!("Pair {} does not contain token {}, skipping", pool.address, token);
            return Ok(None);
        };

        if pool.reserve_reference <= self.config.minimum_liquidity_threshold {
            debug!(
                "Pair {} below liquidity threshold ({} <= {})",
                pool.address, pool.reserve_reference, self.config.minimum_liquidity_threshold
            );
            return Ok(None);
        }

        // The other side bridges to the reference currency
        let bridge_side = side.other();
        let bridge_address = pool.token(bridge_side);
        let Some(bridge) = self.store.load_token(bridge_address)? else {
            warn!(
                "Bridge token {} of pair {} not found in store, skipping",
                bridge_address, pool.address
            );
            return Ok(None);
        };

        Ok(Some(pool.price(bridge_side) * &bridge.derived_reference_price))
    }
}
