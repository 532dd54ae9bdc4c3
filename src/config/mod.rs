//! Pricing configuration.
//!
//! [`Settings`] is the file/environment layer; [`PricingConfig`] is the validated,
//! immutable value handed to the pricing components.

mod settings;

use bigdecimal::BigDecimal;

pub use settings::{
    AnchorPoolSettings, AnchorPoolsSettings, PricingSettings, Settings, SnapshotSettings,
};

use crate::{
    error::{PricingError, Result},
    models::PoolSide,
    utils::{normalize_address, same_address, zero},
};

/// Ordered whitelist of anchor tokens.
///
/// Used both as the price-discovery search order and as the "trackable" marker
/// for volume and liquidity. Iteration order is the configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorSet {
    tokens: Vec<String>,
}

impl AnchorSet {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        if tokens.is_empty() {
            return Err(PricingError::InvalidConfig(
                "anchor whitelist must not be empty".to_string(),
            ));
        }

        let tokens = tokens
            .iter()
            .map(|t| normalize_address(t.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tokens })
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| same_address(t, token))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A designated reference-currency/stablecoin pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorPool {
    pub address: String,
    pub stable_side: PoolSide,
}

impl AnchorPool {
    pub fn new(address: &str, stable_side: PoolSide) -> Result<Self> {
        Ok(Self {
            address: normalize_address(address)?,
            stable_side,
        })
    }

    /// Side holding the reference currency.
    pub fn reference_side(&self) -> PoolSide {
        self.stable_side.other()
    }
}

/// The three designated anchor pools in fallback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorPools {
    pub primary: AnchorPool,
    pub secondary: AnchorPool,
    pub tertiary: AnchorPool,
}

/// Validated pricing configuration for one deployment.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub wrapped_reference_token: String,
    pub anchor_set: AnchorSet,
    pub anchor_pools: AnchorPools,
    pub minimum_liquidity_threshold: BigDecimal,
}

impl PricingConfig {
    pub fn new(
        wrapped_reference_token: &str,
        anchor_set: AnchorSet,
        anchor_pools: AnchorPools,
        minimum_liquidity_threshold: BigDecimal,
    ) -> Result<Self> {
        if minimum_liquidity_threshold < zero() {
            return Err(PricingError::InvalidConfig(format!(
                "minimum liquidity threshold must be non-negative, got {}",
                minimum_liquidity_threshold
            )));
        }

        Ok(Self {
            wrapped_reference_token: normalize_address(wrapped_reference_token)?,
            anchor_set,
            anchor_pools,
            minimum_liquidity_threshold,
        })
    }

    pub fn is_reference_token(&self, token: &str) -> bool {
        same_address(&self.wrapped_reference_token, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_set_preserves_order() {
        let set = AnchorSet::new(&[
            "0x0000000000000000000000000000000000000003",
            "0x0000000000000000000000000000000000000001",
            "0x0000000000000000000000000000000000000002",
        ])
        .unwrap();

        let order: Vec<&str> = set.iter().collect();
        assert_eq!(
            order,
            vec![
                "0x0000000000000000000000000000000000000003",
                "0x0000000000000000000000000000000000000001",
                "0x0000000000000000000000000000000000000002",
            ]
        );
    }

    #[test]
    fn test_anchor_set_membership_ignores_case() {
        let set = AnchorSet::new(&["0xE9e7CEA3DedcA5984780Bafc599bD69ADd087D56"]).unwrap();
        assert!(set.contains("0xe9e7cea3dedca5984780bafc599bd69add087d56"));
        assert!(!set.contains("0x55d398326f99059ff775485246999027b3197955"));
    }

    #[test]
    fn test_anchor_set_rejects_empty() {
        let empty: [&str; 0] = [];
        assert!(AnchorSet::new(&empty).is_err());
    }

    #[test]
    fn test_anchor_pool_reference_side() {
        let address = "0x20bcc3b8a0091ddac2d0bc30f68e6cbb97de59cd";
        let pool = AnchorPool::new(address, PoolSide::Token0).unwrap();
        assert_eq!(pool.reference_side(), PoolSide::Token1);
    }
}
