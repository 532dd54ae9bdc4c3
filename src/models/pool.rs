use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PricingError, Result},
    utils::{safe_div, same_address, zero},
};

/// Side of a two-token pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolSide {
    Token0,
    Token1,
}

impl PoolSide {
    pub fn other(self) -> Self {
        match self {
            PoolSide::Token0 => PoolSide::Token1,
            PoolSide::Token1 => PoolSide::Token0,
        }
    }
}

/// Constant-product pool state as maintained by the ingestion pipeline.
///
/// Primary Key: address
///
/// Price convention (Uniswap V2 subgraph style):
/// - token0_price = token0 per 1 token1 = reserve0 / reserve1
/// - token1_price = token1 per 1 token0 = reserve1 / reserve0
///
/// Both are zero while the divisor reserve is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub address: String,
    pub token0: String,
    pub token1: String,

    #[serde(default)]
    pub reserve0: BigDecimal,
    #[serde(default)]
    pub reserve1: BigDecimal,
    #[serde(default)]
    pub token0_price: BigDecimal,
    #[serde(default)]
    pub token1_price: BigDecimal,

    // Derived valuations (written back after each sync)
    /// Total pool value in reference-currency units.
    #[serde(default)]
    pub reserve_reference: BigDecimal,
    #[serde(default)]
    pub reserve_usd: BigDecimal,
    /// Whitelist-tracked liquidity in reference-currency units.
    #[serde(default)]
    pub tracked_reserve_reference: BigDecimal,
}

impl Pool {
    pub fn new(address: &str, token0: &str, token1: &str) -> Self {
        Self {
            // Always lowercase addresses for consistent comparisons
            address: address.to_lowercase(),
            token0: token0.to_lowercase(),
            token1: token1.to_lowercase(),
            reserve0: zero(),
            reserve1: zero(),
            token0_price: zero(),
            token1_price: zero(),
            reserve_reference: zero(),
            reserve_usd: zero(),
            tracked_reserve_reference: zero(),
        }
    }

    /// Set new reserves (e.g. from a Sync event) and recompute both prices.
    pub fn apply_reserves(&mut self, reserve0: BigDecimal, reserve1: BigDecimal) -> Result<()> {
        if reserve0 < zero() || reserve1 < zero() {
            return Err(PricingError::InvalidReserves {
                pool: self.address.clone(),
            });
        }

        self.token0_price = safe_div(&reserve0, &reserve1);
        self.token1_price = safe_div(&reserve1, &reserve0);
        self.reserve0 = reserve0;
        self.reserve1 = reserve1;
        Ok(())
    }

    /// Which side of this pool holds `token`, if any.
    pub fn side_of(&self, token: &str) -> Option<PoolSide> {
        if same_address(&self.token0, token) {
            Some(PoolSide::Token0)
        } else if same_address(&self.token1, token) {
            Some(PoolSide::Token1)
        } else {
            None
        }
    }

    pub fn token(&self, side: PoolSide) -> &str {
        match side {
            PoolSide::Token0 => &self.token0,
            PoolSide::Token1 => &self.token1,
        }
    }

    pub fn reserve(&self, side: PoolSide) -> &BigDecimal {
        match side {
            PoolSide::Token0 => &self.reserve0,
            PoolSide::Token1 => &self.reserve1,
        }
    }

    /// Units of `side`'s token paid per one unit of the other token.
    pub fn price(&self, side: PoolSide) -> &BigDecimal {
        match side {
            PoolSide::Token0 => &self.token0_price,
            PoolSide::Token1 => &self.token1_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_apply_reserves_reciprocal_prices() {
        let mut pool = Pool::new("0xPOOL", "0xA", "0xB");
        pool.apply_reserves(dec("100"), dec("400")).unwrap();

        assert_eq!(pool.token0_price, dec("0.25"));
        assert_eq!(pool.token1_price, dec("4"));
        assert_eq!(&pool.token0_price * &pool.token1_price, dec("1"));
    }

    #[test]
    fn test_apply_reserves_empty_side_zeroes_prices() {
        let mut pool = Pool::new("0xpool", "0xa", "0xb");
        pool.apply_reserves(dec("0"), dec("50")).unwrap();

        assert_eq!(pool.token0_price, zero());
        assert_eq!(pool.token1_price, zero());
    }

    #[test]
    fn test_apply_reserves_rejects_negative() {
        let mut pool = Pool::new("0xpool", "0xa", "0xb");
        let result = pool.apply_reserves(dec("-1"), dec("50"));

        assert!(matches!(result, Err(PricingError::InvalidReserves { .. })));
        assert_eq!(pool.reserve1, zero());
    }

    #[test]
    fn test_side_of_is_case_insensitive() {
        let pool = Pool::new("0xpool", "0xAbC", "0xdef");
        assert_eq!(pool.side_of("0xabc"), Some(PoolSide::Token0));
        assert_eq!(pool.side_of("0xDEF"), Some(PoolSide::Token1));
        assert_eq!(pool.side_of("0x123"), None);
        assert_eq!(PoolSide::Token0.other(), PoolSide::Token1);
    }
}
