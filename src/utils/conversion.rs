//! Decimal helpers.
//!
//! All derived prices are carried as [`BigDecimal`] so that reserve ratios keep
//! their full precision between events.

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use std::str::FromStr;

use crate::error::{PricingError, Result};

static TWO: Lazy<BigDecimal> = Lazy::new(|| BigDecimal::from(2));

pub fn zero() -> BigDecimal {
    BigDecimal::zero()
}

pub fn one() -> BigDecimal {
    BigDecimal::one()
}

pub fn two() -> BigDecimal {
    TWO.clone()
}

/// Divide `numerator` by `denominator`, returning zero when the denominator is zero.
///
/// Reserve-derived ratios are undefined for empty pools; the convention is that
/// such a ratio reads as zero instead of failing the whole computation.
pub fn safe_div(numerator: &BigDecimal, denominator: &BigDecimal) -> BigDecimal {
    if denominator.is_zero() {
        BigDecimal::zero()
    } else {
        numerator / denominator
    }
}

/// Parse a decimal string such as `"2"` or `"0.5"`.
pub fn parse_decimal(value: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(value.trim())
        .map_err(|e| PricingError::InvalidConfig(format!("invalid decimal '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_div_zero_denominator() {
        let n = BigDecimal::from(5);
        assert_eq!(safe_div(&n, &zero()), zero());
    }

    #[test]
    fn test_safe_div_regular() {
        let n = BigDecimal::from(3);
        let d = BigDecimal::from(4);
        assert_eq!(safe_div(&n, &d), BigDecimal::from_str("0.75").unwrap());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(" 2 ").unwrap(), two());
        assert!(parse_decimal("two").is_err());
    }
}
