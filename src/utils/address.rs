//! Address helpers.
//!
//! Store keys and configured addresses are lowercase `0x`-prefixed hex. The
//! comparisons here stay case-insensitive so checksummed input still matches.

use alloy::primitives::{hex, Address};

use super::ZERO_ADDRESS;
use crate::error::{PricingError, Result};

/// Parse and normalize an address to lowercase hex with a `0x` prefix.
pub fn normalize_address(value: &str) -> Result<String> {
    let address: Address = value
        .trim()
        .parse()
        .map_err(|e| PricingError::InvalidConfig(format!("invalid address '{value}': {e}")))?;

    Ok(format!("0x{}", hex::encode(address.as_slice())))
}

#[inline]
pub fn same_address(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// True when a registry lookup returned the "no pair" sentinel.
#[inline]
pub fn is_zero_address(value: &str) -> bool {
    same_address(value, ZERO_ADDRESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_checksummed_address() {
        let normalized = normalize_address("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").unwrap();
        assert_eq!(normalized, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(normalize_address("0x1234").is_err());
        assert!(normalize_address("not an address").is_err());
    }

    #[test]
    fn test_zero_address_sentinel() {
        assert!(is_zero_address(ZERO_ADDRESS));
        assert!(!is_zero_address("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48"));
    }
}
