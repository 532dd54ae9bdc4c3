//! Utility functions for the pricing core.
//!
//! - [`conversion`] - Decimal helpers (zero-safe division, parsing, constants)
//! - [`address`] - Address normalization and comparison

mod address;
mod conversion;

// ============================================
// Common Constants
// ============================================

/// The Ethereum zero address (0x0000000000000000000000000000000000000000)
/// Returned by pair registries when no pair exists for two tokens.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// ============================================
// Re-exports
// ============================================

pub use address::{is_zero_address, normalize_address, same_address};
pub use conversion::{one, parse_decimal, safe_div, two, zero};
