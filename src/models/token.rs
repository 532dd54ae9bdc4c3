use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::utils::zero;

/// Token pricing state.
///
/// Primary Key: address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    #[serde(default)]
    pub symbol: String,
    /// Price in reference-currency units. Zero means no price was discoverable.
    #[serde(default)]
    pub derived_reference_price: BigDecimal,
}

impl Token {
    pub fn new(address: &str, symbol: &str) -> Self {
        Self {
            address: address.to_lowercase(),
            symbol: symbol.to_string(),
            derived_reference_price: zero(),
        }
    }

    pub fn with_derived_price(mut self, derived_reference_price: BigDecimal) -> Self {
        self.derived_reference_price = derived_reference_price;
        self
    }
}
