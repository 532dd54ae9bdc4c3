use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Key of the singleton bundle record.
pub const BUNDLE_ID: &str = "1";

/// Global reference-currency price (singleton, key [`BUNDLE_ID`]).
///
/// Holds the USD price of the chain's reference currency as last aggregated
/// from the designated anchor pools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default = "default_bundle_id")]
    pub id: String,
    #[serde(default)]
    pub reference_price_usd: BigDecimal,
}

fn default_bundle_id() -> String {
    BUNDLE_ID.to_string()
}

impl Bundle {
    pub fn new(reference_price_usd: BigDecimal) -> Self {
        Self {
            id: default_bundle_id(),
            reference_price_usd,
        }
    }
}
