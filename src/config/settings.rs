use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::{AnchorPool, AnchorPools, AnchorSet, PricingConfig};
use crate::{error::Result, models::PoolSide, utils::parse_decimal};

/// One designated reference-currency/stablecoin pool.
#[derive(Debug, Deserialize, Clone)]
pub struct AnchorPoolSettings {
    pub address: String,
    /// Which side of the pool holds the stablecoin.
    pub stable_side: PoolSide,
}

/// The three designated anchor pools, in fallback order.
///
/// With all three present the price is a reserve-weighted average of all of them.
/// Otherwise `primary` + `secondary` are averaged, then `primary` alone, then
/// `secondary` alone.
#[derive(Debug, Deserialize, Clone)]
pub struct AnchorPoolsSettings {
    pub primary: AnchorPoolSettings,
    pub secondary: AnchorPoolSettings,
    pub tertiary: AnchorPoolSettings,
}

/// Price discovery configuration for one deployment.
#[derive(Debug, Deserialize, Clone)]
pub struct PricingSettings {
    /// Wrapped reference-currency token (e.g. WETH, WBNB, WMATIC)
    pub wrapped_reference_token: String,
    /// Ordered anchor token whitelist. Order decides which pool prices a token.
    pub whitelist: Vec<String>,
    /// Minimum pool size, in reference-currency units, before its price is trusted
    #[serde(default = "default_minimum_liquidity_threshold")]
    pub minimum_liquidity_threshold: String,
    pub anchor_pools: AnchorPoolsSettings,
}

fn default_minimum_liquidity_threshold() -> String {
    "2".to_string()
}

impl PricingSettings {
    /// Validate and normalize into the immutable runtime configuration.
    pub fn build(&self) -> Result<PricingConfig> {
        let anchor_pools = AnchorPools {
            primary: anchor_pool(&self.anchor_pools.primary)?,
            secondary: anchor_pool(&self.anchor_pools.secondary)?,
            tertiary: anchor_pool(&self.anchor_pools.tertiary)?,
        };

        PricingConfig::new(
            &self.wrapped_reference_token,
            AnchorSet::new(&self.whitelist)?,
            anchor_pools,
            parse_decimal(&self.minimum_liquidity_threshold)?,
        )
    }
}

fn anchor_pool(settings: &AnchorPoolSettings) -> Result<AnchorPool> {
    AnchorPool::new(&settings.address, settings.stable_side)
}

/// Snapshot replay configuration for the `dexprice` binary.
#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotSettings {
    #[serde(default = "default_snapshot_path")]
    pub path: String,
}

fn default_snapshot_path() -> String {
    "snapshot.json".to_string()
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        Self {
            path: default_snapshot_path(),
        }
    }
}

/// Root application configuration.
///
/// Loaded from `config.yaml` at startup, with `DEXPRICE__*` environment
/// variables taking precedence (e.g. `DEXPRICE__PRICING__MINIMUM_LIQUIDITY_THRESHOLD`).
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub pricing: PricingSettings,
    #[serde(default)]
    pub snapshot: SnapshotSettings,
}

impl Settings {
    pub fn new() -> std::result::Result<Self, ConfigError> {
        Self::from_file("config")
    }

    pub fn from_file(name: &str) -> std::result::Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(name))
            .add_source(
                Environment::with_prefix("DEXPRICE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("pricing.whitelist"),
            )
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const YAML: &str = r#"
pricing:
  wrapped_reference_token: "0xBB4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"
  whitelist:
    - "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c"
    - "0xe9e7cea3dedca5984780bafc599bd69add087d56"
    - "0x55d398326f99059ff775485246999027b3197955"
  minimum_liquidity_threshold: "2"
  anchor_pools:
    primary:
      address: "0x1b96b92314c44b159149f7e0303511fb2fc4774f"
      stable_side: token1
    secondary:
      address: "0x20bcc3b8a0091ddac2d0bc30f68e6cbb97de59cd"
      stable_side: token0
    tertiary:
      address: "0xf3010261b58b2874639ca2e860e9005e3be5de0b"
      stable_side: token0
"#;

    fn parse(yaml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_settings_build_normalizes_addresses() {
        let settings = parse(YAML);
        let config = settings.pricing.build().unwrap();

        assert_eq!(
            config.wrapped_reference_token,
            "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c"
        );
        assert_eq!(config.anchor_set.len(), 3);
        assert_eq!(config.anchor_pools.primary.stable_side, PoolSide::Token1);
        assert_eq!(config.anchor_pools.secondary.stable_side, PoolSide::Token0);
        assert_eq!(config.minimum_liquidity_threshold, parse_decimal("2").unwrap());
        assert_eq!(settings.snapshot.path, "snapshot.json");
    }

    #[test]
    fn test_settings_reject_bad_whitelist_entry() {
        let yaml = YAML.replace("0x55d398326f99059ff775485246999027b3197955", "0xnothex");
        let settings = parse(&yaml);
        assert!(settings.pricing.build().is_err());
    }

    #[test]
    fn test_settings_default_threshold() {
        let yaml = YAML.replace("  minimum_liquidity_threshold: \"2\"\n", "");
        let settings = parse(&yaml);
        assert_eq!(settings.pricing.minimum_liquidity_threshold, "2");
    }
}
