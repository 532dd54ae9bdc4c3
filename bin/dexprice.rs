use std::{fs, sync::Arc};

use anyhow::Context;
use jemallocator::Jemalloc;
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use dexprice::{store::Snapshot, MemoryStore, PairIndex, PriceOracle, Settings};

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .context("Failed to initialize logger")?;

    // Load configuration
    let settings = Settings::new()
        .context("Failed to load config.yaml. Please ensure it exists and is valid")?;

    let config = Arc::new(
        settings
            .pricing
            .build()
            .context("Invalid pricing configuration")?,
    );

    info!(
        "Pricing with {} anchor tokens, liquidity threshold {}",
        config.anchor_set.len(),
        config.minimum_liquidity_threshold
    );

    let raw = fs::read_to_string(&settings.snapshot.path)
        .with_context(|| format!("Failed to read snapshot {}", settings.snapshot.path))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse snapshot {}", settings.snapshot.path))?;

    // Registry is rebuilt from the pools, as replaying their creation events would
    let store = MemoryStore::from_snapshot(snapshot);
    let registry = PairIndex::from_pools(store.pools());

    info!(
        "Loaded snapshot: {} pools, {} pairs registered",
        store.pools().count(),
        registry.len()
    );

    let oracle = PriceOracle::new(config, store, registry);

    let reference_price = oracle.reference_price_usd()?;
    match oracle.stored_reference_price() {
        Ok(stored) if stored != reference_price => {
            warn!("Stored reference price {} differs from computed {}", stored, reference_price);
        },
        Ok(_) => {},
        Err(e) => warn!("{}", e),
    }
    info!("Reference currency price: ${}", reference_price);

    let mut tokens: Vec<_> = oracle.store().tokens().cloned().collect();
    tokens.sort_by(|a, b| a.address.cmp(&b.address));

    for token in tokens {
        let derived = oracle.resolve_reference_price(&token.address)?;
        let usd = &derived * &reference_price;
        info!(
            "{} ({}): {} reference units, ${}",
            token.symbol, token.address, derived, usd
        );
    }

    Ok(())
}
