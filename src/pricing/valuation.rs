//! Per-event derived figures.
//!
//! These compose the core operations into the values the ingestion pipeline
//! writes back after a swap, a mint/burn, or a reserve sync.

use bigdecimal::BigDecimal;
use log::warn;

use super::PriceOracle;
use crate::{
    error::Result,
    models::{Pool, Token},
    store::{EntityStore, PairRegistry},
    utils::{safe_div, two},
};

/// USD figures for one swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapValuation {
    /// Whitelist-tracked volume in USD
    pub tracked_usd: BigDecimal,
    /// Tracked volume in reference-currency units (0 while the reference price is 0)
    pub tracked_reference: BigDecimal,
    /// Average of both legs at their derived prices, whitelisted or not
    pub untracked_usd: BigDecimal,
}

/// Derived values to write back after a pool's reserves changed.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncRefresh {
    pub reference_price_usd: BigDecimal,
    pub token0_derived: BigDecimal,
    pub token1_derived: BigDecimal,
    pub reserve_reference: BigDecimal,
    pub reserve_usd: BigDecimal,
    pub tracked_reserve_reference: BigDecimal,
}

impl SyncRefresh {
    /// Copy the pool-level figures onto `pool`.
    pub fn apply_to_pool(&self, pool: &mut Pool) {
        pool.reserve_reference = self.reserve_reference.clone();
        pool.reserve_usd = self.reserve_usd.clone();
        pool.tracked_reserve_reference = self.tracked_reserve_reference.clone();
    }
}

/// Sum of both legs in reference-currency units.
fn reference_value(
    amount0: &BigDecimal,
    token0: &Token,
    amount1: &BigDecimal,
    token1: &Token,
) -> BigDecimal {
    amount0 * &token0.derived_reference_price + amount1 * &token1.derived_reference_price
}

impl<S: EntityStore, R: PairRegistry> PriceOracle<S, R> {
    /// Value a swap from its total per-token amounts (in + out).
    pub fn value_swap(
        &self,
        amount0_total: &BigDecimal,
        token0: &Token,
        amount1_total: &BigDecimal,
        token1: &Token,
    ) -> Result<SwapValuation> {
        let price = self.stored_reference_price()?;

        let tracked_usd = self.tracked_volume_usd_with_price(
            amount0_total,
            token0,
            amount1_total,
            token1,
            &price,
        );
        let tracked_reference = safe_div(&tracked_usd, &price);
        let untracked_usd =
            reference_value(amount0_total, token0, amount1_total, token1) / two() * &price;

        Ok(SwapValuation {
            tracked_usd,
            tracked_reference,
            untracked_usd,
        })
    }

    /// USD value of the amounts moved by a mint or burn.
    pub fn value_liquidity_event(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> Result<BigDecimal> {
        let price = self.stored_reference_price()?;
        Ok(reference_value(amount0, token0, amount1, token1) * price)
    }

    /// Recompute everything a reserve sync invalidates.
    ///
    /// `pool` must already be persisted with its new reserves, since the anchor
    /// pools and the token's own pairs are read back from the store. The pool's
    /// liquidity gate still sees its previous `reserve_reference` until the
    /// caller writes this refresh back. Tracked liquidity uses the freshly
    /// computed reference price and derived prices, not the stored ones.
    pub fn refresh_after_sync(&self, pool: &Pool) -> Result<SyncRefresh> {
        let reference_price_usd = self.reference_price_usd()?;
        let token0_derived = self.resolve_reference_price(&pool.token0)?;
        let token1_derived = self.resolve_reference_price(&pool.token1)?;

        let token0 = self.refreshed_token(&pool.token0, &token0_derived)?;
        let token1 = self.refreshed_token(&pool.token1, &token1_derived)?;

        let tracked_usd = self.tracked_liquidity_usd_with_price(
            &pool.reserve0,
            &token0,
            &pool.reserve1,
            &token1,
            &reference_price_usd,
        );
        let tracked_reserve_reference = safe_div(&tracked_usd, &reference_price_usd);

        let reserve_reference = reference_value(&pool.reserve0, &token0, &pool.reserve1, &token1);
        let reserve_usd = &reserve_reference * &reference_price_usd;

        Ok(SyncRefresh {
            reference_price_usd,
            token0_derived,
            token1_derived,
            reserve_reference,
            reserve_usd,
            tracked_reserve_reference,
        })
    }

    fn refreshed_token(&self, address: &str, derived: &BigDecimal) -> Result<Token> {
        let token = match self.store().load_token(address)? {
            Some(token) => token,
            None => {
                warn!("Token {} missing from store, valuing it without metadata", address);
                Token::new(address, "")
            },
        };
        Ok(token.with_derived_price(derived.clone()))
    }
}
