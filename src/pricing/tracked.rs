//! Whitelist-based USD attribution for trades and pool balances.
//!
//! Only legs in anchor tokens are trusted. A leg's USD value is
//! `amount * derived_reference_price * reference_price_usd`.
//!
//! | anchored legs | volume          | liquidity   |
//! |---------------|-----------------|-------------|
//! | both          | (usd0 + usd1)/2 | usd0 + usd1 |
//! | one           | that leg        | that leg *2 |
//! | none          | 0               | 0           |
//!
//! A trade's two legs carry the same value, so volume averages them. A pool's
//! two sides add up, and a single known side stands for half of the pool.

use bigdecimal::BigDecimal;

use crate::{
    config::AnchorSet,
    models::Token,
    utils::{two, zero},
};

/// USD values of the anchored legs of a two-sided amount.
enum AnchoredLegs {
    Both(BigDecimal, BigDecimal),
    One(BigDecimal),
    Neither,
}

/// Tracked USD attribution at a fixed reference price.
pub struct TrackedValuation<'a> {
    anchors: &'a AnchorSet,
    reference_price_usd: &'a BigDecimal,
}

impl<'a> TrackedValuation<'a> {
    pub fn new(anchors: &'a AnchorSet, reference_price_usd: &'a BigDecimal) -> Self {
        Self {
            anchors,
            reference_price_usd,
        }
    }

    fn leg_usd(&self, amount: &BigDecimal, token: &Token) -> BigDecimal {
        amount * &token.derived_reference_price * self.reference_price_usd
    }

    fn anchored_legs(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> AnchoredLegs {
        match (
            self.anchors.contains(&token0.address),
            self.anchors.contains(&token1.address),
        ) {
            (true, true) => {
                AnchoredLegs::Both(self.leg_usd(amount0, token0), self.leg_usd(amount1, token1))
            },
            (true, false) => AnchoredLegs::One(self.leg_usd(amount0, token0)),
            (false, true) => AnchoredLegs::One(self.leg_usd(amount1, token1)),
            (false, false) => AnchoredLegs::Neither,
        }
    }

    /// USD volume of a trade that counts toward tracked statistics.
    pub fn volume_usd(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> BigDecimal {
        match self.anchored_legs(amount0, token0, amount1, token1) {
            AnchoredLegs::Both(usd0, usd1) => (usd0 + usd1) / two(),
            AnchoredLegs::One(usd) => usd,
            AnchoredLegs::Neither => zero(),
        }
    }

    /// USD liquidity of a pool balance that counts toward tracked statistics.
    pub fn liquidity_usd(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
    ) -> BigDecimal {
        match self.anchored_legs(amount0, token0, amount1, token1) {
            AnchoredLegs::Both(usd0, usd1) => usd0 + usd1,
            AnchoredLegs::One(usd) => usd * two(),
            AnchoredLegs::Neither => zero(),
        }
    }
}
