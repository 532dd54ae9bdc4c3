//! Reference-currency USD price from the designated stablecoin pools.

use bigdecimal::BigDecimal;
use log::debug;

use crate::{
    config::{AnchorPool, AnchorPools},
    error::Result,
    models::Pool,
    store::EntityStore,
    utils::{safe_div, zero},
};

/// A loaded anchor pool reduced to what the weighting needs.
struct AnchorQuote {
    /// Reference-currency reserve, used as the weight
    reserve: BigDecimal,
    /// Stablecoin units per one reference-currency unit
    price: BigDecimal,
}

impl AnchorQuote {
    fn from_pool(anchor: &AnchorPool, pool: &Pool) -> Self {
        Self {
            reserve: pool.reserve(anchor.reference_side()).clone(),
            price: pool.price(anchor.stable_side).clone(),
        }
    }
}

fn load_quote<S: EntityStore>(store: &S, anchor: &AnchorPool) -> Result<Option<AnchorQuote>> {
    Ok(store
        .load_pool(&anchor.address)?
        .map(|pool| AnchorQuote::from_pool(anchor, &pool)))
}

/// Reserve-weighted average of the quotes' prices.
///
/// Divides once by the total reserve so the implied weights sum to exactly 1.
fn weighted_price(quotes: &[&AnchorQuote]) -> BigDecimal {
    let total_liquidity = quotes.iter().fold(zero(), |acc, q| acc + &q.reserve);
    let weighted_sum = quotes.iter().fold(zero(), |acc, q| acc + &q.price * &q.reserve);

    safe_div(&weighted_sum, &total_liquidity)
}

/// Compute the USD price of the reference currency.
///
/// Fallback chain, most precise first:
/// 1. All three anchor pools exist → reserve-weighted average of the three
/// 2. Primary and secondary exist → reserve-weighted average of the two
/// 3. Primary exists → its price
/// 4. Secondary exists → its price
/// 5. Nothing exists yet → 0
///
/// Pools that have not been created on-chain yet are simply absent from the
/// store; that is part of the chain above, not an error.
pub fn reference_price_usd<S: EntityStore>(
    anchors: &AnchorPools,
    store: &S,
) -> Result<BigDecimal> {
    let primary = load_quote(store, &anchors.primary)?;
    let secondary = load_quote(store, &anchors.secondary)?;
    let tertiary = load_quote(store, &anchors.tertiary)?;

    let price = match (&primary, &secondary, &tertiary) {
        (Some(p), Some(s), Some(t)) => weighted_price(&[p, s, t]),
        (Some(p), Some(s), None) => {
            debug!(
                "Tertiary anchor pool {} missing, using two-pool average",
                anchors.tertiary.address
            );
            weighted_price(&[p, s])
        },
        (Some(p), _, _) => {
            debug!("Only primary anchor pool {} usable", anchors.primary.address);
            p.price.clone()
        },
        (None, Some(s), _) => {
            debug!("Only secondary anchor pool {} usable", anchors.secondary.address);
            s.price.clone()
        },
        (None, None, _) => {
            debug!("No anchor pool created yet, reference price is 0");
            zero()
        },
    };

    Ok(price)
}
