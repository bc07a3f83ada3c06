//! Listing price derivation — bounded randomized platform markup.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Substituted when a seller declares no price for the first product.
/// Substitution happens in the workflow, before the markup is applied —
/// never silently inside the quote itself.
pub const DEFAULT_BASE_PRICE: u32 = 2500;

/// Closed range the markup percentage is drawn from.
pub const MARKUP_RANGE: std::ops::RangeInclusive<u8> = 5..=8;

/// A markup frozen at listing creation and the buyer price derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub markup_percent: u8,
    pub buyer_price: u32,
}

/// Draws one uniform markup per product and freezes it into the quote.
/// An existing product's markup is never recomputed.
pub struct PricingEngine {
    rng: StdRng,
}

impl PricingEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Quote a buyer price for a seller-declared base price.
    ///
    /// `base_price` must be positive. Zero is a caller bug, not an input
    /// error — upstream input constraints already exclude it.
    pub fn quote(&mut self, base_price: u32) -> PriceQuote {
        assert!(base_price > 0, "base price must be positive");
        let markup_percent = self.rng.gen_range(MARKUP_RANGE);
        PriceQuote {
            markup_percent,
            buyer_price: buyer_price(base_price, markup_percent),
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// `base * (1 + markup/100)`, rounded half-up on the rupee.
///
/// The intermediate math is done in u64; a result past `u32::MAX` (bases
/// above roughly 3.9 billion rupees at the markup ceiling) is a contract
/// violation, not a silent truncation.
pub fn buyer_price(base_price: u32, markup_percent: u8) -> u32 {
    let scaled = u64::from(base_price) * (100 + u64::from(markup_percent)) + 50;
    let price = scaled / 100;
    assert!(price <= u64::from(u32::MAX), "buyer price overflows u32");
    price as u32
}
