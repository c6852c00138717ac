//! Impression pricing
//!
//! A fixed constant-per-unit schedule: the required payment for a post is the
//! per-impression price times the requested impression count. Pure and
//! deterministic, so callers can re-derive the same quote at any later time.

use admatch_common::{Error, Result};

/// Default price charged per impression, in base payment units
pub const DEFAULT_PRICE_PER_IMPRESSION: u64 = 100;

/// Per-impression price schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSchedule {
    /// Price charged per impression, in base payment units
    pub price_per_impression: u64,
}

impl Default for PriceSchedule {
    fn default() -> Self {
        Self {
            price_per_impression: DEFAULT_PRICE_PER_IMPRESSION,
        }
    }
}

impl PriceSchedule {
    /// Create a schedule with an explicit per-impression price
    pub fn new(price_per_impression: u64) -> Self {
        Self {
            price_per_impression,
        }
    }

    /// Compute the required payment for a requested impression count
    ///
    /// # Returns
    /// * `Ok(price)` - monotonically non-decreasing in the count
    /// * `Err(Error::InvalidQuantity)` - the count is zero or the total
    ///   would not fit a u64
    pub fn quote(&self, impressions: u64) -> Result<u64> {
        if impressions == 0 {
            return Err(Error::InvalidQuantity);
        }
        self.price_per_impression
            .checked_mul(impressions)
            .ok_or(Error::InvalidQuantity)
    }
}
