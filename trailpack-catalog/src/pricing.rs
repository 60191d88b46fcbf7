use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trailpack_shared::PassengerTier;

/// Tier pricing as a lookup table of discount fractions.
///
/// The charged price is `unit_cost * (1 - fraction)`. Keeping the table as
/// data gives an explicit rejection path for a tier the policy does not
/// cover, e.g. when the table is built from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingPolicy {
    discounts: HashMap<PassengerTier, f64>,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        let mut discounts = HashMap::new();
        discounts.insert(PassengerTier::Standard, 0.0);
        discounts.insert(PassengerTier::Gold, 0.10);
        discounts.insert(PassengerTier::Premium, 1.0);
        Self { discounts }
    }
}

impl PricingPolicy {
    pub fn new(discounts: HashMap<PassengerTier, f64>) -> Result<Self, PricingError> {
        for (tier, fraction) in &discounts {
            if !fraction.is_finite() || !(0.0..=1.0).contains(fraction) {
                return Err(PricingError::InvalidDiscount {
                    tier: *tier,
                    fraction: *fraction,
                });
            }
        }
        Ok(Self { discounts })
    }

    pub fn discount_for(&self, tier: PassengerTier) -> Option<f64> {
        self.discounts.get(&tier).copied()
    }

    /// Price an activity for a tier. Pure and deterministic.
    pub fn price(&self, tier: PassengerTier, unit_cost: f64) -> Result<f64, PricingError> {
        let fraction = self
            .discount_for(tier)
            .ok_or(PricingError::UnknownTier(tier))?;
        Ok(unit_cost * (1.0 - fraction))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("no pricing rule for tier {0}")]
    UnknownTier(PassengerTier),

    #[error("discount fraction for tier {tier} must be within [0, 1], got {fraction}")]
    InvalidDiscount { tier: PassengerTier, fraction: f64 },
}
