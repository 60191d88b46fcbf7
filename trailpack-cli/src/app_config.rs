use serde::Deserialize;
use std::collections::HashMap;
use trailpack_catalog::{PricingError, PricingPolicy};
use trailpack_shared::PassengerTier;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub package: PackageConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PackageConfig {
    pub name: String,
    pub passenger_capacity: usize,
}

/// Discount fractions per tier; 0 charges full price, 1 makes it free.
#[derive(Debug, Deserialize, Clone)]
pub struct PricingConfig {
    pub standard_discount: f64,
    pub gold_discount: f64,
    pub premium_discount: f64,
}

impl PricingConfig {
    pub fn to_policy(&self) -> Result<PricingPolicy, PricingError> {
        let mut discounts = HashMap::new();
        discounts.insert(PassengerTier::Standard, self.standard_discount);
        discounts.insert(PassengerTier::Gold, self.gold_discount);
        discounts.insert(PassengerTier::Premium, self.premium_discount);
        PricingPolicy::new(discounts)
    }
}

impl Config {
    /// Layered load: built-in defaults, then an optional `config/trailpack`
    /// file, then `TRAILPACK__`-prefixed environment variables
    /// (e.g. `TRAILPACK__PACKAGE__PASSENGER_CAPACITY=50`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("package.name", "Himalayan Explorers' Club")?
            .set_default("package.passenger_capacity", 100)?
            .set_default("pricing.standard_discount", 0.0)?
            .set_default("pricing.gold_discount", 0.10)?
            .set_default("pricing.premium_discount", 1.0)?
            .add_source(config::File::with_name("config/trailpack").required(false))
            .add_source(config::Environment::with_prefix("TRAILPACK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
