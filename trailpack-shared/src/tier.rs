use serde::{Deserialize, Serialize};
use std::fmt;

/// Passenger tiers. A tier only determines the discount applied at
/// enrollment time; there is no other behavioral difference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerTier {
    Standard,
    Gold,
    Premium,
}

impl fmt::Display for PassengerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PassengerTier::Standard => "STANDARD",
            PassengerTier::Gold => "GOLD",
            PassengerTier::Premium => "PREMIUM",
        };
        write!(f, "{}", s)
    }
}
