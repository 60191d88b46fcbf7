use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique passenger number, assigned by the caller when the passenger is
/// created. Package and activity rosters store these instead of passenger
/// references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PassengerNumber(pub u32);

impl fmt::Display for PassengerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
