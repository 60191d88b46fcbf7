pub mod ids;
pub mod tier;

pub use ids::PassengerNumber;
pub use tier::PassengerTier;
