pub mod activity;
pub mod destination;
pub mod itinerary;
pub mod pricing;

pub use activity::Activity;
pub use destination::{CatalogError, Destination};
pub use itinerary::Itinerary;
pub use pricing::{PricingError, PricingPolicy};
