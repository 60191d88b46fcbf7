pub mod manager;
pub mod package;
pub mod passenger;
pub mod report;

pub use manager::PackageManager;
pub use package::{EnrollError, TravelPackage};
pub use passenger::{Enrollment, Passenger, PassengerRegistry, RegistryError};
pub use report::{ItinerarySummary, PassengerDetails, PassengerListSummary, ReportError};
