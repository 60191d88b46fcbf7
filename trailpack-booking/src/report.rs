//! Read-only projections over a package's state. No report mutates
//! anything; the caller owns formatting and output.

use crate::package::TravelPackage;
use crate::passenger::PassengerRegistry;
use serde::Serialize;
use trailpack_shared::{PassengerNumber, PassengerTier};

#[derive(Debug, Clone, Serialize)]
pub struct ActivitySummary {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub capacity: usize,
    pub seats_remaining: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationSummary {
    pub name: String,
    pub activities: Vec<ActivitySummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItinerarySummary {
    pub package: String,
    pub destinations: Vec<DestinationSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PassengerListEntry {
    pub name: String,
    pub number: PassengerNumber,
}

#[derive(Debug, Clone, Serialize)]
pub struct PassengerListSummary {
    pub package: String,
    pub passenger_capacity: usize,
    pub enrolled_count: usize,
    pub passengers: Vec<PassengerListEntry>,
}

/// One enrollment resolved to human-readable names.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentView {
    pub activity: String,
    pub destination: String,
    pub charged_price: f64,
    pub tier_at_booking: PassengerTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct PassengerDetails {
    pub name: String,
    pub number: PassengerNumber,
    pub tier: PassengerTier,
    pub balance: f64,
    pub enrollments: Vec<EnrollmentView>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("passenger {0} not found in this travel package")]
    PassengerNotFound(PassengerNumber),
}

impl TravelPackage {
    /// Walk the itinerary: destinations in order, each with its activities.
    pub fn itinerary_summary(&self) -> ItinerarySummary {
        let destinations = self
            .itinerary()
            .destinations()
            .iter()
            .map(|dest| DestinationSummary {
                name: dest.name.clone(),
                activities: dest
                    .activities()
                    .iter()
                    .map(|act| ActivitySummary {
                        name: act.name.clone(),
                        description: act.description.clone(),
                        cost: act.unit_cost,
                        capacity: act.capacity,
                        seats_remaining: act.seats_remaining(),
                    })
                    .collect(),
            })
            .collect();
        ItinerarySummary {
            package: self.name.clone(),
            destinations,
        }
    }

    /// Roster listing: capacity, enrolled count, and each passenger's name.
    /// Passengers missing from the registry are listed by number only.
    pub fn passenger_list(&self, registry: &PassengerRegistry) -> PassengerListSummary {
        let passengers = self
            .enrolled()
            .iter()
            .map(|&number| PassengerListEntry {
                name: registry
                    .get(number)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| format!("passenger #{number}")),
                number,
            })
            .collect();
        PassengerListSummary {
            package: self.name.clone(),
            passenger_capacity: self.passenger_capacity,
            enrolled_count: self.enrolled().len(),
            passengers,
        }
    }

    /// Detail view for one enrolled passenger, with the booking history
    /// resolved against this package's itinerary. Enrollments made through
    /// a different package do not resolve here and are omitted.
    pub fn passenger_details(
        &self,
        registry: &PassengerRegistry,
        number: PassengerNumber,
    ) -> Result<PassengerDetails, ReportError> {
        if !self.enrolled().contains(&number) {
            return Err(ReportError::PassengerNotFound(number));
        }
        let passenger = registry
            .get(number)
            .ok_or(ReportError::PassengerNotFound(number))?;

        let enrollments = passenger
            .enrollments()
            .iter()
            .filter_map(|e| {
                let destination = self.itinerary().destination(e.destination_id)?;
                let activity = destination.activity(e.activity_id)?;
                Some(EnrollmentView {
                    activity: activity.name.clone(),
                    destination: destination.name.clone(),
                    charged_price: e.charged_price,
                    tier_at_booking: e.tier_at_booking,
                })
            })
            .collect();

        Ok(PassengerDetails {
            name: passenger.name.clone(),
            number: passenger.number,
            tier: passenger.tier,
            balance: passenger.balance,
            enrollments,
        })
    }
}
