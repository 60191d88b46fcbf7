use crate::passenger::{Enrollment, PassengerRegistry};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use trailpack_catalog::{Itinerary, PricingPolicy};
use trailpack_shared::{PassengerNumber, PassengerTier};
use uuid::Uuid;

/// A travel package: an itinerary plus the roster of distinct passengers who
/// have enrolled in any of its activities.
///
/// This is the aggregate root; all enrollment rules are enforced in
/// [`TravelPackage::enroll_passenger`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: Uuid,
    pub name: String,
    pub passenger_capacity: usize,
    itinerary: Itinerary,
    enrolled: BTreeSet<PassengerNumber>,
    policy: PricingPolicy,
}

impl TravelPackage {
    pub fn new(name: impl Into<String>, passenger_capacity: usize, itinerary: Itinerary) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            passenger_capacity,
            itinerary,
            enrolled: BTreeSet::new(),
            policy: PricingPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PricingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    /// Distinct passengers enrolled in at least one activity of this package.
    pub fn enrolled(&self) -> &BTreeSet<PassengerNumber> {
        &self.enrolled
    }

    /// Enroll a passenger into an activity at a destination.
    ///
    /// The validation gate runs in full before any mutation, so a rejected
    /// call leaves every record untouched. Checks, in order: the passenger,
    /// destination and activity all resolve; the package roster has room for
    /// one more distinct passenger (checked even when the passenger is
    /// already a member); the activity has positive capacity; the pricing
    /// policy covers the passenger's tier.
    ///
    /// On success the charged price is debited (the balance may go
    /// negative), an [`Enrollment`] is appended to the passenger, and a seat
    /// is requested on the activity roster. A refused seat (roster full or
    /// passenger already seated) does not fail the enrollment; it is only
    /// logged. The returned record is a copy of what was appended.
    pub fn enroll_passenger(
        &mut self,
        registry: &mut PassengerRegistry,
        passenger: PassengerNumber,
        activity: Uuid,
        destination: Uuid,
    ) -> Result<Enrollment, EnrollError> {
        let tier = registry
            .get(passenger)
            .ok_or(EnrollError::UnknownPassenger(passenger))?
            .tier;
        let (unit_cost, activity_capacity, activity_name) = {
            let dest = self
                .itinerary
                .destination(destination)
                .ok_or(EnrollError::UnknownDestination(destination))?;
            let act = dest
                .activity(activity)
                .ok_or(EnrollError::UnknownActivity(activity))?;
            (act.unit_cost, act.capacity, act.name.clone())
        };
        if self.enrolled.len() >= self.passenger_capacity {
            return Err(EnrollError::PackageFull {
                capacity: self.passenger_capacity,
            });
        }
        // Static positivity check only; the fill-level check lives in
        // Activity::add_passenger and is deliberately weaker here.
        if activity_capacity == 0 {
            return Err(EnrollError::ActivityUnbookable {
                activity: activity_name,
            });
        }
        let charged = self
            .policy
            .price(tier, unit_cost)
            .map_err(|_| EnrollError::UnknownTier(tier))?;

        let record = Enrollment {
            activity_id: activity,
            destination_id: destination,
            charged_price: charged,
            tier_at_booking: tier,
            booked_at: Utc::now(),
        };

        let traveler = registry
            .get_mut(passenger)
            .ok_or(EnrollError::UnknownPassenger(passenger))?;
        traveler.balance -= charged;
        traveler.record_enrollment(record.clone());

        let seated = self
            .itinerary
            .activity_mut(destination, activity)
            .map(|a| a.add_passenger(passenger))
            .unwrap_or(false);
        if !seated {
            tracing::warn!(
                "Seat not reserved for passenger {} on activity '{}' (roster full or already seated), enrollment kept",
                passenger,
                activity_name
            );
        }

        self.enrolled.insert(passenger);
        tracing::info!(
            "Passenger {} enrolled in '{}' for {}",
            passenger,
            activity_name,
            charged
        );
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnrollError {
    #[error("passenger {0} is not registered")]
    UnknownPassenger(PassengerNumber),

    #[error("destination {0} is not on this package's itinerary")]
    UnknownDestination(Uuid),

    #[error("activity {0} is not offered at that destination")]
    UnknownActivity(Uuid),

    #[error("package is at passenger capacity ({capacity})")]
    PackageFull { capacity: usize },

    #[error("activity '{activity}' is not open for booking")]
    ActivityUnbookable { activity: String },

    #[error("no pricing rule for tier {0}")]
    UnknownTier(PassengerTier),
}
