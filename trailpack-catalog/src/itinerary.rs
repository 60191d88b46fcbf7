use crate::activity::Activity;
use crate::destination::Destination;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ordered sequence of destinations. The topology is fixed at
/// construction; only activity rosters mutate afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    destinations: Vec<Destination>,
}

impl Itinerary {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn destination(&self, destination_id: Uuid) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == destination_id)
    }

    /// Look up an activity within a specific destination. Misses when the
    /// destination is not on this itinerary or does not offer the activity.
    pub fn activity(&self, destination_id: Uuid, activity_id: Uuid) -> Option<&Activity> {
        self.destination(destination_id)?.activity(activity_id)
    }

    pub fn activity_mut(&mut self, destination_id: Uuid, activity_id: Uuid) -> Option<&mut Activity> {
        self.destinations
            .iter_mut()
            .find(|d| d.id == destination_id)?
            .activity_mut(activity_id)
    }
}
