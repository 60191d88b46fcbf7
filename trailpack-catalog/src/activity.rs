use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use trailpack_shared::PassengerNumber;
use uuid::Uuid;

/// A bookable activity offered at a destination.
///
/// Activities are constructed through [`crate::Destination::add_activity`],
/// which sets `destination_id`, so the back-reference always matches the
/// owning destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub destination_id: Uuid,
    pub name: String,
    pub description: String,
    pub unit_cost: f64,
    pub capacity: usize,
    enrolled: BTreeSet<PassengerNumber>,
}

impl Activity {
    pub(crate) fn new(
        destination_id: Uuid,
        name: String,
        description: String,
        unit_cost: f64,
        capacity: usize,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            destination_id,
            name,
            description,
            unit_cost,
            capacity,
            enrolled: BTreeSet::new(),
        }
    }

    /// Reserve a seat for the passenger.
    ///
    /// Returns `false` without mutating when the passenger already holds a
    /// seat or every seat is taken. Invariant: `enrolled.len() <= capacity`.
    pub fn add_passenger(&mut self, passenger: PassengerNumber) -> bool {
        if self.enrolled.contains(&passenger) || self.enrolled.len() >= self.capacity {
            return false;
        }
        self.enrolled.insert(passenger)
    }

    pub fn is_enrolled(&self, passenger: PassengerNumber) -> bool {
        self.enrolled.contains(&passenger)
    }

    pub fn enrolled(&self) -> &BTreeSet<PassengerNumber> {
        &self.enrolled
    }

    pub fn seats_remaining(&self) -> usize {
        self.capacity.saturating_sub(self.enrolled.len())
    }
}
