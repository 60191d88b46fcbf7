use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use trailpack_shared::{PassengerNumber, PassengerTier};
use uuid::Uuid;

/// Immutable snapshot of one completed activity booking.
///
/// `charged_price` is the amount actually debited for the passenger's tier,
/// not the activity's list price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub activity_id: Uuid,
    pub destination_id: Uuid,
    pub charged_price: f64,
    pub tier_at_booking: PassengerTier,
    pub booked_at: DateTime<Utc>,
}

/// A traveler. Balance is a signed amount and may go negative; there is no
/// overdraft guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub number: PassengerNumber,
    pub tier: PassengerTier,
    pub balance: f64,
    enrollments: Vec<Enrollment>,
}

impl Passenger {
    pub fn new(
        name: impl Into<String>,
        number: PassengerNumber,
        tier: PassengerTier,
        balance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            number,
            tier,
            balance,
            enrollments: Vec::new(),
        }
    }

    /// Append-only booking history, in enrollment order.
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub(crate) fn record_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }
}

/// Arena of passenger records keyed by passenger number. Rosters elsewhere
/// hold numbers, never passenger references, so this is the single owner of
/// every passenger's state.
#[derive(Debug, Default)]
pub struct PassengerRegistry {
    passengers: HashMap<PassengerNumber, Passenger>,
}

impl PassengerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, passenger: Passenger) -> Result<PassengerNumber, RegistryError> {
        let number = passenger.number;
        if self.passengers.contains_key(&number) {
            return Err(RegistryError::DuplicateNumber(number));
        }
        self.passengers.insert(number, passenger);
        Ok(number)
    }

    pub fn get(&self, number: PassengerNumber) -> Option<&Passenger> {
        self.passengers.get(&number)
    }

    pub fn get_mut(&mut self, number: PassengerNumber) -> Option<&mut Passenger> {
        self.passengers.get_mut(&number)
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("passenger number {0} is already registered")]
    DuplicateNumber(PassengerNumber),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PassengerRegistry::new();
        registry
            .register(Passenger::new(
                "Rahul",
                PassengerNumber(1),
                PassengerTier::Standard,
                10000.0,
            ))
            .unwrap();

        let rahul = registry.get(PassengerNumber(1)).unwrap();
        assert_eq!(rahul.name, "Rahul");
        assert_eq!(rahul.balance, 10000.0);
        assert!(rahul.enrollments().is_empty());
    }

    #[test]
    fn test_duplicate_number_is_rejected() {
        let mut registry = PassengerRegistry::new();
        registry
            .register(Passenger::new(
                "Rahul",
                PassengerNumber(1),
                PassengerTier::Standard,
                10000.0,
            ))
            .unwrap();

        let err = registry.register(Passenger::new(
            "Radhika",
            PassengerNumber(1),
            PassengerTier::Standard,
            15000.0,
        ));
        assert!(matches!(err, Err(RegistryError::DuplicateNumber(PassengerNumber(1)))));
        // Original record is untouched.
        assert_eq!(registry.get(PassengerNumber(1)).unwrap().name, "Rahul");
        assert_eq!(registry.len(), 1);
    }
}
