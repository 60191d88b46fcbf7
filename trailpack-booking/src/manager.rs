use crate::package::TravelPackage;
use std::collections::HashMap;
use trailpack_catalog::{Itinerary, PricingPolicy};
use uuid::Uuid;

/// In-memory registry and factory for travel packages.
pub struct PackageManager {
    packages: HashMap<Uuid, TravelPackage>,
}

impl PackageManager {
    pub fn new() -> Self {
        Self {
            packages: HashMap::new(),
        }
    }

    /// Create a package with the default pricing policy and return its id.
    pub fn create_package(
        &mut self,
        name: impl Into<String>,
        passenger_capacity: usize,
        itinerary: Itinerary,
    ) -> Uuid {
        self.insert(TravelPackage::new(name, passenger_capacity, itinerary))
    }

    pub fn create_package_with_policy(
        &mut self,
        name: impl Into<String>,
        passenger_capacity: usize,
        itinerary: Itinerary,
        policy: PricingPolicy,
    ) -> Uuid {
        self.insert(TravelPackage::new(name, passenger_capacity, itinerary).with_policy(policy))
    }

    fn insert(&mut self, package: TravelPackage) -> Uuid {
        let id = package.id;
        self.packages.insert(id, package);
        id
    }

    pub fn get(&self, package_id: &Uuid) -> Option<&TravelPackage> {
        self.packages.get(package_id)
    }

    pub fn get_mut(&mut self, package_id: &Uuid) -> Option<&mut TravelPackage> {
        self.packages.get_mut(package_id)
    }

    pub fn list(&self) -> impl Iterator<Item = &TravelPackage> {
        self.packages.values()
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::new()
    }
}
