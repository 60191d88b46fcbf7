use crate::activity::Activity;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A destination on an itinerary, grouping the activities offered there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub id: Uuid,
    pub name: String,
    activities: Vec<Activity>,
}

impl Destination {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            activities: Vec::new(),
        }
    }

    /// Add an activity to this destination and return its id.
    ///
    /// The destination back-reference is assigned here, so it can never
    /// disagree with the owner.
    pub fn add_activity(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        unit_cost: f64,
        capacity: usize,
    ) -> Result<Uuid, CatalogError> {
        if !unit_cost.is_finite() || unit_cost < 0.0 {
            return Err(CatalogError::InvalidCost { cost: unit_cost });
        }
        let activity = Activity::new(self.id, name.into(), description.into(), unit_cost, capacity);
        let id = activity.id;
        self.activities.push(activity);
        Ok(id)
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn activity(&self, activity_id: Uuid) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == activity_id)
    }

    pub fn activity_mut(&mut self, activity_id: Uuid) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.id == activity_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("activity cost must be a non-negative number, got {cost}")]
    InvalidCost { cost: f64 },
}
