//! An [`AvailabilityStore`] backed by an in-memory catalog.
//!
//! The catalog is loaded once (typically from a JSON file at startup) and never
//! mutated afterwards, so concurrent reads need no locking.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::overlap::is_blocking;
use crate::resource::{
    Booking, Coach, Court, Equipment, EquipmentWithBookings, ResourceId, ResourceKind,
};
use crate::store::AvailabilityStore;
use crate::window::TimeWindow;

/// Every resource and booking known to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub courts: Vec<Court>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryStore {
    catalog: Catalog,
}

impl InMemoryStore {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    fn blocking_for<'a>(
        &'a self,
        kind: ResourceKind,
        id: ResourceId,
        window: &'a TimeWindow,
    ) -> impl Iterator<Item = &'a Booking> + 'a {
        self.catalog
            .bookings
            .iter()
            .filter(move |b| b.references(kind, id) && is_blocking(b, window))
    }

    fn is_free(&self, kind: ResourceKind, id: ResourceId, window: &TimeWindow) -> bool {
        self.blocking_for(kind, id, window).next().is_none()
    }
}

#[async_trait]
impl AvailabilityStore for InMemoryStore {
    async fn available_courts(&self, window: &TimeWindow) -> Result<Vec<Court>, StoreError> {
        Ok(self
            .catalog
            .courts
            .iter()
            .filter(|c| c.is_active && self.is_free(ResourceKind::Court, c.id, window))
            .cloned()
            .collect())
    }

    async fn available_coaches(&self, window: &TimeWindow) -> Result<Vec<Coach>, StoreError> {
        Ok(self
            .catalog
            .coaches
            .iter()
            .filter(|c| c.is_active && self.is_free(ResourceKind::Coach, c.id, window))
            .cloned()
            .collect())
    }

    async fn equipment_with_blocking_bookings(
        &self,
        window: &TimeWindow,
    ) -> Result<Vec<EquipmentWithBookings>, StoreError> {
        Ok(self
            .catalog
            .equipment
            .iter()
            .filter(|e| e.is_active)
            .map(|e| EquipmentWithBookings {
                equipment: e.clone(),
                blocking: self
                    .blocking_for(ResourceKind::Equipment, e.id, window)
                    .cloned()
                    .collect(),
            })
            .collect())
    }
}
