//! Typed records for bookable resources and their bookings.
//!
//! These mirror what the external store owns. The engine only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ResourceId = i64;

/// The three categories of bookable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Court,
    Coach,
    Equipment,
}

/// A court, bookable as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: ResourceId,
    pub name: String,
    /// Free-form surface/location label, e.g. "indoor" or "clay".
    #[serde(default)]
    pub court_type: String,
    pub is_active: bool,
}

/// A coach, bookable as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub specialty: String,
    pub is_active: bool,
}

/// A pool of interchangeable units (rackets, ball machines...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: ResourceId,
    pub name: String,
    pub total_qty: u32,
    pub is_active: bool,
}

/// An existing reservation against one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub resource_kind: ResourceKind,
    pub resource_id: ResourceId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Units taken. Always 1 for courts and coaches.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Booking {
    pub fn references(&self, kind: ResourceKind, id: ResourceId) -> bool {
        self.resource_kind == kind && self.resource_id == id
    }
}

/// An equipment item together with the bookings that block it in some window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentWithBookings {
    pub equipment: Equipment,
    pub blocking: Vec<Booking>,
}
