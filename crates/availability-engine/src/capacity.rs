//! Remaining capacity for quantity-based resources.

use serde::{Deserialize, Serialize};

use crate::resource::{Booking, EquipmentWithBookings, ResourceId};

/// Equipment availability as reported to callers. Booking detail is stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentAvailability {
    pub id: ResourceId,
    pub name: String,
    pub total_qty: u32,
    pub available_qty: u32,
}

/// `max(total_qty - Σ quantity, 0)` over the given blocking bookings.
///
/// Oversubscription clamps to zero rather than going negative, and the sum
/// saturates instead of wrapping.
pub fn available_quantity(total_qty: u32, blocking: &[Booking]) -> u32 {
    let booked = blocking
        .iter()
        .fold(0u32, |sum, booking| sum.saturating_add(booking.quantity));
    total_qty.saturating_sub(booked)
}

impl From<EquipmentWithBookings> for EquipmentAvailability {
    fn from(value: EquipmentWithBookings) -> Self {
        let EquipmentWithBookings {
            equipment,
            blocking,
        } = value;
        Self {
            available_qty: available_quantity(equipment.total_qty, &blocking),
            id: equipment.id,
            name: equipment.name,
            total_qty: equipment.total_qty,
        }
    }
}
