//! The read-only query capability the engine consumes.
//!
//! Storage-level filtering belongs to the implementation, but the predicate is
//! fixed: a booking counts against a resource iff
//! [`is_blocking`](crate::overlap::is_blocking) holds for the requested window.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::resource::{Coach, Court, EquipmentWithBookings};
use crate::window::TimeWindow;

#[async_trait]
pub trait AvailabilityStore: Send + Sync {
    /// Active courts with no blocking booking in `window`.
    async fn available_courts(&self, window: &TimeWindow) -> Result<Vec<Court>, StoreError>;

    /// Active coaches with no blocking booking in `window`.
    async fn available_coaches(&self, window: &TimeWindow) -> Result<Vec<Coach>, StoreError>;

    /// Every active equipment item, each carrying only its blocking bookings.
    async fn equipment_with_blocking_bookings(
        &self,
        window: &TimeWindow,
    ) -> Result<Vec<EquipmentWithBookings>, StoreError>;
}
