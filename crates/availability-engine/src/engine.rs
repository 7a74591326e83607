//! Availability lookup over all three resource categories.
//!
//! Validates the window, issues the court, coach and equipment queries
//! concurrently, and shapes the combined report. A failure in any one query
//! fails the whole lookup; there is no partial report.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::capacity::EquipmentAvailability;
use crate::error::Result;
use crate::resource::{Coach, Court};
use crate::store::AvailabilityStore;
use crate::window::TimeWindow;

/// What is free in one window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    pub courts: Vec<Court>,
    pub coaches: Vec<Coach>,
    pub equipment: Vec<EquipmentAvailability>,
}

#[derive(Clone)]
pub struct AvailabilityEngine {
    store: Arc<dyn AvailabilityStore>,
}

impl AvailabilityEngine {
    pub fn new(store: Arc<dyn AvailabilityStore>) -> Self {
        Self { store }
    }

    /// Validate raw window parameters, then look up availability.
    ///
    /// # Errors
    /// - `AvailabilityError::MissingParameter` / `InvalidTimeRange` from
    ///   [`TimeWindow::parse`], raised before the store is touched
    /// - `AvailabilityError::StoreUnavailable` if any category query fails
    pub async fn check(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<AvailabilityReport> {
        let window = TimeWindow::parse(start, end)?;
        self.check_window(&window).await
    }

    /// Look up availability for an already validated window.
    ///
    /// # Errors
    /// Returns `AvailabilityError::StoreUnavailable` if any category query fails.
    pub async fn check_window(&self, window: &TimeWindow) -> Result<AvailabilityReport> {
        tracing::debug!(
            start = %window.start().to_rfc3339(),
            end = %window.end().to_rfc3339(),
            minutes = window.duration_minutes(),
            "checking availability"
        );

        let (courts, coaches, equipment) = futures::try_join!(
            self.store.available_courts(window),
            self.store.available_coaches(window),
            self.store.equipment_with_blocking_bookings(window),
        )?;

        let equipment: Vec<EquipmentAvailability> = equipment
            .into_iter()
            .map(EquipmentAvailability::from)
            .collect();

        tracing::debug!(
            courts = courts.len(),
            coaches = coaches.len(),
            equipment = equipment.len(),
            "availability computed"
        );

        Ok(AvailabilityReport {
            courts,
            coaches,
            equipment,
        })
    }
}
