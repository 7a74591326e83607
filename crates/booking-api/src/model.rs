//! Wire types for the HTTP boundary.

use availability_engine::resource::{Coach, Court};
use availability_engine::{AvailabilityReport, EquipmentAvailability};
use serde::{Deserialize, Serialize};

/// `?startTime=..&endTime=..`. Both kept raw so absence and parse failures are
/// reported by the engine rather than by the extractor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub message: String,
    pub courts: Vec<Court>,
    pub coaches: Vec<Coach>,
    pub equipment: Vec<EquipmentAvailability>,
}

impl From<AvailabilityReport> for AvailabilityResponse {
    fn from(value: AvailabilityReport) -> Self {
        let AvailabilityReport {
            courts,
            coaches,
            equipment,
        } = value;
        Self {
            message: "Available items fetched successfully".to_string(),
            courts,
            coaches,
            equipment,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
