//! # availability-engine
//!
//! Reports which courts, coaches and equipment are free in a requested time
//! window.
//!
//! Courts and coaches are unit resources: any booking overlapping the window
//! makes them unavailable. Equipment is a quantity resource: overlapping
//! bookings reduce the number of units left, never below zero. Overlap is
//! half-open, so a booking that merely touches the window does not count.
//!
//! ## Modules
//!
//! - [`window`]: Request window validation and instant parsing
//! - [`overlap`]: The half-open blocking predicate
//! - [`capacity`]: Remaining equipment units
//! - [`store`]: Read-only query capability consumed by the engine
//! - [`memory`]: In-memory catalog implementing the store
//! - [`engine`]: Concurrent three-category lookup and report shaping
//! - [`resource`]: Typed resource and booking records
//! - [`error`]: Error types

pub mod capacity;
pub mod engine;
pub mod error;
pub mod memory;
pub mod overlap;
pub mod resource;
pub mod store;
pub mod window;

pub use capacity::{available_quantity, EquipmentAvailability};
pub use engine::{AvailabilityEngine, AvailabilityReport};
pub use error::{AvailabilityError, StoreError};
pub use memory::{Catalog, InMemoryStore};
pub use overlap::{intervals_overlap, is_blocking};
pub use store::AvailabilityStore;
pub use window::TimeWindow;
