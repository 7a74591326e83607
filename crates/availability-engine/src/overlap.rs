//! The half-open overlap rule that decides whether a booking blocks a window.
//!
//! Two intervals `[a.start, a.end)` and `[b.start, b.end)` are disjoint when
//! `a.end <= b.start || b.end <= a.start`, and overlap otherwise. A booking that
//! ends exactly when the window starts, or starts exactly when it ends, does
//! not block. Every [`AvailabilityStore`](crate::store::AvailabilityStore) must
//! filter with exactly this predicate.

use chrono::{DateTime, Utc};

use crate::resource::Booking;
use crate::window::TimeWindow;

/// Whether `[a_start, a_end)` and `[b_start, b_end)` share any instant.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    !(a_end <= b_start || b_end <= a_start)
}

/// Whether `booking` takes capacity away from `window`.
pub fn is_blocking(booking: &Booking, window: &TimeWindow) -> bool {
    intervals_overlap(
        booking.start_time,
        booking.end_time,
        window.start(),
        window.end(),
    )
}

