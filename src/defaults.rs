//! Fixed working-day policy for route planning.
//!
//! These are product constants, not per-call configuration: every route is
//! planned against the same 09:00-17:00 day with a 12:00-13:00 lunch break.

/// Working day start (09:00), minutes since midnight.
pub const WORK_START_MINUTES: i32 = 9 * 60;

/// Working day end (17:00), minutes since midnight.
pub const WORK_END_MINUTES: i32 = 17 * 60;

/// Lunch break start (12:00), minutes since midnight.
pub const LUNCH_START_MINUTES: i32 = 12 * 60;

/// Lunch break end (13:00), minutes since midnight.
pub const LUNCH_END_MINUTES: i32 = 13 * 60;

/// Assumed travel pace over great-circle distance, minutes per kilometer.
pub const TRAVEL_MINUTES_PER_KM: i32 = 5;

/// Fixed overhead added to every travel leg (parking, finding the entrance).
pub const TRAVEL_BUFFER_MINUTES: i32 = 5;

/// Visit duration applied when a store does not specify one.
pub const DEFAULT_VISIT_MINUTES: i32 = 30;
