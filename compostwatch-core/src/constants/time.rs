//! Time-Window Lengths and Deployment Zone
//!
//! All windows are expressed in whole seconds against Unix timestamps, and
//! all calendar-day math uses one fixed, explicitly configured zone so the
//! server and every client agree on where a day starts.

/// Seconds in one hour (the `Hour` window length).
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Seconds in one day (the `Day` window length and calendar-day span).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Default deployment zone offset from UTC, in seconds.
///
/// The rig is installed in IST (UTC+05:30). Day boundaries computed in the
/// execution environment's ambient zone would drift between the collector
/// and browsers elsewhere, so the offset is pinned here.
pub const DEFAULT_ZONE_OFFSET_SECONDS: i32 = 19_800;
