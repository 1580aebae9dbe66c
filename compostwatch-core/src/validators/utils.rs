//! Shared range-check helpers
//!
//! Pure functions used by every validator. The distinction between the two
//! range checks matters: the humidity-probe datasheet bounds are themselves
//! implausible readings (a probe sitting exactly at its limit is railed),
//! while the precision thermometer's bounds are legitimate measurements.

use crate::errors::{ReadingError, ReadingResult};

/// Check a value lies within `[min, max]` inclusive
pub fn check_range(value: f32, min: f32, max: f32) -> ReadingResult<()> {
    if value < min || value > max {
        Err(ReadingError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Check a value lies strictly within `(min, max)`
pub fn check_range_exclusive(value: f32, min: f32, max: f32) -> ReadingResult<()> {
    if value <= min || value >= max {
        Err(ReadingError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}
