//! Core traits for plausibility checks
//!
//! These traits define the seam between the fusion engine and the per-metric
//! validity rules. Keep them simple - a check is a pure predicate over one
//! value, nothing more.

use crate::errors::{ReadingError, ReadingResult};

/// Plausibility check for a single sensor value
///
/// Implemented by the per-metric validators in [`crate::validators`]. The
/// fusion engine rejects any candidate whose check fails and records the
/// fault as an annotation on the normalized result.
pub trait Plausibility {
    /// Check one reading, returning the fault that disqualifies it (if any)
    fn check(&self, value: f32) -> ReadingResult<()>;

    /// Convenience predicate form of [`check`](Plausibility::check)
    fn is_plausible(&self, value: f32) -> bool {
        self.check(value).is_ok()
    }
}

/// Trait for values that can be sanity-checked before any bounds math
pub trait Validatable {
    /// Check the value is numerically valid (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Reject non-finite values up front so NaN never reaches bounds arithmetic
pub fn require_finite(value: f32) -> ReadingResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(ReadingError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(21.5f32.is_valid());
        assert!(!f32::NAN.is_valid());
        assert!(!f32::INFINITY.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }

    #[test]
    fn finite_gate() {
        assert!(require_finite(0.0).is_ok());
        assert_eq!(require_finite(f32::NAN), Err(ReadingError::NonFinite));
    }
}
