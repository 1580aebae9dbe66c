//! Humidity plausibility check
//!
//! ## Why exactly 100% is invalid
//!
//! The capacitive humidity element pins at full scale once condensation forms
//! on it, and stays there long after the air has dried. In this deployment
//! (a closed compost bin) condensation on the lid probe is routine, so a
//! reading of exactly 100% is overwhelmingly a stuck element rather than
//! saturated air. The engine treats exactly 100 as a fault sentinel: 99.9 is
//! accepted, 100.0 is rejected regardless of what the other probe says.

use crate::{
    constants::sensors::{HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT, HUMIDITY_FAULT_SENTINEL_PCT},
    errors::{ReadingError, ReadingResult},
    traits::{require_finite, Plausibility},
};

use super::utils;

/// Relative-humidity validator for the humidity/temperature probes
#[derive(Debug, Clone)]
pub struct HumidityValidator {
    /// Minimum plausible RH% (inclusive)
    min_pct: f32,
    /// Maximum plausible RH% (inclusive)
    max_pct: f32,
    /// Full-scale value treated as a fault signal
    fault_sentinel_pct: f32,
}

impl Default for HumidityValidator {
    fn default() -> Self {
        Self {
            min_pct: HUMIDITY_MIN_PCT,
            max_pct: HUMIDITY_MAX_PCT,
            fault_sentinel_pct: HUMIDITY_FAULT_SENTINEL_PCT,
        }
    }
}

impl Plausibility for HumidityValidator {
    fn check(&self, value: f32) -> ReadingResult<()> {
        require_finite(value)?;
        utils::check_range(value, self.min_pct, self.max_pct)?;

        if value == self.fault_sentinel_pct {
            return Err(ReadingError::SaturationSentinel { value });
        }

        Ok(())
    }
}
