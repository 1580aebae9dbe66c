//! Temperature plausibility checks
//!
//! Two validators live here because the rig carries two very different
//! temperature sources:
//!
//! - The combined humidity/temperature probes report air temperature with
//!   *exclusive* bounds: a probe railed exactly at its datasheet limit is a
//!   conversion fault, not a measurement.
//! - The precision thermometers report pile temperature with *inclusive*
//!   bounds; their error codes (+85°C power-on, +127.94°C bus fault) land
//!   above the upper bound and are reported as invalid rather than clamped.

use crate::{
    constants::sensors::{
        AIR_TEMP_MIN_C, AIR_TEMP_MAX_C,
        PRECISION_TEMP_MIN_C, PRECISION_TEMP_MAX_C,
    },
    errors::ReadingResult,
    traits::{require_finite, Plausibility},
};

use super::utils;

/// Air-temperature validator for the humidity/temperature probes
#[derive(Debug, Clone)]
pub struct AirTemperatureValidator {
    /// Minimum plausible temperature in °C (exclusive)
    min_c: f32,
    /// Maximum plausible temperature in °C (exclusive)
    max_c: f32,
}

impl Default for AirTemperatureValidator {
    fn default() -> Self {
        Self {
            min_c: AIR_TEMP_MIN_C,
            max_c: AIR_TEMP_MAX_C,
        }
    }
}

impl AirTemperatureValidator {
    /// Create a validator with custom exclusive bounds
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self { min_c: min, max_c: max }
    }
}

impl Plausibility for AirTemperatureValidator {
    fn check(&self, value: f32) -> ReadingResult<()> {
        require_finite(value)?;
        utils::check_range_exclusive(value, self.min_c, self.max_c)
    }
}

/// Pile-temperature validator for the precision thermometers
#[derive(Debug, Clone)]
pub struct PrecisionTemperatureValidator {
    /// Minimum plausible temperature in °C (inclusive)
    min_c: f32,
    /// Maximum plausible temperature in °C (inclusive)
    max_c: f32,
}

impl Default for PrecisionTemperatureValidator {
    fn default() -> Self {
        Self {
            min_c: PRECISION_TEMP_MIN_C,
            max_c: PRECISION_TEMP_MAX_C,
        }
    }
}

impl PrecisionTemperatureValidator {
    /// Create a validator with custom inclusive bounds
    pub fn new_with_limits(min: f32, max: f32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self { min_c: min, max_c: max }
    }
}

impl Plausibility for PrecisionTemperatureValidator {
    fn check(&self, value: f32) -> ReadingResult<()> {
        require_finite(value)?;
        utils::check_range(value, self.min_c, self.max_c)
    }
}
