//! Soil-Moisture Calibration
//!
//! ## Overview
//!
//! The soil probe reports two raw 12-bit ADC codes, one per sensing element
//! (capacitive and resistive). Neither element is linear in volumetric water
//! content, so raw codes are mapped through a fixed piecewise-linear curve
//! whose anchors came from bucket calibration. Most of the useful dynamic
//! range sits between raw 1500 and 3000; below 1000 the elements bottom out
//! and above 3000 they saturate.
//!
//! The authoritative curve:
//!
//! ```text
//! raw <= 1000          -> 20
//! 1000 < raw <= 1500   -> linear 20..40
//! 1500 < raw <= 2500   -> linear 40..80
//! 2500 < raw <  3000   -> linear 80..90
//! raw >= 3000          -> 100
//! ```
//!
//! An earlier calibration pass had the top segment ending at 100; the curve
//! above (80 at 2500, 90 at 3000, saturation clamp at 100) is the one the
//! deployed probes were re-anchored to and is pinned by tests.
//!
//! ## Two-Channel Blend
//!
//! The reported resistive percentage is a blend favoring the capacitive
//! element (70/30), which drifts less with soil salinity. When only one
//! channel is present its mapped value is used as-is.
//!
//! ## Open-Circuit Detection
//!
//! A floating ADC input reads near full scale. Both channels above 4000 at
//! once means the probe is unplugged, not that the soil is wet; the result
//! is absent on both channels, never 100 and never 0.

use crate::constants::soil::{
    SOIL_ADC_FULL_SCALE, SOIL_OPEN_CIRCUIT_RAW,
    SOIL_CURVE_DRY_RAW, SOIL_CURVE_DRY_PCT,
    SOIL_CURVE_LOW_RAW, SOIL_CURVE_LOW_PCT,
    SOIL_CURVE_MID_RAW, SOIL_CURVE_MID_PCT,
    SOIL_CURVE_HIGH_RAW, SOIL_CURVE_HIGH_PCT,
    SOIL_CURVE_SATURATED_PCT,
    SOIL_BLEND_CAPACITIVE_WEIGHT, SOIL_BLEND_RESISTIVE_WEIGHT,
};

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Calibrated soil percentages, one decimal place, absent when untrustworthy
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibratedSoil {
    /// Capacitive-element moisture percent in [0, 100]
    pub capacitive_percent: Option<f32>,
    /// Blended moisture percent in [0, 100] (70% capacitive, 30% resistive)
    pub resistive_percent: Option<f32>,
}

/// Map one raw ADC code through the calibration curve
///
/// Clamps the code to the 12-bit range first, then applies the
/// piecewise-linear curve. Monotonic non-decreasing over the whole domain.
pub fn map_raw_to_percent(raw: u16) -> f32 {
    let r = f32::from(raw.min(SOIL_ADC_FULL_SCALE));

    if r <= f32::from(SOIL_CURVE_DRY_RAW) {
        return SOIL_CURVE_DRY_PCT;
    }
    if r >= f32::from(SOIL_CURVE_HIGH_RAW) {
        return SOIL_CURVE_SATURATED_PCT;
    }
    if r >= f32::from(SOIL_CURVE_MID_RAW) {
        let span = f32::from(SOIL_CURVE_HIGH_RAW - SOIL_CURVE_MID_RAW);
        return SOIL_CURVE_MID_PCT
            + (r - f32::from(SOIL_CURVE_MID_RAW)) / span * (SOIL_CURVE_HIGH_PCT - SOIL_CURVE_MID_PCT);
    }
    if r > f32::from(SOIL_CURVE_LOW_RAW) {
        let span = f32::from(SOIL_CURVE_MID_RAW - SOIL_CURVE_LOW_RAW);
        return SOIL_CURVE_LOW_PCT
            + (r - f32::from(SOIL_CURVE_LOW_RAW)) / span * (SOIL_CURVE_MID_PCT - SOIL_CURVE_LOW_PCT);
    }

    let span = f32::from(SOIL_CURVE_LOW_RAW - SOIL_CURVE_DRY_RAW);
    SOIL_CURVE_DRY_PCT
        + (r - f32::from(SOIL_CURVE_DRY_RAW)) / span * (SOIL_CURVE_LOW_PCT - SOIL_CURVE_DRY_PCT)
}

/// Round a percentage to one decimal place
pub(crate) fn round_to_decimal(value: f32) -> f32 {
    libm::roundf(value * 10.0) / 10.0
}

/// Calibrate a pair of raw soil codes into display percentages
///
/// Pure function of its two inputs. Each present channel is mapped through
/// the curve independently; the resistive output is the 70/30 blend when
/// both channels exist. Both channels above the open-circuit threshold mean
/// a disconnected probe and yield an absent result on both sides.
pub fn calibrate_soil(capacitive_raw: Option<u16>, resistive_raw: Option<u16>) -> CalibratedSoil {
    if let (Some(cap), Some(res)) = (capacitive_raw, resistive_raw) {
        if cap > SOIL_OPEN_CIRCUIT_RAW && res > SOIL_OPEN_CIRCUIT_RAW {
            log_warn!("soil probe open circuit: capacitive_raw={} resistive_raw={}", cap, res);
            return CalibratedSoil::default();
        }
    }

    let capacitive = capacitive_raw.map(map_raw_to_percent);
    let resistive_mapped = resistive_raw.map(map_raw_to_percent);

    let resistive = match (capacitive, resistive_mapped) {
        (None, None) => None,
        (Some(cap), None) => Some(cap),
        (None, Some(res)) => Some(res),
        (Some(cap), Some(res)) => {
            Some(SOIL_BLEND_CAPACITIVE_WEIGHT * cap + SOIL_BLEND_RESISTIVE_WEIGHT * res)
        }
    };

    CalibratedSoil {
        capacitive_percent: capacitive.map(round_to_decimal),
        resistive_percent: resistive.map(round_to_decimal),
    }
}
