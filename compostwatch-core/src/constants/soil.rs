//! Soil-Moisture Calibration Constants
//!
//! The soil probe pairs a capacitive and a resistive element sharing one
//! 12-bit ADC. Raw codes are mapped to percentages through a piecewise-linear
//! curve whose anchors were taken from bucket calibration (oven-dry soil,
//! field capacity, saturation).

/// Full-scale 12-bit ADC code. Raw values are clamped here before mapping.
pub const SOIL_ADC_FULL_SCALE: u16 = 4095;

/// Open-circuit threshold (raw ADC code).
///
/// A floating input reads near the ADC ceiling. Both channels above this
/// value at once means the probe is unplugged or its cable is cut - not that
/// the soil is wet.
pub const SOIL_OPEN_CIRCUIT_RAW: u16 = 4000;

// ===== CALIBRATION CURVE ANCHORS =====
//
// The sensor's useful dynamic range sits between raw 1500 and 3000; the
// curve is flat below 1000 and steps to saturation at 3000.

/// Curve anchor: raw codes at or below this map to [`SOIL_CURVE_DRY_PCT`].
pub const SOIL_CURVE_DRY_RAW: u16 = 1000;
/// Percent reported for bone-dry soil (curve floor).
pub const SOIL_CURVE_DRY_PCT: f32 = 20.0;

/// Curve anchor: end of the dry-transition segment.
pub const SOIL_CURVE_LOW_RAW: u16 = 1500;
/// Percent at the end of the dry-transition segment.
pub const SOIL_CURVE_LOW_PCT: f32 = 40.0;

/// Curve anchor: end of the main working segment.
pub const SOIL_CURVE_MID_RAW: u16 = 2500;
/// Percent at the end of the main working segment.
pub const SOIL_CURVE_MID_PCT: f32 = 80.0;

/// Curve anchor: top of the mapped range before saturation.
pub const SOIL_CURVE_HIGH_RAW: u16 = 3000;
/// Percent at the top of the mapped range (raw 3000 boundary of the
/// 2500..3000 segment; readings at or above 3000 report saturation).
pub const SOIL_CURVE_HIGH_PCT: f32 = 90.0;

/// Percent reported at and above [`SOIL_CURVE_HIGH_RAW`] (saturated soil).
pub const SOIL_CURVE_SATURATED_PCT: f32 = 100.0;

// ===== TWO-CHANNEL BLEND =====

/// Weight of the capacitive channel in the blended resistive output.
///
/// The capacitive element drifts less with soil salinity, so it dominates
/// the blend.
pub const SOIL_BLEND_CAPACITIVE_WEIGHT: f32 = 0.7;

/// Weight of the resistive channel in the blended resistive output.
pub const SOIL_BLEND_RESISTIVE_WEIGHT: f32 = 0.3;

/// Capacitive saturation sentinel (%).
///
/// A calibrated capacitive value of exactly 100 means the element saturated,
/// not that the soil is at 100% moisture; the blended resistive value is
/// surfaced as the fallback in that case.
pub const SOIL_SATURATION_SENTINEL_PCT: f32 = 100.0;
