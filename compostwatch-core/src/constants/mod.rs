//! Constants for Compostwatch Core
//!
//! Centralized, documented numeric values used throughout the engine. All
//! plausibility bounds, calibration anchors, and time-window lengths live
//! here with their source and rationale.
//!
//! ## Organization
//!
//! - **Sensors**: plausibility bounds and fault sentinels per sensor family
//! - **Soil**: ADC range, calibration curve anchors, blend weights
//! - **Time**: window lengths and the deployment zone offset
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document the source (datasheet, field
//!    calibration, deployment config)
//! 3. Use descriptive names that include units

/// Plausibility bounds and fault sentinels per sensor family.
pub mod sensors;

/// Soil-moisture ADC range, calibration curve anchors, and blend weights.
pub mod soil;

/// Time-window lengths and the deployment zone offset.
pub mod time;

// Re-export commonly used constants for convenience
pub use sensors::{
    AIR_TEMP_MIN_C, AIR_TEMP_MAX_C,
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT, HUMIDITY_FAULT_SENTINEL_PCT,
    PRECISION_TEMP_MIN_C, PRECISION_TEMP_MAX_C,
};

pub use soil::{
    SOIL_ADC_FULL_SCALE, SOIL_OPEN_CIRCUIT_RAW,
    SOIL_BLEND_CAPACITIVE_WEIGHT, SOIL_BLEND_RESISTIVE_WEIGHT,
    SOIL_SATURATION_SENTINEL_PCT,
};

pub use time::{
    SECONDS_PER_HOUR, SECONDS_PER_DAY, DEFAULT_ZONE_OFFSET_SECONDS,
};
