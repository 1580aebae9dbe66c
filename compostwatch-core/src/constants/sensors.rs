//! Sensor Plausibility Bounds and Fault Sentinels
//!
//! Operational limits for the sensors deployed on the monitoring rig. Bounds
//! here are *plausibility* limits - a reading outside them is treated as a
//! sensor fault, never displayed or blended.

// ===== HUMIDITY/TEMPERATURE PROBE (DHT22-class) =====

/// Minimum plausible air temperature (°C), exclusive.
///
/// The probe's datasheet floor. Readings at or below this value indicate a
/// wiring or conversion fault rather than real compost conditions.
///
/// Source: DHT22/AM2302 datasheet (-40..80°C operating range)
pub const AIR_TEMP_MIN_C: f32 = -40.0;

/// Maximum plausible air temperature (°C), exclusive.
///
/// Source: DHT22/AM2302 datasheet
pub const AIR_TEMP_MAX_C: f32 = 80.0;

/// Minimum plausible relative humidity (%), inclusive.
///
/// Source: physics (0% RH = no water vapor)
pub const HUMIDITY_MIN_PCT: f32 = 0.0;

/// Maximum plausible relative humidity (%), inclusive.
///
/// Source: physics (100% RH = saturated)
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

/// Humidity fault sentinel (%).
///
/// These probes pin at exactly 100% when the sensing element saturates after
/// condensation. A reading of exactly 100 is treated as a fault signal, not a
/// real measurement; 99.9 is still accepted.
///
/// Source: field behavior of DHT22 probes inside the bin lid
pub const HUMIDITY_FAULT_SENTINEL_PCT: f32 = 100.0;

// ===== PRECISION THERMOMETER (DS18B20-class) =====

/// Minimum plausible precision-thermometer temperature (°C), inclusive.
///
/// Source: DS18B20 datasheet (-55..125°C; -40 is the field-trusted floor)
pub const PRECISION_TEMP_MIN_C: f32 = -40.0;

/// Maximum plausible precision-thermometer temperature (°C), inclusive.
///
/// The DS18B20 reports +85°C or +127.94°C power-on/error codes on bus
/// faults; anything above this bound is reported as an invalid reading
/// rather than clamped.
///
/// Source: DS18B20 datasheet
pub const PRECISION_TEMP_MAX_C: f32 = 125.0;
