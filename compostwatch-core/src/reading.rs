//! Sensor Data Model
//!
//! ## Overview
//!
//! The rig reports one record per physical sensor. Redundant sensors exist
//! for most quantities: two combined humidity/temperature probes at different
//! heights in the bin, two precision thermometers buried in the pile, one
//! soil probe carrying a capacitive and a resistive element, and one gas
//! sensor at the vent.
//!
//! Two shapes flow into the core:
//!
//! - [`RawSensorSnapshot`]: the latest instantaneous reading, pushed by the
//!   realtime source whenever any sensor family updates.
//! - [`HistoricalReading`]: one persisted point of the append-only log - a
//!   Unix timestamp plus the same optional sub-records.
//!
//! ## Absence Is Not Zero
//!
//! Every sub-record is optional. A missing sub-record means "no current
//! reading" and must never be coerced to zero - the whole engine is built
//! around keeping that distinction intact. Within a sub-record the fields are
//! all-or-nothing: the types make a partially populated sub-record
//! unrepresentable.
//!
//! ## Ownership
//!
//! Both shapes are produced externally (the realtime source and the log
//! feed). The core only reads them; it never mutates or reorders a log
//! beyond filtering.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Combined humidity/temperature probe reading (DHT22-class)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HumidityProbe {
    /// Air temperature in °C
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: f32,
}

/// High-precision thermometer reading (DS18B20-class)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecisionThermometer {
    /// Pile temperature in °C
    pub temperature_c: f32,
}

/// Dual-element soil moisture probe, raw 12-bit ADC codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SoilProbe {
    /// Raw code from the capacitive element, nominal 0..4095
    pub capacitive_raw: u16,
    /// Raw code from the resistive element, nominal 0..4095
    pub resistive_raw: u16,
}

/// Gas concentration reading (MQ-135-class)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GasSensor {
    /// Concentration in parts per million
    pub ppm: f32,
}

/// Latest instantaneous reading, one optional sub-record per physical sensor
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct RawSensorSnapshot {
    /// First humidity/temperature probe (lid)
    pub humidity_probe_1: Option<HumidityProbe>,
    /// Second humidity/temperature probe (sidewall)
    pub humidity_probe_2: Option<HumidityProbe>,
    /// First precision thermometer (pile core)
    pub precision_thermometer_1: Option<PrecisionThermometer>,
    /// Second precision thermometer (pile edge)
    pub precision_thermometer_2: Option<PrecisionThermometer>,
    /// Dual-element soil probe
    pub soil_probe: Option<SoilProbe>,
    /// Gas sensor at the vent
    pub gas_sensor: Option<GasSensor>,
}

/// One persisted point of the historical log
///
/// Timestamps in the stored sequence are monotonically non-decreasing; the
/// log source guarantees an integer timestamp is present by the time a
/// reading reaches the core (records keyed by timestamp have it derived from
/// the key upstream).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HistoricalReading {
    /// Unix time in seconds at which the snapshot was recorded
    pub unix_time: i64,
    /// The sensor sub-records captured at that instant
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub sensors: RawSensorSnapshot,
}

impl HistoricalReading {
    /// True when the record carries a usable timestamp
    ///
    /// Zero and negative timestamps come from records whose key-derived time
    /// was missing upstream; they are excluded from calendar-day summaries.
    pub fn has_timestamp(&self) -> bool {
        self.unix_time > 0
    }
}
