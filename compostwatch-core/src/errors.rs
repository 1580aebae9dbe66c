//! Fault Taxonomy for Untrustworthy Sensor Readings
//!
//! ## Design Philosophy
//!
//! The core never raises: every operation is total over its declared input
//! domain. A reading that fails a plausibility check is *excluded* from the
//! normalized output, and the reason is carried alongside the absent value as
//! an annotation the rendering layer can surface ("invalid reading", probe
//! status badges, and so on).
//!
//! Faults are kept deliberately small:
//!
//! 1. **Inline Data**: No String, no heap - only f32 payloads and static
//!    context. Faults travel inside [`NormalizedMetric`](crate::fusion::NormalizedMetric)
//!    values and may be copied freely.
//!
//! 2. **Copy Semantics**: Faults implement Copy so a metric can be cloned
//!    without move complications.
//!
//! 3. **Actionable**: Each variant tells the caller *why* a value is absent
//!    without further queries - a disconnected probe and an out-of-range
//!    spike call for very different operator responses.
//!
//! ## Fault Categories
//!
//! ### Physical Violations
//! - `OutOfRange`: reading exceeds plausibility bounds (e.g. 130°C air temp)
//! - `NonFinite`: mathematically invalid (NaN, infinity)
//!
//! ### Sensor-Fault Sentinels
//! - `SaturationSentinel`: the sensor reported its full-scale value, which
//!   for these parts signals a fault, not a measurement (humidity pinned at
//!   100%, capacitive soil calibration pinned at 100%)
//! - `ProbeDisconnected`: both soil channels above the open-circuit threshold
//!
//! ### Configuration Issues
//! - `InvalidZoneOffset`: deployment time zone outside ±24 h

use thiserror_no_std::Error;

/// Result type for the core's few fallible constructors
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Why a sensor reading was excluded from the normalized output
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadingError {
    /// Value outside plausibility bounds
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The actual sensor reading that failed the check
        value: f32,
        /// Minimum plausible value for this metric
        min: f32,
        /// Maximum plausible value for this metric
        max: f32,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a finite number")]
    NonFinite,

    /// Full-scale sentinel reported - sensor fault, not a measurement
    #[error("Sensor reported fault sentinel {value}")]
    SaturationSentinel {
        /// The sentinel value the sensor reported
        value: f32,
    },

    /// Both soil channels read above the open-circuit threshold
    #[error("Soil probe disconnected: both channels at ADC ceiling")]
    ProbeDisconnected,

    /// Deployment zone offset outside the representable range
    #[error("Time zone offset out of range")]
    InvalidZoneOffset,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::NonFinite =>
                defmt::write!(fmt, "Non-finite value"),
            Self::SaturationSentinel { value } =>
                defmt::write!(fmt, "Fault sentinel {}", value),
            Self::ProbeDisconnected =>
                defmt::write!(fmt, "Soil probe disconnected"),
            Self::InvalidZoneOffset =>
                defmt::write!(fmt, "Zone offset out of range"),
        }
    }
}
