//! Sensor normalization & calibration engine for Compostwatch
//!
//! Turns noisy, partially-redundant readings from the bin's physical sensors
//! (dual humidity/temperature probes, dual precision thermometers, a
//! dual-element soil probe, one gas sensor) into single trustworthy
//! per-metric values, plus time-windowed views over the historical log.
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! state, no subscriptions. The realtime source that pushes snapshots and
//! the rendering layer that draws cards and charts live outside this crate.
//!
//! ```
//! use compostwatch_core::{fuse, HumidityValidator, SourceLabel};
//!
//! // Probe 1 is pinned at the 100% fault sentinel; probe 2 wins.
//! let validator = HumidityValidator::default();
//! let fused = fuse(Some(100.0), Some(45.2), &validator);
//!
//! assert_eq!(fused.value, Some(45.2));
//! assert_eq!(fused.source, SourceLabel::Sensor2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod calibration;
pub mod constants;
pub mod errors;
pub mod fusion;
#[cfg(any(feature = "std", feature = "alloc"))]
pub mod history;
pub mod reading;
pub mod traits;
pub mod validators;

// Public API
pub use calibration::{calibrate_soil, map_raw_to_percent, CalibratedSoil};
pub use errors::{ReadingError, ReadingResult};
pub use fusion::{
    fuse, normalize_snapshot,
    NormalizedMetric, NormalizedSnapshot, PrecisionPairPolicy, SourceLabel,
};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use history::{
    days_with_data, latest_reading, select_window,
    DeploymentZone, TimeWindow, WindowQuery,
};
pub use reading::{HistoricalReading, RawSensorSnapshot};
pub use traits::Plausibility;
pub use validators::{
    AirTemperatureValidator, GasValidator, HumidityValidator,
    PrecisionTemperatureValidator,
};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
