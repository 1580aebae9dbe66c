//! Per-Metric Plausibility Validators
//!
//! ## Overview
//!
//! Each tracked metric has its own validator implementing the
//! [`Plausibility`](crate::traits::Plausibility) trait. Validators are pure
//! predicates over one value; they carry no history and no state beyond their
//! bounds, so checking is referentially transparent and safe to run from any
//! thread.
//!
//! ## The Rules
//!
//! | Metric                 | Valid iff                                        |
//! |------------------------|--------------------------------------------------|
//! | Air temperature        | finite, strictly inside (−40, 80) °C             |
//! | Humidity               | finite, in [0, 100] %, and **not exactly 100**   |
//! | Precision temperature  | finite, in [−40, 125] °C inclusive               |
//! | Gas concentration      | finite (spikes are legitimate)                   |
//!
//! Soil moisture is not predicate-validated here; it goes through the
//! [`calibration`](crate::calibration) curve, which owns the open-circuit and
//! saturation-sentinel rules.
//!
//! ## Customization
//!
//! Bounds default to the deployed sensors' datasheets but can be overridden
//! for other hardware:
//!
//! ```rust
//! use compostwatch_core::validators::AirTemperatureValidator;
//!
//! // Industrial probe with a wider range
//! let validator = AirTemperatureValidator::new_with_limits(-60.0, 150.0);
//! ```

mod temperature;
mod humidity;
mod gas;
mod utils;

pub use temperature::{AirTemperatureValidator, PrecisionTemperatureValidator};
pub use humidity::HumidityValidator;
pub use gas::GasValidator;
pub use utils::{check_range, check_range_exclusive};
