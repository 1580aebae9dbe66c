//! Fusion of Redundant Sensor Readings
//!
//! ## Overview
//!
//! Most quantities on the rig are measured twice. This module turns each
//! redundant pair into one trusted per-metric value:
//!
//! ```text
//! Probe 1 ──┐
//!           ├─→ plausibility check ─→ average / fallback ─→ NormalizedMetric
//! Probe 2 ──┘
//! ```
//!
//! The fusion rule is deliberately simple (no state, no filter history):
//!
//! - both candidates plausible → arithmetic mean, labeled `Averaged`
//! - exactly one plausible → that value, labeled `Sensor1`/`Sensor2`
//! - neither → absent, labeled `None`
//!
//! An implausible candidate is *never* used, so primary/secondary precedence
//! only affects labeling, never the value.
//!
//! ## Absence Is Explicit
//!
//! The result is a small tagged type rather than a bare `Option<f32>`: the
//! source label and the fault annotation remove any ambiguity between "no
//! sensor", "sensor said zero", and "sensor said something we rejected".
//! Callers render a placeholder for an absent value; the core never
//! substitutes zero.
//!
//! ## Exceptions to Pairwise Averaging
//!
//! - The precision thermometers are validated and displayed independently in
//!   the baseline design (they sit at different depths in the pile, so their
//!   disagreement is signal, not noise). [`PrecisionPairPolicy`] optionally
//!   resolves them into a single primary→secondary fallback view - never an
//!   average.
//! - Soil moisture goes through the [`calibration`](crate::calibration)
//!   curve instead of a predicate; a calibrated capacitive value of exactly
//!   100 is a saturation sentinel and the blended value is surfaced as the
//!   fallback.
//! - The gas sensor has no redundant partner; it is validated alone.

use crate::{
    calibration::{calibrate_soil, CalibratedSoil},
    constants::soil::SOIL_SATURATION_SENTINEL_PCT,
    errors::ReadingError,
    reading::RawSensorSnapshot,
    traits::Plausibility,
    validators::{
        AirTemperatureValidator, GasValidator, HumidityValidator,
        PrecisionTemperatureValidator,
    },
};

/// Which sensor(s) produced a normalized value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceLabel {
    /// No trustworthy reading
    None,
    /// Primary sensor only
    Sensor1,
    /// Secondary sensor only
    Sensor2,
    /// Arithmetic mean of both sensors
    Averaged,
}

/// One trusted per-metric value, or an explicit absence
///
/// `value: None` signals "no trustworthy reading"; callers must render a
/// placeholder, never zero. `fault` carries the first rejection encountered
/// while fusing - it may be present alongside a value (the *other* candidate
/// was rejected) or alongside an absence (everything was rejected).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedMetric {
    /// The fused value, absent when no candidate survived validation
    pub value: Option<f32>,
    /// Which sensor(s) the value came from
    pub source: SourceLabel,
    /// Why a candidate was rejected, for "invalid reading" annotations
    pub fault: Option<ReadingError>,
}

impl NormalizedMetric {
    /// An absent metric carrying an optional rejection annotation
    pub fn absent(fault: Option<ReadingError>) -> Self {
        Self { value: None, source: SourceLabel::None, fault }
    }

    /// True when a trustworthy value is present
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

/// How to resolve the precision-thermometer pair
///
/// Both variants appear across deployments, so this is a configuration
/// choice rather than a hidden default. Neither variant ever averages the
/// two thermometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecisionPairPolicy {
    /// Validate and expose each thermometer independently (baseline)
    #[default]
    Independent,
    /// Resolve to the primary, falling back to the secondary when the
    /// primary is absent or implausible
    PrimaryFallback,
}

/// Fuse a redundant pair of candidates into one normalized metric
///
/// Pure and total: missing candidates and implausible candidates both
/// contribute nothing to the value, and non-finite inputs never reach the
/// averaging arithmetic.
pub fn fuse<V: Plausibility>(
    primary: Option<f32>,
    secondary: Option<f32>,
    validator: &V,
) -> NormalizedMetric {
    let screen = |candidate: Option<f32>| -> (Option<f32>, Option<ReadingError>) {
        match candidate {
            None => (None, None),
            Some(value) => match validator.check(value) {
                Ok(()) => (Some(value), None),
                Err(fault) => (None, Some(fault)),
            },
        }
    };

    let (primary, primary_fault) = screen(primary);
    let (secondary, secondary_fault) = screen(secondary);
    let fault = primary_fault.or(secondary_fault);

    match (primary, secondary) {
        (Some(a), Some(b)) => NormalizedMetric {
            value: Some((a + b) / 2.0),
            source: SourceLabel::Averaged,
            fault,
        },
        (Some(a), None) => NormalizedMetric {
            value: Some(a),
            source: SourceLabel::Sensor1,
            fault,
        },
        (None, Some(b)) => NormalizedMetric {
            value: Some(b),
            source: SourceLabel::Sensor2,
            fault,
        },
        (None, None) => NormalizedMetric::absent(fault),
    }
}

/// Fused air temperature from the two humidity/temperature probes
pub fn air_temperature(snapshot: &RawSensorSnapshot) -> NormalizedMetric {
    fuse(
        snapshot.humidity_probe_1.map(|p| p.temperature_c),
        snapshot.humidity_probe_2.map(|p| p.temperature_c),
        &AirTemperatureValidator::default(),
    )
}

/// Fused relative humidity from the two humidity/temperature probes
pub fn humidity(snapshot: &RawSensorSnapshot) -> NormalizedMetric {
    fuse(
        snapshot.humidity_probe_1.map(|p| p.humidity_pct),
        snapshot.humidity_probe_2.map(|p| p.humidity_pct),
        &HumidityValidator::default(),
    )
}

fn precision_single(value: Option<f32>, label: SourceLabel) -> NormalizedMetric {
    let validator = PrecisionTemperatureValidator::default();
    match value {
        None => NormalizedMetric::absent(None),
        Some(v) => match validator.check(v) {
            Ok(()) => NormalizedMetric { value: Some(v), source: label, fault: None },
            Err(fault) => NormalizedMetric::absent(Some(fault)),
        },
    }
}

/// First precision thermometer, validated independently
pub fn precision_temperature_1(snapshot: &RawSensorSnapshot) -> NormalizedMetric {
    precision_single(
        snapshot.precision_thermometer_1.map(|t| t.temperature_c),
        SourceLabel::Sensor1,
    )
}

/// Second precision thermometer, validated independently
pub fn precision_temperature_2(snapshot: &RawSensorSnapshot) -> NormalizedMetric {
    precision_single(
        snapshot.precision_thermometer_2.map(|t| t.temperature_c),
        SourceLabel::Sensor2,
    )
}

/// Single precision-temperature view: primary, else secondary, never averaged
pub fn precision_temperature_combined(snapshot: &RawSensorSnapshot) -> NormalizedMetric {
    let primary = precision_temperature_1(snapshot);
    if primary.is_present() {
        return primary;
    }
    let secondary = precision_temperature_2(snapshot);
    NormalizedMetric {
        // the primary's rejection stays visible even when the fallback wins
        fault: primary.fault.or(secondary.fault),
        ..secondary
    }
}

/// Soil moisture as a single display metric
///
/// The calibrated capacitive value is preferred. Exactly 100 from the
/// capacitive channel is a saturation sentinel: the value is withheld and
/// the blended resistive value is surfaced as the fallback, with the fault
/// annotated so the caller can flag the reading.
pub fn soil_moisture(snapshot: &RawSensorSnapshot) -> NormalizedMetric {
    let probe = match snapshot.soil_probe {
        None => return NormalizedMetric::absent(None),
        Some(probe) => probe,
    };

    let soil = calibrate_soil(Some(probe.capacitive_raw), Some(probe.resistive_raw));

    match (soil.capacitive_percent, soil.resistive_percent) {
        (None, None) => NormalizedMetric::absent(Some(ReadingError::ProbeDisconnected)),
        (Some(cap), resistive) if cap == SOIL_SATURATION_SENTINEL_PCT => {
            match resistive {
                Some(res) => NormalizedMetric {
                    value: Some(res),
                    source: SourceLabel::Sensor2,
                    fault: Some(ReadingError::SaturationSentinel { value: cap }),
                },
                None => NormalizedMetric::absent(
                    Some(ReadingError::SaturationSentinel { value: cap }),
                ),
            }
        }
        (Some(cap), _) => NormalizedMetric {
            value: Some(cap),
            source: SourceLabel::Sensor1,
            fault: None,
        },
        (None, Some(res)) => NormalizedMetric {
            value: Some(res),
            source: SourceLabel::Sensor2,
            fault: None,
        },
    }
}

/// Gas concentration from the single vent sensor
pub fn gas_concentration(snapshot: &RawSensorSnapshot) -> NormalizedMetric {
    let validator = GasValidator;
    match snapshot.gas_sensor.map(|g| g.ppm) {
        None => NormalizedMetric::absent(None),
        Some(ppm) => match validator.check(ppm) {
            Ok(()) => NormalizedMetric { value: Some(ppm), source: SourceLabel::Sensor1, fault: None },
            Err(fault) => NormalizedMetric::absent(Some(fault)),
        },
    }
}

/// All per-metric outputs of one fusion pass over a snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedSnapshot {
    /// Fused air temperature (°C)
    pub air_temperature: NormalizedMetric,
    /// Fused relative humidity (%)
    pub humidity: NormalizedMetric,
    /// First precision thermometer (°C); under
    /// [`PrecisionPairPolicy::PrimaryFallback`] this slot carries the
    /// fallback-resolved reading
    pub precision_temperature_1: NormalizedMetric,
    /// Second precision thermometer (°C), always validated independently
    pub precision_temperature_2: NormalizedMetric,
    /// Both calibrated soil channels, for charting
    pub soil: CalibratedSoil,
    /// Soil moisture as a single display metric (%)
    pub soil_moisture: NormalizedMetric,
    /// Gas concentration (ppm)
    pub gas_concentration: NormalizedMetric,
}

/// Run the whole fusion pass over one snapshot
///
/// Pure function of the snapshot and the policy; the external component that
/// owns the current snapshot re-invokes this on every push and republishes
/// the result.
pub fn normalize_snapshot(
    snapshot: &RawSensorSnapshot,
    policy: PrecisionPairPolicy,
) -> NormalizedSnapshot {
    let precision_1 = match policy {
        PrecisionPairPolicy::Independent => precision_temperature_1(snapshot),
        PrecisionPairPolicy::PrimaryFallback => precision_temperature_combined(snapshot),
    };

    let soil = match snapshot.soil_probe {
        Some(probe) => calibrate_soil(Some(probe.capacitive_raw), Some(probe.resistive_raw)),
        None => CalibratedSoil::default(),
    };

    NormalizedSnapshot {
        air_temperature: air_temperature(snapshot),
        humidity: humidity(snapshot),
        precision_temperature_1: precision_1,
        precision_temperature_2: precision_temperature_2(snapshot),
        soil,
        soil_moisture: soil_moisture(snapshot),
        gas_concentration: gas_concentration(snapshot),
    }
}
