//! End-to-end fusion pass over wire-shaped payloads
//!
//! Decodes snapshots the way the realtime feed delivers them (JSON with
//! whole sub-records missing) and checks the normalized output against the
//! behaviors the dashboard depends on.

use compostwatch_core::{
    normalize_snapshot, HistoricalReading, NormalizedMetric, PrecisionPairPolicy,
    RawSensorSnapshot, ReadingError, SourceLabel,
};

#[test]
fn healthy_snapshot_from_the_wire() {
    let json = r#"{
        "humidity_probe_1": {"temperature_c": 32.4, "humidity_pct": 71.0},
        "humidity_probe_2": {"temperature_c": 31.6, "humidity_pct": 73.0},
        "precision_thermometer_1": {"temperature_c": 61.2},
        "precision_thermometer_2": {"temperature_c": 47.9},
        "soil_probe": {"capacitive_raw": 2250, "resistive_raw": 2100},
        "gas_sensor": {"ppm": 389.4}
    }"#;
    let snapshot: RawSensorSnapshot = serde_json::from_str(json).unwrap();
    let normalized = normalize_snapshot(&snapshot, PrecisionPairPolicy::Independent);

    assert_eq!(normalized.air_temperature.value, Some(32.0));
    assert_eq!(normalized.air_temperature.source, SourceLabel::Averaged);
    assert_eq!(normalized.humidity.value, Some(72.0));
    assert_eq!(normalized.precision_temperature_1.value, Some(61.2));
    assert_eq!(normalized.precision_temperature_2.value, Some(47.9));
    assert_eq!(normalized.gas_concentration.value, Some(389.4));

    // 2250 -> 70.0, 2100 -> 64.0, blend 0.7*70 + 0.3*64 = 68.2
    assert_eq!(normalized.soil.capacitive_percent, Some(70.0));
    assert_eq!(normalized.soil.resistive_percent, Some(68.2));
    assert_eq!(normalized.soil_moisture.value, Some(70.0));
    assert_eq!(normalized.soil_moisture.source, SourceLabel::Sensor1);
}

#[test]
fn empty_payload_normalizes_to_all_absent() {
    let snapshot: RawSensorSnapshot = serde_json::from_str("{}").unwrap();
    let normalized = normalize_snapshot(&snapshot, PrecisionPairPolicy::Independent);

    assert_eq!(normalized.air_temperature, NormalizedMetric::absent(None));
    assert_eq!(normalized.humidity, NormalizedMetric::absent(None));
    assert_eq!(normalized.precision_temperature_1, NormalizedMetric::absent(None));
    assert_eq!(normalized.soil.capacitive_percent, None);
    assert_eq!(normalized.soil_moisture, NormalizedMetric::absent(None));
    assert_eq!(normalized.gas_concentration, NormalizedMetric::absent(None));
}

#[test]
fn absent_is_never_zero() {
    // A payload reporting only gas must not conjure zeros for the rest
    let json = r#"{"gas_sensor": {"ppm": 0.0}}"#;
    let snapshot: RawSensorSnapshot = serde_json::from_str(json).unwrap();
    let normalized = normalize_snapshot(&snapshot, PrecisionPairPolicy::Independent);

    assert_eq!(normalized.gas_concentration.value, Some(0.0)); // a real zero survives
    assert_eq!(normalized.air_temperature.value, None);
    assert_eq!(normalized.humidity.value, None);
}

#[test]
fn saturated_lid_probe_does_not_poison_the_pair() {
    let json = r#"{
        "humidity_probe_1": {"temperature_c": 29.0, "humidity_pct": 100.0},
        "humidity_probe_2": {"temperature_c": 29.4, "humidity_pct": 45.2}
    }"#;
    let snapshot: RawSensorSnapshot = serde_json::from_str(json).unwrap();
    let normalized = normalize_snapshot(&snapshot, PrecisionPairPolicy::Independent);

    // humidity falls back to probe 2; temperature still averages both
    assert_eq!(normalized.humidity.value, Some(45.2));
    assert_eq!(normalized.humidity.source, SourceLabel::Sensor2);
    assert_eq!(
        normalized.humidity.fault,
        Some(ReadingError::SaturationSentinel { value: 100.0 })
    );
    assert_eq!(normalized.air_temperature.value, Some(29.2));
}

#[test]
fn fallback_policy_resolves_precision_pair() {
    let json = r#"{
        "precision_thermometer_1": {"temperature_c": 130.0},
        "precision_thermometer_2": {"temperature_c": 52.5}
    }"#;
    let snapshot: RawSensorSnapshot = serde_json::from_str(json).unwrap();

    let independent = normalize_snapshot(&snapshot, PrecisionPairPolicy::Independent);
    assert_eq!(independent.precision_temperature_1.value, None);
    assert!(independent.precision_temperature_1.fault.is_some());
    assert_eq!(independent.precision_temperature_2.value, Some(52.5));

    let fallback = normalize_snapshot(&snapshot, PrecisionPairPolicy::PrimaryFallback);
    assert_eq!(fallback.precision_temperature_1.value, Some(52.5));
    assert_eq!(fallback.precision_temperature_1.source, SourceLabel::Sensor2);
    // the primary's rejection stays visible
    assert!(fallback.precision_temperature_1.fault.is_some());
}

#[test]
fn historical_reading_round_trips_through_the_log_shape() {
    let json = r#"{
        "unix_time": 1710500000,
        "humidity_probe_1": {"temperature_c": 30.0, "humidity_pct": 65.0},
        "soil_probe": {"capacitive_raw": 4050, "resistive_raw": 4095}
    }"#;
    let reading: HistoricalReading = serde_json::from_str(json).unwrap();
    assert!(reading.has_timestamp());

    let normalized = normalize_snapshot(&reading.sensors, PrecisionPairPolicy::Independent);
    assert_eq!(normalized.humidity.value, Some(65.0));
    assert_eq!(normalized.humidity.source, SourceLabel::Sensor1);
    assert_eq!(
        normalized.soil_moisture.fault,
        Some(ReadingError::ProbeDisconnected)
    );
    assert_eq!(normalized.soil_moisture.value, None);

    let encoded = serde_json::to_string(&reading).unwrap();
    let decoded: HistoricalReading = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, reading);
}
