//! Time-Windowed Views over the Historical Log
//!
//! ## Overview
//!
//! The charting layer asks for slices of the append-only log: the last hour,
//! the last day, everything, or one explicit calendar day picked from a
//! calendar widget. Filtering is pure and stable - the output is always a
//! subsequence of the input in original order, and filtering twice with the
//! same window changes nothing.
//!
//! ## One Zone, Pinned
//!
//! Calendar-day boundaries depend on a time zone, and the collector and the
//! browsers viewing the dashboard rarely share one. All day math here uses a
//! single explicitly configured [`DeploymentZone`] (default UTC+05:30, where
//! the rig lives) instead of the execution environment's ambient zone, so
//! "March 15th" means the same 86 400 seconds everywhere.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeSet, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

use crate::{
    constants::time::{DEFAULT_ZONE_OFFSET_SECONDS, SECONDS_PER_DAY, SECONDS_PER_HOUR},
    errors::{ReadingError, ReadingResult},
    reading::HistoricalReading,
};

/// Caller-selected predicate over timestamps
///
/// Chosen per query, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Readings from the last 3 600 seconds
    Hour,
    /// Readings from the last 86 400 seconds
    Day,
    /// The full sequence, unchanged
    All,
    /// One local calendar day, midnight to next midnight, half-open
    CalendarDate(NaiveDate),
}

/// A relative-range selection plus an optional calendar pick
///
/// The dashboard combines a range tab with a calendar widget; when a date is
/// picked it always wins over the tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowQuery {
    /// The relative-range tab currently selected
    pub range: TimeWindow,
    /// An explicit calendar pick, if any
    pub date: Option<NaiveDate>,
}

impl WindowQuery {
    /// Resolve to the effective window: an explicit date beats the range
    pub fn resolve(&self) -> TimeWindow {
        match self.date {
            Some(date) => TimeWindow::CalendarDate(date),
            None => self.range,
        }
    }
}

/// The fixed time zone all calendar-day math runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentZone {
    offset: FixedOffset,
}

impl Default for DeploymentZone {
    fn default() -> Self {
        // UTC if the configured offset is ever out of range
        Self::from_offset_seconds(DEFAULT_ZONE_OFFSET_SECONDS).unwrap_or_else(|_| Self::utc())
    }
}

impl DeploymentZone {
    /// UTC deployment zone
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Build a zone from an east-of-UTC offset in seconds
    ///
    /// Fails for offsets at or beyond ±24 h.
    pub fn from_offset_seconds(seconds: i32) -> ReadingResult<Self> {
        FixedOffset::east_opt(seconds)
            .map(|offset| Self { offset })
            .ok_or(ReadingError::InvalidZoneOffset)
    }

    /// The underlying fixed offset
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Unix bounds of one local calendar day, `[start, end)` half-open
    pub fn day_bounds(&self, date: NaiveDate) -> (i64, i64) {
        let local_midnight = date.and_time(NaiveTime::MIN).and_utc().timestamp();
        let start = local_midnight - i64::from(self.offset.local_minus_utc());
        (start, start + SECONDS_PER_DAY)
    }

    /// Local calendar date of a Unix timestamp
    ///
    /// `None` only for timestamps outside chrono's representable range.
    pub fn local_date(&self, unix_time: i64) -> Option<NaiveDate> {
        DateTime::from_timestamp(unix_time, 0)
            .map(|utc| utc.with_timezone(&self.offset).date_naive())
    }

    /// Canonical per-day instant (local noon) for calendar highlighting
    pub fn local_noon(&self, date: NaiveDate) -> Option<DateTime<FixedOffset>> {
        let (start, _) = self.day_bounds(date);
        DateTime::from_timestamp(start + SECONDS_PER_DAY / 2, 0)
            .map(|utc| utc.with_timezone(&self.offset))
    }
}

/// Select the subsequence of readings falling inside a window
///
/// Never reorders: the output preserves the input's original order, so
/// applying the same window twice is idempotent. Relative windows are
/// measured against the caller-supplied `now_unix`, keeping the function
/// pure.
pub fn select_window<'a>(
    readings: &'a [HistoricalReading],
    window: TimeWindow,
    now_unix: i64,
    zone: &DeploymentZone,
) -> Vec<&'a HistoricalReading> {
    match window {
        TimeWindow::All => readings.iter().collect(),
        TimeWindow::Hour => {
            let threshold = now_unix - SECONDS_PER_HOUR;
            readings.iter().filter(|r| r.unix_time >= threshold).collect()
        }
        TimeWindow::Day => {
            let threshold = now_unix - SECONDS_PER_DAY;
            readings.iter().filter(|r| r.unix_time >= threshold).collect()
        }
        TimeWindow::CalendarDate(date) => {
            let (start, end) = zone.day_bounds(date);
            readings
                .iter()
                .filter(|r| r.unix_time >= start && r.unix_time < end)
                .collect()
        }
    }
}

/// Local calendar dates that have at least one reading
///
/// Readings without a usable timestamp (zero or missing upstream) are
/// excluded; a day appears at most once. Use
/// [`DeploymentZone::local_noon`] to turn each date into the canonical
/// instant the calendar widget highlights.
pub fn days_with_data(
    readings: &[HistoricalReading],
    zone: &DeploymentZone,
) -> BTreeSet<NaiveDate> {
    readings
        .iter()
        .filter(|r| r.has_timestamp())
        .filter_map(|r| zone.local_date(r.unix_time))
        .collect()
}

/// The newest reading of a (time-ordered) sequence, for current-value cards
pub fn latest_reading(readings: &[HistoricalReading]) -> Option<&HistoricalReading> {
    readings.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(unix_time: i64) -> HistoricalReading {
        HistoricalReading { unix_time, ..Default::default() }
    }

    #[test]
    fn all_window_is_identity() {
        let readings = [at(10), at(20), at(30)];
        let zone = DeploymentZone::default();
        let selected = select_window(&readings, TimeWindow::All, 1_000, &zone);
        assert_eq!(selected.len(), 3);
        assert!(selected.iter().zip(readings.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn hour_window_keeps_recent_readings() {
        let now = 1_700_000_000;
        let readings = [at(now - 7_200), at(now - 3_600), at(now - 10), at(now)];
        let zone = DeploymentZone::default();
        let selected = select_window(&readings, TimeWindow::Hour, now, &zone);
        let times: Vec<i64> = selected.iter().map(|r| r.unix_time).collect();
        assert_eq!(times, [now - 3_600, now - 10, now]);
    }

    #[test]
    fn day_window_threshold() {
        let now = 1_700_000_000;
        let readings = [at(now - 86_401), at(now - 86_400), at(now - 1)];
        let zone = DeploymentZone::default();
        let selected = select_window(&readings, TimeWindow::Day, now, &zone);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn calendar_day_is_half_open_in_the_deployment_zone() {
        let zone = DeploymentZone::default(); // +05:30
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let (start, end) = zone.day_bounds(date);

        // 2024-03-15T00:00:00+05:30 = 2024-03-14T18:30:00Z
        assert_eq!(start, 1_710_441_000);
        assert_eq!(end - start, SECONDS_PER_DAY);

        let readings = [at(start - 1), at(start), at(end - 1), at(end)];
        let selected = select_window(&readings, TimeWindow::CalendarDate(date), end, &zone);
        let times: Vec<i64> = selected.iter().map(|r| r.unix_time).collect();
        // 23:59:59 local included, next midnight excluded
        assert_eq!(times, [start, end - 1]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let now = 1_700_000_000;
        let readings: Vec<HistoricalReading> =
            (0..48).map(|i| at(now - i * 3_600)).collect();
        let zone = DeploymentZone::default();

        let once: Vec<HistoricalReading> =
            select_window(&readings, TimeWindow::Day, now, &zone)
                .into_iter()
                .copied()
                .collect();
        let twice = select_window(&once, TimeWindow::Day, now, &zone);
        assert_eq!(once.len(), twice.len());
        assert!(twice.iter().zip(once.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn date_pick_wins_over_range_tab() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let query = WindowQuery { range: TimeWindow::Hour, date: Some(date) };
        assert_eq!(query.resolve(), TimeWindow::CalendarDate(date));

        let query = WindowQuery { range: TimeWindow::Hour, date: None };
        assert_eq!(query.resolve(), TimeWindow::Hour);
    }

    #[test]
    fn days_with_data_excludes_zero_timestamps() {
        let zone = DeploymentZone::default();
        let readings = [at(0), at(1_710_480_000), at(1_710_481_000), at(1_710_570_000)];
        let days = days_with_data(&readings, &zone);

        // two readings on the 15th (local), one on the 16th, none from t=0
        assert_eq!(days.len(), 2);
        assert!(days.contains(&NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
        assert!(days.contains(&NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()));
    }

    #[test]
    fn local_noon_lands_inside_the_day() {
        let zone = DeploymentZone::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let noon = zone.local_noon(date).unwrap();
        let (start, end) = zone.day_bounds(date);
        assert!(noon.timestamp() >= start && noon.timestamp() < end);
        assert_eq!(noon.date_naive(), date);
    }

    #[test]
    fn zone_construction_bounds() {
        assert!(DeploymentZone::from_offset_seconds(19_800).is_ok());
        assert_eq!(
            DeploymentZone::from_offset_seconds(90_000),
            Err(ReadingError::InvalidZoneOffset)
        );
    }
}
