use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use sleepsight_types::SleepRecord;
use thiserror::Error;

use crate::{Season, helpers::stats::round1};

const SECS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Error)]
#[error("{self:?}")]
pub enum SessionError {
    InvalidDate(String),
    InvalidTimestamp(String),
}

/// A single night, with the export's second counts converted to hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepSession {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub deep_hours: f64,
    pub light_hours: f64,
    pub awake_hours: f64,
}

impl SleepSession {
    pub fn from_record(record: &SleepRecord) -> Result<Self, SessionError> {
        let date = NaiveDate::parse_from_str(&record.calendar_date, "%Y-%m-%d")
            .map_err(|_| SessionError::InvalidDate(record.calendar_date.clone()))?;
        let start = parse_gmt(&record.sleep_start_timestamp_gmt)?;
        let end = parse_gmt(&record.sleep_end_timestamp_gmt)?;

        Ok(Self {
            date,
            start,
            end,
            deep_hours: record.deep_sleep_seconds as f64 / SECS_PER_HOUR,
            light_hours: record.light_sleep_seconds as f64 / SECS_PER_HOUR,
            awake_hours: record.awake_sleep_seconds as f64 / SECS_PER_HOUR,
        })
    }

    /// Deep plus light; awake time in bed never counts as sleep.
    pub fn total_sleep_hours(&self) -> f64 {
        self.deep_hours + self.light_hours
    }

    pub fn time_in_bed_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / SECS_PER_HOUR
    }

    /// Share of time in bed spent asleep, as a percentage rounded to one
    /// decimal. Undefined when the session has no positive bed time.
    pub fn efficiency(&self) -> Option<f64> {
        let in_bed = self.time_in_bed_hours();
        if in_bed <= 0.0 {
            return None;
        }

        Some(round1(self.total_sleep_hours() / in_bed * 100.0))
    }

    /// Share of sleep spent in deep sleep, as a percentage rounded to one
    /// decimal. Undefined for zero-sleep sessions.
    pub fn deep_sleep_pct(&self) -> Option<f64> {
        let total = self.total_sleep_hours();
        if total <= 0.0 {
            return None;
        }

        Some(round1(self.deep_hours / total * 100.0))
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn season(&self) -> Season {
        Season::from_month(self.date.month())
    }
}

fn parse_gmt(value: &str) -> Result<NaiveDateTime, SessionError> {
    const FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%d %H:%M:%S%.f",
    ];

    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    Err(SessionError::InvalidTimestamp(value.to_string()))
}
