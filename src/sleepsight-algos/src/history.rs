use chrono::NaiveDate;
use sleepsight_types::SleepRecord;

use crate::{SessionError, SleepSession, helpers::stats::mean};

/// Trailing window length for the rolling average, in observations.
pub const ROLLING_WINDOW: usize = 30;

/// Sessions recorded before this date predate reliable tracking and are
/// dropped from the history.
pub fn date_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid cutoff date")
}

/// The cleaned history: filtered, sorted by date, augmented with a rolling
/// average of total sleep hours. Built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SleepHistory {
    sessions: Vec<SleepSession>,
    rolling_avg: Vec<f64>,
}

impl SleepHistory {
    /// Builds the history from raw export records. Off-wrist windows are
    /// dropped before parsing; a record that fails to parse fails the run.
    pub fn from_records(records: &[SleepRecord]) -> Result<Self, SessionError> {
        let mut sessions = Vec::with_capacity(records.len());
        for record in records {
            if record.sleep_window_confirmation_type.is_off_wrist() {
                continue;
            }
            sessions.push(SleepSession::from_record(record)?);
        }

        Ok(Self::from_sessions(sessions))
    }

    pub fn from_sessions(mut sessions: Vec<SleepSession>) -> Self {
        sessions.retain(|session| session.date >= date_floor());
        sessions.sort_by_key(|session| session.date);
        let rolling_avg = rolling_mean(&sessions);

        Self {
            sessions,
            rolling_avg,
        }
    }

    pub fn sessions(&self) -> &[SleepSession] {
        &self.sessions
    }

    /// One value per session: the mean total sleep over the trailing window
    /// of up to [`ROLLING_WINDOW`] sessions ending at that index.
    pub fn rolling_average(&self) -> &[f64] {
        &self.rolling_avg
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.sessions.first()?.date;
        let last = self.sessions.last()?.date;
        Some((first, last))
    }
}

fn rolling_mean(sessions: &[SleepSession]) -> Vec<f64> {
    let totals: Vec<f64> = sessions
        .iter()
        .map(SleepSession::total_sleep_hours)
        .collect();

    (0..totals.len())
        .map(|i| {
            let from = (i + 1).saturating_sub(ROLLING_WINDOW);
            mean(&totals[from..=i])
        })
        .collect()
}
