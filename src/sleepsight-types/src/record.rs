use serde::{Deserialize, Serialize};

/// One sleep session as it appears in the Garmin `*sleepData.json` exports.
///
/// Timestamps stay as the export's strings here; parsing into typed dates
/// happens when a session is derived from the record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecord {
    pub calendar_date: String,
    #[serde(rename = "sleepStartTimestampGMT")]
    pub sleep_start_timestamp_gmt: String,
    #[serde(rename = "sleepEndTimestampGMT")]
    pub sleep_end_timestamp_gmt: String,
    pub deep_sleep_seconds: i64,
    pub light_sleep_seconds: i64,
    pub awake_sleep_seconds: i64,
    pub sleep_window_confirmation_type: ConfirmationType,
}

/// How the device confirmed the sleep window. Exports from newer firmware
/// may carry values we have never seen; those map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationType {
    EnhancedConfirmedFinal,
    EnhancedConfirmed,
    ManuallyConfirmed,
    Unconfirmed,
    OffWrist,
    #[serde(other)]
    Unknown,
}

impl ConfirmationType {
    pub fn is_off_wrist(self) -> bool {
        matches!(self, ConfirmationType::OffWrist)
    }
}
