use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use plotters::style::RGBColor;
use sleepsight_algos::SleepHistory;

mod architecture;
mod correlation;
mod duration;
mod seasonal;
mod weekday;

pub use architecture::render_architecture;
pub use correlation::render_correlation;
pub use duration::render_duration;
pub use seasonal::render_seasonal;
pub use weekday::render_weekday;

pub const DURATION_FILE: &str = "sleep_duration_timeseries.png";
pub const ARCHITECTURE_FILE: &str = "sleep_architecture.png";
pub const WEEKDAY_FILE: &str = "day_of_week_patterns.png";
pub const SEASONAL_FILE: &str = "seasonal_patterns.png";
pub const CORRELATION_FILE: &str = "correlation_heatmap.png";

pub(crate) const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
pub(crate) const DARK_BLUE: RGBColor = RGBColor(0, 0, 139);
pub(crate) const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub(crate) const TEAL: RGBColor = RGBColor(0, 128, 128);
pub(crate) const DEEP_COLOR: RGBColor = RGBColor(0x4c, 0x72, 0xb0);
pub(crate) const LIGHT_COLOR: RGBColor = RGBColor(0x55, 0xa8, 0x68);
pub(crate) const AWAKE_COLOR: RGBColor = RGBColor(0xc4, 0x4e, 0x52);

/// Renders all five charts into `out_dir`, creating it if needed, and
/// returns the written paths in render order.
pub fn render_all(history: &SleepHistory, out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    anyhow::ensure!(!history.is_empty(), "no sleep sessions to chart");
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output dir {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(5);

    info!("1/5 Rendering sleep duration time series");
    let path = out_dir.join(DURATION_FILE);
    render_duration(history, &path)?;
    written.push(path);

    info!("2/5 Rendering sleep architecture breakdown");
    let path = out_dir.join(ARCHITECTURE_FILE);
    render_architecture(history, &path)?;
    written.push(path);

    info!("3/5 Rendering day of week patterns");
    let path = out_dir.join(WEEKDAY_FILE);
    render_weekday(history, &path)?;
    written.push(path);

    info!("4/5 Rendering seasonal patterns");
    let path = out_dir.join(SEASONAL_FILE);
    render_seasonal(history, &path)?;
    written.push(path);

    info!("5/5 Rendering correlation heatmap");
    let path = out_dir.join(CORRELATION_FILE);
    render_correlation(history, &path)?;
    written.push(path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sleepsight_algos::{SleepHistory, SleepSession};

    use super::*;

    fn session(day: u32, deep: f64, light: f64, awake: f64) -> SleepSession {
        let date = NaiveDate::from_ymd_opt(2021, 3, day).expect("valid date");
        let start = date
            .pred_opt()
            .expect("valid date")
            .and_hms_opt(22, 30, 0)
            .expect("valid time");
        let end = date.and_hms_opt(7, 0, 0).expect("valid time");

        SleepSession {
            date,
            start,
            end,
            deep_hours: deep,
            light_hours: light,
            awake_hours: awake,
        }
    }

    #[test]
    fn renders_all_five_charts() {
        // ten nights spanning two weeks
        let sessions: Vec<_> = [1, 2, 3, 5, 6, 8, 9, 11, 12, 14]
            .into_iter()
            .map(|d| session(d, 1.5, 5.0 + (d % 3) as f64 * 0.25, 0.5))
            .collect();
        let history = SleepHistory::from_sessions(sessions);
        let dir = tempfile::tempdir().unwrap();

        let written = render_all(&history, dir.path()).unwrap();

        assert_eq!(written.len(), 5);
        for name in [
            DURATION_FILE,
            ARCHITECTURE_FILE,
            WEEKDAY_FILE,
            SEASONAL_FILE,
            CORRELATION_FILE,
        ] {
            assert!(dir.path().join(name).is_file(), "missing {name}");
        }
    }

    #[test]
    fn refuses_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        assert!(render_all(&SleepHistory::default(), dir.path()).is_err());
    }
}
