use std::fmt::{self, Display};

use chrono::{NaiveDate, Weekday};
use strum::IntoEnumIterator;

use crate::{
    Season, SleepHistory, SleepSession,
    helpers::stats::{mean, pearson, std_dev},
};

pub const WEEKDAY_LABELS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Column-wise means of the sleep stage hours, feeding the pie chart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArchitectureAverages {
    pub deep: f64,
    pub light: f64,
    pub awake: f64,
}

impl ArchitectureAverages {
    pub fn compute(sessions: &[SleepSession]) -> Self {
        let deep: Vec<f64> = sessions.iter().map(|s| s.deep_hours).collect();
        let light: Vec<f64> = sessions.iter().map(|s| s.light_hours).collect();
        let awake: Vec<f64> = sessions.iter().map(|s| s.awake_hours).collect();

        Self {
            deep: mean(&deep),
            light: mean(&light),
            awake: mean(&awake),
        }
    }

    pub fn total(&self) -> f64 {
        self.deep + self.light + self.awake
    }

    pub fn deep_share(&self) -> f64 {
        self.share(self.deep)
    }

    pub fn light_share(&self) -> f64 {
        self.share(self.light)
    }

    pub fn awake_share(&self) -> f64 {
        self.share(self.awake)
    }

    fn share(&self, stage: f64) -> f64 {
        let total = self.total();
        if total <= 0.0 { 0.0 } else { stage / total * 100.0 }
    }
}

/// Mean total sleep per weekday, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeekdayAverages {
    means: [f64; 7],
}

impl WeekdayAverages {
    pub fn compute(sessions: &[SleepSession]) -> Self {
        let mut sums = [0_f64; 7];
        let mut counts = [0_usize; 7];
        for session in sessions {
            let day = session.weekday().num_days_from_monday() as usize;
            sums[day] += session.total_sleep_hours();
            counts[day] += 1;
        }

        let mut means = [0_f64; 7];
        for day in 0..7 {
            if counts[day] > 0 {
                means[day] = sums[day] / counts[day] as f64;
            }
        }

        Self { means }
    }

    pub fn mean_for(&self, day: Weekday) -> f64 {
        self.means[day.num_days_from_monday() as usize]
    }

    pub fn values(&self) -> [f64; 7] {
        self.means
    }

    /// Mean of the seven per-day means, the chart's reference line.
    pub fn overall(&self) -> f64 {
        mean(&self.means)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeasonStat {
    pub mean: f64,
    pub std: f64,
    pub count: usize,
}

/// Mean and sample standard deviation of total sleep per season.
#[derive(Debug, Clone, Default)]
pub struct SeasonalStats {
    stats: [SeasonStat; 4],
}

impl SeasonalStats {
    pub fn compute(sessions: &[SleepSession]) -> Self {
        let mut buckets: [Vec<f64>; 4] = Default::default();
        for session in sessions {
            buckets[session.season() as usize].push(session.total_sleep_hours());
        }

        let mut stats = [SeasonStat::default(); 4];
        for (bucket, stat) in buckets.iter().zip(stats.iter_mut()) {
            *stat = SeasonStat {
                mean: mean(bucket),
                std: std_dev(bucket),
                count: bucket.len(),
            };
        }

        Self { stats }
    }

    pub fn stat_for(&self, season: Season) -> SeasonStat {
        self.stats[season as usize]
    }
}

/// The six metrics the correlation chart compares, in matrix order.
const METRIC_LABELS: [&str; 6] = [
    "Total Sleep",
    "Deep Sleep",
    "Light Sleep",
    "Awake",
    "Efficiency",
    "Deep %",
];

/// Pairwise Pearson correlations over pairwise-complete observations:
/// sessions where either metric is undefined are skipped for that pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    values: [[f64; 6]; 6],
}

impl CorrelationMatrix {
    pub fn compute(sessions: &[SleepSession]) -> Self {
        let rows: Vec<[Option<f64>; 6]> = sessions.iter().map(metric_row).collect();

        let mut values = [[0_f64; 6]; 6];
        for i in 0..6 {
            for j in 0..6 {
                let (xs, ys): (Vec<f64>, Vec<f64>) = rows
                    .iter()
                    .filter_map(|row| Some((row[i]?, row[j]?)))
                    .unzip();
                values[i][j] = pearson(&xs, &ys);
            }
        }

        Self { values }
    }

    pub fn labels() -> [&'static str; 6] {
        METRIC_LABELS
    }

    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

fn metric_row(session: &SleepSession) -> [Option<f64>; 6] {
    [
        Some(session.total_sleep_hours()),
        Some(session.deep_hours),
        Some(session.light_hours),
        Some(session.awake_hours),
        session.efficiency(),
        session.deep_sleep_pct(),
    ]
}

/// Textual all-time summary for the `stats` subcommand.
#[derive(Debug, Clone, Default)]
pub struct SleepSummary {
    pub count: usize,
    pub span: Option<(NaiveDate, NaiveDate)>,
    pub duration_mean: f64,
    pub duration_std: f64,
    pub efficiency_mean: f64,
    pub deep_pct_mean: f64,
    pub weekdays: WeekdayAverages,
    pub seasons: SeasonalStats,
}

impl SleepSummary {
    pub fn compute(history: &SleepHistory) -> Self {
        let sessions = history.sessions();
        let totals: Vec<f64> = sessions
            .iter()
            .map(SleepSession::total_sleep_hours)
            .collect();
        let efficiencies: Vec<f64> = sessions
            .iter()
            .filter_map(SleepSession::efficiency)
            .collect();
        let deep_pcts: Vec<f64> = sessions
            .iter()
            .filter_map(SleepSession::deep_sleep_pct)
            .collect();

        Self {
            count: sessions.len(),
            span: history.date_span(),
            duration_mean: mean(&totals),
            duration_std: std_dev(&totals),
            efficiency_mean: mean(&efficiencies),
            deep_pct_mean: mean(&deep_pcts),
            weekdays: WeekdayAverages::compute(sessions),
            seasons: SeasonalStats::compute(sessions),
        }
    }
}

impl Display for SleepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some((first, last)) => {
                writeln!(f, "Sessions: {} ({} to {})", self.count, first, last)?
            }
            None => writeln!(f, "Sessions: 0")?,
        }
        writeln!(
            f,
            "Total sleep: mean {:.2}h, std {:.2}h",
            self.duration_mean, self.duration_std
        )?;
        writeln!(f, "Sleep efficiency: {:.1}%", self.efficiency_mean)?;
        writeln!(f, "Deep sleep: {:.1}% of sleep", self.deep_pct_mean)?;

        writeln!(f, "By weekday:")?;
        for (day, label) in self.weekdays.values().into_iter().zip(WEEKDAY_LABELS) {
            writeln!(f, "\t{}: {:.2}h", label, day)?;
        }

        writeln!(f, "By season:")?;
        for season in Season::iter() {
            let stat = self.seasons.stat_for(season);
            writeln!(f, "\t{}: {:.2}h (std {:.2}h)", season, stat.mean, stat.std)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn session(date: NaiveDate, deep: f64, light: f64, awake: f64) -> SleepSession {
        let start = date.and_hms_opt(22, 0, 0).expect("valid time");
        SleepSession {
            date,
            start,
            end: start + chrono::Duration::hours(8),
            deep_hours: deep,
            light_hours: light,
            awake_hours: awake,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn architecture_means() {
        let sessions = vec![
            session(day(2021, 1, 4), 1.0, 5.0, 1.0),
            session(day(2021, 1, 5), 2.0, 6.0, 0.0),
        ];

        let avgs = ArchitectureAverages::compute(&sessions);
        assert_eq!(avgs.deep, 1.5);
        assert_eq!(avgs.light, 5.5);
        assert_eq!(avgs.awake, 0.5);
        assert_eq!(avgs.total(), 7.5);
        assert_eq!(avgs.deep_share(), 20.0);
    }

    #[test]
    fn architecture_shares_without_data() {
        let avgs = ArchitectureAverages::default();
        assert_eq!(avgs.deep_share(), 0.0);
        assert_eq!(avgs.awake_share(), 0.0);
    }

    #[test]
    fn weekday_grouping() {
        // 2021-01-04 is a Monday
        let sessions = vec![
            session(day(2021, 1, 4), 2.0, 4.0, 0.5),
            session(day(2021, 1, 11), 2.0, 6.0, 0.5),
            session(day(2021, 1, 5), 1.0, 6.0, 0.5),
        ];

        let averages = WeekdayAverages::compute(&sessions);
        assert_eq!(averages.mean_for(Weekday::Mon), 7.0);
        assert_eq!(averages.mean_for(Weekday::Tue), 7.0);
        assert_eq!(averages.mean_for(Weekday::Wed), 0.0);
        assert_eq!(averages.overall(), 2.0);
    }

    #[test]
    fn seasonal_grouping() {
        let sessions = vec![
            session(day(2021, 1, 10), 2.0, 4.0, 0.0),
            session(day(2021, 12, 10), 2.0, 6.0, 0.0),
            session(day(2021, 7, 10), 1.0, 6.0, 0.0),
        ];

        let stats = SeasonalStats::compute(&sessions);
        let winter = stats.stat_for(Season::Winter);
        assert_eq!(winter.count, 2);
        assert_eq!(winter.mean, 7.0);
        assert!((winter.std - 2.0_f64.sqrt()).abs() < 1e-12);

        let summer = stats.stat_for(Season::Summer);
        assert_eq!(summer.count, 1);
        assert_eq!(summer.std, 0.0);

        assert_eq!(stats.stat_for(Season::Spring).count, 0);
    }

    #[test]
    fn correlation_matrix_shape() {
        let sessions: Vec<_> = (1..=12)
            .map(|i| {
                session(
                    day(2021, 1, i),
                    0.5 + 0.1 * i as f64,
                    4.0 + 0.3 * (i % 4) as f64,
                    0.2 + 0.05 * (i % 3) as f64,
                )
            })
            .collect();

        let matrix = CorrelationMatrix::compute(&sessions);
        for i in 0..6 {
            assert!((matrix.value(i, i) - 1.0).abs() < 1e-9);
            for j in 0..6 {
                assert!((matrix.value(i, j) - matrix.value(j, i)).abs() < 1e-9);
                assert!(matrix.value(i, j).abs() <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn summary_display_mentions_every_group() {
        let history = crate::SleepHistory::from_sessions(vec![
            session(day(2021, 1, 4), 1.5, 5.5, 0.5),
            session(day(2021, 7, 5), 1.0, 6.0, 0.5),
        ]);

        let text = SleepSummary::compute(&history).to_string();
        assert!(text.contains("Sessions: 2 (2021-01-04 to 2021-07-05)"));
        for label in WEEKDAY_LABELS {
            assert!(text.contains(label));
        }
        for season in ["Winter", "Spring", "Summer", "Autumn"] {
            assert!(text.contains(season));
        }
    }
}
