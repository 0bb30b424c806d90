use std::path::Path;

use plotters::element::ErrorBar;
use plotters::prelude::*;
use sleepsight_algos::{Season, SeasonalStats, SleepHistory};
use strum::IntoEnumIterator;

use super::TEAL;

const SIZE: (u32, u32) = (1000, 600);

/// Mean total sleep per season with one-standard-deviation error bars.
pub fn render_seasonal(history: &SleepHistory, path: &Path) -> anyhow::Result<()> {
    let stats = SeasonalStats::compute(history.sessions());
    let max_hours = Season::iter()
        .map(|season| {
            let stat = stats.stat_for(season);
            stat.mean + stat.std
        })
        .fold(0.0, f64::max)
        + 1.0;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Sleep Duration by Season", ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0usize..4).into_segmented(), 0f64..max_hours)?;

    let season_label = |segment: &SegmentValue<usize>| match segment {
        SegmentValue::CenterOf(index) => Season::iter()
            .nth(*index)
            .map(|season| season.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .x_desc("Season")
        .y_desc("Average Sleep (Hours)")
        .x_labels(4)
        .x_label_formatter(&season_label)
        .disable_x_mesh()
        .draw()?;

    chart.draw_series(Season::iter().enumerate().map(|(index, season)| {
        let stat = stats.stat_for(season);
        Rectangle::new(
            [
                (SegmentValue::Exact(index), 0.0),
                (SegmentValue::Exact(index + 1), stat.mean),
            ],
            TEAL.mix(0.7).filled(),
        )
    }))?;

    chart.draw_series(Season::iter().enumerate().map(|(index, season)| {
        let stat = stats.stat_for(season);
        ErrorBar::new_vertical(
            SegmentValue::CenterOf(index),
            stat.mean - stat.std,
            stat.mean,
            stat.mean + stat.std,
            BLACK.filled(),
            12,
        )
    }))?;

    root.present()?;
    Ok(())
}
