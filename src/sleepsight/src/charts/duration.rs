use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use sleepsight_algos::SleepHistory;

use super::{DARK_BLUE, ORANGE, STEEL_BLUE};

const SIZE: (u32, u32) = (1400, 600);
const OPTIMAL_MIN_HOURS: f64 = 7.0;
const OPTIMAL_MAX_HOURS: f64 = 9.0;

/// Daily total sleep plus the 30-day rolling average, with the optimal
/// sleep band marked by dashed reference lines.
pub fn render_duration(history: &SleepHistory, path: &Path) -> anyhow::Result<()> {
    let Some((first, last)) = history.date_span() else {
        anyhow::bail!("no sessions to plot");
    };

    let sessions = history.sessions();
    let max_hours = sessions
        .iter()
        .map(|s| s.total_sleep_hours())
        .fold(OPTIMAL_MAX_HOURS, f64::max)
        + 1.0;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sleep Duration Over Time", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(first..last, 0f64..max_hours)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Total Sleep (Hours)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            sessions.iter().map(|s| (s.date, s.total_sleep_hours())),
            STEEL_BLUE.mix(0.3).stroke_width(1),
        ))?
        .label("Daily Sleep")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &STEEL_BLUE));

    chart
        .draw_series(LineSeries::new(
            sessions
                .iter()
                .zip(history.rolling_average())
                .map(|(s, avg)| (s.date, *avg)),
            DARK_BLUE.stroke_width(2),
        ))?
        .label("30-Day Rolling Average")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DARK_BLUE.stroke_width(2)));

    chart
        .draw_series(DashedLineSeries::new(
            [(first, OPTIMAL_MIN_HOURS), (last, OPTIMAL_MIN_HOURS)],
            8,
            4,
            GREEN.mix(0.6).stroke_width(1),
        ))?
        .label("Optimal Minimum (7h)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

    chart
        .draw_series(DashedLineSeries::new(
            [(first, OPTIMAL_MAX_HOURS), (last, OPTIMAL_MAX_HOURS)],
            8,
            4,
            ORANGE.mix(0.6).stroke_width(1),
        ))?
        .label("Optimal Maximum (9h)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &ORANGE));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8).filled())
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
