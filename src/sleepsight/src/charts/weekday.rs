use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use sleepsight_algos::{SleepHistory, WEEKDAY_LABELS, WeekdayAverages};

use super::STEEL_BLUE;

const SIZE: (u32, u32) = (1000, 600);

/// Mean total sleep per weekday, Monday through Sunday, with the weekly
/// average marked by a dashed reference line.
pub fn render_weekday(history: &SleepHistory, path: &Path) -> anyhow::Result<()> {
    let averages = WeekdayAverages::compute(history.sessions());
    let values = averages.values();
    let overall = averages.overall();
    let max_hours = values.iter().copied().fold(0.0, f64::max) + 1.0;

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Sleep Duration by Day of Week", ("sans-serif", 26))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(50)
        .build_cartesian_2d((0usize..7).into_segmented(), 0f64..max_hours)?;

    let day_label = |segment: &SegmentValue<usize>| match segment {
        SegmentValue::CenterOf(day) => {
            WEEKDAY_LABELS.get(*day).copied().unwrap_or("").to_string()
        }
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .x_desc("Day of Week")
        .y_desc("Average Sleep (Hours)")
        .x_labels(7)
        .x_label_formatter(&day_label)
        .disable_x_mesh()
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(day, hours)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(day), 0.0),
                (SegmentValue::Exact(day + 1), *hours),
            ],
            STEEL_BLUE.mix(0.8).filled(),
        )
    }))?;

    chart
        .draw_series(DashedLineSeries::new(
            [
                (SegmentValue::Exact(0), overall),
                (SegmentValue::Exact(7), overall),
            ],
            8,
            4,
            RED.mix(0.6).stroke_width(1),
        ))?
        .label(format!("Weekly Average ({overall:.2}h)"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8).filled())
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
