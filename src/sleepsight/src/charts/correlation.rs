use std::path::Path;

use plotters::prelude::*;
use plotters::style::TextStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use sleepsight_algos::{CorrelationMatrix, SleepHistory};

const SIZE: (u32, u32) = (1000, 800);

/// Annotated heatmap of the pairwise correlations between the six derived
/// sleep metrics, on a blue-white-red scale centered at zero.
pub fn render_correlation(history: &SleepHistory, path: &Path) -> anyhow::Result<()> {
    let matrix = CorrelationMatrix::compute(history.sessions());
    let labels = CorrelationMatrix::labels();

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sleep Metrics Correlation Matrix", ("sans-serif", 26))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d((0usize..6).into_segmented(), (0usize..6).into_segmented())?;

    let metric_label = |segment: &SegmentValue<usize>| match segment {
        SegmentValue::CenterOf(index) => labels.get(*index).copied().unwrap_or("").to_string(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .x_labels(6)
        .y_labels(6)
        .x_label_formatter(&metric_label)
        .y_label_formatter(&metric_label)
        .disable_x_mesh()
        .disable_y_mesh()
        .draw()?;

    for i in 0..6 {
        for j in 0..6 {
            let value = matrix.value(i, j);

            let mut cell = Rectangle::new(
                [
                    (SegmentValue::Exact(i), SegmentValue::Exact(j)),
                    (SegmentValue::Exact(i + 1), SegmentValue::Exact(j + 1)),
                ],
                heat_color(value).filled(),
            );
            cell.set_margin(1, 1, 1, 1);
            chart.draw_series(std::iter::once(cell))?;

            let text_color = if value.abs() > 0.6 { &WHITE } else { &BLACK };
            let style = TextStyle::from(("sans-serif", 18).into_font())
                .color(text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart.draw_series(std::iter::once(Text::new(
                format!("{value:.2}"),
                (SegmentValue::CenterOf(i), SegmentValue::CenterOf(j)),
                style,
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Diverging blue to white to red over [-1, 1], zero mapping to white.
fn heat_color(value: f64) -> RGBColor {
    const COLD: (u8, u8, u8) = (59, 76, 192);
    const HOT: (u8, u8, u8) = (180, 4, 38);

    let value = value.clamp(-1.0, 1.0);
    if value < 0.0 {
        let t = 1.0 + value;
        RGBColor(lerp(COLD.0, t), lerp(COLD.1, t), lerp(COLD.2, t))
    } else {
        let t = 1.0 - value;
        RGBColor(lerp(HOT.0, t), lerp(HOT.1, t), lerp(HOT.2, t))
    }
}

/// Interpolates from the endpoint color toward white as `t` goes 0 to 1.
fn lerp(from: u8, t: f64) -> u8 {
    (from as f64 + (255.0 - from as f64) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_color_endpoints() {
        assert_eq!(heat_color(-1.0), RGBColor(59, 76, 192));
        assert_eq!(heat_color(1.0), RGBColor(180, 4, 38));
        assert_eq!(heat_color(0.0), RGBColor(255, 255, 255));
    }

    #[test]
    fn heat_color_clamps() {
        assert_eq!(heat_color(-2.5), heat_color(-1.0));
        assert_eq!(heat_color(7.0), heat_color(1.0));
    }
}
