use std::path::Path;

use plotters::element::Pie;
use plotters::prelude::*;
use sleepsight_algos::{ArchitectureAverages, SleepHistory};

use super::{AWAKE_COLOR, DEEP_COLOR, LIGHT_COLOR};

const SIZE: (u32, u32) = (800, 800);

/// Pie of the mean deep/light/awake hours across the whole history.
pub fn render_architecture(history: &SleepHistory, path: &Path) -> anyhow::Result<()> {
    let avgs = ArchitectureAverages::compute(history.sessions());

    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled("Average Sleep Architecture", ("sans-serif", 28))?;

    let sizes = [avgs.deep, avgs.light, avgs.awake];
    let colors = [DEEP_COLOR, LIGHT_COLOR, AWAKE_COLOR];
    let labels = [
        format!("Deep Sleep {:.1}h ({:.1}%)", avgs.deep, avgs.deep_share()),
        format!("Light Sleep {:.1}h ({:.1}%)", avgs.light, avgs.light_share()),
        format!("Awake {:.1}h ({:.1}%)", avgs.awake, avgs.awake_share()),
    ];

    let center = (400, 410);
    let radius = 270.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 20).into_font());
    root.draw(&pie)?;

    root.present()?;
    Ok(())
}
