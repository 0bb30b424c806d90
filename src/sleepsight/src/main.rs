#[macro_use]
extern crate log;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use sleepsight::{charts, load_sleep_data};
use sleepsight_algos::{SleepHistory, SleepSummary};

#[derive(Parser)]
pub struct SleepsightCli {
    /// Directory holding the Garmin `*sleepData.json` exports
    #[arg(env, long, default_value = "v3")]
    pub data_dir: PathBuf,
    /// Directory the rendered charts are written to
    #[arg(env, long, default_value = "assets/images")]
    pub output_dir: PathBuf,
    #[clap(subcommand)]
    pub subcommand: SleepsightCommand,
}

#[derive(Subcommand)]
pub enum SleepsightCommand {
    ///
    /// Render the five summary charts
    ///
    Render,
    ///
    /// Print sleep statistics for the full history
    ///
    Stats,
}

fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = SleepsightCli::parse();

    info!("Loading data from {}", cli.data_dir.display());
    let records = load_sleep_data(&cli.data_dir)?;
    let history = SleepHistory::from_records(&records)?;
    info!("Processed {} records", history.len());

    match cli.subcommand {
        SleepsightCommand::Render => {
            let written = charts::render_all(&history, &cli.output_dir)?;

            println!("All visualizations saved to {}", cli.output_dir.display());
            for path in written {
                println!("  - {}", path.display());
            }
            Ok(())
        }
        SleepsightCommand::Stats => {
            let summary = SleepSummary::compute(&history);
            println!("{}", summary);
            Ok(())
        }
    }
}
