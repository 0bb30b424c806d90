use std::{fs, path::Path};

use anyhow::Context;
use glob::glob;
use sleepsight_types::SleepRecord;

/// File name pattern the Garmin exports use inside the data directory.
const EXPORT_PATTERN: &str = "*sleepData.json";

/// Loads every sleep export under `data_dir` into one flat record list.
///
/// Files that fail to read or parse are logged and skipped; the run
/// continues with whatever loaded. Paths are sorted before loading, which
/// puts the date-prefixed export names in chronological order.
pub fn load_sleep_data(data_dir: &Path) -> anyhow::Result<Vec<SleepRecord>> {
    let pattern = data_dir.join(EXPORT_PATTERN);
    let pattern = pattern
        .to_str()
        .with_context(|| format!("data dir {} is not valid UTF-8", data_dir.display()))?;

    let mut paths: Vec<_> = glob(pattern)?.filter_map(Result::ok).collect();
    paths.sort();

    let mut records = Vec::new();
    for path in paths {
        match load_file(&path) {
            Ok(mut file_records) => {
                info!("Loaded {}: {} records", path.display(), file_records.len());
                records.append(&mut file_records);
            }
            Err(error) => warn!("Skipping {}: {error:#}", path.display()),
        }
    }

    Ok(records)
}

fn load_file(path: &Path) -> anyhow::Result<Vec<SleepRecord>> {
    let contents = fs::read_to_string(path)?;
    let records = serde_json::from_str(&contents)?;
    Ok(records)
}
