use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;

use crate::{
    core::{month::Month, zone::Zone},
    prelude::*,
    rates::RateTable,
    statistics::hourly::{self, HourlyPrice},
};

#[derive(Parser)]
pub struct ProcessArgs {
    /// Cache directory with one `strømpriser_<year>` directory per year, as
    /// laid out by the price downloader.
    #[clap(long, env = "STROMVALG_CACHE_DIR", default_value = "data_cache")]
    cache_dir: PathBuf,

    /// Where to write the generated rate table.
    #[clap(long, env = "STROMVALG_RATES_OUT", default_value = "data/rates.json")]
    output: PathBuf,
}

#[instrument(skip_all)]
pub fn process(args: &ProcessArgs) -> Result {
    let mut table = RateTable::default();

    let entries = fs::read_dir(&args.cache_dir)
        .with_context(|| format!("failed to read `{}`", args.cache_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(year) = parse_year_directory(&name.to_string_lossy()) else {
            continue;
        };
        process_year(&mut table, year, &entry.path())?;
    }
    ensure!(
        !table.is_empty(),
        "no aggregated price files under `{}`, run the downloader first",
        args.cache_dir.display(),
    );

    let json = serde_json::to_string_pretty(&table)?;
    fs::write(&args.output, json)
        .with_context(|| format!("failed to write `{}`", args.output.display()))?;
    info!(
        output = %args.output.display(),
        n_years = table.available_years().count(),
        "rate table written",
    );
    Ok(())
}

/// Month subdirectories `01` through `12`, each holding per-day files and one
/// `MAANED_<year>-<month>_<zone>_TOTAL.json` aggregate per zone.
fn process_year(table: &mut RateTable, year: i32, directory: &Path) -> Result {
    for month_entry in fs::read_dir(directory)? {
        let month_directory = month_entry?.path();
        if !month_directory.is_dir() {
            continue;
        }
        for file_entry in fs::read_dir(&month_directory)? {
            let path = file_entry?.path();
            let Some(name) = path.file_name() else {
                continue;
            };
            let Some((month, zone)) = parse_aggregate_name(&name.to_string_lossy()) else {
                continue;
            };
            let hours: Vec<HourlyPrice> = serde_json::from_str(
                &fs::read_to_string(&path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?,
            )
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
            if let Some(rate) = hourly::monthly_rate(&hours, zone) {
                table.insert(year, zone, month, rate);
            }
            if let Some(end) = hours.iter().map(|hour| hour.end).max() {
                table.record_timestamp(end);
            }
        }
    }
    Ok(())
}

fn parse_year_directory(name: &str) -> Option<i32> {
    name.strip_prefix("strømpriser_")?.parse().ok()
}

fn parse_aggregate_name(name: &str) -> Option<(Month, Zone)> {
    let name = name.strip_prefix("MAANED_")?.strip_suffix("_TOTAL.json")?;
    let (date, zone) = name.split_once('_')?;
    let (_, month) = date.split_once('-')?;
    Some((Month::from_number(month.parse().ok()?)?, zone.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_directory() {
        assert_eq!(parse_year_directory("strømpriser_2025"), Some(2025));
        assert_eq!(parse_year_directory("strømpriser_"), None);
        assert_eq!(parse_year_directory("other"), None);
    }

    #[test]
    fn test_parse_aggregate_name() {
        assert_eq!(
            parse_aggregate_name("MAANED_2025-01_NO1_TOTAL.json"),
            Some((Month::Jan, Zone::NO1)),
        );
        assert_eq!(
            parse_aggregate_name("MAANED_2024-12_NO4_TOTAL.json"),
            Some((Month::Des, Zone::NO4)),
        );
        assert_eq!(parse_aggregate_name("2025-01-15_NO1.json"), None);
        assert_eq!(parse_aggregate_name("MAANED_2025-13_NO1_TOTAL.json"), None);
    }
}
