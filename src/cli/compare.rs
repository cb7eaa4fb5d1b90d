use chrono::{Datelike, Local};
use clap::Parser;
use itertools::Itertools;

use crate::{
    cli::{rates::RatesFileArgs, settings::SettingsArgs},
    core::{
        calculator::Calculator,
        input::{self, MonthlyEntry, MonthlyInputs},
        month::Month,
        zone::Zone,
    },
    prelude::*,
    settings::Settings,
    tables::{build_breakdown_table, build_summary_table},
};

#[derive(Parser)]
pub struct CompareArgs {
    /// Price zone, `NO1` through `NO5`.
    #[clap(long, env = "STROMVALG_ZONE", value_enum)]
    zone: Option<Zone>,

    /// Historical year to price against. Defaults to the current year, with
    /// months that have no data yet falling back to the newest year that
    /// does.
    #[clap(long, env = "STROMVALG_YEAR")]
    year: Option<i32>,

    /// Monthly consumption in kWh: one value applied to every month, or
    /// twelve comma-separated values in calendar order. Entries may be left
    /// empty.
    #[clap(long, env = "STROMVALG_CONSUMPTION", value_delimiter = ',')]
    consumption: Vec<String>,

    /// What-if adjustment in øre/kWh added to every month's historical spot
    /// price.
    #[clap(long, env = "STROMVALG_ADJUSTMENT", allow_hyphen_values = true)]
    adjustment: Option<String>,

    /// Calculate without persisting the inputs back to the settings file.
    #[clap(long)]
    no_save: bool,

    #[clap(flatten)]
    rates: RatesFileArgs,

    #[clap(flatten)]
    settings: SettingsArgs,
}

#[instrument(skip_all)]
pub fn compare(args: &CompareArgs) -> Result {
    let table = args.rates.load()?;
    let mut settings = Settings::load_or_default(&args.settings.path)?;

    if let Some(zone) = args.zone {
        settings.zone = zone;
    }
    if let Some(year) = args.year {
        settings.year = Some(year);
    }
    if let Some(text) = args.adjustment.as_deref() {
        settings.adjustment = input::parse_adjustment(text);
    }
    match args.consumption.as_slice() {
        [] => {}
        [single] => {
            let consumption = input::parse_consumption(single);
            for month in Month::ALL {
                settings.month_mut(month).consumption = consumption;
            }
        }
        twelve if twelve.len() == 12 => {
            for (month, text) in Month::ALL.into_iter().zip(twelve) {
                settings.month_mut(month).consumption = input::parse_consumption(text);
            }
        }
        other => bail!("expected 1 or 12 consumption values, got {}", other.len()),
    }

    let current_year = Local::now().year();
    let year = settings.year.unwrap_or(current_year);
    let inputs = MonthlyInputs::collect(|month| {
        let stored = settings.month(month);
        MonthlyEntry {
            month,
            consumption: stored.consumption,
            adjustment: stored.adjustment.or(settings.adjustment),
        }
    });

    let breakdown = Calculator::builder()
        .rates(&table)
        .zone(settings.zone)
        .year(year)
        .current_year(current_year)
        .build()
        .calculate(&inputs);

    info!(zone = %settings.zone, year, "priced 12 months");
    println!("{}", build_breakdown_table(&breakdown));
    println!("{}", build_summary_table(&breakdown.totals));
    info!(years = %table.available_years().join(", "), "years with data");
    if let Some(timestamp) = table.latest_timestamp() {
        info!(%timestamp, "averages include spot data up to");
    }

    if !args.no_save {
        settings.save(&args.settings.path)?;
    }
    Ok(())
}
