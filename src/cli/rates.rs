use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::Parser;
use itertools::Itertools;

use crate::{
    core::{month::Month, zone::Zone},
    prelude::*,
    rates::RateTable,
    tables::build_rates_table,
};

#[derive(Parser)]
pub struct RatesFileArgs {
    /// Rate table generated by the `process` command. Defaults to the
    /// bundled one.
    #[clap(long = "rates", env = "STROMVALG_RATES")]
    path: Option<PathBuf>,
}

impl RatesFileArgs {
    pub fn load(&self) -> Result<RateTable> {
        match &self.path {
            Some(path) => RateTable::from_path(path),
            None => RateTable::bundled(),
        }
    }
}

#[derive(Parser)]
pub struct RatesArgs {
    /// Price zone.
    #[clap(long, env = "STROMVALG_ZONE", value_enum, default_value_t = Zone::NO1)]
    zone: Zone,

    /// Year to show. Defaults to the current year, with missing months
    /// falling back to the newest year that has data.
    #[clap(long, env = "STROMVALG_YEAR")]
    year: Option<i32>,

    #[clap(flatten)]
    file: RatesFileArgs,
}

#[instrument(skip_all)]
pub fn rates(args: &RatesArgs) -> Result {
    let table = args.file.load()?;
    let current_year = Local::now().year();
    let year = args.year.unwrap_or(current_year);

    let rows = Month::ALL.map(|month| (month, table.resolve(year, current_year, args.zone, month)));
    println!("{}", build_rates_table(&rows));

    info!(zone = %args.zone, year, years = %table.available_years().join(", "), "shown");
    if let Some(timestamp) = table.latest_timestamp() {
        info!(%timestamp, "averages include spot data up to");
    }
    Ok(())
}
