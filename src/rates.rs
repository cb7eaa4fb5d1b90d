use std::{collections::BTreeMap, fs, path::Path};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{
    core::{month::Month, zone::Zone},
    prelude::*,
    quantity::rate::OrePerKilowattHour,
};

/// First year covered by the published price history.
pub const FIRST_PUBLISHED_YEAR: i32 = 2024;

/// Historical zone averages for one month. The default value doubles as the
/// zero-rate fallback for months without data.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRate {
    #[serde(rename = "spotAvg")]
    pub spot_average: OrePerKilowattHour,

    #[serde(rename = "subsidyAvg")]
    pub subsidy_average: OrePerKilowattHour,
}

type ZoneRates = BTreeMap<Zone, BTreeMap<Month, MonthlyRate>>;

/// Year-partitioned lookup of historical monthly averages, generated offline
/// by the `process` command and bundled with the binary.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RateTable {
    /// End of the newest source hour that went into the averages.
    #[serde(rename = "latestTimestamp", skip_serializing_if = "Option::is_none")]
    latest_timestamp: Option<DateTime<FixedOffset>>,

    years: BTreeMap<i32, ZoneRates>,
}

impl RateTable {
    /// The table generated from the price history checked in under `data/`.
    pub fn bundled() -> Result<Self> {
        serde_json::from_str(include_str!("../data/rates.json"))
            .context("the bundled rate table is corrupt")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn available_years(&self) -> impl DoubleEndedIterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    pub const fn latest_timestamp(&self) -> Option<DateTime<FixedOffset>> {
        self.latest_timestamp
    }

    pub fn get(&self, year: i32, zone: Zone, month: Month) -> Option<MonthlyRate> {
        self.years.get(&year)?.get(&zone)?.get(&month).copied()
    }

    /// Resolve the rate for a month. Total: this never fails.
    ///
    /// A missing entry falls back to older years, but only when the requested
    /// year is the ongoing one — its later months simply have no data yet.
    /// A past year without data has nothing to fall back to and resolves to
    /// the zero rate.
    pub fn resolve(&self, year: i32, current_year: i32, zone: Zone, month: Month) -> MonthlyRate {
        if let Some(rate) = self.get(year, zone, month) {
            return rate;
        }
        if year == current_year {
            for earlier in self.available_years().rev().filter(|&candidate| candidate < year) {
                if let Some(rate) = self.get(earlier, zone, month) {
                    return rate;
                }
            }
        }
        MonthlyRate::default()
    }

    pub fn insert(&mut self, year: i32, zone: Zone, month: Month, rate: MonthlyRate) {
        self.years.entry(year).or_default().entry(zone).or_default().insert(month, rate);
    }

    /// Keep track of the newest source hour seen so far.
    pub fn record_timestamp(&mut self, timestamp: DateTime<FixedOffset>) {
        if self.latest_timestamp.is_none_or(|known| known < timestamp) {
            self.latest_timestamp = Some(timestamp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(spot: f64, subsidy: f64) -> MonthlyRate {
        MonthlyRate {
            spot_average: OrePerKilowattHour(spot),
            subsidy_average: OrePerKilowattHour(subsidy),
        }
    }

    #[test]
    fn test_bundled_table_is_complete_for_the_first_year() -> Result {
        let table = RateTable::bundled()?;
        assert!(table.latest_timestamp().is_some());
        for zone in Zone::ALL {
            for month in Month::ALL {
                let rate = table
                    .get(FIRST_PUBLISHED_YEAR, zone, month)
                    .with_context(|| format!("missing {zone} {month}"))?;
                assert!(rate.spot_average >= OrePerKilowattHour::ZERO);
                assert!(rate.subsidy_average >= OrePerKilowattHour::ZERO);
            }
        }
        Ok(())
    }

    #[test]
    fn test_resolve_prefers_the_exact_year() {
        let mut table = RateTable::default();
        table.insert(2024, Zone::NO1, Month::Jan, rate(90.0, 8.0));
        table.insert(2025, Zone::NO1, Month::Jan, rate(80.0, 4.0));
        assert_eq!(table.resolve(2025, 2026, Zone::NO1, Month::Jan), rate(80.0, 4.0));
    }

    #[test]
    fn test_resolve_falls_back_to_the_newest_older_year() {
        let mut table = RateTable::default();
        table.insert(2024, Zone::NO1, Month::Sep, rate(45.0, 0.5));
        table.insert(2025, Zone::NO1, Month::Sep, rate(52.0, 1.1));
        // September 2026 is not in the table yet.
        assert_eq!(table.resolve(2026, 2026, Zone::NO1, Month::Sep), rate(52.0, 1.1));
    }

    #[test]
    fn test_resolve_does_not_fall_back_for_past_years() {
        let mut table = RateTable::default();
        table.insert(2024, Zone::NO1, Month::Sep, rate(45.0, 0.5));
        assert_eq!(table.resolve(2023, 2026, Zone::NO1, Month::Sep), MonthlyRate::default());
    }

    #[test]
    fn test_resolve_is_total_on_an_empty_table() {
        let table = RateTable::default();
        assert_eq!(table.resolve(2026, 2026, Zone::NO4, Month::Des), MonthlyRate::default());
    }
}
