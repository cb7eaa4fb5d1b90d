use bon::Builder;
use itertools::Itertools;

use crate::{
    core::{
        input::{MonthlyEntry, MonthlyInputs},
        row::{Breakdown, MonthRow},
        zone::Zone,
    },
    quantity::{energy::KilowattHours, rate::OrePerKilowattHour},
    rates::RateTable,
};

/// Fixed Norgespris rate.
pub const NORGESPRIS: OrePerKilowattHour = OrePerKilowattHour(50.0);

/// Stateless cost model: every call derives a fresh breakdown from the
/// current inputs and the historical rate table, so the caller is free to
/// re-run it after every single edit.
#[derive(Builder)]
pub struct Calculator<'a> {
    rates: &'a RateTable,
    zone: Zone,

    /// Historical year the spot averages are taken from.
    year: i32,

    /// Wall-clock year, driving the rate fallback for months without data.
    current_year: i32,
}

impl Calculator<'_> {
    pub fn calculate(&self, inputs: &MonthlyInputs) -> Breakdown {
        Breakdown::new(inputs.0.iter().map(|entry| self.row(entry)).collect_vec())
    }

    /// Derive a single month.
    ///
    /// The strømstøtte side is a what-if projection: the historical average
    /// subsidy is shifted by whatever the adjustment would have added to, or
    /// removed from, the theoretical subsidy. The shift is deliberately
    /// unclamped — a large adjustment may push the effective subsidy above
    /// anything historically paid out, and the effective price may go
    /// negative.
    pub fn row(&self, entry: &MonthlyEntry) -> MonthRow {
        let rate = self.rates.resolve(self.year, self.current_year, self.zone, entry.month);
        let consumption = entry.consumption.unwrap_or(KilowattHours::ZERO);
        let adjustment = entry.adjustment.unwrap_or(OrePerKilowattHour::ZERO);

        let adjusted_spot = rate.spot_average + adjustment;
        let subsidy_shift = self.zone.theoretical_subsidy(adjusted_spot)
            - self.zone.theoretical_subsidy(rate.spot_average);
        let effective_subsidy = rate.subsidy_average + subsidy_shift;

        let flat_rate_cost = consumption * NORGESPRIS;
        let market_cost = consumption * (adjusted_spot - effective_subsidy);

        MonthRow {
            month: entry.month,
            consumption,
            spot_average: rate.spot_average,
            subsidy_average: rate.subsidy_average,
            adjustment,
            effective_subsidy,
            flat_rate_cost,
            market_cost,
            difference: market_cost - flat_rate_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{core::month::Month, rates::MonthlyRate};

    fn no3_table() -> RateTable {
        let mut table = RateTable::default();
        for month in Month::ALL {
            table.insert(
                2025,
                Zone::NO3,
                month,
                MonthlyRate {
                    spot_average: OrePerKilowattHour(34.95),
                    subsidy_average: OrePerKilowattHour(5.73),
                },
            );
        }
        table
    }

    fn entry(consumption: f64, adjustment: f64) -> MonthlyEntry {
        MonthlyEntry {
            month: Month::Jan,
            consumption: Some(KilowattHours(consumption)),
            adjustment: Some(OrePerKilowattHour(adjustment)),
        }
    }

    #[test]
    fn test_flat_rate_is_half_a_krone_per_kilowatt_hour() {
        let table = no3_table();
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO3).year(2025).current_year(2025).build();
        for consumption in [0.0, 1.0, 250.0, 1000.0, 4321.0] {
            let row = calculator.row(&entry(consumption, 0.0));
            assert_abs_diff_eq!(row.flat_rate_cost.0, consumption * 0.5);
        }
    }

    #[test]
    fn test_difference_is_market_minus_flat_rate() {
        let table = no3_table();
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO3).year(2025).current_year(2025).build();
        for adjustment in [-40.0, 0.0, 65.0, 200.0] {
            let row = calculator.row(&entry(730.0, adjustment));
            assert_eq!(row.difference, row.market_cost - row.flat_rate_cost);
        }
    }

    #[test]
    fn test_unknown_year_and_zone_still_produce_a_row() {
        let table = RateTable::default();
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO5).year(1999).current_year(2026).build();
        let row = calculator.row(&entry(500.0, 12.0));
        assert!(row.market_cost.0.is_finite());
        assert_eq!(row.spot_average, OrePerKilowattHour::ZERO);
        assert_eq!(row.subsidy_average, OrePerKilowattHour::ZERO);
        assert_abs_diff_eq!(row.flat_rate_cost.0, 250.0);
    }

    #[test]
    fn test_unset_fields_count_as_zero() {
        let table = no3_table();
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO3).year(2025).current_year(2025).build();
        let row = calculator.row(&MonthlyEntry::empty(Month::Jul));
        assert_eq!(row.consumption, KilowattHours::ZERO);
        assert_eq!(row.flat_rate_cost.0, 0.0);
        assert_eq!(row.market_cost.0, 0.0);
    }

    #[test]
    fn test_zero_adjustment_keeps_the_historical_subsidy() {
        let table = no3_table();
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO3).year(2025).current_year(2025).build();
        let row = calculator.row(&entry(1000.0, 0.0));
        assert_eq!(row.effective_subsidy, row.subsidy_average);
    }

    #[test]
    fn test_adjustment_below_threshold_hits_full_price() {
        // At 34.95 øre the NO3 threshold of 96.25 øre is far away, so the
        // adjustment lands on the household unsubsidized.
        let table = no3_table();
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO3).year(2025).current_year(2025).build();
        let base = calculator.row(&entry(1000.0, 0.0));
        let raised = calculator.row(&entry(1000.0, 10.0));
        assert!(raised.market_cost > base.market_cost);
        assert_abs_diff_eq!(raised.market_cost.0 - base.market_cost.0, 100.0);
    }

    #[test]
    fn test_adjustment_above_threshold_is_ninety_percent_offset() {
        let mut table = RateTable::default();
        table.insert(
            2025,
            Zone::NO1,
            Month::Jan,
            MonthlyRate {
                spot_average: OrePerKilowattHour(120.0),
                subsidy_average: OrePerKilowattHour(21.375),
            },
        );
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO1).year(2025).current_year(2025).build();
        let base = calculator.row(&entry(1000.0, 0.0));
        let raised = calculator.row(&entry(1000.0, 10.0));
        // The subsidy swallows 9 of the 10 öre, the household pays the rest.
        assert!(raised.market_cost > base.market_cost);
        assert_abs_diff_eq!(raised.effective_subsidy.0 - base.effective_subsidy.0, 9.0);
        assert_abs_diff_eq!(raised.market_cost.0 - base.market_cost.0, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_scenario_no3() {
        let table = no3_table();
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO3).year(2025).current_year(2025).build();
        let row = calculator.row(&entry(1000.0, 0.0));
        assert_abs_diff_eq!(row.flat_rate_cost.0, 500.0);
        assert_abs_diff_eq!(row.effective_subsidy.0, 5.73);
        assert_abs_diff_eq!(row.market_cost.0, 292.2, epsilon = 1e-9);
        assert_abs_diff_eq!(row.difference.0, -207.8, epsilon = 1e-9);
    }

    #[test]
    fn test_totals_are_twelve_times_one_row() {
        let table = no3_table();
        let calculator =
            Calculator::builder().rates(&table).zone(Zone::NO3).year(2025).current_year(2025).build();
        let inputs = MonthlyInputs::collect(|month| MonthlyEntry {
            month,
            consumption: Some(KilowattHours(1000.0)),
            adjustment: Some(OrePerKilowattHour::ZERO),
        });
        let breakdown = calculator.calculate(&inputs);
        assert_eq!(breakdown.rows.len(), 12);
        assert_abs_diff_eq!(breakdown.totals.flat_rate.0, 6000.0);
        assert_abs_diff_eq!(breakdown.totals.market.0, 12.0 * 292.2, epsilon = 1e-6);
        assert_abs_diff_eq!(breakdown.totals.subsidy.0, 12.0 * 57.3, epsilon = 1e-6);
        assert_abs_diff_eq!(breakdown.totals.difference.0, 12.0 * -207.8, epsilon = 1e-6);
    }
}
