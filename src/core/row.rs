use crate::{
    core::month::Month,
    quantity::{cost::Kroner, energy::KilowattHours, rate::OrePerKilowattHour},
};

/// Derived cost line for a single month.
#[derive(Copy, Clone, Debug)]
pub struct MonthRow {
    pub month: Month,
    pub consumption: KilowattHours,
    pub spot_average: OrePerKilowattHour,
    pub subsidy_average: OrePerKilowattHour,
    pub adjustment: OrePerKilowattHour,
    pub effective_subsidy: OrePerKilowattHour,
    pub flat_rate_cost: Kroner,
    pub market_cost: Kroner,

    /// `market_cost - flat_rate_cost`: negative when strømstøtte comes out
    /// cheaper than Norgespris.
    pub difference: Kroner,
}

/// Totals over the twelve rows, accumulated without rounding.
#[derive(Copy, Clone, Debug)]
pub struct Totals {
    pub flat_rate: Kroner,
    pub market: Kroner,

    /// Total subsidy paid out under the market scheme.
    pub subsidy: Kroner,

    pub difference: Kroner,
}

impl Totals {
    fn of(rows: &[MonthRow]) -> Self {
        let flat_rate: Kroner = rows.iter().map(|row| row.flat_rate_cost).sum();
        let market: Kroner = rows.iter().map(|row| row.market_cost).sum();
        Self {
            flat_rate,
            market,
            subsidy: rows.iter().map(|row| row.consumption * row.effective_subsidy).sum(),
            difference: market - flat_rate,
        }
    }
}

/// A fresh, immutable result snapshot: recomputed as a whole after every
/// input change and safely discarded afterwards.
#[must_use]
pub struct Breakdown {
    pub rows: Vec<MonthRow>,
    pub totals: Totals,
}

impl Breakdown {
    pub fn new(rows: Vec<MonthRow>) -> Self {
        let totals = Totals::of(&rows);
        Self { rows, totals }
    }
}
