use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::quantity::rate::OrePerKilowattHour;

/// Strømstøtte threshold before VAT.
pub const THRESHOLD_EX_VAT: OrePerKilowattHour = OrePerKilowattHour(77.0);

/// Share of the spot price above the threshold that the subsidy covers.
pub const SUBSIDY_COVERAGE: f64 = 0.90;

/// Norwegian electricity price area.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    FromStr,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[value(rename_all = "UPPER")]
pub enum Zone {
    NO1,
    NO2,
    NO3,
    NO4,
    NO5,
}

impl Zone {
    pub const ALL: [Self; 5] = [Self::NO1, Self::NO2, Self::NO3, Self::NO4, Self::NO5];

    /// Household electricity is VAT-exempt in NO4.
    pub const fn vat_factor(self) -> f64 {
        match self {
            Self::NO4 => 1.0,
            _ => 1.25,
        }
    }

    /// Spot price level above which the subsidy kicks in, in the same VAT
    /// regime as the zone's published prices.
    pub fn threshold(self) -> OrePerKilowattHour {
        THRESHOLD_EX_VAT * self.vat_factor()
    }

    /// Subsidy the current rules would pay for one hour at the given spot
    /// price: 90 % of whatever exceeds the zone threshold.
    pub fn theoretical_subsidy(self, spot: OrePerKilowattHour) -> OrePerKilowattHour {
        OrePerKilowattHour((spot - self.threshold()).0.max(0.0) * SUBSIDY_COVERAGE)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_threshold() {
        assert_abs_diff_eq!(Zone::NO4.threshold().0, 77.0);
        for zone in [Zone::NO1, Zone::NO2, Zone::NO3, Zone::NO5] {
            assert_abs_diff_eq!(zone.threshold().0, 96.25);
        }
    }

    #[test]
    fn test_subsidy_below_threshold() {
        assert_eq!(
            Zone::NO1.theoretical_subsidy(OrePerKilowattHour(96.25)),
            OrePerKilowattHour::ZERO,
        );
        assert_eq!(
            Zone::NO3.theoretical_subsidy(OrePerKilowattHour(34.95)),
            OrePerKilowattHour::ZERO,
        );
    }

    #[test]
    fn test_subsidy_above_threshold() {
        assert_abs_diff_eq!(Zone::NO1.theoretical_subsidy(OrePerKilowattHour(100.0)).0, 3.375);
        assert_abs_diff_eq!(Zone::NO4.theoretical_subsidy(OrePerKilowattHour(100.0)).0, 20.7);
    }
}
