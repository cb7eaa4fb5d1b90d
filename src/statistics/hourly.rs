use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::{core::zone::Zone, quantity::rate::OrePerKilowattHour, rates::MonthlyRate};

/// One hourly spot price as published by <https://www.hvakosterstrommen.no>.
/// The source price excludes VAT; the other fields of the feed are ignored.
#[derive(Copy, Clone, Debug, Deserialize)]
pub struct HourlyPrice {
    #[serde(rename = "NOK_per_kWh")]
    pub nok_per_kwh: f64,

    #[serde(rename = "time_end")]
    pub end: DateTime<FixedOffset>,
}

impl HourlyPrice {
    /// Spot price in öre/kWh in the zone's VAT regime.
    pub fn spot(self, zone: Zone) -> OrePerKilowattHour {
        OrePerKilowattHour(self.nok_per_kwh * 100.0) * zone.vat_factor()
    }
}

/// Average one month of hourly prices into a rate table entry.
///
/// The subsidy is averaged hour by hour, so a month whose mean price sits
/// well below the threshold may still carry a non-zero subsidy average from
/// individual expensive hours.
pub fn monthly_rate(hours: &[HourlyPrice], zone: Zone) -> Option<MonthlyRate> {
    if hours.is_empty() {
        return None;
    }
    #[expect(clippy::cast_precision_loss)]
    let count = hours.len() as f64;
    let spot_sum: OrePerKilowattHour = hours.iter().map(|hour| hour.spot(zone)).sum();
    let subsidy_sum: OrePerKilowattHour =
        hours.iter().map(|hour| zone.theoretical_subsidy(hour.spot(zone))).sum();
    Some(MonthlyRate { spot_average: spot_sum / count, subsidy_average: subsidy_sum / count })
}
