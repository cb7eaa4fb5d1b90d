use std::ops::Mul;

use crate::quantity::{cost::Kroner, rate::OrePerKilowattHour};

quantity!(KilowattHours, suffix: "kWh", precision: 0);

/// 100 öre to the krone.
impl Mul<OrePerKilowattHour> for KilowattHours {
    type Output = Kroner;

    fn mul(self, rate: OrePerKilowattHour) -> Self::Output {
        Kroner(self.0 * rate.0 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_cost_conversion() {
        let cost = KilowattHours(1000.0) * OrePerKilowattHour(50.0);
        assert_abs_diff_eq!(cost.0, 500.0);
    }
}
