use std::ops::{Div, Mul};

quantity!(
    /// Price, or a signed price delta, in öre per kilowatt-hour.
    OrePerKilowattHour, suffix: "øre/kWh", precision: 2
);

impl Mul<f64> for OrePerKilowattHour {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for OrePerKilowattHour {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}
