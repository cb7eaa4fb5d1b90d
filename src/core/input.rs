use crate::{
    core::month::Month,
    quantity::{energy::KilowattHours, rate::OrePerKilowattHour},
};

/// One editable input row. `None` is a field left empty, which every
/// computation treats as zero.
#[derive(Copy, Clone, Debug)]
pub struct MonthlyEntry {
    pub month: Month,
    pub consumption: Option<KilowattHours>,
    pub adjustment: Option<OrePerKilowattHour>,
}

impl MonthlyEntry {
    pub const fn empty(month: Month) -> Self {
        Self { month, consumption: None, adjustment: None }
    }
}

/// The twelve input rows in calendar order.
#[derive(Debug)]
pub struct MonthlyInputs(pub [MonthlyEntry; 12]);

impl MonthlyInputs {
    pub fn collect(build: impl FnMut(Month) -> MonthlyEntry) -> Self {
        Self(Month::ALL.map(build))
    }
}

impl Default for MonthlyInputs {
    fn default() -> Self {
        Self(Month::ALL.map(MonthlyEntry::empty))
    }
}

/// Parse a user-typed consumption. Never fails: garbage becomes an empty
/// field, and negative values are clamped to zero.
pub fn parse_consumption(text: &str) -> Option<KilowattHours> {
    parse_lenient(text).map(|value| KilowattHours(value.max(0.0)))
}

/// Parse a user-typed signed price adjustment. Never fails.
pub fn parse_adjustment(text: &str) -> Option<OrePerKilowattHour> {
    parse_lenient(text).map(OrePerKilowattHour)
}

/// Accepts a decimal comma and embedded whitespace, maps everything
/// unparseable to an empty field.
fn parse_lenient(text: &str) -> Option<f64> {
    let text: String = text.chars().filter(|character| !character.is_whitespace()).collect();
    text.replace(',', ".").parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_decimal_comma() {
        assert_eq!(parse_lenient("1 234,5"), Some(1234.5));
        assert_eq!(parse_lenient(" 42 "), Some(42.0));
    }

    #[test]
    fn test_parse_lenient_garbage_is_unset() {
        assert_eq!(parse_lenient(""), None);
        assert_eq!(parse_lenient("abc"), None);
        assert_eq!(parse_lenient("1,2,3"), None);
        assert_eq!(parse_lenient("NaN"), None);
        assert_eq!(parse_lenient("inf"), None);
    }

    #[test]
    fn test_parse_consumption_clamps_negatives() {
        assert_eq!(parse_consumption("-250"), Some(KilowattHours::ZERO));
    }

    #[test]
    fn test_parse_adjustment_keeps_sign() {
        assert_eq!(parse_adjustment("-12,5"), Some(OrePerKilowattHour(-12.5)));
    }
}
