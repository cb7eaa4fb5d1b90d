use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Calendar month with the Norwegian abbreviation used throughout the rate
/// table and the settings file.
#[derive(
    Copy, Clone, Debug, Display, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    Mai,
    Jun,
    Jul,
    Aug,
    Sep,
    Okt,
    Nov,
    Des,
}

impl Month {
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::Mai,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Okt,
        Self::Nov,
        Self::Des,
    ];

    /// Look up by the one-based calendar number.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(Month::from_number(1), Some(Month::Jan));
        assert_eq!(Month::from_number(5), Some(Month::Mai));
        assert_eq!(Month::from_number(12), Some(Month::Des));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }
}
