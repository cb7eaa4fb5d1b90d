use std::fmt::{Debug, Display, Formatter};

use crate::quantity::cost::Kroner;

/// Whole-krone rendering for summary figures. The underlying totals stay
/// unrounded.
pub struct WholeKroner(pub Kroner);

impl Debug for WholeKroner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for WholeKroner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} kr", self.0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_whole_kroner() {
        assert_eq!(WholeKroner(Kroner(292.2)).to_string(), "292 kr");
        assert_eq!(WholeKroner(Kroner(-207.8)).to_string(), "-208 kr");
    }
}
