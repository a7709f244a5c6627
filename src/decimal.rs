use crate::error::LedgerError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::ops::Deref;

/// Amount of an accepted ledger entry. Construction fails for zero and negatives,
/// and the value is read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositiveDecimal(Decimal);

impl AsRef<Decimal> for PositiveDecimal {
    fn as_ref(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for PositiveDecimal {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<Decimal> for PositiveDecimal {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_positive() && !value.is_zero() {
            Ok(PositiveDecimal(value))
        } else {
            Err(LedgerError::InvalidAmount(value))
        }
    }
}

/// Renders a currency value with exactly two fractional digits, rounding half away from zero.
pub fn format_currency(value: &Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
