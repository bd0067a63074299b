//! Monetary amounts for bills.
//!
//! Every amount that appears on a bill is an exact base-10 decimal rounded
//! half-up to two fractional digits. Intermediate values (subtotals,
//! discounts) stay as raw [`Decimal`]s and only become [`Money`] once they are
//! rounded for a bill line.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Number of fractional digits kept on a bill.
pub const MONEY_SCALE: u32 = 2;

/// An amount rounded to cents.
///
/// Always renders as a plain decimal string with exactly two fractional
/// digits (`3.00`, `10.80`, `0.00`), never in scientific notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Rounds `value` half-up (away from zero on a tie) to two fractional digits.
    pub fn round(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(MONEY_SCALE);
        Money(rounded)
    }

    /// Like [`Money::round`], but `None` when the value is too large to keep
    /// two fractional digits (about 7.9e26 and up).
    pub fn try_round(value: Decimal) -> Option<Self> {
        let money = Self::round(value);
        (money.0.scale() == MONEY_SCALE).then_some(money)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Adds two amounts, returning `None` if the sum can no longer be held
    /// with two fractional digits.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).and_then(Self::try_round)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 精度參數會補零，不依賴 scale
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_up() {
        assert_eq!(Money::round(dec!(1.005)).amount(), dec!(1.01));
        assert_eq!(Money::round(dec!(1.004)).amount(), dec!(1.00));
        assert_eq!(Money::round(dec!(2.675)).amount(), dec!(2.68));
        assert_eq!(Money::round(dec!(0.125)).amount(), dec!(0.13));
    }

    #[test]
    fn test_display_always_has_two_digits() {
        assert_eq!(Money::round(dec!(3)).to_string(), "3.00");
        assert_eq!(Money::round(dec!(10.8)).to_string(), "10.80");
        assert_eq!(Money::round(dec!(12.3456)).to_string(), "12.35");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_display_is_plain_for_large_values() {
        let big = Money::round(dec!(123456789012345678.9));
        assert_eq!(big.to_string(), "123456789012345678.90");
    }

    #[test]
    fn test_checked_add() {
        let sum = Money::round(dec!(3.00))
            .checked_add(Money::round(dec!(10.80)))
            .unwrap();
        assert_eq!(sum.to_string(), "13.80");

        assert!(Money(Decimal::MAX).checked_add(Money(Decimal::MAX)).is_none());
    }

    #[test]
    fn test_largest_amount_keeps_two_digits() {
        let largest = Money::try_round(dec!(792281625142643375935439503.35)).unwrap();
        assert_eq!(largest.to_string(), "792281625142643375935439503.35");

        assert!(Money::try_round(dec!(1000000000000000000000000000)).is_none());
        assert!(largest.checked_add(Money::round(dec!(0.01))).is_none());
    }

    #[test]
    fn test_display_pads_when_scale_is_short() {
        assert_eq!(
            Money(dec!(1000000000000000000000000000)).to_string(),
            "1000000000000000000000000000.00"
        );
        assert_eq!(Money(dec!(7)).to_string(), "7.00");
    }
}
