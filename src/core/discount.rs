use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Percentage off a line once its quantity reaches a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityDiscount {
    min_quantity: u32,
    rate: Decimal,
}

impl QuantityDiscount {
    /// 10% off lines with three or more units.
    pub const STANDARD: QuantityDiscount = QuantityDiscount {
        min_quantity: 3,
        rate: dec!(0.1),
    };

    pub const fn new(min_quantity: u32, rate: Decimal) -> Self {
        Self { min_quantity, rate }
    }

    pub fn discount_for(&self, subtotal: Decimal, quantity: u32) -> Decimal {
        if quantity >= self.min_quantity {
            subtotal * self.rate
        } else {
            Decimal::ZERO
        }
    }
}

impl Default for QuantityDiscount {
    fn default() -> Self {
        Self::STANDARD
    }
}
