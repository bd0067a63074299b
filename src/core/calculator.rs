use crate::core::discount::QuantityDiscount;
use crate::domain::model::{BillLine, BillResult, ProductRecord};
use crate::domain::money::Money;
use crate::utils::error::{BillingError, Result};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default)]
pub struct BillCalculator {
    policy: QuantityDiscount,
}

impl BillCalculator {
    pub fn new(policy: QuantityDiscount) -> Self {
        Self { policy }
    }

    /// Builds one bill line per record, in order.
    ///
    /// The total is the sum of the already rounded line totals, so it always
    /// matches what a reader adds up from the printed lines.
    pub fn calculate(&self, products: &[ProductRecord]) -> Result<BillResult> {
        let mut lines = Vec::with_capacity(products.len());
        let mut total = Money::ZERO;

        for product in products {
            let line = self.bill_line(product);
            total = total
                .checked_add(line.final_total)
                .ok_or_else(|| BillingError::AmountOverflow {
                    name: product.name.clone(),
                })?;
            lines.push(line);
        }

        Ok(BillResult { lines, total })
    }

    pub fn bill_line(&self, product: &ProductRecord) -> BillLine {
        let subtotal = product.unit_price * Decimal::from(product.quantity);
        let discount = self.policy.discount_for(subtotal, product.quantity);

        BillLine {
            name: product.name.clone(),
            quantity: product.quantity,
            unit_price: Money::round(product.unit_price),
            discount_applied: discount > Decimal::ZERO,
            final_total: Money::round(subtotal - discount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn calculator() -> BillCalculator {
        BillCalculator::new(QuantityDiscount::STANDARD)
    }

    #[test]
    fn test_line_without_discount() {
        let line = calculator().bill_line(&ProductRecord::new("Pen", 2, dec!(1.5)));

        assert_eq!(line.name, "Pen");
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price.to_string(), "1.50");
        assert!(!line.discount_applied);
        assert_eq!(line.final_total.to_string(), "3.00");
    }

    #[test]
    fn test_line_with_discount() {
        let line = calculator().bill_line(&ProductRecord::new("Notebook", 3, dec!(4.00)));

        assert!(line.discount_applied);
        assert_eq!(line.final_total.amount(), dec!(10.80));
    }

    #[test]
    fn test_final_total_rounds_half_up() {
        // 3 × 0.35 = 1.05, 減 10% = 0.945 → 0.95
        let line = calculator().bill_line(&ProductRecord::new("Clip", 3, dec!(0.35)));
        assert_eq!(line.final_total.to_string(), "0.95");
    }

    #[test]
    fn test_unit_price_rounded_for_display_only() {
        // 單價顯示為 0.33，但小計仍以 0.333 計算
        let line = calculator().bill_line(&ProductRecord::new("Sticker", 2, dec!(0.333)));
        assert_eq!(line.unit_price.to_string(), "0.33");
        assert_eq!(line.final_total.to_string(), "0.67");
    }

    #[test]
    fn test_zero_quantity_and_free_items() {
        let calc = calculator();

        let none = calc.bill_line(&ProductRecord::new("Ghost", 0, dec!(9.99)));
        assert!(!none.discount_applied);
        assert_eq!(none.final_total, Money::ZERO);

        // 免費品項即使數量達門檻也沒有折扣
        let free = calc.bill_line(&ProductRecord::new("Sample", 5, dec!(0)));
        assert!(!free.discount_applied);
        assert_eq!(free.final_total.to_string(), "0.00");
    }

    #[test]
    fn test_total_is_sum_of_rounded_lines() {
        let products = vec![
            ProductRecord::new("A", 1, dec!(0.005)),
            ProductRecord::new("B", 1, dec!(0.005)),
        ];

        let result = calculator().calculate(&products).unwrap();

        // 先加總再四捨五入會是 0.01；逐行四捨五入後加總為 0.02
        assert_eq!(result.total.to_string(), "0.02");
    }

    #[test]
    fn test_calculate_preserves_order() {
        let products = vec![
            ProductRecord::new("Pen", 2, dec!(1.50)),
            ProductRecord::new("Notebook", 3, dec!(4.00)),
        ];

        let result = calculator().calculate(&products).unwrap();

        let names: Vec<&str> = result.lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Pen", "Notebook"]);
        assert_eq!(result.total.to_string(), "13.80");
    }

    #[test]
    fn test_calculate_empty() {
        let result = calculator().calculate(&[]).unwrap();
        assert!(result.lines.is_empty());
        assert_eq!(result.total, Money::ZERO);
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let huge = ProductRecord::new("Yacht", 1, Decimal::MAX);
        let err = calculator().calculate(&[huge.clone(), huge]).unwrap_err();

        assert!(matches!(err, BillingError::AmountOverflow { ref name } if name == "Yacht"));
    }

    #[test]
    fn test_total_beyond_two_digit_range_is_reported() {
        let big = ProductRecord::new("Yacht", 1, dec!(500000000000000000000000000));
        let err = calculator().calculate(&[big.clone(), big]).unwrap_err();

        assert!(matches!(err, BillingError::AmountOverflow { .. }));
    }
}
