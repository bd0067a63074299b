use crate::domain::model::{ProductRecord, ReadOutcome};
use crate::domain::money::Money;
use rust_decimal::Decimal;
use std::str::FromStr;

const FIELD_SEPARATOR: char = ';';
const COMMENT_PREFIX: char = '#';

/// Which value of a structurally valid line could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    Quantity,
    Price,
    /// `price` or `price × quantity` cannot be written with two fractional digits.
    Amount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Record(ProductRecord),
    /// Comment, blank line or wrong field count. Not an error.
    Skipped,
    Invalid(ValueError),
}

/// Parses one `name;quantity;price` line.
pub fn parse_line(line: &str) -> LineOutcome {
    if line.starts_with(COMMENT_PREFIX) {
        return LineOutcome::Skipped;
    }

    let fields = split_fields(line);
    let [name, quantity, price] = fields.as_slice() else {
        return LineOutcome::Skipped;
    };

    let Some(quantity) = parse_quantity(quantity) else {
        return LineOutcome::Invalid(ValueError::Quantity);
    };
    let Some(unit_price) = parse_price(price) else {
        return LineOutcome::Invalid(ValueError::Price);
    };
    if !fits_on_bill(unit_price, quantity) {
        return LineOutcome::Invalid(ValueError::Amount);
    }

    LineOutcome::Record(ProductRecord::new(name.trim(), quantity, unit_price))
}

/// Parses every line independently; records keep their input order.
pub fn parse_lines<I, S>(lines: I) -> ReadOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = ReadOutcome::default();

    for (index, line) in lines.into_iter().enumerate() {
        match parse_line(line.as_ref()) {
            LineOutcome::Record(record) => outcome.items.push(record),
            LineOutcome::Skipped => {
                tracing::trace!("Skipping line {}", index + 1);
            }
            LineOutcome::Invalid(reason) => {
                tracing::debug!("Line {} has an unparsable {:?}", index + 1, reason);
                outcome.error_count += 1;
            }
        }
    }

    outcome
}

/// Splits on `;` and drops trailing empty fields, so `Pen;2;` counts as two fields.
fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

fn fits_on_bill(unit_price: Decimal, quantity: u32) -> bool {
    Money::try_round(unit_price).is_some()
        && unit_price
            .checked_mul(Decimal::from(quantity))
            .and_then(Money::try_round)
            .is_some()
}

fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn parse_price(raw: &str) -> Option<Decimal> {
    // 接受小數逗號 (4,00)
    let normalized = raw.trim().replace(',', ".");
    if normalized.contains('_') {
        return None;
    }

    let price = Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()?;
    if price < Decimal::ZERO {
        return None;
    }
    Some(price)
}
