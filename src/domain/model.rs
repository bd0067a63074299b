use crate::domain::money::Money;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// One purchased product, as read from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }
}

/// Products parsed from the input plus the number of lines whose values could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOutcome {
    pub items: Vec<ProductRecord>,
    pub error_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub discount_applied: bool,
    pub final_total: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillResult {
    pub lines: Vec<BillLine>,
    pub total: Money,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub bill: BillResult,
    pub error_count: usize,
    pub output_lines: Vec<String>,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub line_count: usize,
    pub error_count: usize,
    pub total: Money,
}
