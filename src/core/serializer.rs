use crate::domain::model::BillLine;
use crate::domain::money::Money;

const FIELD_SEPARATOR: &str = ";";
const TOTAL_LABEL: &str = "TOTAL";
const ERRORS_LABEL: &str = "ERRORS";

pub fn format_bill_line(line: &BillLine) -> String {
    [
        line.name.clone(),
        line.quantity.to_string(),
        line.unit_price.to_string(),
        if line.discount_applied { "1" } else { "0" }.to_string(),
        line.final_total.to_string(),
    ]
    .join(FIELD_SEPARATOR)
}

/// `LABEL;;;;<value>`
fn trailer(label: &str, value: impl std::fmt::Display) -> String {
    format!("{label};;;;<{value}>")
}

/// Renders the bill lines followed by the `TOTAL` and `ERRORS` trailers.
pub fn serialize(lines: &[BillLine], total: Money, error_count: usize) -> Vec<String> {
    let mut output: Vec<String> = lines.iter().map(format_bill_line).collect();
    output.push(trailer(TOTAL_LABEL, total));
    output.push(trailer(ERRORS_LABEL, error_count));
    output
}
