use std::fmt::Write;

use rust_decimal::Decimal;

use crate::model::LookupResult;

const NOT_IN_CATALOG: &str = "Not found in price list";
const NOT_AVAILABLE: &str = "N/A";
const NOT_FOUND: &str = "Not Found";

/// Formats a price as `$#,##0.00`, rounding half to even at the cent.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// Formats a quantity without trailing zeros (`7`, `9.5`).
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Renders the fixed-width report: part number, description, cost and
/// availability, one line per result under a header line.
pub fn render_report(results: &[LookupResult]) -> String {
    let mut out = String::new();
    push_row(&mut out, "Part #", "Description", "Cost", "Availability");

    for result in results {
        match (&result.description, result.price) {
            (Some(description), Some(price)) if result.found => push_row(
                &mut out,
                &result.part_number,
                description,
                &format_price(price),
                result.status.label(),
            ),
            _ => push_row(
                &mut out,
                &result.part_number,
                NOT_IN_CATALOG,
                NOT_AVAILABLE,
                NOT_AVAILABLE,
            ),
        }
    }
    out
}

/// Renders the plain stock summary: `part: quantity` or `part: Not Found`.
pub fn render_stock_summary(results: &[LookupResult]) -> String {
    let mut out = String::from("Stock Levels:\n");
    for result in results {
        let level = match result.quantity {
            Some(quantity) if result.found => format_quantity(quantity),
            _ => NOT_FOUND.to_string(),
        };
        let _ = writeln!(out, "{}: {level}", result.part_number);
    }
    out
}

fn push_row(out: &mut String, part: &str, description: &str, cost: &str, availability: &str) {
    let _ = writeln!(out, "{part:<15} {description:<30} {cost:<15} {availability:<15}");
}
