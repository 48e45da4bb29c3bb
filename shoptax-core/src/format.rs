//! Display formatting for tax figures.
//!
//! Quotes and invoices present amounts in en-US currency style and rates as
//! fixed two-decimal percentages. The summary line condenses a calculation
//! result to one human-readable sentence.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::TaxCalculationResult;

/// Formats a percentage rate with two decimals and a `%` suffix.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use shoptax_core::format::format_tax_rate;
///
/// assert_eq!(format_tax_rate(dec!(7.25)), "7.25%");
/// assert_eq!(format_tax_rate(dec!(10)), "10.00%");
/// ```
pub fn format_tax_rate(rate: Decimal) -> String {
    format!("{:.2}%", round_half_up(rate))
}

/// Formats a monetary amount in en-US style: `$` prefix, comma thousands
/// grouping, two decimals. Negative amounts carry the sign before the `$`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use shoptax_core::format::format_currency;
///
/// assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
/// assert_eq!(format_currency(dec!(-1234.56)), "-$1,234.56");
/// assert_eq!(format_currency(dec!(0)), "$0.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    let digits = format!("{:.2}", rounded.abs());
    let (units, cents) = match digits.split_once('.') {
        Some(parts) => parts,
        None => (digits.as_str(), "00"),
    };

    format!("{sign}${}.{cents}", group_thousands(units))
}

/// Inserts a comma every three digits, counting from the right.
fn group_thousands(units: &str) -> String {
    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Renders the one-line tax summary for a calculation result.
///
/// Three shapes, keyed on the result's breakdown:
/// - no tax charged: `"Sales Tax: $0.00"`
/// - one uniform rate: `"Sales Tax (7.25%): $10.88"`
/// - split rates: `"Sales Tax: $12.50 (Labor: 10.00%, Parts: 5.00%)"`
///
/// Exempt results fall under the first shape and already carry the
/// `" (Exempt)"` description suffix from the calculator.
pub fn tax_summary_text(result: &TaxCalculationResult) -> String {
    let breakdown = &result.breakdown;

    if result.total_tax.is_zero() {
        return format!(
            "{}: {}",
            breakdown.tax_description,
            format_currency(result.total_tax)
        );
    }

    if breakdown.labor_tax_rate == breakdown.parts_tax_rate {
        return format!(
            "{} ({}): {}",
            breakdown.tax_description,
            format_tax_rate(breakdown.labor_tax_rate),
            format_currency(result.total_tax)
        );
    }

    format!(
        "{}: {} (Labor: {}, Parts: {})",
        breakdown.tax_description,
        format_currency(result.total_tax),
        format_tax_rate(breakdown.labor_tax_rate),
        format_tax_rate(breakdown.parts_tax_rate)
    )
}
