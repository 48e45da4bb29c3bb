//! Shared helpers for tax calculations.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places, half-up.
///
/// Midpoints round away from zero, matching how totals are presented on
/// customer-facing quotes and invoices.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use shoptax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(12.344)), dec!(12.34));
/// assert_eq!(round_half_up(dec!(12.345)), dec!(12.35));
/// assert_eq!(round_half_up(dec!(-12.345)), dec!(-12.35)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a percentage to a fractional rate.
///
/// Tenant settings store rates as percentages (`7.25` for 7.25%); the
/// calculator works in fractions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use shoptax_core::calculations::common::rate_from_percent;
///
/// assert_eq!(rate_from_percent(dec!(7.25)), dec!(0.0725));
/// assert_eq!(rate_from_percent(dec!(0)), dec!(0));
/// ```
pub fn rate_from_percent(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}
