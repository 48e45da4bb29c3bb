use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Input values for a sales tax calculation.
///
/// Amounts are pre-tax currency values, expected non-negative with at most
/// two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationInput {
    /// Labor subtotal for the quote or invoice.
    pub labor_amount: Decimal,

    /// Parts subtotal for the quote or invoice.
    pub parts_amount: Decimal,

    /// Explicit exemption override. `Some(true)` exempts the customer
    /// regardless of the tenant's exempt list; `Some(false)` and `None`
    /// defer to the list.
    #[serde(default)]
    pub customer_tax_exempt: Option<bool>,

    /// Customer identifier checked against the tenant's exempt list.
    #[serde(default)]
    pub customer_exemption_id: Option<String>,
}

/// Transparency block echoed with every result.
///
/// Reports the rates as configured, not the effective rates: a category
/// with tax disabled still shows its nominal rate here. On exemption both
/// rates are zero and the description carries an `" (Exempt)"` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub labor_tax_rate: Decimal,
    pub parts_tax_rate: Decimal,
    pub tax_description: String,
}

/// Result of a sales tax calculation.
///
/// All monetary fields are rounded to two decimal places; `total_tax` and
/// `grand_total` are sums of the already-rounded components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Tax charged on the labor subtotal.
    pub labor_tax: Decimal,

    /// Tax charged on the parts subtotal.
    pub parts_tax: Decimal,

    /// `labor_tax + parts_tax`.
    pub total_tax: Decimal,

    /// Labor subtotal with tax applied (or unchanged in inclusive display).
    pub labor_total: Decimal,

    /// Parts subtotal with tax applied (or unchanged in inclusive display).
    pub parts_total: Decimal,

    /// `labor_total + parts_total`.
    pub grand_total: Decimal,

    /// Configured rates and description behind the figures.
    pub breakdown: TaxBreakdown,
}
