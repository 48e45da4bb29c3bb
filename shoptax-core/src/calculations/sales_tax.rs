//! Sales tax calculations for labor/parts quotes and invoices.
//!
//! This module implements the tenant-configurable tax pipeline applied when
//! pricing a repair order. Labor and parts are taxed independently, each with
//! its own rate and on/off switch, under two calculation methods and two
//! display methods.
//!
//! # Pipeline
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Exemption short-circuit (override flag or the tenant's exempt list) |
//! | 2    | Effective rates: configured percent ÷ 100, or zero for an untaxed category |
//! | 3    | Tax amounts, per category ("separate") or blended over the subtotal ("compound") |
//! | 4    | Totals: tax added on top ("exclusive") or backed out of the amounts ("inclusive") |
//! | 5    | Each component rounded half-up to cents; totals summed from rounded components |
//! | 6    | Breakdown echoing the configured rates and description |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use shoptax_core::calculations::SalesTaxCalculator;
//! use shoptax_core::models::{TaxCalculationInput, TaxSettings};
//!
//! let settings = TaxSettings {
//!     labor_tax_rate: dec!(10.00),
//!     parts_tax_rate: dec!(5.00),
//!     ..TaxSettings::default()
//! };
//!
//! let calculator = SalesTaxCalculator::new(&settings);
//! let result = calculator.calculate(&TaxCalculationInput {
//!     labor_amount: dec!(100.00),
//!     parts_amount: dec!(50.00),
//!     customer_tax_exempt: None,
//!     customer_exemption_id: None,
//! });
//!
//! assert_eq!(result.labor_tax, dec!(10.00));
//! assert_eq!(result.parts_tax, dec!(2.50));
//! assert_eq!(result.total_tax, dec!(12.50));
//! assert_eq!(result.grand_total, dec!(162.50));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{rate_from_percent, round_half_up};
use crate::models::{
    TaxBreakdown, TaxCalculationInput, TaxCalculationMethod, TaxCalculationResult,
    TaxDisplayMethod, TaxSettings,
};

/// Calculator for tenant-configured sales tax on labor and parts.
///
/// Borrows the tenant's [`TaxSettings`] and prices one input at a time.
/// The settings are trusted as given; run [`TaxSettings::validate`] at load
/// time. Calculation itself never fails: every input produces a result.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use shoptax_core::calculations::SalesTaxCalculator;
/// use shoptax_core::models::{TaxCalculationInput, TaxSettings};
///
/// let settings = TaxSettings {
///     labor_tax_rate: dec!(7.25),
///     parts_tax_rate: dec!(7.25),
///     ..TaxSettings::default()
/// };
///
/// let calculator = SalesTaxCalculator::new(&settings);
/// let result = calculator.calculate(&TaxCalculationInput {
///     labor_amount: dec!(200.00),
///     parts_amount: dec!(0.00),
///     customer_tax_exempt: None,
///     customer_exemption_id: None,
/// });
///
/// assert_eq!(result.labor_tax, dec!(14.50));
/// ```
#[derive(Debug, Clone)]
pub struct SalesTaxCalculator<'a> {
    settings: &'a TaxSettings,
}

impl<'a> SalesTaxCalculator<'a> {
    /// Creates a calculator over the given tenant settings.
    pub fn new(settings: &'a TaxSettings) -> Self {
        Self { settings }
    }

    /// Prices one labor/parts input under the tenant's tax settings.
    ///
    /// # Arguments
    ///
    /// * `input` - Pre-tax labor and parts amounts plus the customer's
    ///   exemption markers
    ///
    /// # Returns
    ///
    /// Returns [`TaxCalculationResult`] with per-category taxes and totals
    /// rounded to cents, and a [`TaxBreakdown`] echoing the configured rates.
    /// `total_tax` and `grand_total` are sums of the rounded components, so
    /// the printed lines always add up.
    pub fn calculate(&self, input: &TaxCalculationInput) -> TaxCalculationResult {
        // Step 1: exempt customers pay the plain amounts, no tax
        if self.is_exempt(input) {
            debug!(
                customer_tax_exempt = ?input.customer_tax_exempt,
                customer_exemption_id = ?input.customer_exemption_id,
                "customer is tax exempt; skipping tax"
            );
            return self.exempt_result(input);
        }

        // Step 2: effective fractional rates
        let labor_rate =
            self.effective_rate(self.settings.apply_tax_to_labor, self.settings.labor_tax_rate);
        let parts_rate =
            self.effective_rate(self.settings.apply_tax_to_parts, self.settings.parts_tax_rate);

        // Step 3: tax amounts per the calculation method
        let (mut labor_tax, mut parts_tax) = match self.settings.tax_calculation_method {
            TaxCalculationMethod::Separate => self.separate_taxes(input, labor_rate, parts_rate),
            TaxCalculationMethod::Compound => self.compound_taxes(input, labor_rate, parts_rate),
        };

        // Step 4: totals per the display method. Inclusive display recomputes
        // the taxes from the tax-inclusive amounts, replacing the method split.
        let (labor_total, parts_total) = match self.settings.tax_display_method {
            TaxDisplayMethod::Exclusive => (
                input.labor_amount + labor_tax,
                input.parts_amount + parts_tax,
            ),
            TaxDisplayMethod::Inclusive => {
                labor_tax = self.inclusive_tax(input.labor_amount, labor_rate);
                parts_tax = self.inclusive_tax(input.parts_amount, parts_rate);
                (input.labor_amount, input.parts_amount)
            }
        };

        // Step 5: round each component, then sum the rounded values
        let labor_tax = round_half_up(labor_tax);
        let parts_tax = round_half_up(parts_tax);
        let labor_total = round_half_up(labor_total);
        let parts_total = round_half_up(parts_total);

        TaxCalculationResult {
            labor_tax,
            parts_tax,
            total_tax: labor_tax + parts_tax,
            labor_total,
            parts_total,
            grand_total: labor_total + parts_total,
            breakdown: self.configured_breakdown(),
        }
    }

    /// Checks the two exemption markers.
    ///
    /// The override flag wins when set; otherwise the exemption id is looked
    /// up in the tenant's exempt list. `Some(false)` is not a veto, it just
    /// falls through to the list.
    fn is_exempt(&self, input: &TaxCalculationInput) -> bool {
        if input.customer_tax_exempt == Some(true) {
            return true;
        }
        input
            .customer_exemption_id
            .as_deref()
            .is_some_and(|id| self.settings.is_customer_exempt(id))
    }

    /// Builds the zero-tax result for an exempt customer.
    ///
    /// Totals are the input amounts rounded to cents. The breakdown reports
    /// zero rates and marks the description with an `" (Exempt)"` suffix.
    fn exempt_result(&self, input: &TaxCalculationInput) -> TaxCalculationResult {
        let labor_total = round_half_up(input.labor_amount);
        let parts_total = round_half_up(input.parts_amount);

        TaxCalculationResult {
            labor_tax: Decimal::ZERO,
            parts_tax: Decimal::ZERO,
            total_tax: Decimal::ZERO,
            labor_total,
            parts_total,
            grand_total: labor_total + parts_total,
            breakdown: TaxBreakdown {
                labor_tax_rate: Decimal::ZERO,
                parts_tax_rate: Decimal::ZERO,
                tax_description: format!("{} (Exempt)", self.settings.tax_description),
            },
        }
    }

    /// Returns the fractional rate for a category, zero when the category is
    /// not taxed.
    fn effective_rate(&self, applies: bool, configured_percent: Decimal) -> Decimal {
        if applies {
            rate_from_percent(configured_percent)
        } else {
            Decimal::ZERO
        }
    }

    /// Taxes each category at its own rate.
    fn separate_taxes(
        &self,
        input: &TaxCalculationInput,
        labor_rate: Decimal,
        parts_rate: Decimal,
    ) -> (Decimal, Decimal) {
        (
            input.labor_amount * labor_rate,
            input.parts_amount * parts_rate,
        )
    }

    /// Taxes the combined subtotal at a blended rate, then apportions the tax
    /// back to each category by its share of the subtotal.
    ///
    /// A zero subtotal yields zero tax for both categories; the blend is
    /// never computed over an empty base.
    fn compound_taxes(
        &self,
        input: &TaxCalculationInput,
        labor_rate: Decimal,
        parts_rate: Decimal,
    ) -> (Decimal, Decimal) {
        let subtotal = input.labor_amount + input.parts_amount;

        if subtotal.is_zero() {
            warn!(
                labor_rate = %labor_rate,
                parts_rate = %parts_rate,
                "compound subtotal is zero; no tax to blend"
            );
            return (Decimal::ZERO, Decimal::ZERO);
        }

        let blended_rate =
            (input.labor_amount * labor_rate + input.parts_amount * parts_rate) / subtotal;
        let total_tax = subtotal * blended_rate;

        (
            total_tax * (input.labor_amount / subtotal),
            total_tax * (input.parts_amount / subtotal),
        )
    }

    /// Backs the tax out of a tax-inclusive amount: `amount - amount / (1 + rate)`.
    fn inclusive_tax(&self, amount: Decimal, rate: Decimal) -> Decimal {
        amount - amount / (Decimal::ONE + rate)
    }

    /// Echoes the configured rates and description.
    ///
    /// Reports the rates as configured, not the effective ones: a category
    /// with tax switched off still shows its nominal rate.
    fn configured_breakdown(&self) -> TaxBreakdown {
        TaxBreakdown {
            labor_tax_rate: self.settings.labor_tax_rate,
            parts_tax_rate: self.settings.parts_tax_rate,
            tax_description: self.settings.tax_description.clone(),
        }
    }
}
