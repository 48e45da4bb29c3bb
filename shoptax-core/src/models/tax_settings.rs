use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating tenant tax settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxSettingsError {
    /// The labor tax rate must be a percentage between 0 and 100.
    #[error("labor tax rate must be between 0 and 100, got {0}")]
    InvalidLaborTaxRate(Decimal),

    /// The parts tax rate must be a percentage between 0 and 100.
    #[error("parts tax rate must be between 0 and 100, got {0}")]
    InvalidPartsTaxRate(Decimal),

    /// The tax description must contain at least one non-whitespace character.
    #[error("tax description must not be blank")]
    BlankTaxDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxCalculationMethod {
    Separate,
    Compound,
}

impl TaxCalculationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Separate => "separate",
            Self::Compound => "compound",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "separate" => Some(Self::Separate),
            "compound" => Some(Self::Compound),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxDisplayMethod {
    Exclusive,
    Inclusive,
}

impl TaxDisplayMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::Inclusive => "inclusive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "exclusive" => Some(Self::Exclusive),
            "inclusive" => Some(Self::Inclusive),
            _ => None,
        }
    }
}

/// Per-tenant tax configuration, in the shape the hosted backend stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSettings {
    pub apply_tax_to_labor: bool,
    pub apply_tax_to_parts: bool,

    /// Labor tax rate as a percentage, e.g. `7.25` means 7.25%.
    pub labor_tax_rate: Decimal,

    /// Parts tax rate as a percentage.
    pub parts_tax_rate: Decimal,

    pub tax_calculation_method: TaxCalculationMethod,
    pub tax_display_method: TaxDisplayMethod,

    /// Label shown on quotes and invoices, e.g. `"Sales Tax"`.
    pub tax_description: String,

    /// Customer identifiers that are exempt from tax for this tenant.
    #[serde(default)]
    pub tax_exempt_customers: Vec<String>,

    /// Backend row timestamp. Carried through untouched; never affects
    /// calculation.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaxSettings {
    /// Validates the settings values.
    ///
    /// The calculator trusts its configuration, so this is the guard to run
    /// after loading settings from the backend or from a file.
    ///
    /// # Errors
    ///
    /// Returns [`TaxSettingsError`] if:
    /// - `labor_tax_rate` is not in [0, 100]
    /// - `parts_tax_rate` is not in [0, 100]
    /// - `tax_description` is blank
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use shoptax_core::models::{TaxSettings, TaxSettingsError};
    ///
    /// let settings = TaxSettings {
    ///     labor_tax_rate: dec!(250.00),
    ///     ..TaxSettings::default()
    /// };
    ///
    /// let result = settings.validate();
    /// assert_eq!(result, Err(TaxSettingsError::InvalidLaborTaxRate(dec!(250.00))));
    /// ```
    pub fn validate(&self) -> Result<(), TaxSettingsError> {
        if self.labor_tax_rate < Decimal::ZERO || self.labor_tax_rate > Decimal::ONE_HUNDRED {
            return Err(TaxSettingsError::InvalidLaborTaxRate(self.labor_tax_rate));
        }
        if self.parts_tax_rate < Decimal::ZERO || self.parts_tax_rate > Decimal::ONE_HUNDRED {
            return Err(TaxSettingsError::InvalidPartsTaxRate(self.parts_tax_rate));
        }
        if self.tax_description.trim().is_empty() {
            return Err(TaxSettingsError::BlankTaxDescription);
        }
        Ok(())
    }

    /// Returns whether `customer_id` appears in the tenant's exempt list.
    pub fn is_customer_exempt(&self, customer_id: &str) -> bool {
        self.tax_exempt_customers
            .iter()
            .any(|id| id == customer_id)
    }
}

impl Default for TaxSettings {
    /// New-tenant defaults: both categories taxable at a zero rate,
    /// separate/exclusive, labelled "Sales Tax", no exemptions.
    fn default() -> Self {
        Self {
            apply_tax_to_labor: true,
            apply_tax_to_parts: true,
            labor_tax_rate: Decimal::ZERO,
            parts_tax_rate: Decimal::ZERO,
            tax_calculation_method: TaxCalculationMethod::Separate,
            tax_display_method: TaxDisplayMethod::Exclusive,
            tax_description: "Sales Tax".to_string(),
            tax_exempt_customers: Vec::new(),
            updated_at: None,
        }
    }
}
