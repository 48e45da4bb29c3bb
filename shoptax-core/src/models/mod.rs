mod tax_calculation;
mod tax_settings;

pub use tax_calculation::{TaxBreakdown, TaxCalculationInput, TaxCalculationResult};
pub use tax_settings::{
    TaxCalculationMethod, TaxDisplayMethod, TaxSettings, TaxSettingsError,
};
