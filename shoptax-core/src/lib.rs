pub mod calculations;
pub mod format;
pub mod models;
pub mod source;

pub use calculations::SalesTaxCalculator;
pub use models::*;
pub use source::{SettingsSourceError, TaxSettingsSource};
