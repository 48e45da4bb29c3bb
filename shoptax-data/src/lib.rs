pub mod exemptions;
pub mod file_source;
pub mod settings;

pub use exemptions::{ExemptCustomerImport, ExemptCustomerRecord, ExemptionImportError};
pub use file_source::FileSettingsSource;
pub use settings::{SettingsLoadError, SettingsLoader};
