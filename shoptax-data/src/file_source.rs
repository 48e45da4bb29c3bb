use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use shoptax_core::{SettingsSourceError, TaxSettings, TaxSettingsSource};
use tracing::debug;

/// A `TaxSettingsSource` backed by a directory of per-tenant JSON files.
///
/// Each tenant's settings live at `<root>/<tenant_id>.json`, in the same
/// payload shape the hosted settings endpoint serves. A missing file maps
/// to `SettingsSourceError::TenantNotFound`; any other I/O failure is
/// reported as a backend error with the offending path.
pub struct FileSettingsSource {
    root: PathBuf,
}

impl FileSettingsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn settings_path(&self, tenant_id: &str) -> PathBuf {
        self.root.join(format!("{tenant_id}.json"))
    }
}

#[async_trait]
impl TaxSettingsSource for FileSettingsSource {
    async fn tax_settings(&self, tenant_id: &str) -> Result<TaxSettings, SettingsSourceError> {
        let path = self.settings_path(tenant_id);

        let payload = match tokio::fs::read_to_string(&path).await {
            Ok(payload) => payload,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(SettingsSourceError::TenantNotFound(tenant_id.to_string()));
            }
            Err(err) => {
                return Err(SettingsSourceError::Backend(format!(
                    "{}: {}",
                    path.display(),
                    err
                )));
            }
        };

        debug!(tenant_id = %tenant_id, path = %path.display(), "loaded tax settings document");
        Ok(serde_json::from_str(&payload)?)
    }
}
