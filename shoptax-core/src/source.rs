//! Tenant configuration boundary.
//!
//! Tax settings live with the hosted backend; this crate only defines the
//! contract for fetching them. Backends implement [`TaxSettingsSource`] over
//! whatever transport they use (HTTP, database, local files for tooling).

use async_trait::async_trait;
use thiserror::Error;

use crate::models::TaxSettings;

#[derive(Debug, Error)]
pub enum SettingsSourceError {
    #[error("no tax settings for tenant '{0}'")]
    TenantNotFound(String),

    #[error("settings backend error: {0}")]
    Backend(String),

    #[error("malformed tax settings payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to a tenant's tax configuration.
#[async_trait]
pub trait TaxSettingsSource: Send + Sync {
    /// Fetches the tax settings for a tenant.
    async fn tax_settings(&self, tenant_id: &str) -> Result<TaxSettings, SettingsSourceError>;

    /// Returns whether a customer is tax exempt for a tenant.
    ///
    /// The default checks the tenant's exempt list; backends with a cheaper
    /// per-customer lookup can override it.
    async fn customer_tax_exempt(
        &self,
        tenant_id: &str,
        customer_id: &str,
    ) -> Result<bool, SettingsSourceError> {
        let settings = self.tax_settings(tenant_id).await?;
        Ok(settings.is_customer_exempt(customer_id))
    }
}
