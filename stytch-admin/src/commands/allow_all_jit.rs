//! Switch an organization's email JIT provisioning to `ALL_ALLOWED`.

use crate::config::{ProjectCredentials, SessionInputs, StytchConfig};
use crate::models::UpdateOrganizationRequest;
use crate::services::{RemoteResponse, StytchClient};
use admin_core::config::{DevVars, ToolSettings};
use admin_core::error::AdminError;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AllowAllJit {
    pub dev_vars_path: PathBuf,
    pub api_base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl AllowAllJit {
    pub fn from_settings(settings: &ToolSettings) -> Self {
        Self {
            dev_vars_path: settings.dev_vars_path.clone(),
            api_base_url: settings.api_base_url.clone(),
            timeout: settings.request_timeout(),
        }
    }

    /// Load credentials and session inputs, then send the single update.
    /// Any loading failure returns before a request is built.
    pub async fn run<F>(&self, lookup: F) -> Result<RemoteResponse, AdminError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = DevVars::load(&self.dev_vars_path)?;
        let credentials = ProjectCredentials::from_dev_vars(&vars)?;
        let session = SessionInputs::from_lookup(lookup)?;

        let config = StytchConfig::new(credentials, self.api_base_url.clone())
            .with_timeout(self.timeout);
        let client = StytchClient::new(config)?;

        client
            .update_organization(
                &session.organization_id,
                &UpdateOrganizationRequest::allow_all_email_jit(),
                &session.session_token,
            )
            .await
    }
}
