//! Replace a project's RBAC policy through the management API.

use crate::config::ManagementConfig;
use crate::models::RbacPolicy;
use crate::services::{ManagementClient, RemoteResponse};
use admin_core::error::AdminError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct UpdateRbacPolicy {
    pub config: ManagementConfig,
    /// Falls back to the bundled policy.
    pub policy_path: Option<PathBuf>,
}

impl UpdateRbacPolicy {
    pub fn policy(&self) -> Result<RbacPolicy, AdminError> {
        match &self.policy_path {
            Some(path) => RbacPolicy::load(path),
            None => RbacPolicy::bundled(),
        }
    }

    pub async fn run(&self) -> Result<RemoteResponse, AdminError> {
        let policy = self.policy()?;
        let client = ManagementClient::new(self.config.clone())?;
        client.update_rbac_policy(&policy).await
    }
}

/// Success report printed on stdout.
pub fn render_success(response: &RemoteResponse) -> String {
    let body = response
        .json()
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| response.body.clone());

    format!(
        "Success! status code: {}\nResponse: {}",
        response.status.as_u16(),
        body
    )
}
