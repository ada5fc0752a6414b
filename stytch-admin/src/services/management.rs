//! Stytch management API client, authenticated with a workspace key pair.

use super::{build_http_client, read_response, RemoteResponse};
use crate::config::ManagementConfig;
use crate::models::{RbacPolicy, UpdateRbacPolicyRequest};
use admin_core::error::{AdminError, RemoteError};
use reqwest::Client;
use secrecy::ExposeSecret;

#[derive(Clone)]
pub struct ManagementClient {
    client: Client,
    config: ManagementConfig,
}

impl ManagementClient {
    pub fn new(config: ManagementConfig) -> Result<Self, AdminError> {
        let client = build_http_client(config.timeout)?;
        Ok(Self { client, config })
    }

    pub fn rbac_policy_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/rbac_policy",
            self.config.api_base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.project_id)
        )
    }

    /// Replace the project's RBAC policy. Sends exactly one request.
    pub async fn update_rbac_policy(
        &self,
        policy: &RbacPolicy,
    ) -> Result<RemoteResponse, AdminError> {
        if !self.config.is_configured() {
            return Err(AdminError::InvalidInput(
                "management key id, secret and project id are required".to_string(),
            ));
        }

        let body = UpdateRbacPolicyRequest {
            project_id: &self.config.project_id,
            policy,
        };

        tracing::info!(
            project_id = %self.config.project_id,
            roles = policy.custom_roles.len(),
            scopes = policy.custom_scopes.len(),
            "Replacing RBAC policy"
        );

        let response = self
            .client
            .put(self.rbac_policy_url())
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(RemoteError::from)?;

        Ok(read_response(response, "rbac_policy.update").await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn test_config() -> ManagementConfig {
        ManagementConfig {
            key_id: "workspace-key-1".to_string(),
            key_secret: Secret::new("workspace-secret".to_string()),
            project_id: "project-test-123".to_string(),
            api_base_url: "https://management.stytch.com/".to_string(),
            timeout: None,
        }
    }

    #[test]
    fn test_rbac_policy_url() {
        let client = ManagementClient::new(test_config()).unwrap();
        assert_eq!(
            client.rbac_policy_url(),
            "https://management.stytch.com/v1/projects/project-test-123/rbac_policy"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_sending() {
        let config = ManagementConfig {
            key_id: String::new(),
            ..test_config()
        };
        let client = ManagementClient::new(config).unwrap();
        let policy = RbacPolicy::bundled().unwrap();

        let err = client.update_rbac_policy(&policy).await.unwrap_err();
        assert!(matches!(err, AdminError::InvalidInput(_)));
    }
}
