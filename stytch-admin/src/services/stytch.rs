//! Stytch B2B API client.
//!
//! Only the organization update endpoint is implemented. Member-level
//! authorization is passed through the session header so Stytch enforces
//! the member's RBAC permissions on top of the project credentials.

use super::{build_http_client, read_response, RemoteResponse};
use crate::config::StytchConfig;
use crate::models::UpdateOrganizationRequest;
use admin_core::error::{AdminError, RemoteError};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

pub const MEMBER_SESSION_HEADER: &str = "X-Stytch-Member-Session";

/// Stytch client authenticated with project credentials.
#[derive(Clone)]
pub struct StytchClient {
    client: Client,
    config: StytchConfig,
}

impl StytchClient {
    pub fn new(config: StytchConfig) -> Result<Self, AdminError> {
        let client = build_http_client(config.timeout)?;
        Ok(Self { client, config })
    }

    /// Check if the project credentials are set.
    pub fn is_configured(&self) -> bool {
        self.config.credentials.is_configured()
    }

    pub fn organization_url(&self, organization_id: &str) -> String {
        format!(
            "{}/v1/b2b/organizations/{}",
            self.config.api_base_url,
            urlencoding::encode(organization_id)
        )
    }

    /// Apply a partial update to one organization, authorised by a member
    /// session. Sends exactly one request.
    pub async fn update_organization(
        &self,
        organization_id: &str,
        request: &UpdateOrganizationRequest,
        session_token: &Secret<String>,
    ) -> Result<RemoteResponse, AdminError> {
        if !self.is_configured() {
            return Err(AdminError::InvalidInput(
                "Stytch project credentials are empty".to_string(),
            ));
        }
        if organization_id.is_empty() {
            return Err(AdminError::InvalidInput(
                "organization id is empty".to_string(),
            ));
        }
        if session_token.expose_secret().is_empty() {
            return Err(AdminError::InvalidInput("session token is empty".to_string()));
        }

        let url = self.organization_url(organization_id);
        tracing::info!(
            organization_id,
            project_id = %self.config.credentials.project_id,
            "Updating Stytch organization"
        );

        let response = self
            .client
            .put(&url)
            .basic_auth(
                &self.config.credentials.project_id,
                Some(self.config.credentials.secret.expose_secret()),
            )
            .header(MEMBER_SESSION_HEADER, session_token.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(RemoteError::from)?;

        let response = read_response(response, "organizations.update").await?;
        tracing::info!(
            organization_id,
            status = %response.status,
            "Stytch organization updated"
        );
        Ok(response)
    }
}
