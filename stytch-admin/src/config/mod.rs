use admin_core::config::{require_env, DevVars};
use admin_core::error::AdminError;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

/// Keys read from the dev vars file.
pub const PROJECT_KEY: &str = "STYTCH_PROJECT";
pub const SECRET_KEY: &str = "STYTCH_SECRET";

/// Environment variables read at runtime.
pub const ORGANIZATION_ENV: &str = "STYTCH_ORGANIZATION";
pub const SESSION_TOKEN_ENV: &str = "HACK_STYTCH_SESSION_TOKEN_FROM_BROWSER";

pub const LIVE_API_URL: &str = "https://api.stytch.com";
pub const TEST_API_URL: &str = "https://test.stytch.com";

/// Project id and secret authenticating the calling application.
#[derive(Clone, Debug)]
pub struct ProjectCredentials {
    pub project_id: String,
    pub secret: Secret<String>,
}

impl ProjectCredentials {
    pub fn from_dev_vars(vars: &DevVars) -> Result<Self, AdminError> {
        Ok(Self {
            project_id: vars.require(PROJECT_KEY)?.to_string(),
            secret: Secret::new(vars.require(SECRET_KEY)?.to_string()),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && !self.secret.expose_secret().is_empty()
    }
}

/// Target organization and the member session authorising the change.
#[derive(Clone, Debug)]
pub struct SessionInputs {
    pub organization_id: String,
    pub session_token: Secret<String>,
}

impl SessionInputs {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AdminError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let organization_id = require_env(&lookup, ORGANIZATION_ENV)?;
        let session_token = require_env(&lookup, SESSION_TOKEN_ENV)?;

        Ok(Self {
            organization_id,
            session_token: Secret::new(session_token),
        })
    }
}

#[derive(Clone, Debug)]
pub struct StytchConfig {
    pub credentials: ProjectCredentials,
    pub api_base_url: String,
    pub timeout: Option<Duration>,
}

impl StytchConfig {
    /// Without an explicit base URL, test projects go to the test host.
    pub fn new(credentials: ProjectCredentials, api_base_url: Option<String>) -> Self {
        let api_base_url = api_base_url
            .unwrap_or_else(|| default_api_url(&credentials.project_id).to_string());

        Self {
            credentials,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

pub fn default_api_url(project_id: &str) -> &'static str {
    if project_id.contains("test") {
        TEST_API_URL
    } else {
        LIVE_API_URL
    }
}

/// Management API key pair and the project whose policy is replaced.
#[derive(Clone, Debug)]
pub struct ManagementConfig {
    pub key_id: String,
    pub key_secret: Secret<String>,
    pub project_id: String,
    pub api_base_url: String,
    pub timeout: Option<Duration>,
}

impl ManagementConfig {
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty()
            && !self.key_secret.expose_secret().is_empty()
            && !self.project_id.is_empty()
    }
}
