#![allow(dead_code)]

use secrecy::Secret;
use std::collections::HashMap;
use std::io::Write;
use stytch_admin::commands::{AllowAllJit, UpdateRbacPolicy};
use stytch_admin::config::{ManagementConfig, ORGANIZATION_ENV, SESSION_TOKEN_ENV};
use tempfile::NamedTempFile;
use wiremock::MockServer;

pub const TEST_PROJECT_ID: &str = "proj-123";
pub const TEST_SECRET: &str = "secret-abc";
pub const TEST_ORG_ID: &str = "organization-prod-1";
pub const TEST_SESSION_TOKEN: &str = "tok-xyz";

/// `Basic base64("proj-123:secret-abc")`
pub const TEST_PROJECT_BASIC_AUTH: &str = "Basic cHJvai0xMjM6c2VjcmV0LWFiYw==";

pub const TEST_KEY_ID: &str = "workspace-key-1";
pub const TEST_KEY_SECRET: &str = "workspace-secret";
pub const TEST_MGMT_PROJECT_ID: &str = "project-test-123";

/// `Basic base64("workspace-key-1:workspace-secret")`
pub const TEST_MANAGEMENT_BASIC_AUTH: &str =
    "Basic d29ya3NwYWNlLWtleS0xOndvcmtzcGFjZS1zZWNyZXQ=";

pub struct TestContext {
    pub server: MockServer,
    pub dev_vars: NamedTempFile,
}

impl TestContext {
    /// Mock server plus a dev vars file holding the test credentials.
    pub async fn spawn() -> Self {
        Self::with_dev_vars(&format!(
            "STYTCH_PROJECT={}\nSTYTCH_SECRET={}\n",
            TEST_PROJECT_ID, TEST_SECRET
        ))
        .await
    }

    pub async fn with_dev_vars(contents: &str) -> Self {
        let server = MockServer::start().await;
        let dev_vars = write_temp(contents, ".vars");
        TestContext { server, dev_vars }
    }

    pub fn allow_all_jit(&self) -> AllowAllJit {
        AllowAllJit {
            dev_vars_path: self.dev_vars.path().to_path_buf(),
            api_base_url: Some(self.server.uri()),
            timeout: None,
        }
    }

    pub fn update_rbac_policy(&self, policy: Option<&NamedTempFile>) -> UpdateRbacPolicy {
        UpdateRbacPolicy {
            config: ManagementConfig {
                key_id: TEST_KEY_ID.to_string(),
                key_secret: Secret::new(TEST_KEY_SECRET.to_string()),
                project_id: TEST_MGMT_PROJECT_ID.to_string(),
                api_base_url: self.server.uri(),
                timeout: None,
            },
            policy_path: policy.map(|f| f.path().to_path_buf()),
        }
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

pub fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

pub fn env_lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| env.get(name).cloned()
}

/// Both runtime variables set to the test organization and token.
pub fn session_env() -> impl Fn(&str) -> Option<String> {
    env_lookup(&[
        (ORGANIZATION_ENV, TEST_ORG_ID),
        (SESSION_TOKEN_ENV, TEST_SESSION_TOKEN),
    ])
}
