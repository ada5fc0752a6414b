//! Stytch RBAC policy documents.

use admin_core::error::AdminError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Policy shipped with the tools: OKR resources, a `manager` role and the
/// scopes handed out to MCP clients.
pub const BUNDLED_POLICY: &str = include_str!("../../policies/okr_rbac_policy.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacPolicy {
    #[serde(default)]
    pub custom_resources: Vec<Resource>,
    #[serde(default)]
    pub custom_roles: Vec<Role>,
    #[serde(default)]
    pub custom_scopes: Vec<Scope>,
    pub stytch_member: Role,
    pub stytch_admin: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub resource_id: String,
    pub available_actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub role_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scope {
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub resource_id: String,
    pub actions: Vec<String>,
}

impl RbacPolicy {
    pub fn bundled() -> Result<Self, AdminError> {
        Self::parse(Path::new("<bundled>"), BUNDLED_POLICY)
    }

    pub fn load(path: &Path) -> Result<Self, AdminError> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                AdminError::ConfigNotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                AdminError::ConfigUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::parse(path, &contents)
    }

    pub fn parse(path: &Path, contents: &str) -> Result<Self, AdminError> {
        let policy: RbacPolicy =
            serde_json::from_str(contents).map_err(|e| AdminError::ConfigParse {
                path: path.to_path_buf(),
                line: e.line(),
                reason: e.to_string(),
            })?;
        policy.validate(path)?;
        Ok(policy)
    }

    /// Every permission must point at a declared custom resource or a
    /// built-in `stytch.*` resource.
    fn validate(&self, path: &Path) -> Result<(), AdminError> {
        let permissions = self
            .custom_roles
            .iter()
            .chain([&self.stytch_member, &self.stytch_admin])
            .flat_map(|role| role.permissions.iter())
            .chain(self.custom_scopes.iter().flat_map(|s| s.permissions.iter()));

        for permission in permissions {
            let known = permission.resource_id.starts_with("stytch.")
                || self
                    .custom_resources
                    .iter()
                    .any(|r| r.resource_id == permission.resource_id);
            if !known {
                return Err(AdminError::ConfigInvalid {
                    path: path.to_path_buf(),
                    reason: format!("unknown resource_id {}", permission.resource_id),
                });
            }
        }

        Ok(())
    }
}
