pub mod rbac;

pub use rbac::{Permission, RbacPolicy, Resource, Role, Scope};

use serde::{Deserialize, Serialize};

/// Organization-level policy for creating members on first email login.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailJitProvisioning {
    Restricted,
    NotAllowed,
    AllAllowed,
}

/// Partial update body for `PUT /v1/b2b/organizations/{organization_id}`.
/// Unset fields are left untouched by the API.
#[derive(Debug, Serialize, Default)]
pub struct UpdateOrganizationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_jit_provisioning: Option<EmailJitProvisioning>,
}

impl UpdateOrganizationRequest {
    pub fn allow_all_email_jit() -> Self {
        Self {
            email_jit_provisioning: Some(EmailJitProvisioning::AllAllowed),
        }
    }
}

/// Body for `PUT /v1/projects/{project_id}/rbac_policy`.
#[derive(Debug, Serialize)]
pub struct UpdateRbacPolicyRequest<'a> {
    pub project_id: &'a str,
    pub policy: &'a RbacPolicy,
}
