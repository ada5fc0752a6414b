pub mod dev_vars;

pub use dev_vars::DevVars;

use crate::error::AdminError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SETTINGS_FILE: &str = "stytch-admin";
pub const SETTINGS_ENV_PREFIX: &str = "STYTCH_ADMIN";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Tool-wide settings, layered from an optional `stytch-admin.*` file and
/// `STYTCH_ADMIN_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ToolSettings {
    #[serde(default = "default_dev_vars_path")]
    pub dev_vars_path: PathBuf,
    /// Overrides the Stytch API host picked from the project id.
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default = "default_management_api_url")]
    pub management_api_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_dev_vars_path() -> PathBuf {
    PathBuf::from(".dev.vars")
}

fn default_management_api_url() -> String {
    "https://management.stytch.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            dev_vars_path: default_dev_vars_path(),
            api_base_url: None,
            management_api_url: default_management_api_url(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            request_timeout_secs: None,
        }
    }
}

impl ToolSettings {
    /// Load `.env` into the process, then layer the settings file and
    /// environment.
    pub fn load() -> Result<Self, AdminError> {
        dotenvy::dotenv().ok();
        Self::from_sources(None, None)
    }

    /// `file` replaces the default `stytch-admin.*` lookup; `env` replaces
    /// the process environment.
    pub fn from_sources(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, AdminError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(SETTINGS_FILE).required(false),
        };

        let settings = Cfg::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Read a required, non-empty variable through `lookup`.
pub fn require_env<F>(lookup: &F, name: &str) -> Result<String, AdminError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AdminError::MissingEnvironment(name.to_string())),
    }
}

/// Process environment as a lookup function.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
