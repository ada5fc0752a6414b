//! Loader for `KEY=VALUE` credential files such as `.dev.vars`.
//!
//! Blank lines and lines starting with `#` are skipped. Every other line
//! must contain exactly one `=`. A repeated key keeps its last value.

use crate::error::AdminError;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DevVars {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl DevVars {
    /// Read and parse the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AdminError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => AdminError::ConfigNotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => AdminError::ConfigUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let contents = String::from_utf8(bytes).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            AdminError::ConfigParse {
                path: path.to_path_buf(),
                line: valid.iter().filter(|b| **b == b'\n').count() + 1,
                reason: "invalid UTF-8".to_string(),
            }
        })?;

        let vars = Self::parse(path, &contents)?;
        tracing::debug!(path = %path.display(), keys = vars.values.len(), "Loaded dev vars");
        Ok(vars)
    }

    /// Parse file contents. `path` is only used for error reporting.
    pub fn parse(path: impl AsRef<Path>, contents: &str) -> Result<Self, AdminError> {
        let path = path.as_ref();
        let mut values = BTreeMap::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let separators = line.matches('=').count();
            if separators != 1 {
                return Err(AdminError::ConfigParse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason: format!("expected exactly one '=' but found {separators}"),
                });
            }

            // Exactly one separator was counted above.
            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            let key = key.trim();
            if key.is_empty() {
                return Err(AdminError::ConfigParse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    reason: "empty key".to_string(),
                });
            }

            values.insert(key.to_string(), value.trim().to_string());
        }

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Fetch a key that must be present.
    pub fn require(&self, key: &str) -> Result<&str, AdminError> {
        self.get(key).ok_or_else(|| AdminError::MissingConfigKey {
            path: self.path.clone(),
            key: key.to_string(),
        })
    }
}
