//! Registry configuration.
//!
//! Declarative seeding for an [`Rbac`](crate::Rbac) registry: which entities
//! exist and how they are associated. Configuration is read from JSON, either
//! inline, from a file, or from the file named by the `RBAC_CONFIG_PATH`
//! environment variable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env::VarError;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::RbacError;
use crate::permissions::Permission;
use crate::subjects::{Role, User};

/// Environment variable naming the config file read by [`RbacConfig::from_env`].
pub const CONFIG_PATH_ENV: &str = "RBAC_CONFIG_PATH";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `RBAC_CONFIG_PATH` is set but is not valid unicode.
    #[error("Invalid {var} environment variable: {source}")]
    InvalidEnv {
        /// Variable that was read.
        var: &'static str,
        /// Underlying lookup error.
        #[source]
        source: VarError,
    },

    /// Config is not valid JSON or does not match the expected shape.
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// An association names an entity the config does not declare.
    #[error("Invalid association {left} -> {right}: {source}")]
    InvalidAssociation {
        /// Role or user side of the association.
        left: String,
        /// Permission or role side of the association.
        right: String,
        /// Which entity was missing.
        #[source]
        source: RbacError,
    },
}

/// Declarative description of a registry.
///
/// Every field is optional in JSON and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RbacConfig {
    /// Permissions to register.
    pub permissions: Vec<Permission>,

    /// Roles to register.
    pub roles: Vec<Role>,

    /// Users to register.
    pub users: Vec<User>,

    /// Permissions granted to each role.
    pub role_permissions: BTreeMap<Role, Vec<Permission>>,

    /// Roles assigned to each user.
    pub user_roles: BTreeMap<User, Vec<Role>>,
}

impl RbacConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Load a config from the file named by `RBAC_CONFIG_PATH`.
    ///
    /// An unset variable yields an empty config. A set but non-unicode value
    /// is an error rather than being treated as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_value(std::env::var(CONFIG_PATH_ENV))
    }

    fn from_env_value(value: Result<String, VarError>) -> Result<Self, ConfigError> {
        match value {
            Ok(path) => {
                tracing::info!(path = %path, "Loading RBAC config");
                Self::from_file(path)
            }
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(source) => Err(ConfigError::InvalidEnv {
                var: CONFIG_PATH_ENV,
                source,
            }),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
