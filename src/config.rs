//! Path conventions and per-instance configuration.
//!
//! Conventions decide where each definition kind lives and which route
//! opens the application. They load from a TOML file when one exists
//! and fall back to the fixed defaults otherwise.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::route;

/// Errors that can occur when loading conventions.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Where definitions live and which route opens the application.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Conventions {
    /// Root for controller paths: `{controllers_root}/{id}`.
    pub controllers_root: String,
    /// Root for view paths: `{views_root}/{controller}/{view}`.
    pub views_root: String,
    /// Root for model paths: `{models_root}/{id}`.
    pub models_root: String,
    /// Route dispatched by `Dispatcher::invoke_default`.
    pub default_route: Option<String>,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            controllers_root: "/controllers".to_string(),
            views_root: "/views".to_string(),
            models_root: "/models".to_string(),
            default_route: None,
        }
    }
}

impl Conventions {
    /// Load conventions from a TOML file.
    ///
    /// - If the file doesn't exist, returns `Conventions::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let conventions: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        conventions.validate()?;
        Ok(conventions)
    }

    /// Validates the conventions.
    ///
    /// Checks:
    /// - Every root is non-empty
    /// - The default route, when set, has a dispatchable shape
    pub fn validate(&self) -> Result<(), ConfigError> {
        let roots = [
            ("controllers_root", &self.controllers_root),
            ("views_root", &self.views_root),
            ("models_root", &self.models_root),
        ];
        for (name, root) in roots {
            if root.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: format!("{name} must not be empty"),
                });
            }
        }

        if let Some(route) = &self.default_route {
            if route::resolve_top_level(route).is_err() {
                return Err(ConfigError::ValidationError {
                    message: format!("default_route '{route}' is not a valid route"),
                });
            }
        }

        Ok(())
    }

    pub(crate) fn controller_path(&self, id: &str) -> String {
        format!("{}/{}", self.controllers_root, id)
    }

    pub(crate) fn view_path(&self, controller: &str, view: &str) -> String {
        format!("{}/{}/{}", self.views_root, controller, view)
    }

    pub(crate) fn model_path(&self, id: &str) -> String {
        format!("{}/{}", self.models_root, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_layout_contract() {
        let conventions = Conventions::default();
        assert_eq!(conventions.controller_path("home"), "/controllers/home");
        assert_eq!(conventions.view_path("home", "list"), "/views/home/list");
        assert_eq!(conventions.model_path("contacts"), "/models/contacts");
        assert!(conventions.default_route.is_none());
    }

    #[test]
    fn empty_root_fails_validation() {
        let conventions = Conventions {
            views_root: String::new(),
            ..Conventions::default()
        };
        assert!(matches!(
            conventions.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn malformed_default_route_fails_validation() {
        let conventions = Conventions {
            default_route: Some("a/b/c".to_string()),
            ..Conventions::default()
        };
        assert!(matches!(
            conventions.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn bare_controller_default_route_is_valid() {
        let conventions = Conventions {
            default_route: Some("home".to_string()),
            ..Conventions::default()
        };
        assert!(conventions.validate().is_ok());
    }
}
