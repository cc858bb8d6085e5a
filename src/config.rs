//! Guard configuration: where denied requests are sent and how each resource
//! type is protected. Stored as JSON.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::ResourceType;

/// How the guard protects requests about one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardMode {
    /// Ask the ability engine.
    Authorize,
    /// Reads are public; every other action only needs a signed-in actor.
    RequireLogin,
    /// Every action needs a signed-in actor, who must then pass the ability engine.
    AuthenticateAndAuthorize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Target of authentication challenges.
    pub login_path: String,
    /// Target of authorization refusals.
    pub forbidden_path: String,
    /// Per-type overrides. Types not listed use `GuardMode::Authorize`.
    pub modes: HashMap<ResourceType, GuardMode>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        let mut modes = HashMap::new();
        modes.insert(ResourceType::Contact, GuardMode::Authorize);
        modes.insert(ResourceType::User, GuardMode::AuthenticateAndAuthorize);
        modes.insert(ResourceType::NewsRelease, GuardMode::RequireLogin);
        GuardConfig {
            login_path: "/login".to_string(),
            forbidden_path: "/".to_string(),
            modes,
        }
    }
}

impl GuardConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GuardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading guard config");
        Self::from_json_str(&raw)
    }

    pub fn mode_for(&self, resource: ResourceType) -> GuardMode {
        self.modes.get(&resource).copied().unwrap_or(GuardMode::Authorize)
    }

    /// Both redirect targets must be absolute paths on this host.
    /// `//host` and `/\host` are read by browsers as another origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in [("login_path", &self.login_path), ("forbidden_path", &self.forbidden_path)] {
            if !path.starts_with('/') {
                return Err(ConfigError::Invalid(format!("{} must start with '/': {:?}", name, path)));
            }
            if path.starts_with("//") || path.starts_with("/\\") {
                return Err(ConfigError::Invalid(format!("{} must not name another host: {:?}", name, path)));
            }
        }
        Ok(())
    }
}
