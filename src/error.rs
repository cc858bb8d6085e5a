//!
//! Defines error types for the ability engine and the request guard.

use crate::types::{Action, ResourceType};

/// A refused `authorize` call. The two variants mirror `DenialKind`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The actor has no identity and the action needs one.
    #[error("You need to sign in before you can {action} {resource}")]
    AuthenticationRequired { action: Action, resource: ResourceType },
    /// The actor is signed in but lacks the privilege.
    #[error("You are not authorized to {action} {resource}")]
    AuthorizationDenied { action: Action, resource: ResourceType },
}

/// Errors raised while mapping a request onto the ability engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    /// The controller action name has no ability action alias.
    #[error("Unknown controller action: {0}")]
    UnknownControllerAction(String),
}

/// Errors raised while loading guard configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read guard config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse guard config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A configured redirect path is empty or relative.
    #[error("Invalid guard config: {0}")]
    Invalid(String),
}
