//!
//! Request guard: turns a controller request into an ability check and the
//! ability's decision into what the controller should do next.

use crate::access::Ability;
use crate::config::{GuardConfig, GuardMode};
use crate::error::GuardError;
use crate::guard::identity::IdentitySource;
use crate::primitives::{Actor, Decision, DenialKind, Resource};
use crate::types::{Action, ResourceType};

/// The seven conventional controller actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerAction {
    Index,
    Show,
    New,
    Edit,
    Create,
    Update,
    Destroy,
}

impl ControllerAction {
    /// The ability action this controller action is an alias of.
    pub fn ability_action(&self) -> Action {
        match self {
            ControllerAction::Index | ControllerAction::Show => Action::Read,
            ControllerAction::New | ControllerAction::Create => Action::Create,
            ControllerAction::Edit | ControllerAction::Update => Action::Update,
            ControllerAction::Destroy => Action::Delete,
        }
    }
}

impl TryFrom<&str> for ControllerAction {
    type Error = GuardError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "index" => Ok(ControllerAction::Index),
            "show" => Ok(ControllerAction::Show),
            "new" => Ok(ControllerAction::New),
            "edit" => Ok(ControllerAction::Edit),
            "create" => Ok(ControllerAction::Create),
            "update" => Ok(ControllerAction::Update),
            "destroy" => Ok(ControllerAction::Destroy),
            other => Err(GuardError::UnknownControllerAction(other.to_string())),
        }
    }
}

/// One incoming request, reduced to what the guard needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardRequest {
    pub action: ControllerAction,
    pub resource: ResourceType,
    /// Path the user asked for; echoed back so they can resume after login.
    pub path: String,
}

impl GuardRequest {
    pub fn new(action: ControllerAction, resource: ResourceType, path: impl Into<String>) -> Self {
        GuardRequest { action, resource, path: path.into() }
    }

    /// Request about a specific record.
    pub fn for_record<R: Resource + ?Sized>(action: ControllerAction, record: &R, path: impl Into<String>) -> Self {
        Self::new(action, record.resource_type(), path)
    }

    /// Parses the controller action name, rejecting anything unknown.
    pub fn parse(action: &str, resource: ResourceType, path: impl Into<String>) -> Result<Self, GuardError> {
        let action = ControllerAction::try_from(action).map_err(|e| {
            tracing::warn!(action, %resource, "rejected unknown controller action");
            e
        })?;
        Ok(Self::new(action, resource, path))
    }
}

/// What the controller should do with the request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Proceed,
    /// Authentication challenge. `return_to` is the path to resume afterwards.
    RedirectToLogin { login_path: String, return_to: String },
    /// Refusal for an identified actor; no credential prompt.
    RedirectToForbidden { path: String },
}

impl Outcome {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Outcome::Proceed)
    }

    /// Redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            Outcome::Proceed => None,
            Outcome::RedirectToLogin { login_path, .. } => Some(login_path),
            Outcome::RedirectToForbidden { path } => Some(path),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Guard {
    config: GuardConfig,
}

impl Guard {
    pub fn new(config: GuardConfig) -> Self {
        Guard { config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Decides a request for an explicit actor (`None` is a guest).
    pub fn check(&self, actor: Option<&Actor>, request: &GuardRequest) -> Outcome {
        let action = request.action.ability_action();
        let decision = match self.config.mode_for(request.resource) {
            GuardMode::Authorize => Ability::for_actor(actor).evaluate(action, &request.resource),
            GuardMode::RequireLogin => Self::require_login(actor, action),
            GuardMode::AuthenticateAndAuthorize => {
                if actor.map(Actor::is_registered).unwrap_or(false) {
                    Ability::for_actor(actor).evaluate(action, &request.resource)
                } else {
                    Decision::Denied(DenialKind::AuthenticationRequired)
                }
            }
        };
        let outcome = self.outcome_for(decision, request);
        tracing::debug!(
            controller_action = ?request.action,
            resource = %request.resource,
            path = %request.path,
            ?outcome,
            "guard checked request"
        );
        outcome
    }

    /// Decides a request for whoever the identity source reports.
    pub fn check_with<I: IdentitySource + ?Sized>(&self, identity: &I, request: &GuardRequest) -> Outcome {
        let actor = identity.current_actor();
        self.check(actor.as_ref(), request)
    }

    /// Parses a controller action name and decides the request.
    pub fn check_named(
        &self,
        actor: Option<&Actor>,
        action: &str,
        resource: ResourceType,
        path: &str,
    ) -> Result<Outcome, GuardError> {
        let request = GuardRequest::parse(action, resource, path)?;
        Ok(self.check(actor, &request))
    }

    // Reads stay public; anything else needs an account. No role check.
    fn require_login(actor: Option<&Actor>, action: Action) -> Decision {
        let registered = actor.map(Actor::is_registered).unwrap_or(false);
        if action == Action::Read || registered {
            Decision::Allowed
        } else {
            Decision::Denied(DenialKind::AuthenticationRequired)
        }
    }

    fn outcome_for(&self, decision: Decision, request: &GuardRequest) -> Outcome {
        match decision {
            Decision::Allowed => Outcome::Proceed,
            Decision::Denied(DenialKind::AuthenticationRequired) => Outcome::RedirectToLogin {
                login_path: self.config.login_path.clone(),
                return_to: request.path.clone(),
            },
            Decision::Denied(DenialKind::AuthorizationDenied) => Outcome::RedirectToForbidden {
                path: self.config.forbidden_path.clone(),
            },
        }
    }
}
