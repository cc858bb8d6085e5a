use crate::types::{Action, ActionMask, ResourceType};

// --- Actor -------------------------------------------------------------------

/// The identity on whose behalf an action is attempted.
///
/// Built only through the constructors below so that an unregistered actor
/// can never carry the administrator bit. Deserialization goes through
/// `from_flags` as well.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "ActorFlags")]
pub struct Actor {
    is_administrator: bool,
    is_registered: bool,
}

// Wire shape of `Actor`; never handed out unchecked.
#[derive(serde::Deserialize)]
struct ActorFlags {
    #[serde(default)]
    is_administrator: bool,
    #[serde(default)]
    is_registered: bool,
}

impl From<ActorFlags> for Actor {
    fn from(flags: ActorFlags) -> Self {
        Actor::from_flags(flags.is_administrator, flags.is_registered)
    }
}

impl Actor {
    /// A visitor without an account. Same as `Actor::default()`.
    pub const fn guest() -> Self {
        Actor { is_administrator: false, is_registered: false }
    }

    /// A signed-in account without the admin flag.
    pub const fn registered() -> Self {
        Actor { is_administrator: false, is_registered: true }
    }

    /// A signed-in account with the admin flag.
    pub const fn administrator() -> Self {
        Actor { is_administrator: true, is_registered: true }
    }

    /// Builds an actor from raw role flags. The admin bit is dropped for an
    /// unregistered identity.
    pub const fn from_flags(is_administrator: bool, is_registered: bool) -> Self {
        Actor {
            is_administrator: is_administrator && is_registered,
            is_registered,
        }
    }

    pub fn is_administrator(&self) -> bool {
        self.is_administrator
    }

    pub fn is_registered(&self) -> bool {
        self.is_registered
    }

    pub fn is_guest(&self) -> bool {
        !self.is_registered
    }
}

// --- Resources ---------------------------------------------------------------

/// Anything the engine can be asked about: a bare resource type or a record.
pub trait Resource {
    fn resource_type(&self) -> ResourceType;
}

impl Resource for ResourceType {
    fn resource_type(&self) -> ResourceType {
        *self
    }
}

impl<R: Resource + ?Sized> Resource for &R {
    fn resource_type(&self) -> ResourceType {
        (**self).resource_type()
    }
}

// --- Rules -------------------------------------------------------------------

/// Whether a matching rule grants or refuses the action.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Allow,
    Deny,
}

/// One declared grant: an action set over a resource scope with a polarity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PolicyRule {
    pub actions: ActionMask,   // see `rights::core`
    pub resource: ResourceType, // `All` is the wildcard scope
    pub polarity: Polarity,
}

impl PolicyRule {
    pub fn allow(actions: ActionMask, resource: ResourceType) -> Self {
        PolicyRule { actions, resource, polarity: Polarity::Allow }
    }

    pub fn deny(actions: ActionMask, resource: ResourceType) -> Self {
        PolicyRule { actions, resource, polarity: Polarity::Deny }
    }

    /// True when this rule's action set and scope both cover the request.
    pub fn matches(&self, action: Action, resource: ResourceType) -> bool {
        crate::rights::covers(self.actions, action) && self.resource.covers(resource)
    }
}

// --- Decision ----------------------------------------------------------------

/// Why a request was refused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DenialKind {
    /// The actor has no identity; signing in may help.
    AuthenticationRequired,
    /// The actor is identified but lacks the privilege.
    AuthorizationDenied,
}

/// The evaluator's answer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Decision {
    Allowed,
    Denied(DenialKind),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    /// The denial kind, or `None` when allowed.
    pub fn denial(&self) -> Option<DenialKind> {
        match self {
            Decision::Allowed => None,
            Decision::Denied(kind) => Some(*kind),
        }
    }
}
