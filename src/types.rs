// Shared tags used across the ability engine: actions, resource types and the
// bit mask that action sets are stored as. Actor and rule structures live in
// `primitives.rs`.

use std::fmt;

/// ActionMask, a 32-bit field.
/// The interpretation of its bits is:
/// - Bits 0-3: Concrete actions (READ, CREATE, UPDATE, DELETE).
/// - Bit 4: MANAGE, the wildcard; implies bits 0-3.
/// - Bits 5-31: Reserved; never set by the engine and ignored by `rights::sufficient`
///   unless a caller asks for them explicitly.
pub type ActionMask = u32;

/// An action a controller may attempt on a resource.
///
/// `Manage` is the wildcard: a rule granting `Manage` covers every other action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Manage,
}

impl Action {
    /// Every action, wildcard included, in declaration order.
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::Manage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Manage => "manage",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Action {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "create" => Ok(Action::Create),
            "read" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "manage" => Ok(Action::Manage),
            _ => Err(format!("Invalid action: {}", value)),
        }
    }
}

/// The kind of object an action targets.
///
/// `All` is the wildcard scope. It is only meaningful inside a rule; asking
/// about `All` means "every resource type at once", so only a rule scoped to
/// `All` can answer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ResourceType {
    Contact,
    Phone,
    User,
    NewsRelease,
    All,
}

impl ResourceType {
    /// Every resource type, wildcard included.
    pub const ALL: [ResourceType; 5] = [
        ResourceType::Contact,
        ResourceType::Phone,
        ResourceType::User,
        ResourceType::NewsRelease,
        ResourceType::All,
    ];

    /// Returns true when a rule scoped to `self` covers a request about `requested`.
    #[inline]
    pub fn covers(&self, requested: ResourceType) -> bool {
        *self == ResourceType::All || *self == requested
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::Contact => "Contact",
            ResourceType::Phone => "Phone",
            ResourceType::User => "User",
            ResourceType::NewsRelease => "NewsRelease",
            ResourceType::All => "all",
        };
        f.write_str(name)
    }
}
