//!
//! Action-set algebra for the ability engine.
//! Defines the bit flags an action set is stored as and the helpers rules use
//! to decide whether their action set covers a requested action.

use crate::types::{Action, ActionMask};

/// Action bit flags (bits 0-4 defined, 5-31 reserved).
pub mod core {
    use super::ActionMask;

    /// Permission to list or show a resource.
    pub const READ: ActionMask = 1 << 0; // 0b00001
    /// Permission to build and persist a new resource.
    pub const CREATE: ActionMask = 1 << 1; // 0b00010
    /// Permission to edit and save an existing resource.
    pub const UPDATE: ActionMask = 1 << 2; // 0b00100
    /// Permission to destroy a resource.
    pub const DELETE: ActionMask = 1 << 3; // 0b01000
    /// Wildcard permission. Implies every concrete action above.
    pub const MANAGE: ActionMask = 1 << 4; // 0b10000

    /// The concrete actions `MANAGE` expands to.
    pub const CRUD: ActionMask = READ | CREATE | UPDATE | DELETE;
}

/// Returns the single-bit mask for an action.
#[inline]
pub fn mask_of(action: Action) -> ActionMask {
    match action {
        Action::Read => core::READ,
        Action::Create => core::CREATE,
        Action::Update => core::UPDATE,
        Action::Delete => core::DELETE,
        Action::Manage => core::MANAGE,
    }
}

/// Builds a mask from a list of actions.
pub fn mask_from(actions: &[Action]) -> ActionMask {
    actions.iter().fold(0, |m, a| m | mask_of(*a))
}

/// Canonicalizes an action mask by adding any implied actions.
///
/// `MANAGE` implies every concrete action. The reverse does not hold: holding
/// all four concrete bits is not the same as holding `MANAGE`, so a request
/// for `manage` is only satisfied by a wildcard grant.
#[inline]
pub fn canonicalise(mask: ActionMask) -> ActionMask {
    let mut m = mask;
    if (m & core::MANAGE) == core::MANAGE {
        m |= core::CRUD;
    }
    m
}

/// Checks if a rule's action set (`have`) covers a required action set (`need`).
///
/// Corresponds to the rule: `(canonicalise(have) & need) == need`.
#[inline]
pub fn sufficient(have: ActionMask, need: ActionMask) -> bool {
    let canonical_have = canonicalise(have);
    (canonical_have & need) == need
}

/// Convenience over `sufficient` for a single requested action.
#[inline]
pub fn covers(have: ActionMask, action: Action) -> bool {
    sufficient(have, mask_of(action))
}
