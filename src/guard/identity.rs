//! Identity lookup abstraction.
//!
//! The guard does not know how sessions or accounts are stored. An
//! `IdentitySource` is the collaborator that answers "who is making this
//! request", already reduced to role flags. `None` means a guest.

use crate::domain::User;
use crate::primitives::Actor;

/// Trait implemented by session/account adapters.
pub trait IdentitySource: Send + Sync {
    fn current_actor(&self) -> Option<Actor>;
}

/// Identity taken from an already-loaded account record, if any.
#[derive(Default, Debug, Clone)]
pub struct SessionUser(pub Option<User>);

impl IdentitySource for SessionUser {
    fn current_actor(&self) -> Option<Actor> {
        self.0.as_ref().map(User::actor)
    }
}

/// Fixed identity. Handy when the caller already resolved the role flags.
#[derive(Default, Debug, Clone, Copy)]
pub struct StaticIdentity(pub Option<Actor>);

impl IdentitySource for StaticIdentity {
    fn current_actor(&self) -> Option<Actor> {
        self.0
    }
}
