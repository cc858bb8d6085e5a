pub mod core;
pub mod identity;

#[cfg(test)]
mod tests;

// Re-export the primary types so callers can use `crate::guard::*` paths.
pub use core::{ControllerAction, Guard, GuardRequest, Outcome};
pub use identity::{IdentitySource, SessionUser, StaticIdentity};
