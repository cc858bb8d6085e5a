//! Access-control modules: the per-actor rule set and the evaluator over it.

pub mod ability;

pub use ability::*;
// Also expose the action-set algebra under a shorter path.
pub use crate::rights;
