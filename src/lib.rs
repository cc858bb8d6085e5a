#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Contact-Ability is the authorization engine of a small contact manager.
//!
//! Every request is answered from the actor's role flags alone: administrators
//! manage everything, registered users manage contacts but never accounts, and
//! guests may only read. The engine never fails; a denial says whether signing
//! in could help (`AuthenticationRequired`) or not (`AuthorizationDenied`).

// Shared tags: actions, resource types, action masks.
pub mod types;

// Actor, rules and decisions.
pub mod primitives;

// Re-export core primitives for easier access at the crate root.
pub use primitives::*;

// Action-set algebra.
pub mod rights;

// Per-actor rule sets and the evaluator.
pub mod access;

pub use access::{evaluate, Ability};

// Account and resource records.
pub mod domain;

pub mod error;

pub mod config;

// Maps controller requests onto ability checks and redirects.
pub mod guard;

#[cfg(feature = "telemetry")]
pub mod telemetry;
