//! Domain records: the account an actor is derived from and the resources
//! requests are made about. Persistence lives elsewhere; these are the shapes
//! it hands over.

pub mod entity;

pub use entity::*;
