//! Infrastructure layer for wirebox
//!
//! Hosts the container core (type-keyed registry and resolution scope),
//! lock-poisoning helpers and the tracing-based logging bootstrap.

pub mod di;
pub mod locks;
pub mod logging;

pub use di::{Container, Scope};
