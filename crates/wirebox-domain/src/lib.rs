//! Domain layer for wirebox - service ports and error taxonomy
//!
//! This crate defines the contracts the container wires together: the leaf
//! service ports consumed by the presentation layer and the error type shared
//! by every other crate in the workspace. It has no knowledge of the
//! container itself, so port implementations stay free of registry concerns.

pub mod error;
pub mod ports;

pub use error::{Error, Result};
pub use ports::{Counter, MessageProvider};
