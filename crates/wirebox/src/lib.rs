//! # wirebox
//!
//! A type-keyed dependency injection container with a small demo object
//! graph: two leaf services, two view-model adapters and a composition root
//! that wires them together.
//!
//! ## Architecture
//!
//! The workspace follows a layered layout:
//!
//! - `domain` - service ports and the error taxonomy
//! - `providers` - concrete implementations of the domain ports
//! - `infrastructure` - the container core, locking and logging
//! - `bootstrap` - the composition root assembling the object graph
//! - `view_models` - presentation-facing adapters over the services
//!
//! ## Example
//!
//! ```rust
//! use wirebox::bootstrap::{build_view_models, setup_dependencies};
//! use wirebox::infrastructure::di::Container;
//!
//! # fn main() -> wirebox::domain::error::Result<()> {
//! let container = Container::new();
//! setup_dependencies(&container)?;
//!
//! let view_models = build_view_models(&container)?;
//! view_models.counter.increment();
//! assert_eq!(view_models.counter.count(), 1);
//! # Ok(())
//! # }
//! ```

/// Domain layer - service ports and error taxonomy
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Providers - concrete implementations of the domain ports
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use wirebox_providers::*;
}

/// Infrastructure layer - container core, locking and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

pub mod bootstrap;
pub mod view_models;

// Re-export commonly used types at the crate root
pub use bootstrap::{AppViewModels, DEFAULT_GREETING, build_view_models, setup_dependencies};
pub use domain::{Error, Result};
pub use infrastructure::di::{Container, Scope};
pub use view_models::{CounterViewModel, MessageViewModel};
