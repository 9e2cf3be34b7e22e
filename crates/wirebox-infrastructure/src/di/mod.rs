//! Type-keyed dependency injection container
//!
//! A registry that maps type identities to either lazily-invoked factories or
//! eagerly-created singletons, and resolves dependencies transitively through
//! an explicit [`Scope`].
//!
//! ## Registration kinds
//!
//! | Kind | Registered with | Factory runs | Each resolve yields |
//! |------|-----------------|--------------|---------------------|
//! | Transient | [`Container::register`] | on every resolve | a fresh instance |
//! | Singleton | [`Container::register_singleton`] | once, at registration | the shared instance |
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use wirebox_infrastructure::di::Container;
//!
//! struct Greeting(&'static str);
//!
//! # fn main() -> wirebox_domain::error::Result<()> {
//! let container = Container::new();
//! container.register::<Greeting, _>(|_| Ok(Arc::new(Greeting("hi"))))?;
//!
//! let greeting = container.resolve::<Greeting>()?;
//! assert_eq!(greeting.0, "hi");
//! # Ok(())
//! # }
//! ```
//!
//! Factories receive the resolution [`Scope`] as an explicit parameter and
//! use it to resolve their own dependencies, which keeps dependency graphs
//! visible at the registration site and lets the scope reject cycles.

mod container;
mod scope;

pub use container::Container;
pub use scope::Scope;
