//! Provider implementations for wirebox
//!
//! Concrete services behind the `wirebox-domain` ports. These are leaf types:
//! they depend on nothing but the port contracts, so the composition root can
//! register them without ordering constraints of their own.

mod counter;
mod message;

pub use counter::AtomicCounter;
pub use message::StaticMessageProvider;
