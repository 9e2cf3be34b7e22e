//! Counter Port
//!
//! Defines the contract for the shared counting service.

/// Mutable counting service shared between every resolver of the singleton
pub trait Counter: Send + Sync {
    /// Current count; a fresh counter starts at zero
    fn value(&self) -> i64;

    /// Add one to the count; every call changes observable state
    fn increment(&self);
}
