//! Message Provider Port
//!
//! Defines the contract for the greeting source shown by the demo shell.

/// Read-only source of the message displayed at startup
pub trait MessageProvider: Send + Sync {
    /// The message to display, constant for the lifetime of the provider
    fn message(&self) -> &str;
}
