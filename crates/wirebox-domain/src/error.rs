//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the wirebox container and its demo application
#[derive(Error, Debug)]
pub enum Error {
    /// No factory or singleton is registered for the requested type
    #[error("No registration found for type: {type_name}")]
    NotRegistered {
        /// The type that was requested
        type_name: &'static str,
    },

    /// An entry exists under the key but its stored value is not the requested type
    #[error("Registered value for type {type_name} has a mismatched concrete type")]
    TypeMismatch {
        /// The type that was requested
        type_name: &'static str,
    },

    /// A factory re-entered a type that is already under construction
    #[error("Circular dependency while resolving {type_name}: {chain}")]
    CircularDependency {
        /// The type whose resolution closed the cycle
        type_name: &'static str,
        /// The resolution chain, outermost request first
        chain: String,
    },

    /// The composition root could not assemble the startup object graph
    #[error("Startup resolution failed: {message}")]
    Startup {
        /// Description naming the dependency that could not be resolved
        message: String,
        /// The resolution error that caused the failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not registered error for the given type name
    pub fn not_registered(type_name: &'static str) -> Self {
        Self::NotRegistered { type_name }
    }

    /// Create a type mismatch error for the given type name
    pub fn type_mismatch(type_name: &'static str) -> Self {
        Self::TypeMismatch { type_name }
    }

    /// Create a circular dependency error carrying the offending chain
    pub fn circular_dependency<S: Into<String>>(type_name: &'static str, chain: S) -> Self {
        Self::CircularDependency {
            type_name,
            chain: chain.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Startup error creation methods
impl Error {
    /// Create a startup error (simple)
    pub fn startup<S: Into<String>>(message: S) -> Self {
        Self::Startup {
            message: message.into(),
            source: None,
        }
    }

    /// Create a startup error with the underlying resolution failure
    pub fn startup_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Startup {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
