//! Static message provider

use wirebox_domain::ports::MessageProvider;

/// Message provider backed by a fixed string
///
/// # Example
///
/// ```rust
/// use wirebox_domain::ports::MessageProvider;
/// use wirebox_providers::StaticMessageProvider;
///
/// let provider = StaticMessageProvider::new("hello");
/// assert_eq!(provider.message(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct StaticMessageProvider {
    message: String,
}

impl StaticMessageProvider {
    /// Create a provider that always returns `message`
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl MessageProvider for StaticMessageProvider {
    fn message(&self) -> &str {
        &self.message
    }
}
