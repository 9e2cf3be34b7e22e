//! Composition root
//!
//! The single place where the demo's object graph is assembled. Transient
//! factories may reference types registered later in the sequence because
//! their bodies only run at resolve time; the counter singleton is
//! constructed eagerly at registration, so anything its factory resolves must
//! already be registered by that point.

use std::sync::Arc;

use tracing::info;

use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::{Counter, MessageProvider};
use wirebox_infrastructure::di::Container;
use wirebox_providers::{AtomicCounter, StaticMessageProvider};

use crate::view_models::{CounterViewModel, MessageViewModel};

/// Greeting served by the default message provider
pub const DEFAULT_GREETING: &str = "Hello, Dependency Injection!";

/// Register the demo services and their view-model adapters
pub fn setup_dependencies(container: &Container) -> Result<()> {
    container.register::<dyn MessageProvider, _>(|_| {
        let provider: Arc<dyn MessageProvider> =
            Arc::new(StaticMessageProvider::new(DEFAULT_GREETING));
        Ok(provider)
    })?;

    container.register_singleton::<dyn Counter, _>(|_| {
        let counter: Arc<dyn Counter> = Arc::new(AtomicCounter::new());
        Ok(counter)
    })?;

    container.register::<MessageViewModel, _>(|scope| {
        let provider = scope.resolve::<dyn MessageProvider>()?;
        Ok(Arc::new(MessageViewModel::new(provider)))
    })?;

    container.register::<CounterViewModel, _>(|scope| {
        let counter = scope.resolve::<dyn Counter>()?;
        Ok(Arc::new(CounterViewModel::new(counter)))
    })?;

    info!(
        registered = container.registered_types().len(),
        "dependency graph registered"
    );
    Ok(())
}

/// View models the shell needs before it can draw its first frame
pub struct AppViewModels {
    /// Greeting panel adapter
    pub message: Arc<MessageViewModel>,
    /// Counter panel adapter
    pub counter: Arc<CounterViewModel>,
}

/// Resolve the view models required at startup
///
/// This is the only place an absent registration escalates to a fatal error;
/// the diagnostic names the view model that could not be resolved instead of
/// crashing on an unchecked unwrap.
pub fn build_view_models(container: &Container) -> Result<AppViewModels> {
    let message = container.resolve::<MessageViewModel>().map_err(|e| {
        Error::startup_with_source("required view model MessageViewModel could not be resolved", e)
    })?;
    let counter = container.resolve::<CounterViewModel>().map_err(|e| {
        Error::startup_with_source("required view model CounterViewModel could not be resolved", e)
    })?;

    Ok(AppViewModels { message, counter })
}
