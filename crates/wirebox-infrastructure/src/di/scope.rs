//! Resolution scope with cycle detection

use std::any::{self, TypeId};
use std::cell::RefCell;
use std::sync::Arc;

use tracing::trace;
use wirebox_domain::error::{Error, Result};

use super::container::Container;

/// Resolution context for one resolve call tree
///
/// Factories receive the scope as an explicit parameter and resolve their own
/// dependencies through it, so transitive construction shares a single
/// in-flight stack. Re-entering a type that is already under construction is
/// rejected with the full chain instead of recursing forever.
///
/// A scope lives for exactly one top-level resolve and is single-threaded.
pub struct Scope<'c> {
    container: &'c Container,
    /// Types currently being constructed, outermost request first
    in_flight: RefCell<Vec<(TypeId, &'static str)>>,
}

impl<'c> Scope<'c> {
    pub(crate) fn root(container: &'c Container) -> Self {
        Self {
            container,
            in_flight: RefCell::new(Vec::new()),
        }
    }

    /// Resolve an instance of `T`, preferring a singleton over a factory
    ///
    /// See [`Container::resolve`] for the lookup contract; this variant is
    /// what factories call for their dependencies.
    pub fn resolve<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();
        let type_name = any::type_name::<T>();

        if let Some(instance) = self.container.singleton::<T>()? {
            trace!(type_name, "resolved from singleton registry");
            return Ok(instance);
        }

        let Some(produce) = self.container.factory(key)? else {
            return Err(Error::not_registered(type_name));
        };

        self.enter(key, type_name)?;
        let produced = produce(self);
        self.in_flight.borrow_mut().pop();

        let instance = produced?
            .downcast::<Arc<T>>()
            .map(|instance| *instance)
            .map_err(|_| Error::type_mismatch(type_name))?;
        trace!(type_name, "resolved from factory registry");
        Ok(instance)
    }

    /// Push `T` onto the in-flight stack, rejecting re-entry
    fn enter(&self, key: TypeId, type_name: &'static str) -> Result<()> {
        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.iter().any(|(seen, _)| *seen == key) {
            let chain = in_flight
                .iter()
                .map(|(_, name)| *name)
                .chain(std::iter::once(type_name))
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(Error::circular_dependency(type_name, chain));
        }
        in_flight.push((key, type_name));
        Ok(())
    }
}
