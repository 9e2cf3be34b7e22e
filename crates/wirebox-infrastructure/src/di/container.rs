//! Type-keyed registry for factories and singletons

use std::any::{self, Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;
use wirebox_domain::error::{Error, Result};

use super::scope::Scope;
use crate::locks::{lock_rwlock_read, lock_rwlock_write};

/// Type-erased instance slot: a box holding the `Arc<T>` a factory produced
pub(crate) type BoxedInstance = Box<dyn Any + Send + Sync>;

/// Shared type-erased factory
///
/// Stored behind `Arc` so it can be cloned out of the registry before
/// invocation; no lock guard is held while user code runs.
pub(crate) type SharedFactory =
    Arc<dyn Fn(&Scope<'_>) -> Result<BoxedInstance> + Send + Sync>;

/// Factory registration for one type key
struct FactoryEntry {
    type_name: &'static str,
    produce: SharedFactory,
}

/// Eagerly-constructed singleton for one type key
struct SingletonEntry {
    type_name: &'static str,
    instance: BoxedInstance,
}

/// Thread-safe dependency injection container
///
/// Keys both registries by [`TypeId`], so any `'static` type can be
/// registered, including `dyn Trait` ports. The container owns the entries
/// exclusively; resolution hands out `Arc` handles, fresh per resolve for
/// transients and shared for singletons.
#[derive(Default)]
pub struct Container {
    /// Transient factories, invoked on every resolve
    factories: RwLock<HashMap<TypeId, FactoryEntry>>,
    /// Singleton instances, constructed once at registration time
    singletons: RwLock<HashMap<TypeId, SingletonEntry>>,
}

impl Container {
    /// Create a new empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transient factory for `T`
    ///
    /// The factory is not invoked here; it runs on every resolve, producing a
    /// fresh instance each time. A prior registration for the same type is
    /// overwritten. The factory may resolve other types through the scope it
    /// receives, including types registered later than this call.
    pub fn register<T, F>(&self, factory: F) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn(&Scope<'_>) -> Result<Arc<T>> + Send + Sync + 'static,
    {
        let type_name = any::type_name::<T>();
        let produce: SharedFactory = Arc::new(move |scope: &Scope<'_>| {
            factory(scope).map(|instance| Box::new(instance) as BoxedInstance)
        });

        let mut factories = lock_rwlock_write(&self.factories, "Container::register")?;
        let previous = factories.insert(TypeId::of::<T>(), FactoryEntry { type_name, produce });
        if previous.is_some() {
            debug!(type_name, "overwriting existing factory registration");
        }
        Ok(())
    }

    /// Register a singleton for `T`
    ///
    /// The factory is invoked immediately, exactly once, and the produced
    /// instance is stored. Every type the factory resolves must therefore
    /// already be registered when this is called. Singletons take priority
    /// over a factory registered for the same type.
    pub fn register_singleton<T, F>(&self, factory: F) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
        F: FnOnce(&Scope<'_>) -> Result<Arc<T>>,
    {
        let type_name = any::type_name::<T>();
        let scope = Scope::root(self);
        let instance = factory(&scope)?;

        let mut singletons =
            lock_rwlock_write(&self.singletons, "Container::register_singleton")?;
        singletons.insert(
            TypeId::of::<T>(),
            SingletonEntry {
                type_name,
                instance: Box::new(instance),
            },
        );
        debug!(type_name, "singleton constructed and registered");
        Ok(())
    }

    /// Resolve an instance of `T`
    ///
    /// Singleton entries win over factory entries. A factory entry is
    /// re-invoked on every call, so transient registrations yield a new
    /// instance per resolve. Absence of any registration is reported as
    /// [`Error::NotRegistered`]; it is the caller's decision whether that is
    /// fatal.
    pub fn resolve<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Scope::root(self).resolve::<T>()
    }

    /// Whether any registration (factory or singleton) exists for `T`
    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        let key = TypeId::of::<T>();
        let in_singletons = match lock_rwlock_read(&self.singletons, "Container::contains") {
            Ok(singletons) => singletons.contains_key(&key),
            Err(_) => false,
        };
        if in_singletons {
            return true;
        }
        match lock_rwlock_read(&self.factories, "Container::contains") {
            Ok(factories) => factories.contains_key(&key),
            Err(_) => false,
        }
    }

    /// List the names of all registered types, sorted and deduplicated
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        if let Ok(singletons) = lock_rwlock_read(&self.singletons, "Container::registered_types") {
            names.extend(singletons.values().map(|entry| entry.type_name));
        }
        if let Ok(factories) = lock_rwlock_read(&self.factories, "Container::registered_types") {
            names.extend(factories.values().map(|entry| entry.type_name));
        }
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Singleton slot for `T`
    ///
    /// `Ok(None)` when no singleton exists. A stored value that is not an
    /// `Arc<T>` is reported as a type mismatch instead of being ignored.
    pub(crate) fn singleton<T>(&self) -> Result<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let singletons = lock_rwlock_read(&self.singletons, "Container::singleton")?;
        match singletons.get(&TypeId::of::<T>()) {
            Some(entry) => match entry.instance.downcast_ref::<Arc<T>>() {
                Some(instance) => Ok(Some(Arc::clone(instance))),
                None => Err(Error::type_mismatch(entry.type_name)),
            },
            None => Ok(None),
        }
    }

    /// Factory for the given key, cloned out so the guard drops before invocation
    pub(crate) fn factory(&self, key: TypeId) -> Result<Option<SharedFactory>> {
        let factories = lock_rwlock_read(&self.factories, "Container::factory")?;
        Ok(factories.get(&key).map(|entry| Arc::clone(&entry.produce)))
    }
}
