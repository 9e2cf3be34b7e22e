//! Container registration and resolution tests
//!
//! Covers the registry contract: singleton identity, transient freshness,
//! overwrite-on-reregistration, absence reporting, priority of singletons
//! over factories and cycle rejection.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wirebox_domain::error::Error;
use wirebox_infrastructure::di::Container;

/// Test service with distinguishable identity
#[derive(Debug)]
struct Widget {
    label: &'static str,
}

/// Test port registered as a trait object
trait Greeter: Send + Sync {
    fn greet(&self) -> String;
}

struct EnglishGreeter;

impl Greeter for EnglishGreeter {
    fn greet(&self) -> String {
        "hello".to_string()
    }
}

/// Repeated resolves of a singleton return the same instance and the factory
/// runs exactly once
#[test]
fn singleton_resolves_to_same_instance() {
    let container = Container::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let factory_calls = Arc::clone(&calls);
    container
        .register_singleton::<Widget, _>(move |_| {
            factory_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Widget { label: "only" }))
        })
        .expect("singleton registration should succeed");

    let first = container.resolve::<Widget>().expect("first resolve");
    let second = container.resolve::<Widget>().expect("second resolve");

    assert!(Arc::ptr_eq(&first, &second), "singleton handles must share identity");
    assert_eq!(first.label, "only");
    assert_eq!(calls.load(Ordering::SeqCst), 1, "factory must run exactly once");
}

/// The singleton factory runs at registration time, before any resolve
#[test]
fn singleton_is_constructed_eagerly() {
    let container = Container::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let factory_calls = Arc::clone(&calls);
    container
        .register_singleton::<Widget, _>(move |_| {
            factory_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Widget { label: "eager" }))
        })
        .expect("singleton registration should succeed");

    assert_eq!(
        calls.load(Ordering::SeqCst),
        1,
        "construction must happen at registration, not first resolve"
    );
}

/// Transient registrations produce a fresh instance per resolve and the
/// factory runs once per call
#[test]
fn transient_resolves_to_fresh_instances() {
    let container = Container::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let factory_calls = Arc::clone(&calls);
    container
        .register::<Widget, _>(move |_| {
            factory_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Widget { label: "fresh" }))
        })
        .expect("registration should succeed");

    let first = container.resolve::<Widget>().expect("first resolve");
    let second = container.resolve::<Widget>().expect("second resolve");

    assert!(!Arc::ptr_eq(&first, &second), "transient handles must be distinct");
    assert_eq!(calls.load(Ordering::SeqCst), 2, "factory must run once per resolve");
}

/// Registering the same type twice keeps only the most recent factory
#[test]
fn later_registration_overwrites_earlier() {
    let container = Container::new();

    container
        .register::<Widget, _>(|_| Ok(Arc::new(Widget { label: "first" })))
        .expect("first registration");
    container
        .register::<Widget, _>(|_| Ok(Arc::new(Widget { label: "second" })))
        .expect("second registration");

    let widget = container.resolve::<Widget>().expect("resolve");
    assert_eq!(widget.label, "second");
}

/// A type alias shares the registration key of its underlying type
#[test]
fn type_alias_shares_registration_key() {
    type WidgetAlias = Widget;

    let container = Container::new();
    container
        .register::<Widget, _>(|_| Ok(Arc::new(Widget { label: "aliased" })))
        .expect("registration");

    let widget = container.resolve::<WidgetAlias>().expect("resolve via alias");
    assert_eq!(widget.label, "aliased");
}

/// Resolving a type nobody registered reports absence, it does not panic
#[test]
fn resolving_unregistered_type_reports_not_registered() {
    let container = Container::new();

    let result = container.resolve::<Widget>();
    let err = result.expect_err("unregistered type must not resolve");

    assert!(matches!(err, Error::NotRegistered { .. }));
    assert!(
        err.to_string().contains("Widget"),
        "diagnostic should name the missing type: {err}"
    );
}

/// Trait objects are first-class registration keys
#[test]
fn trait_object_registration_resolves_via_port() {
    let container = Container::new();

    container
        .register::<dyn Greeter, _>(|_| {
            let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
            Ok(greeter)
        })
        .expect("registration should succeed");

    let greeter = container.resolve::<dyn Greeter>().expect("resolve");
    assert_eq!(greeter.greet(), "hello");
}

/// A singleton entry wins over a factory entry for the same type
#[test]
fn singleton_takes_priority_over_factory() {
    let container = Container::new();

    container
        .register::<Widget, _>(|_| Ok(Arc::new(Widget { label: "transient" })))
        .expect("factory registration");
    container
        .register_singleton::<Widget, _>(|_| Ok(Arc::new(Widget { label: "singleton" })))
        .expect("singleton registration");

    let widget = container.resolve::<Widget>().expect("resolve");
    assert_eq!(widget.label, "singleton");
}

/// A factory error surfaces to the resolver unchanged
#[test]
fn factory_error_propagates_to_resolver() {
    let container = Container::new();

    container
        .register::<Widget, _>(|_| Err(Error::internal("factory exploded")))
        .expect("registration should succeed");

    let err = container.resolve::<Widget>().expect_err("resolve must fail");
    assert!(matches!(err, Error::Internal { .. }));
}

/// A factory that resolves its own type is rejected with the chain
#[test]
fn self_cycle_is_rejected() {
    let container = Container::new();

    container
        .register::<Widget, _>(|scope| scope.resolve::<Widget>())
        .expect("registration should succeed");

    let err = container.resolve::<Widget>().expect_err("cycle must not resolve");
    assert!(matches!(err, Error::CircularDependency { .. }));
    assert!(err.to_string().contains("Widget"), "chain should name the type: {err}");
}

/// A two-type cycle is rejected and the chain names both participants
#[test]
fn two_type_cycle_is_rejected() {
    struct Left;
    struct Right;

    let container = Container::new();

    container
        .register::<Left, _>(|scope| {
            let _right = scope.resolve::<Right>()?;
            Ok(Arc::new(Left))
        })
        .expect("left registration");
    container
        .register::<Right, _>(|scope| {
            let _left = scope.resolve::<Left>()?;
            Ok(Arc::new(Right))
        })
        .expect("right registration");

    let err = container.resolve::<Left>().expect_err("cycle must not resolve");
    let display = err.to_string();
    assert!(matches!(err, Error::CircularDependency { .. }));
    assert!(display.contains("Left") && display.contains("Right"), "chain: {display}");
}

/// `contains` reports both registration kinds and stays false for strangers
#[test]
fn contains_reports_registered_types() {
    struct Unregistered;

    let container = Container::new();

    container
        .register::<Widget, _>(|_| Ok(Arc::new(Widget { label: "w" })))
        .expect("factory registration");
    container
        .register_singleton::<dyn Greeter, _>(|_| {
            let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
            Ok(greeter)
        })
        .expect("singleton registration");

    assert!(container.contains::<Widget>());
    assert!(container.contains::<dyn Greeter>());
    assert!(!container.contains::<Unregistered>());
}

/// `registered_types` lists every registered type name
#[test]
fn registered_types_lists_names() {
    let container = Container::new();

    container
        .register::<Widget, _>(|_| Ok(Arc::new(Widget { label: "w" })))
        .expect("factory registration");
    container
        .register_singleton::<dyn Greeter, _>(|_| {
            let greeter: Arc<dyn Greeter> = Arc::new(EnglishGreeter);
            Ok(greeter)
        })
        .expect("singleton registration");

    let names = container.registered_types();
    assert_eq!(names.len(), 2);
    assert!(names.iter().any(|name| name.contains("Widget")));
    assert!(names.iter().any(|name| name.contains("Greeter")));
}

/// The container is usable behind an `Arc` from multiple threads
#[test]
fn container_is_shared_across_threads() {
    let container = Arc::new(Container::new());

    container
        .register_singleton::<Widget, _>(|_| Ok(Arc::new(Widget { label: "shared" })))
        .expect("singleton registration");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let container = Arc::clone(&container);
            std::thread::spawn(move || {
                let widget = container.resolve::<Widget>().expect("resolve in thread");
                assert_eq!(widget.label, "shared");
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread should not panic");
    }
}
