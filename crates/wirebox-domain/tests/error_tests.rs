//! Error taxonomy tests

use std::error::Error as StdError;

use wirebox_domain::error::Error;

/// The absence diagnostic names the requested type
#[test]
fn not_registered_display_names_type() {
    let err = Error::not_registered("demo::Widget");
    assert_eq!(err.to_string(), "No registration found for type: demo::Widget");
}

/// The cycle diagnostic carries the resolution chain
#[test]
fn circular_dependency_display_includes_chain() {
    let err = Error::circular_dependency("demo::Left", "demo::Left -> demo::Right -> demo::Left");
    let display = err.to_string();
    assert!(display.contains("demo::Left -> demo::Right -> demo::Left"));
}

/// Startup errors keep the underlying resolution failure as their source
#[test]
fn startup_error_preserves_source() {
    let cause = Error::not_registered("demo::Widget");
    let err = Error::startup_with_source("required view model missing", cause);

    let source = err.source().expect("source must be preserved");
    assert!(source.to_string().contains("demo::Widget"));
}

/// A plain startup error has no source
#[test]
fn startup_error_without_source() {
    let err = Error::startup("graph incomplete");
    assert!(err.source().is_none());
    assert!(err.to_string().contains("graph incomplete"));
}

/// Constructor helpers produce the matching variants
#[test]
fn constructors_produce_matching_variants() {
    assert!(matches!(Error::not_registered("t"), Error::NotRegistered { .. }));
    assert!(matches!(Error::type_mismatch("t"), Error::TypeMismatch { .. }));
    assert!(matches!(
        Error::circular_dependency("t", "t -> t"),
        Error::CircularDependency { .. }
    ));
    assert!(matches!(Error::configuration("bad"), Error::Configuration { .. }));
    assert!(matches!(Error::internal("oops"), Error::Internal { .. }));
}
