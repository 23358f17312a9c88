//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use entente_foundation::{ComponentType, Entity, Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_store_not_found() {
    let err = Error::store_not_found(ComponentType::new(4), "game::Position");
    assert!(err.is_store_not_found());
    let msg = format!("{err}");
    assert!(msg.contains("game::Position"));
    assert!(msg.contains("type 4"));
}

#[test]
fn error_store_type_mismatch() {
    let err = Error::store_type_mismatch(ComponentType::new(1), "Velocity", "Position");
    assert!(matches!(err.kind, ErrorKind::StoreTypeMismatch { .. }));
    assert!(!err.is_store_not_found());
}

#[test]
fn error_component_not_found() {
    let err = Error::component_not_found(Entity::new(42), ComponentType::new(3));
    let msg = format!("{err}");
    assert!(msg.contains("42"));
    assert!(msg.contains("type 3"));
}

#[test]
fn error_entities_exhausted() {
    let err = Error::entities_exhausted(u32::MAX);
    assert_eq!(err.kind, ErrorKind::EntitiesExhausted { limit: u32::MAX });
    assert!(format!("{err}").contains("exhausted"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn error_without_context() {
    let err = Error::entities_exhausted(1);
    assert!(err.context.is_none());
}

#[test]
fn error_context_display() {
    let ctx = ErrorContext::new().with_operation("add_component");
    assert_eq!(format!("{ctx}"), "in add_component");

    let ctx = ErrorContext::new().with_entity(Entity::new(7));
    assert_eq!(format!("{ctx}"), "for #7");

    assert_eq!(format!("{}", ErrorContext::new()), "");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    let err = Error::store_not_found(ComponentType::new(1), "Position");
    assert_error(&err);
}
