//! Integration tests for entity ids and component type tags

use std::collections::{BTreeSet, HashSet};

use entente_foundation::{Component, ComponentType, Entity};

// =============================================================================
// Entity Ids
// =============================================================================

#[test]
fn zero_is_the_invalid_entity() {
    assert_eq!(Entity::new(0), Entity::INVALID);
    assert!(!Entity::INVALID.is_valid());
}

#[test]
fn entities_work_as_map_keys() {
    let ids: HashSet<Entity> = [1, 2, 2, 3].into_iter().map(Entity::new).collect();
    assert_eq!(ids.len(), 3);

    let ordered: BTreeSet<Entity> = [3, 1, 2].into_iter().map(Entity::new).collect();
    let raw: Vec<u32> = ordered.into_iter().map(Entity::id).collect();
    assert_eq!(raw, vec![1, 2, 3]);
}

#[test]
fn entity_is_copy() {
    let a = Entity::new(5);
    let b = a;
    assert_eq!(a, b);
}

// =============================================================================
// Component Type Tags
// =============================================================================

struct Position;
struct Velocity;

impl Component for Position {
    const COMPONENT_TYPE: ComponentType = ComponentType::new(1);
}

impl Component for Velocity {
    const COMPONENT_TYPE: ComponentType = ComponentType::new(2);
}

#[test]
fn component_kinds_declare_distinct_tags() {
    assert_ne!(Position::COMPONENT_TYPE, Velocity::COMPONENT_TYPE);
    assert!(Position::COMPONENT_TYPE.is_valid());
    assert!(Velocity::COMPONENT_TYPE.is_valid());
}

#[test]
fn component_types_order_by_tag() {
    assert!(Position::COMPONENT_TYPE < Velocity::COMPONENT_TYPE);
    assert_eq!(Velocity::COMPONENT_TYPE.tag(), 2);
}
