//! End-to-end scenario through the root crate's re-exports.

use entente::{Component, ComponentType, Entity, ErrorKind, Manager};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position {
    x: i32,
    y: i32,
}

impl Component for Position {
    const COMPONENT_TYPE: ComponentType = ComponentType::new(1);
}

#[test]
fn first_write_wins_scenario() {
    let mut manager = Manager::new();

    assert!(manager.create_component_store::<Position>());
    assert!(!manager.create_component_store::<Position>());

    let entity = manager.create_entity().unwrap();
    assert_eq!(entity, Entity::new(1));

    assert!(manager.add_component(entity, Position { x: 1, y: 2 }).unwrap());
    assert!(!manager.add_component(entity, Position { x: 9, y: 9 }).unwrap());

    let store = manager.get_component_store::<Position>().unwrap();
    assert_eq!(store.get(entity).unwrap(), &Position { x: 1, y: 2 });
}

#[test]
fn forgetting_to_create_the_store_is_reported() {
    let mut manager = Manager::new();
    let entity = manager.create_entity().unwrap();

    let err = manager.add_component(entity, Position { x: 0, y: 0 }).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::StoreNotFound { .. }));
    assert!(format!("{err}").contains("Position"));
}
