//! entente - Entity-component-system association registry
//!
//! This crate re-exports both layers of entente for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: entente_storage    — ComponentStore, ComponentTypeSet, System, Manager
//! Layer 0: entente_foundation — Core types (Entity, ComponentType, Error)
//! ```
//!
//! # Example
//!
//! ```
//! use entente::{Component, ComponentType, Manager};
//!
//! #[derive(Debug, PartialEq)]
//! struct Position {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Component for Position {
//!     const COMPONENT_TYPE: ComponentType = ComponentType::new(1);
//! }
//!
//! let mut manager = Manager::new();
//! assert!(manager.create_component_store::<Position>());
//!
//! let entity = manager.create_entity()?;
//! assert!(manager.add_component(entity, Position { x: 1, y: 2 })?);
//! assert!(!manager.add_component(entity, Position { x: 9, y: 9 })?);
//! assert_eq!(manager.get_component::<Position>(entity)?, &Position { x: 1, y: 2 });
//! # Ok::<(), entente::Error>(())
//! ```

pub use entente_foundation as foundation;
pub use entente_storage as storage;

pub use entente_foundation::{Component, ComponentType, Entity, Error, ErrorKind, Result};
pub use entente_storage::{ComponentStore, ComponentTypeSet, Manager, ManagerConfig, System, SystemPtr};
