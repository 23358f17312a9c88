//! Per-kind component storage.
//!
//! A [`ComponentStore`] holds at most one component of its kind per entity.
//! The manager keeps stores of different kinds side by side behind the
//! type-erased `AnyStore` interface and recovers the concrete store with a
//! checked downcast.
//!
//! Components enter and leave a store only through the manager, which keeps
//! each entity's component-type set in step. Callers holding a store can read
//! and update values in place but cannot insert or remove:
//!
//! ```compile_fail
//! use entente_foundation::{Component, ComponentType, Entity};
//! use entente_storage::Manager;
//!
//! struct Position;
//!
//! impl Component for Position {
//!     const COMPONENT_TYPE: ComponentType = ComponentType::new(1);
//! }
//!
//! let mut manager = Manager::new();
//! manager.create_component_store::<Position>();
//! let store = manager.get_component_store_mut::<Position>().unwrap();
//! store.add(Entity::new(1), Position);
//! ```

use std::any::Any;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;

use entente_foundation::component::{component_name, component_type_of};
use entente_foundation::{Component, ComponentType, Entity, Error, Result};

/// Stores the components of one kind, keyed by entity.
///
/// Iteration is in ascending entity order.
pub struct ComponentStore<C: Component> {
    components: BTreeMap<Entity, C>,
}

impl<C: Component> ComponentStore<C> {
    /// Creates a new empty store.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            components: BTreeMap::new(),
        }
    }

    /// Moves a component into the store for an entity.
    ///
    /// Returns `false` and drops `component` if the entity already has one;
    /// the stored value is left untouched.
    pub(crate) fn add(&mut self, entity: Entity, component: C) -> bool {
        match self.components.entry(entity) {
            Entry::Vacant(slot) => {
                slot.insert(component);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Gets the component for an entity.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` if the entity has no component here.
    pub fn get(&self, entity: Entity) -> Result<&C> {
        self.components
            .get(&entity)
            .ok_or_else(|| Error::component_not_found(entity, component_type_of::<C>()))
    }

    /// Gets the component for an entity mutably.
    ///
    /// # Errors
    ///
    /// Returns `ComponentNotFound` if the entity has no component here.
    pub fn get_mut(&mut self, entity: Entity) -> Result<&mut C> {
        self.components
            .get_mut(&entity)
            .ok_or_else(|| Error::component_not_found(entity, component_type_of::<C>()))
    }

    /// Checks if an entity has a component here.
    #[must_use]
    pub fn contains(&self, entity: Entity) -> bool {
        self.components.contains_key(&entity)
    }

    /// Removes the component for an entity, returning it if it existed.
    pub(crate) fn remove(&mut self, entity: Entity) -> Option<C> {
        self.components.remove(&entity)
    }

    /// Returns the number of stored components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates `(entity, component)` pairs in entity order.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &C)> + '_ {
        self.components.iter().map(|(entity, c)| (*entity, c))
    }

    /// Iterates `(entity, component)` pairs mutably in entity order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut C)> + '_ {
        self.components.iter_mut().map(|(entity, c)| (*entity, c))
    }

    /// Iterates the entities that have a component here.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.components.keys().copied()
    }
}

impl<C: Component> fmt::Debug for ComponentStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentStore")
            .field("component", &component_name::<C>())
            .field("component_type", &component_type_of::<C>())
            .field("len", &self.components.len())
            .finish()
    }
}

/// Type-erased view of a [`ComponentStore`].
///
/// Each implementation knows its concrete kind, so the manager can report
/// the tag and name of whatever a registry slot holds and refuse a downcast
/// to the wrong kind.
pub(crate) trait AnyStore {
    fn component_type(&self) -> ComponentType;
    fn component_name(&self) -> &'static str;
    fn contains(&self, entity: Entity) -> bool;
    fn len(&self) -> usize;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<C: Component> AnyStore for ComponentStore<C> {
    fn component_type(&self) -> ComponentType {
        component_type_of::<C>()
    }

    fn component_name(&self) -> &'static str {
        component_name::<C>()
    }

    fn contains(&self, entity: Entity) -> bool {
        ComponentStore::contains(self, entity)
    }

    fn len(&self) -> usize {
        ComponentStore::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for dyn AnyStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyStore")
            .field("component", &self.component_name())
            .field("component_type", &self.component_type())
            .field("len", &self.len())
            .finish()
    }
}
