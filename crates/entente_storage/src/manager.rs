//! The association manager.
//!
//! The `Manager` is the single authority for entity identity, typed
//! component storage and system ordering. It owns:
//! - the entity id counter (ids start at 1 and are never reused)
//! - one [`ComponentStore`] per component type, created on request
//! - the per-entity [`ComponentTypeSet`] index
//! - the ordered system list
//!
//! All operations are synchronous. The manager is single-writer and not
//! `Send`; callers that share it across threads must synchronize
//! externally.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use entente_foundation::component::{component_name, component_type_of};
use entente_foundation::{Component, ComponentType, Entity, Error, ErrorContext, Result};
use tracing::{debug, trace, warn};

use crate::config::ManagerConfig;
use crate::store::{AnyStore, ComponentStore};
use crate::system::SystemPtr;
use crate::type_set::ComponentTypeSet;

/// Manages associations of entities, components and systems.
pub struct Manager {
    /// Limits and capacities.
    config: ManagerConfig,
    /// Id of the last created entity (0 until the first one).
    last_entity: u32,
    /// Component types attached to each entity that has at least one.
    entities: HashMap<Entity, ComponentTypeSet>,
    /// One store per component type.
    stores: BTreeMap<ComponentType, Box<dyn AnyStore>>,
    /// Systems in insertion order.
    systems: Vec<SystemPtr>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a new empty manager with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    /// Creates a new empty manager with the given configuration.
    #[must_use]
    pub fn with_config(config: ManagerConfig) -> Self {
        Self {
            last_entity: 0,
            entities: HashMap::with_capacity(config.entity_capacity),
            stores: BTreeMap::new(),
            systems: Vec::with_capacity(config.system_capacity),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    // --- Entities ---

    /// Allocates a new entity id.
    ///
    /// Ids are strictly increasing, starting at 1.
    ///
    /// # Errors
    ///
    /// Returns `EntitiesExhausted` once the configured limit has been
    /// handed out. The counter never wraps, so every later call fails too.
    pub fn create_entity(&mut self) -> Result<Entity> {
        let limit = self.config.entity_limit;
        if self.last_entity >= limit {
            debug!(limit, "entity ids exhausted");
            return Err(Error::entities_exhausted(limit));
        }

        self.last_entity += 1;
        let entity = Entity::new(self.last_entity);
        trace!(%entity, "created entity");
        Ok(entity)
    }

    /// Returns the last created entity, or [`Entity::INVALID`] if none.
    #[must_use]
    pub fn last_entity(&self) -> Entity {
        Entity::new(self.last_entity)
    }

    /// Returns the number of entities created so far.
    #[must_use]
    pub fn entity_count(&self) -> u32 {
        self.last_entity
    }

    // --- Component stores ---

    /// Creates the store for component kind `C`.
    ///
    /// Returns `false` if a store for `C::COMPONENT_TYPE` already exists; the
    /// existing store and its contents are kept.
    ///
    /// A kind declaring the reserved tag `0` is rejected at compile time:
    ///
    /// ```compile_fail
    /// use entente_foundation::{Component, ComponentType};
    /// use entente_storage::Manager;
    ///
    /// struct Untagged;
    ///
    /// impl Component for Untagged {
    ///     const COMPONENT_TYPE: ComponentType = ComponentType::INVALID;
    /// }
    ///
    /// let mut manager = Manager::new();
    /// manager.create_component_store::<Untagged>();
    /// ```
    pub fn create_component_store<C: Component>(&mut self) -> bool {
        let component_type = component_type_of::<C>();
        match self.stores.entry(component_type) {
            Entry::Occupied(existing) => {
                debug!(
                    component = component_name::<C>(),
                    existing = existing.get().component_name(),
                    %component_type,
                    "component store already exists"
                );
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(Box::new(ComponentStore::<C>::new()));
                debug!(
                    component = component_name::<C>(),
                    %component_type,
                    "created component store"
                );
                true
            }
        }
    }

    /// Returns true if a store for `C` exists and was created for `C`.
    #[must_use]
    pub fn has_component_store<C: Component>(&self) -> bool {
        self.get_component_store::<C>().is_ok()
    }

    /// Gets the store for component kind `C`.
    ///
    /// # Errors
    ///
    /// Returns `StoreNotFound` if [`create_component_store`](Self::create_component_store)
    /// was never called for `C`, or `StoreTypeMismatch` if the store under
    /// `C`'s tag was created for a different kind.
    pub fn get_component_store<C: Component>(&self) -> Result<&ComponentStore<C>> {
        let component_type = component_type_of::<C>();
        let store = self
            .stores
            .get(&component_type)
            .ok_or_else(|| Error::store_not_found(component_type, component_name::<C>()))?;

        let found = store.component_name();
        store
            .as_any()
            .downcast_ref::<ComponentStore<C>>()
            .ok_or_else(|| Self::mismatch::<C>(component_type, found))
    }

    /// Gets the store for component kind `C` mutably.
    ///
    /// # Errors
    ///
    /// Same as [`get_component_store`](Self::get_component_store).
    pub fn get_component_store_mut<C: Component>(&mut self) -> Result<&mut ComponentStore<C>> {
        let component_type = component_type_of::<C>();
        let store = self
            .stores
            .get_mut(&component_type)
            .ok_or_else(|| Error::store_not_found(component_type, component_name::<C>()))?;

        let found = store.component_name();
        store
            .as_any_mut()
            .downcast_mut::<ComponentStore<C>>()
            .ok_or_else(|| Self::mismatch::<C>(component_type, found))
    }

    /// Returns the number of registered stores.
    #[must_use]
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Iterates the component types that have a store, in tag order.
    pub fn store_types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.stores.keys().copied()
    }

    // --- Components ---

    /// Moves a component into the store for `C`, attaching it to `entity`.
    ///
    /// Returns `Ok(false)` if the entity already has a `C`; the stored value
    /// is left untouched. On success the entity's component-type set is
    /// updated in the same call.
    ///
    /// # Errors
    ///
    /// Returns `StoreNotFound` or `StoreTypeMismatch` from the store lookup.
    pub fn add_component<C: Component>(&mut self, entity: Entity, component: C) -> Result<bool> {
        let added = self
            .get_component_store_mut::<C>()
            .map_err(|e| e.with_context(Self::context("add_component", entity)))?
            .add(entity, component);

        if added {
            self.entities
                .entry(entity)
                .or_default()
                .insert(component_type_of::<C>());
        }

        trace!(%entity, component = component_name::<C>(), added, "add component");
        Ok(added)
    }

    /// Removes the `C` attached to `entity`, returning it if there was one.
    ///
    /// # Errors
    ///
    /// Returns `StoreNotFound` or `StoreTypeMismatch` from the store lookup.
    pub fn remove_component<C: Component>(&mut self, entity: Entity) -> Result<Option<C>> {
        let removed = self
            .get_component_store_mut::<C>()
            .map_err(|e| e.with_context(Self::context("remove_component", entity)))?
            .remove(entity);

        if removed.is_some() {
            if let Some(types) = self.entities.get_mut(&entity) {
                types.remove(component_type_of::<C>());
                if types.is_empty() {
                    self.entities.remove(&entity);
                }
            }
        }

        trace!(%entity, component = component_name::<C>(), removed = removed.is_some(), "remove component");
        Ok(removed)
    }

    /// Gets the `C` attached to `entity`.
    ///
    /// # Errors
    ///
    /// Returns a store lookup error, or `ComponentNotFound` if the entity
    /// has no `C`.
    pub fn get_component<C: Component>(&self, entity: Entity) -> Result<&C> {
        self.get_component_store::<C>()
            .and_then(|store| store.get(entity))
            .map_err(|e| e.with_context(Self::context("get_component", entity)))
    }

    /// Gets the `C` attached to `entity` mutably.
    ///
    /// # Errors
    ///
    /// Same as [`get_component`](Self::get_component).
    pub fn get_component_mut<C: Component>(&mut self, entity: Entity) -> Result<&mut C> {
        self.get_component_store_mut::<C>()
            .and_then(|store| store.get_mut(entity))
            .map_err(|e| e.with_context(Self::context("get_component_mut", entity)))
    }

    /// Checks if `entity` has a `C`. False if the store does not exist.
    #[must_use]
    pub fn has_component<C: Component>(&self, entity: Entity) -> bool {
        self.get_component_store::<C>()
            .is_ok_and(|store| store.contains(entity))
    }

    /// Gets the component types attached to `entity`.
    ///
    /// Returns `None` until the entity holds at least one component.
    #[must_use]
    pub fn component_types(&self, entity: Entity) -> Option<&ComponentTypeSet> {
        self.entities.get(&entity)
    }

    /// Returns the entities holding every type in `types`, in id order.
    ///
    /// Only entities holding at least one component are considered, so an
    /// empty `types` yields every entity with a non-empty type set.
    #[must_use]
    pub fn entities_with(&self, types: &[ComponentType]) -> Vec<Entity> {
        let mut matching: Vec<_> = self
            .entities
            .iter()
            .filter(|(_, set)| set.contains_all(types))
            .map(|(entity, _)| *entity)
            .collect();
        matching.sort_unstable();
        matching
    }

    // --- Systems ---

    /// Appends a system. Adding the same system twice runs it twice.
    pub fn add_system(&mut self, system: SystemPtr) {
        self.systems.push(system);
        debug!(position = self.systems.len() - 1, "added system");
    }

    /// Returns the systems in execution order.
    #[must_use]
    pub fn systems(&self) -> &[SystemPtr] {
        &self.systems
    }

    /// Returns the number of systems.
    #[must_use]
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Runs every system once, in insertion order.
    ///
    /// Systems added while the pass is running take part from the next
    /// call on.
    pub fn update(&mut self, elapsed: f32) {
        let systems: Vec<SystemPtr> = self.systems.iter().map(Rc::clone).collect();
        trace!(count = systems.len(), elapsed, "running systems");
        for system in &systems {
            system.update(self, elapsed);
        }
    }

    // --- Private helpers ---

    fn mismatch<C: Component>(component_type: ComponentType, found: &'static str) -> Error {
        let expected = component_name::<C>();
        warn!(%component_type, expected, found, "component store type mismatch");
        Error::store_type_mismatch(component_type, expected, found)
    }

    fn context(operation: &'static str, entity: Entity) -> ErrorContext {
        ErrorContext::new()
            .with_operation(operation)
            .with_entity(entity)
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("last_entity", &self.last_entity)
            .field("indexed_entities", &self.entities.len())
            .field("stores", &self.stores.values().collect::<Vec<_>>())
            .field("systems", &self.systems.len())
            .finish_non_exhaustive()
    }
}
