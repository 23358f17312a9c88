//! The set of component types attached to one entity.

use std::fmt;

use entente_foundation::ComponentType;

/// Represents the component types an entity currently has.
///
/// Kept sorted by tag so two sets with the same members compare equal.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct ComponentTypeSet {
    types: Vec<ComponentType>,
}

impl ComponentTypeSet {
    /// Creates a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self { types: Vec::new() }
    }

    /// Creates a set from a list of types, ignoring duplicates.
    #[must_use]
    pub fn from_types(mut types: Vec<ComponentType>) -> Self {
        types.sort_unstable();
        types.dedup();
        Self { types }
    }

    /// Returns the types in ascending tag order.
    #[must_use]
    pub fn types(&self) -> &[ComponentType] {
        &self.types
    }

    /// Checks if the set contains a type.
    #[must_use]
    pub fn contains(&self, component_type: ComponentType) -> bool {
        self.types.binary_search(&component_type).is_ok()
    }

    /// Checks if the set contains every type in `others`.
    #[must_use]
    pub fn contains_all(&self, others: &[ComponentType]) -> bool {
        others.iter().all(|t| self.contains(*t))
    }

    /// Adds a type. Returns false if it was already present.
    pub fn insert(&mut self, component_type: ComponentType) -> bool {
        match self.types.binary_search(&component_type) {
            Ok(_) => false,
            Err(pos) => {
                self.types.insert(pos, component_type);
                true
            }
        }
    }

    /// Removes a type. Returns false if it was not present.
    pub fn remove(&mut self, component_type: ComponentType) -> bool {
        match self.types.binary_search(&component_type) {
            Ok(pos) => {
                self.types.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Iterates the types in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.types.iter().copied()
    }

    /// Returns the number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Debug for ComponentTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.types.iter().map(|t| t.tag())).finish()
    }
}

impl FromIterator<ComponentType> for ComponentTypeSet {
    fn from_iter<I: IntoIterator<Item = ComponentType>>(iter: I) -> Self {
        Self::from_types(iter.into_iter().collect())
    }
}
