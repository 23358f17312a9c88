//! Configuration for a [`Manager`](crate::Manager).

/// Limits and initial capacities for a manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Highest entity id `create_entity` may hand out.
    pub entity_limit: u32,

    /// Initial capacity of the per-entity component-type index.
    pub entity_capacity: usize,

    /// Initial capacity of the system list.
    pub system_capacity: usize,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            entity_limit: u32::MAX,
            entity_capacity: 0,
            system_capacity: 0,
        }
    }
}

impl ManagerConfig {
    /// Creates a configuration that stops allocating after `limit` entities.
    #[must_use]
    pub fn bounded(limit: u32) -> Self {
        Self {
            entity_limit: limit,
            ..Self::default()
        }
    }

    /// Builder method to set the entity limit.
    #[must_use]
    pub fn with_entity_limit(mut self, limit: u32) -> Self {
        self.entity_limit = limit;
        self
    }

    /// Builder method to set the initial entity index capacity.
    #[must_use]
    pub fn with_entity_capacity(mut self, capacity: usize) -> Self {
        self.entity_capacity = capacity;
        self
    }

    /// Builder method to set the initial system list capacity.
    #[must_use]
    pub fn with_system_capacity(mut self, capacity: usize) -> Self {
        self.system_capacity = capacity;
        self
    }
}
