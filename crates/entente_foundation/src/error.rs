//! Error types for entente.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::component::ComponentType;
use crate::entity::Entity;

/// Result type alias using entente's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for entente operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a store not found error.
    #[must_use]
    pub fn store_not_found(component_type: ComponentType, name: &'static str) -> Self {
        Self::new(ErrorKind::StoreNotFound {
            component_type,
            name,
        })
    }

    /// Creates a store type mismatch error.
    #[must_use]
    pub fn store_type_mismatch(
        component_type: ComponentType,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::new(ErrorKind::StoreTypeMismatch {
            component_type,
            expected,
            found,
        })
    }

    /// Creates a component not found error.
    #[must_use]
    pub fn component_not_found(entity: Entity, component_type: ComponentType) -> Self {
        Self::new(ErrorKind::ComponentNotFound {
            entity,
            component_type,
        })
    }

    /// Creates an entity id space exhausted error.
    #[must_use]
    pub fn entities_exhausted(limit: u32) -> Self {
        Self::new(ErrorKind::EntitiesExhausted { limit })
    }

    /// Returns true if this is a [`ErrorKind::StoreNotFound`] error.
    #[must_use]
    pub fn is_store_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::StoreNotFound { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No store was created for the component type.
    #[error("component store not found: {name} (type {component_type})")]
    StoreNotFound {
        /// The tag that was looked up.
        component_type: ComponentType,
        /// Rust type name of the requested kind.
        name: &'static str,
    },

    /// The store registered under a tag holds a different component kind.
    #[error("component store type mismatch for type {component_type}: expected {expected}, found {found}")]
    StoreTypeMismatch {
        /// The tag that was looked up.
        component_type: ComponentType,
        /// Rust type name of the requested kind.
        expected: &'static str,
        /// Rust type name the store was created for.
        found: &'static str,
    },

    /// The entity has no component of this kind.
    #[error("component not found: type {component_type} on entity {entity:?}")]
    ComponentNotFound {
        /// The entity that was queried.
        entity: Entity,
        /// The tag that was queried.
        component_type: ComponentType,
    },

    /// The entity id space is used up.
    #[error("entity ids exhausted (limit {limit})")]
    EntitiesExhausted {
        /// The highest id that may be allocated.
        limit: u32,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The manager operation that failed.
    pub operation: Option<&'static str>,
    /// The entity involved, if any.
    pub entity: Option<Entity>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Sets the entity.
    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entity = Some(entity);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(entity) = self.entity {
            if self.operation.is_some() {
                write!(f, " ")?;
            }
            write!(f, "for {entity}")?;
        }
        Ok(())
    }
}
