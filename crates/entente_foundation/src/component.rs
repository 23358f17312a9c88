//! Component kinds and their type tags.
//!
//! Every component kind declares exactly one [`ComponentType`] as an
//! associated constant. Tag `0` is reserved; a kind declaring it fails to
//! compile as soon as any storage operation is instantiated for it.

use std::fmt;

/// Tag identifying a kind of component.
///
/// Tags are plain integers chosen by the component author. They must be
/// distinct across the kinds used with one manager and must not be zero.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ComponentType(u32);

impl ComponentType {
    /// The reserved invalid tag.
    pub const INVALID: Self = Self(0);

    /// Wraps a raw tag.
    #[must_use]
    pub const fn new(tag: u32) -> Self {
        Self(tag)
    }

    /// Returns the raw tag.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self.0
    }

    /// Returns true unless this is the reserved invalid tag.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentType({})", self.0)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A plain data value that can be attached to an entity.
///
/// # Example
///
/// ```
/// use entente_foundation::{Component, ComponentType};
///
/// struct Position {
///     x: f32,
///     y: f32,
/// }
///
/// impl Component for Position {
///     const COMPONENT_TYPE: ComponentType = ComponentType::new(1);
/// }
/// ```
pub trait Component: 'static {
    /// The tag shared by every value of this kind.
    const COMPONENT_TYPE: ComponentType;
}

/// Returns the tag of `C`, rejecting the invalid tag at compile time.
///
/// Storage entry points call this instead of reading
/// [`Component::COMPONENT_TYPE`] directly, so a kind declaring tag `0`
/// never reaches a store.
///
/// ```compile_fail
/// use entente_foundation::component::component_type_of;
/// use entente_foundation::{Component, ComponentType};
///
/// struct Untagged;
///
/// impl Component for Untagged {
///     const COMPONENT_TYPE: ComponentType = ComponentType::new(0);
/// }
///
/// let _ = component_type_of::<Untagged>();
/// ```
#[must_use]
pub const fn component_type_of<C: Component>() -> ComponentType {
    const {
        assert!(
            C::COMPONENT_TYPE.is_valid(),
            "component kinds must declare a nonzero ComponentType"
        );
    }
    C::COMPONENT_TYPE
}

/// Returns the Rust type name of `C`, used in diagnostics.
#[must_use]
pub fn component_name<C: Component>() -> &'static str {
    std::any::type_name::<C>()
}
