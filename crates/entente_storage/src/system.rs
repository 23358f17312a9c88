//! Systems: per-tick behavior over entities and components.
//!
//! Systems are held by shared ownership so the same instance can appear in
//! several managers, or several times in one manager. A manager runs them in
//! the order they were added; a system added twice runs twice.

use std::rc::Rc;

use crate::manager::Manager;

/// A unit of per-tick behavior.
///
/// `update` takes `&self`; systems that keep state between ticks use
/// interior mutability.
pub trait System {
    /// Runs one tick.
    fn update(&self, manager: &mut Manager, elapsed: f32);
}

/// Shared handle to a system.
pub type SystemPtr = Rc<dyn System>;

impl<F> System for F
where
    F: Fn(&mut Manager, f32),
{
    fn update(&self, manager: &mut Manager, elapsed: f32) {
        self(manager, elapsed);
    }
}
