//! Component storage, systems, and the association manager for entente.
//!
//! This crate provides:
//! - [`ComponentStore`] - Per-kind component storage keyed by entity
//! - [`ComponentTypeSet`] - The component types attached to one entity
//! - [`System`] - Per-tick behavior driven in insertion order
//! - [`Manager`] - Entity allocation, store registry and system list
//! - [`ManagerConfig`] - Limits and capacities for a manager

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod manager;
pub mod store;
pub mod system;
pub mod type_set;

pub use config::ManagerConfig;
pub use manager::Manager;
pub use store::ComponentStore;
pub use system::{System, SystemPtr};
pub use type_set::ComponentTypeSet;
