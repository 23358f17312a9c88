//! Core types for entente.
//!
//! This crate provides:
//! - [`Entity`] - Monotonic entity identifiers
//! - [`ComponentType`] - Nonzero tags identifying component kinds
//! - [`Component`] - The trait every component kind implements
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod component;
pub mod entity;
pub mod error;

pub use component::{Component, ComponentType};
pub use entity::Entity;
pub use error::{Error, ErrorContext, ErrorKind, Result};
