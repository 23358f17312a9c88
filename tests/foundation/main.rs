//! Integration tests for Layer 0: Foundation
//!
//! Tests for entity ids, component type tags, and errors.

mod entities;
mod errors;
