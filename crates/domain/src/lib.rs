//! Sandbox Domain - scene objects, value objects and their invariants.
//!
//! This crate has no source of randomness of its own: generators are injected
//! by the engine so domain types stay deterministic and easy to test.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::Tree;
pub use error::DomainError;
pub use value_objects::{Color, Dimension, Point};
