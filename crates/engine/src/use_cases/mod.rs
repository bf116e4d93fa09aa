//! Use cases - scene-building operations.
//!
//! Each module orchestrates domain types on top of injected ports.

pub mod randomness;

pub use randomness::ExtendedRandom;
