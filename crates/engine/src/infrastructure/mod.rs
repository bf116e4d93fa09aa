//! Infrastructure - ports and the adapters that implement them.

pub mod config;
pub mod ports;
pub mod random;
