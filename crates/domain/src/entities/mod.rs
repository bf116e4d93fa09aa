//! Entities - scene objects built from value objects

mod tree;

pub use tree::Tree;
