//! Value objects - Immutable objects defined by their attributes

mod color;
mod dimension;
mod point;

pub use color::Color;
pub use dimension::Dimension;
pub use point::Point;
