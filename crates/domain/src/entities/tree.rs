//! Tree scene object
//!
//! A tree is drawn as a canopy of a single leaf color inside a bounding size.
//! Growth and rendering live elsewhere; this type only carries what a scene
//! needs to place one.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{Color, Dimension};

/// A tree in a scene.
///
/// # Example
///
/// ```
/// use sandbox_domain::{Color, Dimension, Tree};
///
/// let size = Dimension::new(50, 100).unwrap();
/// let tree = Tree::new(Color::rgb(34, 139, 34), size);
///
/// assert_eq!(tree.leaf_color(), Color::rgb(34, 139, 34));
/// assert_eq!(tree.dimension().height(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    leaf_color: Color,
    size: Dimension,
}

impl Tree {
    pub fn new(leaf_color: Color, size: Dimension) -> Self {
        Self { leaf_color, size }
    }

    /// Returns the color the tree was created with.
    #[inline]
    pub fn leaf_color(&self) -> Color {
        self.leaf_color
    }

    /// Returns the tree's bounding size.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.size
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree({}, {})", self.leaf_color, self.size)
    }
}
