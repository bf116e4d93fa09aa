//! Dimension value object - a strictly positive width and height

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A 2D size whose sides are both greater than zero.
///
/// # Invariants
///
/// - `width > 0` and `height > 0` (enforced by [`Dimension::new`] and by
///   deserialization)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimension", into = "RawDimension")]
pub struct Dimension {
    width: i32,
    height: i32,
}

/// Unvalidated wire shape, only used to route serde through `Dimension::new`.
#[derive(Serialize, Deserialize)]
struct RawDimension {
    width: i32,
    height: i32,
}

impl Dimension {
    /// Create a new validated dimension.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidArgument` if either side is zero or
    /// negative.
    pub fn new(width: i32, height: i32) -> Result<Self, DomainError> {
        if width <= 0 || height <= 0 {
            return Err(DomainError::invalid_argument(format!(
                "Dimension must have positive width and height, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Width times height, widened so it cannot overflow.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl TryFrom<RawDimension> for Dimension {
    type Error = DomainError;

    fn try_from(raw: RawDimension) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl From<Dimension> for RawDimension {
    fn from(dimension: Dimension) -> Self {
        Self {
            width: dimension.width,
            height: dimension.height,
        }
    }
}
