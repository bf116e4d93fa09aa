//! Color value object
//!
//! Four 8-bit channels with a full-range alpha, so translucent and fully
//! transparent colors are first-class.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA color.
///
/// # Example
///
/// ```
/// use sandbox_domain::Color;
///
/// let color = Color::from_argb(0x80FF_8000);
/// assert_eq!(color.alpha(), 0x80);
/// assert_eq!(color.red(), 0xFF);
/// assert!(!color.is_opaque());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Create a color from its four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque color.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }

    /// Unpack a color from a packed ARGB value.
    ///
    /// Alpha occupies bits 24-31, red 16-23, green 8-15 and blue 0-7. The
    /// alpha bits are kept as-is, so the result may be translucent.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            alpha: (argb >> 24) as u8,
            red: (argb >> 16) as u8,
            green: (argb >> 8) as u8,
            blue: argb as u8,
        }
    }

    /// Pack this color into an ARGB value. Inverse of [`Color::from_argb`].
    pub const fn to_argb(self) -> u32 {
        (self.alpha as u32) << 24
            | (self.red as u32) << 16
            | (self.green as u32) << 8
            | self.blue as u32
    }

    #[inline]
    pub fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub fn blue(&self) -> u8 {
        self.blue
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    /// Returns a copy of this color with the given alpha.
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { alpha, ..self }
    }

    /// True when alpha is at its maximum.
    pub fn is_opaque(&self) -> bool {
        self.alpha == u8::MAX
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}
