//! 8-bit RGB color value.
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable RGB triple with each channel in `[0, 255]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray color with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Build a color from wide integers, saturating each channel at the
    /// 8-bit bounds.
    pub fn saturating(r: i32, g: i32, b: i32) -> Self {
        Self::new(saturate(r), saturate(g), saturate(b))
    }

    #[inline]
    pub const fn red(self) -> u8 {
        self.r
    }

    #[inline]
    pub const fn green(self) -> u8 {
        self.g
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.b
    }

    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        c.channels()
    }
}

/// Fixed-width `(rrr,ggg,bbb)` rendering used by the debug printer.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:3},{:3},{:3})", self.r, self.g, self.b)
    }
}

#[inline]
fn saturate(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
