//! 8-bit RGBA colors

use serde::{Deserialize, Serialize};

/// RGBA color with one byte per channel
///
/// This is the value a color constraint resolves to. Backends that work in
/// floating point can use [`Color::to_f32_array`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    pub const fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub const fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_array(channels: [u8; 4]) -> Self {
        Self::rgba(channels[0], channels[1], channels[2], channels[3])
    }

    /// Normalized `[r, g, b, a]` in `0.0..=1.0`
    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
