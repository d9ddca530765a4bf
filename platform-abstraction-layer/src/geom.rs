// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::{AMASK, BMASK, GMASK, RMASK};

/// A rectangle in pixels, positioned by its top-left corner. Same layout as
/// SDL's.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[allow(missing_docs)]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect { x, y, w, h }
    }

    /// Returns true if the point is inside the rectangle. The right and
    /// bottom edges are exclusive.
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.w && y < self.y + self.h
    }

    /// Returns true if the rectangle has no area.
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// An 8-bit per channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    #[allow(missing_docs)]
    pub r: u8,
    #[allow(missing_docs)]
    pub g: u8,
    #[allow(missing_docs)]
    pub b: u8,
    #[allow(missing_docs)]
    pub a: u8,
}

impl Color {
    #[allow(missing_docs)]
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    #[allow(missing_docs)]
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xFF }
    }

    #[allow(missing_docs)]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Packs the color into a 32-bit ARGB pixel, laid out according to
    /// [`AMASK`], [`RMASK`], [`GMASK`] and [`BMASK`].
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpacks a 32-bit ARGB pixel.
    pub const fn from_argb(pixel: u32) -> Color {
        Color {
            r: ((pixel & RMASK) >> 16) as u8,
            g: ((pixel & GMASK) >> 8) as u8,
            b: (pixel & BMASK) as u8,
            a: ((pixel & AMASK) >> 24) as u8,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Horizontal alignment of text and other UI elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Align {
    #[default]
    Left,
    Middle,
    Right,
}

#[cfg(test)]
mod tests {
    use super::{Color, Rect};

    #[test]
    fn argb_packing() {
        let color = Color::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(0x7812_3456, color.to_argb());
        assert_eq!(color, Color::from_argb(0x7812_3456));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(14, 14));
        assert!(!rect.contains(15, 10));
        assert!(!rect.contains(9, 12));
        assert!(Rect::new(0, 0, 0, 3).is_empty());
    }
}
