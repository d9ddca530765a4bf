// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pixel buffer conversions that don't need the platform, operating on 32-bit
//! ARGB pixels (see [`crate::AMASK`] and friends).

use alloc::vec::Vec;

use crate::{Color, AMASK, BMASK, GMASK, RMASK};

/// Turns every pixel white while keeping its alpha. Fully transparent pixels
/// are cleared to zero.
pub fn whiten_argb(pixels: &mut [u32]) {
    for pixel in pixels {
        let alpha = *pixel & AMASK;
        *pixel = if alpha == 0 {
            0
        } else {
            alpha | RMASK | GMASK | BMASK
        };
    }
}

/// Converts an 8-bit coverage bitmap (e.g. a rasterized glyph) into tightly
/// packed ARGB pixels of the given color. Each pixel's alpha is its coverage
/// scaled by the color's alpha.
///
/// Rows of `src` are `stride` bytes apart. Missing bytes (a short `src`) are
/// treated as zero coverage.
pub fn tint_alpha_bitmap(
    src: &[u8],
    color: Color,
    width: usize,
    height: usize,
    stride: usize,
) -> Vec<u32> {
    let rgb = color.to_argb() & !AMASK;
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let coverage = src.get(y * stride + x).copied().unwrap_or(0) as u32;
            let alpha = coverage * color.a as u32 / 0xFF;
            pixels.push(alpha << 24 | rgb);
        }
    }
    pixels
}

/// Shapes for [`rect_texture_pixels`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RectStyle {
    /// Every pixel is opaque.
    #[default]
    Solid,
    /// Corners are cut with a radius of a quarter of the shorter side.
    Rounded,
    /// Only the ellipse inscribed in the rectangle is opaque.
    Ellipse,
}

impl RectStyle {
    /// Maps the numeric style codes used by game scripts, falling back to
    /// [`RectStyle::Solid`] for unknown codes.
    pub fn from_code(code: i32) -> RectStyle {
        match code {
            1 => RectStyle::Rounded,
            2 => RectStyle::Ellipse,
            _ => RectStyle::Solid,
        }
    }
}

/// Creates white ARGB pixels in the given shape, for tinting with color
/// modulation when drawn.
pub fn rect_texture_pixels(width: usize, height: usize, style: RectStyle) -> Vec<u32> {
    const OPAQUE: u32 = 0xFFFF_FFFF;
    const CLEAR: u32 = 0x00FF_FFFF;

    let (w, h) = (width as f64, height as f64);
    let radius = w.min(h) / 4.0;
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            // Sample at pixel centers
            let (px, py) = (x as f64 + 0.5, y as f64 + 0.5);
            let inside = match style {
                RectStyle::Solid => true,
                RectStyle::Rounded => {
                    let dx = (radius - px).max(px - (w - radius)).max(0.0);
                    let dy = (radius - py).max(py - (h - radius)).max(0.0);
                    dx * dx + dy * dy <= radius * radius
                }
                RectStyle::Ellipse => {
                    let nx = px / w * 2.0 - 1.0;
                    let ny = py / h * 2.0 - 1.0;
                    nx * nx + ny * ny <= 1.0
                }
            };
            pixels.push(if inside { OPAQUE } else { CLEAR });
        }
    }
    pixels
}

/// Converts ARGB pixels into bytes in `[red, green, blue, alpha, red, ...]`
/// order, as expected by image encoders.
pub fn argb_to_rgba_bytes(pixels: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(pixels.len() * 4);
    for &pixel in pixels {
        let color = Color::from_argb(pixel);
        bytes.extend_from_slice(&[color.r, color.g, color.b, color.a]);
    }
    bytes
}

/// Reinterprets native-endian bytes (as read back from the platform in a
/// 32-bit ARGB format) as pixels. Trailing bytes that don't make up a whole
/// pixel are ignored.
pub fn argb_from_ne_bytes(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Views pixels as bytes for uploading.
pub fn as_bytes(pixels: &[u32]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn whitening_keeps_alpha() {
        let mut pixels = [0x80_12_34_56, 0x00_FF_00_00, 0xFF_00_00_00];
        whiten_argb(&mut pixels);
        assert_eq!([0x80_FF_FF_FF, 0, 0xFF_FF_FF_FF], pixels);
    }

    #[test]
    fn tinted_bitmap_uses_coverage_as_alpha() {
        // 2x2 bitmap in rows of 3 bytes, the last byte of each row is padding
        let src = [0xFF, 0x00, 0xAA, 0x80, 0x40, 0xAA];
        let pixels = tint_alpha_bitmap(&src, Color::rgb(0x10, 0x20, 0x30), 2, 2, 3);
        assert_eq!(
            vec![0xFF_10_20_30, 0x00_10_20_30, 0x80_10_20_30, 0x40_10_20_30],
            pixels
        );

        let half = tint_alpha_bitmap(&[0xFF], Color::rgba(0, 0, 0, 0x80), 1, 1, 1);
        assert_eq!(vec![0x80_00_00_00], half);
    }

    #[test]
    fn short_bitmap_is_transparent() {
        let pixels = tint_alpha_bitmap(&[0xFF], Color::WHITE, 2, 1, 2);
        assert_eq!(vec![0xFF_FF_FF_FF, 0x00_FF_FF_FF], pixels);
    }

    #[test]
    fn rect_styles() {
        let solid = rect_texture_pixels(8, 8, RectStyle::Solid);
        assert!(solid.iter().all(|&p| p == 0xFFFF_FFFF));

        let rounded = rect_texture_pixels(8, 8, RectStyle::Rounded);
        assert_eq!(0x00FF_FFFF, rounded[0]);
        assert_eq!(0xFFFF_FFFF, rounded[3]);
        assert_eq!(0xFFFF_FFFF, rounded[4 * 8 + 4]);

        let ellipse = rect_texture_pixels(8, 4, RectStyle::Ellipse);
        assert_eq!(0x00FF_FFFF, ellipse[0]);
        assert_eq!(0x00FF_FFFF, ellipse[7]);
        assert_eq!(0xFFFF_FFFF, ellipse[8 + 4]);
        assert_eq!(32, ellipse.len());

        assert_eq!(RectStyle::Solid, RectStyle::from_code(7));
        assert_eq!(RectStyle::Ellipse, RectStyle::from_code(2));
    }

    #[test]
    fn rgba_byte_order() {
        assert_eq!(
            vec![0x12, 0x34, 0x56, 0x78],
            argb_to_rgba_bytes(&[0x78_12_34_56])
        );
    }

    #[test]
    fn bytes_and_pixels_line_up() {
        let pixels = [0xAABB_CCDD, 0x1122_3344];
        let bytes = as_bytes(&pixels);
        assert_eq!(8, bytes.len());
        assert_eq!(pixels.to_vec(), argb_from_ne_bytes(bytes));
        assert_eq!(1, argb_from_ne_bytes(&bytes[..7]).len());
    }
}
