// SPDX-FileCopyrightText: 2024 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

/// Handle to a texture owned by the engine.
///
/// Handles are plain values: copying one doesn't keep the texture alive, and
/// using a handle after its texture was destroyed is reported as an error
/// rather than touching another texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureRef(u64);

impl TextureRef {
    /// Wraps an id chosen by the platform crate. Games get handles from the
    /// engine's texture creation functions instead of calling this.
    pub fn new(id: u64) -> TextureRef {
        TextureRef(id)
    }

    /// The id passed to [`TextureRef::new`].
    pub fn inner(self) -> u64 {
        self.0
    }
}

/// How a texture's pixels are combined with the render target when drawn.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BlendMode {
    /// The texture's pixels overwrite the target, alpha included.
    None,
    /// Alpha blending: `dst = src * srcA + dst * (1 - srcA)` for color, and
    /// `dstA = srcA + dstA * (1 - srcA)` for alpha.
    #[default]
    Blend,
    /// Additive blending: `dst = src * srcA + dst` for color, alpha is left
    /// as is.
    Add,
}

/// Pixel layouts of textures created by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 32-bit pixels laid out according to [`crate::AMASK`],
    /// [`crate::RMASK`], [`crate::GMASK`] and [`crate::BMASK`], in native
    /// endianness.
    Argb8888,
    /// Planar YUV 4:2:0, with the Y plane followed by the U and V planes at
    /// half resolution. Used for video frames.
    Iyuv,
}

/// The information [`PixelFormat`]-agnostic code needs about a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    #[allow(missing_docs)]
    pub width: u32,
    #[allow(missing_docs)]
    pub height: u32,
    /// None if the platform reports a format the engine doesn't create
    /// textures in, e.g. for images loaded from disk.
    pub format: Option<PixelFormat>,
}
