// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use platform_abstraction_layer::{pixels::whiten_argb, BlendMode, Color, TextureRef};
use sdl2::{
    image::{ImageRWops, LoadSurface},
    messagebox::{show_simple_message_box, MessageBoxFlag},
    pixels::PixelFormatEnum,
    rwops::RWops,
    surface::Surface,
};
use tracing::debug;

use crate::{
    convert::{sdl_blend_mode, sdl_color},
    Engine, EngineError,
};

impl Engine {
    /// Loads an image file in any format SDL_image supports. With `as_white`,
    /// every pixel is turned white (keeping its alpha), for tinting with
    /// [`Engine::set_color`].
    pub fn load_image(
        &mut self,
        path: impl AsRef<Path>,
        as_white: bool,
    ) -> Result<TextureRef, EngineError> {
        let path = path.as_ref();
        let surface = Surface::from_file(path)?;
        debug!(
            "Loaded a {}x{} image from {}.",
            surface.width(),
            surface.height(),
            path.display(),
        );
        self.surface_to_texture(surface, as_white)
    }

    /// Like [`Engine::load_image`], but decodes an image file already read
    /// into memory.
    pub fn load_image_from_memory(
        &mut self,
        bytes: &[u8],
        as_white: bool,
    ) -> Result<TextureRef, EngineError> {
        let rwops = RWops::from_bytes(bytes)?;
        let surface = rwops.load()?;
        self.surface_to_texture(surface, as_white)
    }

    fn surface_to_texture(
        &mut self,
        surface: Surface,
        as_white: bool,
    ) -> Result<TextureRef, EngineError> {
        let surface = if as_white {
            whiten_surface(surface)?
        } else {
            surface
        };
        let mut texture = self.texture_creator.create_texture_from_surface(&surface)?;
        texture.set_blend_mode(sdl_blend_mode(BlendMode::Blend));
        Ok(self.textures.insert(texture))
    }

    /// Renders `text` with the font at `font_path` into a new texture, with
    /// antialiasing (blended mode).
    pub fn create_text_texture(
        &mut self,
        font_path: impl AsRef<Path>,
        text: &str,
        size: u16,
        color: Color,
    ) -> Result<TextureRef, EngineError> {
        if text.is_empty() {
            return Err(EngineError::EmptyText);
        }
        let ttf = self.ttf.as_ref().ok_or(EngineError::Unavailable("text"))?;
        let texture = {
            let font = ttf.load_font(font_path.as_ref(), size)?;
            let surface = font.render(text).blended(sdl_color(color))?;
            self.texture_creator.create_texture_from_surface(&surface)?
        };
        Ok(self.textures.insert(texture))
    }

    /// Shows a blocking informational message box titled with the engine's
    /// title.
    pub fn show_message(&self, content: &str) -> Result<(), EngineError> {
        show_simple_message_box(
            MessageBoxFlag::INFORMATION,
            &self.title,
            content,
            self.canvas.window(),
        )
        .map_err(|err| EngineError::Sdl(format!("{err:?}")))
    }
}

fn whiten_surface(surface: Surface) -> Result<Surface, EngineError> {
    let mut surface = surface.convert_format(PixelFormatEnum::ARGB8888)?;
    let pitch = surface.pitch() as usize;
    let width = surface.width() as usize;
    surface.with_lock_mut(|bytes| whiten_rows(bytes, pitch, width));
    Ok(surface)
}

/// Whitens the ARGB8888 pixels of a locked surface. Rows are `pitch` bytes
/// apart and only their first `width` pixels are touched.
fn whiten_rows(bytes: &mut [u8], pitch: usize, width: usize) {
    for row in bytes.chunks_mut(pitch) {
        let len = row.len().min(width * 4);
        let row = &mut row[..len];
        match bytemuck::try_cast_slice_mut::<u8, u32>(row) {
            Ok(pixels) => whiten_argb(pixels),
            Err(_) => {
                for pixel in row.chunks_exact_mut(4) {
                    let mut argb = [bytemuck::pod_read_unaligned::<u32>(pixel)];
                    whiten_argb(&mut argb);
                    pixel.copy_from_slice(bytemuck::bytes_of(&argb[0]));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sdl2::{pixels::PixelFormatEnum, surface::Surface};

    use super::{whiten_rows, whiten_surface};

    #[test]
    fn rows_are_whitened_up_to_width() {
        let mut bytes = Vec::new();
        for argb in [0x80123456u32, 0x00ABCDEF, 0x7F000000] {
            bytes.extend_from_slice(&argb.to_ne_bytes());
        }
        // padding at the end of the row must not be treated as a pixel
        bytes.extend_from_slice(&[1, 2, 3, 4]);
        whiten_rows(&mut bytes, 16, 3);
        let pixels: Vec<u32> = bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        assert_eq!(0x80FFFFFF, pixels[0]);
        assert_eq!(0, pixels[1]);
        assert_eq!(0x7FFFFFFF, pixels[2]);
        assert_eq!(u32::from_ne_bytes([1, 2, 3, 4]), pixels[3]);
    }

    #[test]
    fn surfaces_are_whitened_in_argb() {
        let mut surface = Surface::new(4, 2, PixelFormatEnum::ARGB8888).unwrap();
        surface.with_lock_mut(|bytes| {
            for pixel in bytes.chunks_exact_mut(4) {
                pixel.copy_from_slice(&0xFF204060u32.to_ne_bytes());
            }
        });
        let surface = whiten_surface(surface).unwrap();
        assert_eq!(PixelFormatEnum::ARGB8888, surface.pixel_format_enum());
        surface.with_lock(|bytes| {
            for pixel in bytes.chunks_exact(4) {
                let argb = u32::from_ne_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
                assert_eq!(0xFFFFFFFF, argb);
            }
        });
    }
}
