// SPDX-FileCopyrightText: 2024 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ptr;

use platform_abstraction_layer::{
    pixels::{self, RectStyle},
    BlendMode, Color, Rect, TextureInfo, TextureRef,
};
use sdl2::{pixels::PixelFormatEnum, rect::Point, render::Texture};
use tracing::{debug, trace, warn};

use crate::{
    convert::{pixel_format, sdl_blend_mode, sdl_color, sdl_rect},
    Engine, EngineError,
};

/// Side length of the texture used by [`Engine::render_square_texture`].
const SQUARE_TEXTURE_SIZE: u32 = 100;

impl Engine {
    /// Creates the main render target, replacing the previous one. The game
    /// draws into this, and [`Engine::render_assist_texture_to_window`]
    /// letterboxes it onto the window.
    pub fn create_assist_texture(&mut self, w: u32, h: u32) -> Result<TextureRef, EngineError> {
        self.destroy_assist_texture();
        let texture = self.create_argb_rendered_texture(w, h)?;
        self.set_texture_blend_mode(texture, BlendMode::Blend)?;
        self.assist = Some(texture);
        self.set_present_position(Some(texture));
        debug!("Created a {w}x{h} assist texture.");
        Ok(texture)
    }

    pub fn destroy_assist_texture(&mut self) {
        if let Some(texture) = self.assist.take() {
            self.destroy_texture(texture);
        }
    }

    /// The main render target, if it has been created.
    pub fn assist_texture(&self) -> Option<TextureRef> {
        self.assist
    }

    /// The size of the main render target, if it has been created.
    pub fn main_texture_size(&self) -> Option<(u32, u32)> {
        self.assist.and_then(|texture| self.query_texture(texture).ok())
    }

    /// Recalculates the letterboxed area for showing `texture` in the window,
    /// in renderer pixels. With no texture (or an invalid one), the content is
    /// assumed to be the size of the renderer's output.
    pub fn set_present_position(&mut self, texture: Option<TextureRef>) {
        let window = self.output_size();
        let content = texture
            .and_then(|texture| self.query_texture(texture).ok())
            .map_or(window, |(w, h)| (w as i32, h as i32));
        self.viewport.update(window, content);
        trace!("Present rectangle is now {:?}.", self.viewport.present_rect());
    }

    /// The width of the letterboxed area in the window.
    pub fn present_width(&self) -> i32 {
        self.viewport.present_width()
    }

    /// The height of the letterboxed area in the window.
    pub fn present_height(&self) -> i32 {
        self.viewport.present_height()
    }

    /// The letterboxed area in the window.
    pub fn present_rect(&self) -> Rect {
        self.viewport.present_rect()
    }

    /// Creates a streaming texture for planar YUV video frames.
    pub fn create_yuv_texture(&mut self, w: u32, h: u32) -> Result<TextureRef, EngineError> {
        let texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::IYUV, w, h)?;
        Ok(self.textures.insert(texture))
    }

    /// Uploads a YUV frame. Each plane is given with its pitch (bytes per
    /// row).
    #[allow(clippy::too_many_arguments)]
    pub fn update_yuv_texture(
        &mut self,
        texture: TextureRef,
        y_plane: &[u8],
        y_pitch: usize,
        u_plane: &[u8],
        u_pitch: usize,
        v_plane: &[u8],
        v_pitch: usize,
    ) -> Result<(), EngineError> {
        self.textures
            .get_mut(texture)?
            .update_yuv(None, y_plane, y_pitch, u_plane, u_pitch, v_plane, v_pitch)?;
        Ok(())
    }

    /// Creates a streaming texture for pixels updated from the CPU, see
    /// [`Engine::update_argb_texture`].
    pub fn create_argb_texture(&mut self, w: u32, h: u32) -> Result<TextureRef, EngineError> {
        let texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, w, h)?;
        Ok(self.textures.insert(texture))
    }

    /// Creates a texture which can be used as a render target.
    pub fn create_argb_rendered_texture(
        &mut self,
        w: u32,
        h: u32,
    ) -> Result<TextureRef, EngineError> {
        let texture = self
            .texture_creator
            .create_texture_target(PixelFormatEnum::ARGB8888, w, h)?;
        Ok(self.textures.insert(texture))
    }

    /// Replaces the pixels of a texture created with
    /// [`Engine::create_argb_texture`]. `pitch` is the amount of bytes per row
    /// in `pixels`.
    pub fn update_argb_texture(
        &mut self,
        texture: TextureRef,
        pixels: &[u8],
        pitch: usize,
    ) -> Result<(), EngineError> {
        self.textures.get_mut(texture)?.update(None, pixels, pitch)?;
        Ok(())
    }

    /// Destroys the texture. If it's the current render target, rendering
    /// goes back to the window. Does nothing for already destroyed textures.
    pub fn destroy_texture(&mut self, texture: TextureRef) {
        if self.render_target == Some(texture) {
            if let Err(err) = self.reset_render_target() {
                warn!("Failed to reset the render target: {err}");
            }
        }
        for handle in [&mut self.assist, &mut self.logo, &mut self.square] {
            if *handle == Some(texture) {
                *handle = None;
            }
        }
        match self.textures.remove(texture) {
            // Safety: the renderer which created the texture is alive as long
            // as the engine is, and the texture was just removed from the only
            // place which could hand it out again.
            Some(texture) => unsafe { texture.destroy() },
            None => debug!("Tried to destroy nonexistent texture {texture:?}."),
        }
    }

    /// The width and height of the texture.
    pub fn query_texture(&self, texture: TextureRef) -> Result<(u32, u32), EngineError> {
        let query = self.textures.get(texture)?.query();
        Ok((query.width, query.height))
    }

    /// The size and pixel format of the texture.
    pub fn texture_info(&self, texture: TextureRef) -> Result<TextureInfo, EngineError> {
        let query = self.textures.get(texture)?.query();
        Ok(TextureInfo {
            width: query.width,
            height: query.height,
            format: pixel_format(query.format),
        })
    }

    /// The SDL texture behind a handle, for drawing operations the engine
    /// doesn't wrap.
    pub fn texture(&self, texture: TextureRef) -> Result<&Texture, EngineError> {
        self.textures.get(texture)
    }

    /// Multiplies the texture's alpha by `alpha / 255` when drawing.
    pub fn set_texture_alpha_mod(
        &mut self,
        texture: TextureRef,
        alpha: u8,
    ) -> Result<(), EngineError> {
        self.textures.get_mut(texture)?.set_alpha_mod(alpha);
        Ok(())
    }

    /// Multiplies the texture's channels by `color / 255` when drawing.
    pub fn set_color(&mut self, texture: TextureRef, color: Color) -> Result<(), EngineError> {
        let texture = self.textures.get_mut(texture)?;
        texture.set_color_mod(color.r, color.g, color.b);
        texture.set_alpha_mod(color.a);
        Ok(())
    }

    pub fn set_texture_blend_mode(
        &mut self,
        texture: TextureRef,
        mode: BlendMode,
    ) -> Result<(), EngineError> {
        self.textures
            .get_mut(texture)?
            .set_blend_mode(sdl_blend_mode(mode));
        Ok(())
    }

    /// Draws the whole texture into the letterboxed area, or stretched over
    /// the whole render target if letterboxing is off.
    pub fn render_copy(&mut self, texture: TextureRef, angle: f64) -> Result<(), EngineError> {
        let dst = self
            .viewport
            .keep_ratio()
            .then(|| sdl_rect(self.viewport.present_rect()));
        self.copy_ex(texture, None, dst, angle)
    }

    /// Draws the whole texture at (x, y). A zero `w` or `h` uses the
    /// texture's own size. With `in_present`, the position is relative to
    /// the letterboxed area instead of the render target.
    #[allow(clippy::too_many_arguments)]
    pub fn render_copy_at(
        &mut self,
        texture: TextureRef,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        angle: f64,
        in_present: bool,
    ) -> Result<(), EngineError> {
        let (w, h) = if w == 0 || h == 0 {
            let (tex_w, tex_h) = self.query_texture(texture)?;
            (tex_w as i32, tex_h as i32)
        } else {
            (w, h)
        };
        let dst = self
            .viewport
            .offset_into_present(Rect::new(x, y, w, h), in_present);
        self.copy_ex(texture, None, Some(sdl_rect(dst)), angle)
    }

    /// Draws the `src` area of the texture (or all of it) into the `dst` area
    /// of the render target (or all of it). With `in_present`, `dst` is
    /// relative to the letterboxed area.
    pub fn render_copy_rect(
        &mut self,
        texture: TextureRef,
        src: Option<Rect>,
        dst: Option<Rect>,
        angle: f64,
        in_present: bool,
    ) -> Result<(), EngineError> {
        let src = src.map(sdl_rect);
        let dst = dst.map(|dst| sdl_rect(self.viewport.offset_into_present(dst, in_present)));
        self.copy_ex(texture, src, dst, angle)
    }

    fn copy_ex(
        &mut self,
        texture: TextureRef,
        src: Option<sdl2::rect::Rect>,
        dst: Option<sdl2::rect::Rect>,
        angle: f64,
    ) -> Result<(), EngineError> {
        let texture = self.textures.get(texture)?;
        self.canvas
            .copy_ex(texture, src, dst, angle, None::<Point>, false, false)?;
        self.viewport.count_render();
        Ok(())
    }

    /// Shows the frame drawn since the last present.
    pub fn render_present(&mut self) {
        self.canvas.present();
    }

    /// Clears the render target with the current draw color.
    pub fn render_clear(&mut self) {
        self.canvas.clear();
    }

    /// Sets the texture subsequent draws go to, None meaning the window. The
    /// texture must have been created with
    /// [`Engine::create_argb_rendered_texture`].
    pub fn set_render_target(&mut self, target: Option<TextureRef>) -> Result<(), EngineError> {
        let raw_texture = match target {
            Some(texture) => self.textures.get(texture)?.raw(),
            None => ptr::null_mut(),
        };
        // Safety: the renderer is alive for as long as the engine is, and the
        // texture pointer is either null (the window) or points to a live
        // texture created by the same renderer. A texture is only destroyed
        // after it's stopped being the render target (see destroy_texture).
        let result = unsafe { sdl2_sys::SDL_SetRenderTarget(self.canvas.raw(), raw_texture) };
        if result != 0 {
            return Err(EngineError::Sdl(sdl2::get_error()));
        }
        self.render_target = target;
        Ok(())
    }

    /// The current render target, None meaning the window.
    pub fn render_target(&self) -> Option<TextureRef> {
        self.render_target
    }

    /// Makes subsequent draws go to the window.
    pub fn reset_render_target(&mut self) -> Result<(), EngineError> {
        self.set_render_target(None)
    }

    /// Makes subsequent draws go to the main render target.
    pub fn set_render_assist_texture(&mut self) -> Result<(), EngineError> {
        let assist = self.assist.ok_or(EngineError::NoAssistTexture)?;
        self.set_render_target(Some(assist))
    }

    /// Draws the main render target onto the window, letterboxed and rotated
    /// according to [`Engine::set_rotation`]. Leaves the window as the render
    /// target.
    pub fn render_assist_texture_to_window(&mut self) -> Result<(), EngineError> {
        let assist = self.assist.ok_or(EngineError::NoAssistTexture)?;
        self.reset_render_target()?;
        self.render_copy(assist, self.viewport.rotation())
    }

    /// Draws the logo over the whole render target, if one was configured.
    pub fn show_logo(&mut self) -> Result<(), EngineError> {
        match self.logo {
            Some(logo) => self.render_copy_rect(logo, None, None, 0.0, false),
            None => Ok(()),
        }
    }

    /// Fills an area of the render target with a color, blending with what
    /// was there. A non-positive `w` or `h` fills the whole render target.
    pub fn fill_color(
        &mut self,
        color: Color,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Result<(), EngineError> {
        let rect = (w > 0 && h > 0).then(|| sdl_rect(Rect::new(x, y, w, h)));
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.set_blend_mode(sdl_blend_mode(BlendMode::Blend));
        self.canvas.fill_rect(rect)?;
        Ok(())
    }

    /// Draws a translucent rectangle of the given color, stretched over
    /// `rect`.
    pub fn render_square_texture(
        &mut self,
        rect: Rect,
        color: Color,
        alpha: u8,
    ) -> Result<(), EngineError> {
        let square = match self.square {
            Some(square) => square,
            None => {
                let square = self.create_rect_texture(
                    SQUARE_TEXTURE_SIZE,
                    SQUARE_TEXTURE_SIZE,
                    RectStyle::Solid,
                )?;
                self.square = Some(square);
                square
            }
        };
        self.set_color(square, color)?;
        self.set_texture_alpha_mod(square, alpha)?;
        self.render_copy_rect(square, None, Some(rect), 0.0, false)
    }

    /// Creates a white texture in the given shape, to be tinted with
    /// [`Engine::set_color`].
    pub fn create_rect_texture(
        &mut self,
        w: u32,
        h: u32,
        style: RectStyle,
    ) -> Result<TextureRef, EngineError> {
        let pixels = pixels::rect_texture_pixels(w as usize, h as usize, style);
        self.create_argb_texture_with(w, h, &pixels)
    }

    /// Creates a texture from an 8-bit coverage bitmap (such as a glyph
    /// rasterized by a font library), colored with `color`. Rows of `src` are
    /// `stride` bytes apart.
    pub fn trans_bitmap_to_texture(
        &mut self,
        src: &[u8],
        color: Color,
        w: u32,
        h: u32,
        stride: usize,
    ) -> Result<TextureRef, EngineError> {
        let pixels = pixels::tint_alpha_bitmap(src, color, w as usize, h as usize, stride);
        self.create_argb_texture_with(w, h, &pixels)
    }

    fn create_argb_texture_with(
        &mut self,
        w: u32,
        h: u32,
        pixels: &[u32],
    ) -> Result<TextureRef, EngineError> {
        let texture = self.create_argb_texture(w, h)?;
        let result = self
            .set_texture_blend_mode(texture, BlendMode::Blend)
            .and_then(|()| {
                self.update_argb_texture(texture, pixels::as_bytes(pixels), w as usize * 4)
            });
        if let Err(err) = result {
            self.destroy_texture(texture);
            return Err(err);
        }
        Ok(texture)
    }

    /// Sets the render counter, see [`Engine::render_times`].
    pub fn reset_render_times(&mut self, times: u32) {
        self.viewport.reset_render_times(times);
    }

    /// The amount of render copies made since the counter was last reset.
    pub fn render_times(&self) -> u32 {
        self.viewport.render_times()
    }
}
