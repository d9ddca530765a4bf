// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use platform_abstraction_layer::{pixels, TextureRef};
use sdl2::pixels::PixelFormatEnum;
use tracing::{info, warn};

use crate::{Engine, EngineError};

impl Engine {
    /// Saves the window's current contents as an image. The format is picked
    /// based on the file extension, see [`screenshot_format`].
    pub fn save_screen(&mut self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let previous_target = self.render_target;
        self.reset_render_target()?;
        let result = self.read_target_pixels();
        self.set_render_target(previous_target)?;
        let (width, height, argb) = result?;
        save_argb(path.as_ref(), width, height, &argb)
    }

    /// Saves the contents of a render target texture as an image.
    pub fn save_texture(
        &mut self,
        texture: TextureRef,
        path: impl AsRef<Path>,
    ) -> Result<(), EngineError> {
        let previous_target = self.render_target;
        self.set_render_target(Some(texture))?;
        let result = self.read_target_pixels();
        self.set_render_target(previous_target)?;
        let (width, height, argb) = result?;
        save_argb(path.as_ref(), width, height, &argb)
    }

    fn read_target_pixels(&self) -> Result<(u32, u32, Vec<u32>), EngineError> {
        let (width, height) = match self.render_target {
            Some(texture) => self.query_texture(texture)?,
            None => self.canvas.output_size()?,
        };
        let bytes = self.canvas.read_pixels(None, PixelFormatEnum::ARGB8888)?;
        Ok((width, height, pixels::argb_from_ne_bytes(&bytes)))
    }
}

/// The image format screenshots are saved in for the given path. Extensions
/// which aren't recognized, or name formats which can't be written, fall back
/// to BMP.
pub fn screenshot_format(path: &Path) -> ImageFormat {
    use ImageFormat::{Bmp, Jpeg, Png, Qoi};
    match ImageFormat::from_path(path) {
        Ok(format @ (Png | Jpeg | Bmp | Qoi)) => format,
        Ok(format) => {
            warn!(
                "Can't write {format:?} screenshots, saving {} as BMP.",
                path.display(),
            );
            ImageFormat::Bmp
        }
        Err(_) => ImageFormat::Bmp,
    }
}

fn save_argb(path: &Path, width: u32, height: u32, argb: &[u32]) -> Result<(), EngineError> {
    let rgba = pixels::argb_to_rgba_bytes(argb);
    let image = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
        EngineError::Sdl(format!(
            "read {} pixels from a {width}x{height} render target",
            argb.len(),
        ))
    })?;
    let format = screenshot_format(path);
    match format {
        // JPEG has no alpha channel
        ImageFormat::Jpeg => DynamicImage::ImageRgba8(image)
            .to_rgb8()
            .save_with_format(path, format)?,
        _ => image.save_with_format(path, format)?,
    }
    info!("Saved a {width}x{height} screenshot to {}.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use image::ImageFormat;

    use super::{save_argb, screenshot_format};

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImageFormat::Png, screenshot_format(Path::new("shot.png")));
        assert_eq!(ImageFormat::Jpeg, screenshot_format(Path::new("shot.JPG")));
        assert_eq!(ImageFormat::Qoi, screenshot_format(Path::new("a/b.qoi")));
        assert_eq!(ImageFormat::Bmp, screenshot_format(Path::new("shot")));
        assert_eq!(ImageFormat::Bmp, screenshot_format(Path::new("shot.xyz")));
        assert_eq!(ImageFormat::Bmp, screenshot_format(Path::new("shot.gif")));
    }

    #[test]
    fn saved_pixels_keep_their_colors() {
        let file_name = format!("screenshot-test-{}.png", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let argb = [0xFFFF0000, 0x8000FF00, 0xFF0000FF, 0x00000000];
        save_argb(&path, 2, 2, &argb).unwrap();
        let image = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!((2, 2), image.dimensions());
        assert_eq!([0xFF, 0, 0, 0xFF], image.get_pixel(0, 0).0);
        assert_eq!([0, 0xFF, 0, 0x80], image.get_pixel(1, 0).0);
        assert_eq!([0, 0, 0xFF, 0xFF], image.get_pixel(0, 1).0);
        assert_eq!(0, image.get_pixel(1, 1).0[3]);
    }

    #[test]
    fn mismatched_sizes_are_errors() {
        let path = std::env::temp_dir().join("never-written.png");
        assert!(save_argb(&path, 4, 4, &[0; 3]).is_err());
        assert!(!path.exists());
    }
}
