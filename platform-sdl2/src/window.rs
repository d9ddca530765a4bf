// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use sdl2::{
    video::{FullscreenType, WindowPos},
    VideoSubsystem,
};
use tracing::{debug, warn};

use crate::{Engine, EngineError};

/// The smallest rectangle containing every display, in desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DisplayBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl DisplayBounds {
    pub fn of_all_displays(video: &VideoSubsystem, fallback_size: (i32, i32)) -> DisplayBounds {
        let displays = video
            .num_video_displays()
            .inspect_err(|err| warn!("Failed to count displays: {err}"))
            .unwrap_or(0);
        let mut bounds: Option<DisplayBounds> = None;
        for index in 0..displays {
            match video.display_bounds(index) {
                Ok(rect) => {
                    let display = DisplayBounds {
                        min_x: rect.x(),
                        min_y: rect.y(),
                        max_x: rect.x() + rect.width() as i32,
                        max_y: rect.y() + rect.height() as i32,
                    };
                    bounds = Some(match bounds {
                        Some(bounds) => bounds.union(display),
                        None => display,
                    });
                }
                Err(err) => warn!("Failed to get the bounds of display {index}: {err}"),
            }
        }
        bounds.unwrap_or(DisplayBounds {
            min_x: 0,
            min_y: 0,
            max_x: fallback_size.0,
            max_y: fallback_size.1,
        })
    }

    pub fn union(self, other: DisplayBounds) -> DisplayBounds {
        DisplayBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Moves a window at (x, y) of size (w, h) so that it's inside the bounds,
    /// or at least its top-left corner is, if it's larger than the bounds.
    pub fn clamp_window(&self, x: i32, y: i32, w: i32, h: i32) -> (i32, i32) {
        (
            x.min(self.max_x - w).max(self.min_x),
            y.min(self.max_y - h).max(self.min_y),
        )
    }
}

/// Maps a point between two coordinate spaces covering the same area, such
/// as window points and renderer pixels on a high-DPI display.
pub(crate) fn scale_point(x: i32, y: i32, from: (i32, i32), to: (i32, i32)) -> (i32, i32) {
    if from == to || from.0 <= 0 || from.1 <= 0 {
        return (x, y);
    }
    let x = (x as f64 * to.0 as f64 / from.0 as f64).floor();
    let y = (y as f64 * to.1 as f64 / from.1 as f64).floor();
    (x as i32, y as i32)
}

fn fullscreen_mode(full_screen: bool) -> FullscreenType {
    if full_screen {
        FullscreenType::Desktop
    } else {
        FullscreenType::Off
    }
}

impl Engine {
    /// The window size in screen coordinates.
    pub fn window_size(&self) -> (i32, i32) {
        let (w, h) = self.canvas.window().size();
        (w as i32, h as i32)
    }

    /// The size of the renderer's output in pixels. Larger than
    /// [`Engine::window_size`] on high-DPI displays.
    pub fn output_size(&self) -> (i32, i32) {
        match self.canvas.output_size() {
            Ok((w, h)) => (w as i32, h as i32),
            Err(err) => {
                warn!("Failed to query the renderer's output size: {err}");
                self.window_size()
            }
        }
    }

    pub fn window_max_size(&self) -> (i32, i32) {
        let (w, h) = self.canvas.window().maximum_size();
        (w as i32, h as i32)
    }

    pub fn window_width(&self) -> i32 {
        self.window_size().0
    }

    pub fn window_height(&self) -> i32 {
        self.window_size().1
    }

    /// The width of the area covered by all displays.
    pub fn max_window_width(&self) -> i32 {
        self.bounds.width()
    }

    /// The height of the area covered by all displays.
    pub fn max_window_height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn window_position(&self) -> (i32, i32) {
        self.canvas.window().position()
    }

    /// Resizes the window, clamped to the display area, and moves it back
    /// onto the displays if it no longer fits where it was. Sizes that aren't
    /// positive are ignored.
    pub fn set_window_size(&mut self, w: i32, h: i32) -> Result<(), EngineError> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        let w = w.min(self.bounds.width()).max(1);
        let h = h.min(self.bounds.height()).max(1);
        debug!("Resizing the window to {w}x{h}.");

        let window = self.canvas.window_mut();
        window.set_size(w as u32, h as u32)?;
        window.show();
        window.raise();
        self.set_present_position(self.assist);
        self.reset_window_position();
        Ok(())
    }

    pub fn set_window_position(&mut self, x: i32, y: i32) {
        self.canvas
            .window_mut()
            .set_position(WindowPos::Positioned(x), WindowPos::Positioned(y));
    }

    /// Moves the window so that it's within the display area.
    pub fn reset_window_position(&mut self) {
        let (x, y) = self.window_position();
        let (w, h) = self.window_size();
        let (x, y) = self.bounds.clamp_window(x, y, w, h);
        self.set_window_position(x, y);
    }

    /// The title of the window and of message boxes.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_window_title(&mut self, title: &str) -> Result<(), EngineError> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|err| EngineError::Sdl(err.to_string()))?;
        self.title = title.to_string();
        Ok(())
    }

    /// Checks the window's current state, which can change behind the
    /// engine's back, e.g. with the platform's own fullscreen shortcuts.
    pub fn is_full_screen(&mut self) -> bool {
        self.full_screen = self.canvas.window().fullscreen_state() != FullscreenType::Off;
        self.full_screen
    }

    /// Switches between desktop fullscreen and windowed mode.
    pub fn toggle_fullscreen(&mut self) -> Result<(), EngineError> {
        let full_screen = !self.full_screen;
        self.canvas
            .window_mut()
            .set_fullscreen(fullscreen_mode(full_screen))?;
        self.full_screen = full_screen;
        self.set_present_position(self.assist);
        self.render_clear();
        Ok(())
    }

    /// Whether the main render target is letterboxed onto the window.
    pub fn keep_ratio(&self) -> bool {
        self.viewport.keep_ratio()
    }

    /// Sets whether the main render target is letterboxed (true) or
    /// stretched (false) onto the window. Returns the new setting.
    pub fn set_keep_ratio(&mut self, keep_ratio: bool) -> bool {
        self.viewport.set_keep_ratio(keep_ratio);
        self.set_present_position(self.assist);
        keep_ratio
    }

    /// The rotation in degrees used by
    /// [`Engine::render_assist_texture_to_window`].
    pub fn rotation(&self) -> f64 {
        self.viewport.rotation()
    }

    /// Sets the rotation in degrees used by
    /// [`Engine::render_assist_texture_to_window`], returning it.
    pub fn set_rotation(&mut self, rotation: f64) -> f64 {
        self.viewport.set_rotation(rotation)
    }

    /// Sets the per-axis scale factors of the main render target, for
    /// content with non-square pixels.
    pub fn set_ratio(&mut self, x: f64, y: f64) {
        self.viewport.set_ratio(x, y);
        self.set_present_position(self.assist);
    }
}

#[cfg(test)]
mod tests {
    use sdl2::video::FullscreenType;

    use super::{fullscreen_mode, scale_point, DisplayBounds};

    const SINGLE: DisplayBounds = DisplayBounds {
        min_x: 0,
        min_y: 0,
        max_x: 1920,
        max_y: 1080,
    };

    #[test]
    fn union_of_side_by_side_displays() {
        let left = DisplayBounds {
            min_x: -1280,
            min_y: 200,
            max_x: 0,
            max_y: 1224,
        };
        let bounds = SINGLE.union(left);
        assert_eq!(-1280, bounds.min_x);
        assert_eq!(0, bounds.min_y);
        assert_eq!(3200, bounds.width());
        assert_eq!(1224, bounds.height());
    }

    #[test]
    fn windows_are_pulled_back_inside() {
        assert_eq!((100, 100), SINGLE.clamp_window(100, 100, 640, 480));
        assert_eq!((1280, 600), SINGLE.clamp_window(1500, 900, 640, 480));
        assert_eq!((0, 0), SINGLE.clamp_window(-50, -10, 640, 480));
        // too large to fit: keep the top-left corner visible
        assert_eq!((0, 0), SINGLE.clamp_window(30, 30, 2560, 1440));
    }

    #[test]
    fn high_dpi_points_map_to_pixels() {
        let window = (1024, 640);
        let output = (2048, 1280);
        assert_eq!((1000, 500), scale_point(500, 250, window, output));
        assert_eq!((500, 250), scale_point(1000, 500, output, window));
        assert_eq!((511, 319), scale_point(1023, 639, output, window));
        assert_eq!((-2, 0), scale_point(-1, 0, window, output));
        // same size, or an unknown one: untouched
        assert_eq!((7, 9), scale_point(7, 9, window, window));
        assert_eq!((7, 9), scale_point(7, 9, (0, 0), output));
    }

    #[test]
    fn fullscreen_toggle_targets_desktop_mode() {
        assert_eq!(FullscreenType::Desktop, fullscreen_mode(true));
        assert_eq!(FullscreenType::Off, fullscreen_mode(false));
    }
}
