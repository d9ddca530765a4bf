// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Rect;

/// Tracks where the main render target is drawn on the window.
///
/// With `keep_ratio` set, the content is letterboxed: scaled as large as it
/// fits while preserving its aspect ratio (after applying the per-axis
/// `ratio_x`/`ratio_y` factors), and centered. Without it, the content is
/// stretched over the whole window.
///
/// Also counts the render copies made since the last reset, which the game
/// uses as a crude frame counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    keep_ratio: bool,
    ratio_x: f64,
    ratio_y: f64,
    rotation: f64,
    present: Rect,
    render_times: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            keep_ratio: true,
            ratio_x: 1.0,
            ratio_y: 1.0,
            rotation: 0.0,
            present: Rect::default(),
            render_times: 0,
        }
    }
}

impl Viewport {
    /// Creates a viewport with the given letterboxing setting and identity
    /// axis ratios.
    pub fn new(keep_ratio: bool) -> Viewport {
        Viewport {
            keep_ratio,
            ..Viewport::default()
        }
    }

    /// Recalculates the present rectangle for a window of `window` size
    /// showing content of `content` size.
    pub fn update(&mut self, window: (i32, i32), content: (i32, i32)) {
        let (window_w, window_h) = window;
        let whole_window = Rect::new(0, 0, window_w, window_h);
        if !self.keep_ratio {
            self.present = whole_window;
            return;
        }

        let content_w = content.0 as f64 * self.ratio_x;
        let content_h = content.1 as f64 * self.ratio_y;
        let sized = |len: f64| len.is_finite() && len > 0.0;
        if !sized(content_w) || !sized(content_h) || window_w <= 0 || window_h <= 0 {
            self.present = whole_window;
            return;
        }

        let w_ratio = window_w as f64 / content_w;
        let h_ratio = window_h as f64 / content_h;
        self.present = if w_ratio > h_ratio {
            let w = content_w * h_ratio;
            Rect::new(((window_w as f64 - w) / 2.0) as i32, 0, w as i32, window_h)
        } else {
            let h = content_h * w_ratio;
            Rect::new(0, ((window_h as f64 - h) / 2.0) as i32, window_w, h as i32)
        };
    }

    /// The area of the window the content is drawn into.
    pub fn present_rect(&self) -> Rect {
        self.present
    }

    #[allow(missing_docs)]
    pub fn present_width(&self) -> i32 {
        self.present.w
    }

    #[allow(missing_docs)]
    pub fn present_height(&self) -> i32 {
        self.present.h
    }

    /// Moves `rect` by the present rectangle's origin if `in_present` is set,
    /// i.e. interprets `rect` as relative to the letterboxed area.
    pub fn offset_into_present(&self, rect: Rect, in_present: bool) -> Rect {
        if in_present {
            Rect::new(rect.x + self.present.x, rect.y + self.present.y, rect.w, rect.h)
        } else {
            rect
        }
    }

    /// Maps a point in window pixels to a point in content pixels. Returns
    /// the point as is if the present rectangle hasn't been set up yet.
    pub fn window_to_content(&self, x: i32, y: i32, content: (i32, i32)) -> (i32, i32) {
        let p = self.present;
        if p.is_empty() || content.0 <= 0 || content.1 <= 0 {
            return (x, y);
        }
        (
            ((x - p.x) as i64 * content.0 as i64 / p.w as i64) as i32,
            ((y - p.y) as i64 * content.1 as i64 / p.h as i64) as i32,
        )
    }

    /// The inverse of [`Viewport::window_to_content`].
    pub fn content_to_window(&self, x: i32, y: i32, content: (i32, i32)) -> (i32, i32) {
        let p = self.present;
        if p.is_empty() || content.0 <= 0 || content.1 <= 0 {
            return (x, y);
        }
        (
            (x as i64 * p.w as i64 / content.0 as i64) as i32 + p.x,
            (y as i64 * p.h as i64 / content.1 as i64) as i32 + p.y,
        )
    }

    #[allow(missing_docs)]
    pub fn keep_ratio(&self) -> bool {
        self.keep_ratio
    }

    /// Sets the letterboxing mode and returns the new value. Takes effect on
    /// the next [`Viewport::update`].
    pub fn set_keep_ratio(&mut self, keep_ratio: bool) -> bool {
        self.keep_ratio = keep_ratio;
        keep_ratio
    }

    /// The rotation applied when drawing the content onto the window, in
    /// degrees, clockwise.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[allow(missing_docs)]
    pub fn set_rotation(&mut self, rotation: f64) -> f64 {
        self.rotation = rotation;
        rotation
    }

    /// Sets the per-axis scale factors applied to the content size before
    /// letterboxing, for content with non-square pixels.
    pub fn set_ratio(&mut self, x: f64, y: f64) {
        self.ratio_x = x;
        self.ratio_y = y;
    }

    #[allow(missing_docs)]
    pub fn ratio(&self) -> (f64, f64) {
        (self.ratio_x, self.ratio_y)
    }

    /// Increments the render counter.
    pub fn count_render(&mut self) {
        self.render_times = self.render_times.wrapping_add(1);
    }

    #[allow(missing_docs)]
    pub fn reset_render_times(&mut self, times: u32) {
        self.render_times = times;
    }

    #[allow(missing_docs)]
    pub fn render_times(&self) -> u32 {
        self.render_times
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;
    use crate::Rect;

    #[test]
    fn wide_window_gets_pillarboxed() {
        let mut viewport = Viewport::default();
        viewport.update((1920, 1080), (1024, 640));
        assert_eq!(Rect::new(96, 0, 1728, 1080), viewport.present_rect());
    }

    #[test]
    fn tall_window_gets_letterboxed() {
        let mut viewport = Viewport::default();
        viewport.update((800, 1000), (1024, 640));
        assert_eq!(Rect::new(0, 250, 800, 500), viewport.present_rect());
        assert_eq!(800, viewport.present_width());
        assert_eq!(500, viewport.present_height());
    }

    #[test]
    fn matching_aspect_fills_window() {
        let mut viewport = Viewport::default();
        viewport.update((2048, 1280), (1024, 640));
        assert_eq!(Rect::new(0, 0, 2048, 1280), viewport.present_rect());
    }

    #[test]
    fn stretches_without_keep_ratio() {
        let mut viewport = Viewport::new(false);
        viewport.update((1920, 1080), (1024, 640));
        assert_eq!(Rect::new(0, 0, 1920, 1080), viewport.present_rect());
        assert_eq!((512, 320), viewport.window_to_content(960, 540, (1024, 640)));
    }

    #[test]
    fn axis_ratios_change_the_content_aspect() {
        let mut viewport = Viewport::default();
        viewport.set_ratio(2.0, 1.0);
        // 320x200 content with double-wide pixels is 640x200, i.e. 3.2:1
        viewport.update((640, 480), (320, 200));
        assert_eq!(Rect::new(0, 140, 640, 200), viewport.present_rect());
    }

    #[test]
    fn empty_content_falls_back_to_whole_window() {
        let mut viewport = Viewport::default();
        viewport.update((640, 480), (0, 0));
        assert_eq!(Rect::new(0, 0, 640, 480), viewport.present_rect());
    }

    #[test]
    fn unusable_ratios_fall_back_to_whole_window() {
        let mut viewport = Viewport::default();
        for (x, y) in [(f64::NAN, 1.0), (1.0, f64::INFINITY), (-2.0, 1.0)] {
            viewport.set_ratio(x, y);
            viewport.update((640, 480), (320, 200));
            assert_eq!(Rect::new(0, 0, 640, 480), viewport.present_rect());
        }
    }

    #[test]
    fn mouse_mapping_goes_both_ways() {
        let mut viewport = Viewport::default();
        viewport.update((1920, 1080), (1024, 640));
        let content = (1024, 640);
        assert_eq!((0, 0), viewport.window_to_content(96, 0, content));
        assert_eq!((512, 320), viewport.window_to_content(960, 540, content));
        assert_eq!((96, 0), viewport.content_to_window(0, 0, content));
        assert_eq!((960, 540), viewport.content_to_window(512, 320, content));
        // points on the bars map outside the content
        let (x, _) = viewport.window_to_content(10, 0, content);
        assert!(x < 0);
    }

    #[test]
    fn offsets_only_in_present_mode() {
        let mut viewport = Viewport::default();
        viewport.update((800, 1000), (1024, 640));
        let rect = Rect::new(5, 5, 10, 10);
        assert_eq!(rect, viewport.offset_into_present(rect, false));
        assert_eq!(
            Rect::new(5, 255, 10, 10),
            viewport.offset_into_present(rect, true)
        );
    }

    #[test]
    fn render_counter() {
        let mut viewport = Viewport::default();
        viewport.count_render();
        viewport.count_render();
        assert_eq!(2, viewport.render_times());
        viewport.reset_render_times(0);
        assert_eq!(0, viewport.render_times());
    }
}
