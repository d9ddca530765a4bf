// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use platform_abstraction_layer::{DEFAULT_TITLE, DEFAULT_WINDOW_SIZE};
use serde::{Deserialize, Serialize};

/// Startup parameters for [`crate::Engine::init`].
///
/// Every field has a default, so configuration files only need to mention
/// what they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    /// Window title, also used as the title of message boxes.
    pub title: String,
    /// Width of the window when it's first opened.
    pub start_width: u32,
    /// Height of the window when it's first opened.
    pub start_height: u32,
    /// Letterbox the main render target instead of stretching it.
    pub keep_ratio: bool,
    /// Start in (desktop) fullscreen.
    pub full_screen: bool,
    /// Synchronize presentation with the display's refresh rate.
    pub vsync: bool,
    /// Texture filtering used when scaling.
    pub scale_quality: ScaleQuality,
    /// Horizontal scale factor applied to the content before letterboxing.
    pub ratio_x: f64,
    /// Vertical scale factor applied to the content before letterboxing.
    pub ratio_y: f64,
    /// Image shown by [`crate::Engine::show_logo`], if any.
    pub logo: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            title: DEFAULT_TITLE.to_string(),
            start_width: DEFAULT_WINDOW_SIZE.0,
            start_height: DEFAULT_WINDOW_SIZE.1,
            keep_ratio: true,
            full_screen: false,
            vsync: true,
            scale_quality: ScaleQuality::Linear,
            ratio_x: 1.0,
            ratio_y: 1.0,
            logo: None,
        }
    }
}

/// Texture filtering used when textures are drawn at a different size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleQuality {
    /// Sharp pixels.
    Nearest,
    /// Smooth bilinear filtering.
    #[default]
    Linear,
    /// Anisotropic filtering where supported, linear elsewhere.
    Best,
}

impl ScaleQuality {
    /// The value of the `SDL_RENDER_SCALE_QUALITY` hint.
    pub fn hint_value(self) -> &'static str {
        match self {
            ScaleQuality::Nearest => "nearest",
            ScaleQuality::Linear => "linear",
            ScaleQuality::Best => "best",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineConfig, ScaleQuality};

    #[test]
    fn defaults_match_the_game() {
        let config = EngineConfig::default();
        assert_eq!("All Heroes in Kam Yung Stories", config.title);
        assert_eq!((1024, 640), (config.start_width, config.start_height));
        assert!(config.keep_ratio);
        assert!(!config.full_screen);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "start_width": 1280, "scale_quality": "nearest" }"#)
                .unwrap();
        assert_eq!(1280, config.start_width);
        assert_eq!(640, config.start_height);
        assert_eq!(ScaleQuality::Nearest, config.scale_quality);
        assert_eq!("nearest", config.scale_quality.hint_value());
        assert_eq!(None, config.logo);
    }

    #[test]
    fn survives_serialization() {
        let config = EngineConfig {
            title: "test".to_string(),
            logo: Some("logo.png".into()),
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(config, serde_json::from_str(&json).unwrap());
    }
}
