// SPDX-FileCopyrightText: 2024 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The [`Engine`]: window, renderer, textures, input devices and audio of a
//! 2D game, implemented on SDL2.
//!
//! The backend-neutral types used in the API (rectangles, colors, events, key
//! codes and so on) live in [`platform_abstraction_layer`], and are
//! re-exported here as [`pal`].

mod audio;
mod config;
mod convert;
mod engine;
mod error;
mod input;
mod media;
mod render;
mod screenshot;
mod textures;
mod timing;
mod video;
mod window;

pub use platform_abstraction_layer as pal;

pub use config::{EngineConfig, ScaleQuality};
pub use engine::Engine;
pub use error::EngineError;
pub use screenshot::screenshot_format;
pub use timing::{delay, ticks, Stopwatch};
pub use video::VideoPlayer;
