// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use sdl2::render::WindowCanvas;
use tracing::{info, warn};

use crate::{Engine, EngineError};

/// Plays video files on the engine's renderer. The engine doesn't decode
/// video itself, games which need it plug in a player with
/// [`Engine::set_video_player`].
pub trait VideoPlayer {
    /// Plays the file at `path` to completion (or until the player decides to
    /// stop, e.g. on a key press), drawing onto `canvas`. Blocks until done.
    fn play(&mut self, canvas: &mut WindowCanvas, path: &Path) -> Result<(), String>;
}

impl Engine {
    /// Sets the player used by [`Engine::play_video`], returning the previous
    /// one.
    pub fn set_video_player(
        &mut self,
        player: Option<Box<dyn VideoPlayer>>,
    ) -> Option<Box<dyn VideoPlayer>> {
        std::mem::replace(&mut self.video_player, player)
    }

    /// Plays a video file with the configured [`VideoPlayer`]. Rendering goes
    /// to the window afterwards.
    pub fn play_video(&mut self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let path = path.as_ref();
        if self.video_player.is_none() {
            warn!("No video player, skipping {}.", path.display());
            return Err(EngineError::NoVideoPlayer);
        }
        info!("Playing video {}.", path.display());
        self.reset_render_target()?;
        let result = match self.video_player.as_mut() {
            Some(player) => player.play(&mut self.canvas, path),
            None => Ok(()),
        };
        self.reset_render_target()?;
        result.map_err(EngineError::Video)
    }
}
