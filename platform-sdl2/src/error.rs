// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use platform_abstraction_layer::{EventType, TextureRef};
use sdl2::{
    render::{TextureValueError, UpdateTextureError, UpdateTextureYUVError},
    ttf::FontError,
    video::WindowBuildError,
    IntegerOrSdlError,
};
use thiserror::Error;

/// Errors returned by the engine. Failures reported by SDL are passed through
/// with SDL's own message.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An SDL call failed, see the message for details.
    #[error("SDL error: {0}")]
    Sdl(String),
    #[error("failed to create the window")]
    Window(#[from] WindowBuildError),
    #[error("SDL call failed")]
    IntegerOrSdl(#[from] IntegerOrSdlError),
    #[error("failed to create a texture")]
    TextureValue(#[from] TextureValueError),
    #[error("failed to update a texture")]
    TextureUpdate(#[from] UpdateTextureError),
    #[error("failed to update a YUV texture")]
    TextureUpdateYuv(#[from] UpdateTextureYUVError),
    #[error("failed to render text")]
    Font(#[from] FontError),
    #[error("failed to initialize SDL_ttf")]
    TtfInit(#[from] sdl2::ttf::InitError),
    #[error("failed to encode image")]
    Image(#[from] image::ImageError),
    /// The texture was destroyed already, or belongs to another engine.
    #[error("texture {0:?} does not exist")]
    InvalidTexture(TextureRef),
    #[error("the assist texture has not been created")]
    NoAssistTexture,
    /// The optional subsystem failed to initialize at startup.
    #[error("the {0} subsystem is not available")]
    Unavailable(&'static str),
    #[error("no game controller is connected")]
    NoController,
    #[error("no video player has been set")]
    NoVideoPlayer,
    #[error("video playback failed: {0}")]
    Video(String),
    #[error("events of type {0:?} can't be pushed")]
    UnsupportedEvent(Option<EventType>),
    #[error("cannot render empty text")]
    EmptyText,
}

impl From<String> for EngineError {
    fn from(message: String) -> Self {
        EngineError::Sdl(message)
    }
}

#[cfg(test)]
mod tests {
    use sdl2::render::{UpdateTextureError, UpdateTextureYUVError};

    use super::EngineError;

    #[test]
    fn texture_update_errors_convert() {
        let yuv = EngineError::from(UpdateTextureYUVError::SdlError("bad plane".to_string()));
        assert!(matches!(yuv, EngineError::TextureUpdateYuv(_)));
        let argb = EngineError::from(UpdateTextureError::SdlError("bad pitch".to_string()));
        assert!(matches!(argb, EngineError::TextureUpdate(_)));
    }

    #[test]
    fn sdl_strings_keep_their_message() {
        let err = EngineError::from("Invalid renderer".to_string());
        assert_eq!("SDL error: Invalid renderer", err.to_string());
    }
}
