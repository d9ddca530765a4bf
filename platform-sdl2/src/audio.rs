// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use platform_abstraction_layer::{AudioCallback, AudioSpec};
use sdl2::audio::{self, AudioSpecDesired};
use tracing::{debug, info};

use crate::{Engine, EngineError};

/// Hands the raw bytes of SDL's sample buffer to the game's callback.
pub(crate) struct ByteCallback(AudioCallback);

impl audio::AudioCallback for ByteCallback {
    type Channel = i16;

    fn callback(&mut self, samples: &mut [i16]) {
        (self.0)(bytemuck::cast_slice_mut(samples));
    }
}

impl Engine {
    /// Opens the default playback device and starts calling `callback` for
    /// samples. Playback starts paused, see [`Engine::resume_audio`]. Any
    /// previously opened device is closed first. Returns the spec the device
    /// actually uses, which may differ from the requested one.
    pub fn open_audio(
        &mut self,
        spec: AudioSpec,
        callback: AudioCallback,
    ) -> Result<AudioSpec, EngineError> {
        self.close_audio();
        let audio = self.audio.as_ref().ok_or(EngineError::Unavailable("audio"))?;
        let desired = AudioSpecDesired {
            freq: Some(spec.freq),
            channels: Some(spec.channels),
            samples: Some(spec.samples),
        };
        let device = audio.open_playback(None::<&str>, &desired, |_| ByteCallback(callback))?;
        let obtained = device.spec();
        let obtained = AudioSpec {
            freq: obtained.freq,
            channels: obtained.channels,
            samples: obtained.samples,
        };
        info!(
            "Opened audio device: {} Hz, {} channels, {} sample buffer.",
            obtained.freq, obtained.channels, obtained.samples,
        );
        self.audio_device = Some(device);
        Ok(obtained)
    }

    pub fn pause_audio(&mut self) {
        if let Some(device) = &self.audio_device {
            device.pause();
        }
    }

    pub fn resume_audio(&mut self) {
        if let Some(device) = &self.audio_device {
            device.resume();
        }
    }

    /// Stops playback and closes the device. The callback is dropped.
    pub fn close_audio(&mut self) {
        if self.audio_device.take().is_some() {
            debug!("Closed the audio device.");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use sdl2::audio::AudioCallback as _;

    use super::ByteCallback;

    #[test]
    fn callback_sees_every_sample_byte() {
        let seen = Arc::new(Mutex::new(0));
        let seen_in_callback = seen.clone();
        let mut callback = ByteCallback(Box::new(move |bytes: &mut [u8]| {
            *seen_in_callback.lock().unwrap() = bytes.len();
            bytes.fill(0x01);
        }));
        let mut samples = [0i16; 8];
        callback.callback(&mut samples);
        assert_eq!(16, *seen.lock().unwrap());
        assert!(samples.iter().all(|&sample| sample == 0x0101));
    }
}
