// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use alloc::boxed::Box;

/// Sample rate requested for audio playback when the game doesn't ask for a
/// specific one.
pub const AUDIO_SAMPLE_RATE: i32 = 48000;

/// The amount of channels requested for audio playback by default.
pub const AUDIO_CHANNELS: u8 = 2;

/// Audio playback parameters. Samples are always signed 16-bit integers in
/// native endianness, interleaved by channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    /// Sample rate in Hz.
    pub freq: i32,
    #[allow(missing_docs)]
    pub channels: u8,
    /// Size of the platform's audio buffer, in sample frames.
    pub samples: u16,
}

impl Default for AudioSpec {
    fn default() -> Self {
        AudioSpec {
            freq: AUDIO_SAMPLE_RATE,
            channels: AUDIO_CHANNELS,
            samples: 2048,
        }
    }
}

impl AudioSpec {
    /// The size of one callback buffer in bytes.
    pub const fn buffer_bytes(&self) -> usize {
        self.samples as usize * self.channels as usize * size_of::<i16>()
    }
}

/// Called from the audio thread whenever the platform needs more samples. The
/// buffer is the raw bytes of the interleaved samples described by
/// [`AudioSpec`], and must be filled completely.
pub type AudioCallback = Box<dyn FnMut(&mut [u8]) + Send>;

#[cfg(test)]
mod tests {
    use super::AudioSpec;

    #[test]
    fn default_buffer_size() {
        assert_eq!(2048 * 2 * 2, AudioSpec::default().buffer_bytes());
    }
}
