// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    sync::OnceLock,
    thread,
    time::{Duration, Instant},
};

use tracing::debug;

use crate::Engine;

static REFERENCE: OnceLock<Instant> = OnceLock::new();

/// Blocks the calling thread for `ms` milliseconds. Negative and NaN delays
/// return immediately.
pub fn delay(ms: f64) {
    if let Ok(duration) = Duration::try_from_secs_f64(ms / 1000.0) {
        thread::sleep(duration);
    }
}

/// Milliseconds since the first call, on a monotonic clock.
pub fn ticks() -> f64 {
    let reference = *REFERENCE.get_or_init(Instant::now);
    reference.elapsed().as_secs_f64() * 1000.0
}

/// Measures how long something takes, for ad hoc profiling.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Creates a stopwatch started at the current time.
    pub fn new() -> Stopwatch {
        Stopwatch {
            started: Instant::now(),
        }
    }

    /// Restarts the stopwatch.
    pub fn tic(&mut self) {
        self.started = Instant::now();
    }

    /// Milliseconds since the last [`Stopwatch::tic`], also logged at debug
    /// level.
    pub fn toc(&self) -> f64 {
        let elapsed = self.started.elapsed().as_secs_f64() * 1000.0;
        debug!("{elapsed:.3} ms since tic.");
        elapsed
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Stopwatch::new()
    }
}

impl Engine {
    /// Starts the engine's stopwatch, see [`Engine::toc`].
    pub fn tic(&mut self) {
        self.stopwatch.tic();
    }

    /// Logs and returns the milliseconds since the last [`Engine::tic`].
    pub fn toc(&self) -> f64 {
        self.stopwatch.toc()
    }
}

#[cfg(test)]
mod tests {
    use super::{delay, ticks, Stopwatch};

    #[test]
    fn ticks_are_monotonic() {
        let first = ticks();
        delay(2.0);
        let second = ticks();
        assert!(second >= first + 2.0, "{first} -> {second}");
    }

    #[test]
    fn invalid_delays_return_immediately() {
        let stopwatch = Stopwatch::new();
        delay(-5.0);
        delay(f64::NAN);
        assert!(stopwatch.toc() < 1000.0);
    }

    #[test]
    fn stopwatch_restarts() {
        let mut stopwatch = Stopwatch::new();
        delay(3.0);
        assert!(stopwatch.toc() >= 3.0);
        stopwatch.tic();
        assert!(stopwatch.toc() < 3.0);
    }
}
