// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{ptr, time::Duration};

use platform_abstraction_layer::{ControllerAxis, ControllerButton, Event, Key, Rect};
use sdl2::{
    event::{Event as SdlEvent, WindowEvent},
    keyboard::{Keycode, Scancode},
};
use tracing::{debug, info, trace, warn};

use crate::{
    convert::{self, sdl_controller_axis, sdl_controller_button, sdl_rect},
    window::scale_point,
    Engine, EngineError,
};

impl Engine {
    /// Returns the next pending event, or None if there are none.
    ///
    /// Mouse coordinates are converted from the window to the main render
    /// target's pixels. Window resizes and controllers being plugged in or
    /// out are handled before the event is returned.
    pub fn poll_event(&mut self) -> Option<Event> {
        let sdl_event = self.event_pump.poll_event()?;
        match &sdl_event {
            SdlEvent::Window {
                win_event: WindowEvent::Resized(..) | WindowEvent::SizeChanged(..),
                ..
            } => self.set_present_position(self.assist),
            SdlEvent::ControllerDeviceAdded { which, .. } if self.controller.is_none() => {
                if let Err(err) = self.open_controller(*which) {
                    warn!("Failed to open game controller {which}: {err}");
                }
            }
            SdlEvent::ControllerDeviceRemoved { which, .. } => {
                let removed = self
                    .controller
                    .as_ref()
                    .is_some_and(|controller| controller.instance_id() == *which);
                if removed {
                    info!("Game controller disconnected.");
                    self.haptic = None;
                    self.controller = None;
                }
            }
            _ => {}
        }

        let mut event = convert::event(sdl_event);
        if let Some((x, y)) = event.position_mut() {
            (*x, *y) = self.window_point_to_content(*x, *y);
        }
        trace!("Polled event: {event:?}");
        Some(event)
    }

    /// Checks if there are events waiting to be polled, without removing
    /// any.
    pub fn has_pending_event(&mut self) -> bool {
        // Safety: SDL_PollEvent is documented to only check for pending
        // events when passed a null pointer, and the event pump existing
        // means SDL's event subsystem is initialized on this thread.
        unsafe { sdl2_sys::SDL_PollEvent(ptr::null_mut()) == 1 }
    }

    /// Adds an event to the end of the event queue. Quit, key, window,
    /// clipboard update and render target reset events can be pushed.
    pub fn push_event(&mut self, event: &Event) -> Result<(), EngineError> {
        let window_id = self.canvas.window().id();
        let sdl_event = convert::sdl_event(event, window_id)
            .ok_or(EngineError::UnsupportedEvent(event.event_type()))?;
        self.events.push_event(sdl_event)?;
        Ok(())
    }

    /// Drops every pending event.
    pub fn flush_events(&mut self) {
        self.event_pump.pump_events();
        self.events.flush_events(0, u32::MAX);
    }

    /// The mouse position in the main render target's pixels.
    pub fn mouse_state(&self) -> (i32, i32) {
        let state = self.event_pump.mouse_state();
        self.window_point_to_content(state.x(), state.y())
    }

    /// Moves the mouse to a position given in the main render target's
    /// pixels.
    pub fn set_mouse_state(&mut self, x: i32, y: i32) {
        let (x, y) = self.viewport.content_to_window(x, y, self.content_size());
        let (x, y) = scale_point(x, y, self.output_size(), self.window_size());
        self.sdl.mouse().warp_mouse_in_window(self.canvas.window(), x, y);
    }

    /// Checks whether the key is held down right now.
    pub fn check_key_press(&self, key: Key) -> bool {
        Keycode::from_i32(key.raw())
            .and_then(Scancode::from_keycode)
            .is_some_and(|scancode| {
                self.event_pump
                    .keyboard_state()
                    .is_scancode_pressed(scancode)
            })
    }

    /// Checks whether the button is held down on the open controller. False
    /// if there's no controller.
    pub fn game_controller_button(&self, button: ControllerButton) -> bool {
        match (&self.controller, sdl_controller_button(button)) {
            (Some(controller), Some(button)) => controller.button(button),
            _ => false,
        }
    }

    /// The position of the axis on the open controller. 0 if there's no
    /// controller.
    pub fn game_controller_axis(&self, axis: ControllerAxis) -> i16 {
        match (&self.controller, sdl_controller_axis(axis)) {
            (Some(controller), Some(axis)) => controller.axis(axis),
            _ => 0,
        }
    }

    /// Rumbles the open controller at `strength` (0..=1) for `duration`. Uses
    /// the haptic device if the controller has one, or the controller's own
    /// rumble support otherwise.
    pub fn rumble(&mut self, strength: f32, duration: Duration) -> Result<(), EngineError> {
        let strength = strength.clamp(0.0, 1.0);
        let duration_ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        if let Some(haptic) = &mut self.haptic {
            haptic.rumble_play(strength, duration_ms);
            return Ok(());
        }
        let controller = self.controller.as_mut().ok_or(EngineError::NoController)?;
        let intensity = (strength * u16::MAX as f32) as u16;
        controller.set_rumble(intensity, intensity, duration_ms)?;
        Ok(())
    }

    /// Opens the game controller at the device index, and its haptic device
    /// if it has one. Replaces the previously open controller.
    pub fn open_controller(&mut self, index: u32) -> Result<(), EngineError> {
        let controller = self.controllers.open(index)?;
        info!("Opened game controller \"{}\".", controller.name());
        let haptic = self.haptics.as_ref().and_then(|haptics| {
            haptics
                .open_from_joystick_id(index)
                .inspect_err(|err| debug!("The controller has no haptic device: {err}"))
                .ok()
        });
        let instance_id = controller.instance_id();
        self.haptic = rumble_capable(haptic, || haptic_rumble_supported(instance_id));
        if self.haptic.is_none() {
            debug!(
                "Rumbling game controller \"{}\" without a haptic device.",
                controller.name(),
            );
        }
        self.controller = Some(controller);
        Ok(())
    }

    /// Opens the first connected game controller, if any.
    pub(crate) fn open_first_controller(&mut self) {
        let joysticks = match self.controllers.num_joysticks() {
            Ok(joysticks) => joysticks,
            Err(err) => {
                warn!("Failed to count joysticks: {err}");
                return;
            }
        };
        let first = (0..joysticks).find(|&index| self.controllers.is_game_controller(index));
        match first {
            Some(index) => {
                if let Err(err) = self.open_controller(index) {
                    warn!("Failed to open game controller {index}: {err}");
                }
            }
            None => debug!("No game controllers connected."),
        }
    }

    pub fn start_text_input(&mut self) {
        self.video.text_input().start();
    }

    pub fn stop_text_input(&mut self) {
        self.video.text_input().stop();
    }

    /// Hints where text is being typed in, for placing input method
    /// candidate lists.
    pub fn set_text_input_rect(&mut self, rect: Rect) {
        self.video.text_input().set_rect(sdl_rect(rect));
    }

    /// Window coordinates (in points) to main render target pixels.
    fn window_point_to_content(&self, x: i32, y: i32) -> (i32, i32) {
        let (x, y) = scale_point(x, y, self.window_size(), self.output_size());
        self.viewport.window_to_content(x, y, self.content_size())
    }

    /// The size of the main render target, or the renderer's output if it
    /// hasn't been created.
    pub(crate) fn content_size(&self) -> (i32, i32) {
        self.main_texture_size()
            .map_or_else(|| self.output_size(), |(w, h)| (w as i32, h as i32))
    }
}

/// Keeps the haptic device only if it can play rumble effects, so that
/// [`Engine::rumble`] falls back to the controller's own motors otherwise.
fn rumble_capable<H>(haptic: Option<H>, supports_rumble: impl FnOnce() -> bool) -> Option<H> {
    haptic.filter(|_| supports_rumble())
}

/// Whether the haptic device of the open joystick `instance_id` supports
/// rumble effects. Asked from SDL directly, [`sdl2::haptic::Haptic`] doesn't
/// expose it.
fn haptic_rumble_supported(instance_id: u32) -> bool {
    let Ok(instance_id) = i32::try_from(instance_id) else {
        return false;
    };
    // Safety: the joystick is kept open by the engine's controller. SDL
    // reference counts haptic devices, so opening it again here and closing
    // that reference leaves the engine's own handle open.
    unsafe {
        let joystick = sdl2_sys::SDL_JoystickFromInstanceID(instance_id);
        if joystick.is_null() {
            return false;
        }
        let haptic = sdl2_sys::SDL_HapticOpenFromJoystick(joystick);
        if haptic.is_null() {
            return false;
        }
        let supported = sdl2_sys::SDL_HapticRumbleSupported(haptic) == 1;
        sdl2_sys::SDL_HapticClose(haptic);
        supported
    }
}

#[cfg(test)]
mod tests {
    use super::rumble_capable;

    #[test]
    fn haptics_without_rumble_are_dropped() {
        assert_eq!(Some("pad"), rumble_capable(Some("pad"), || true));
        assert_eq!(None, rumble_capable(Some("pad"), || false));
        let mut asked = false;
        assert_eq!(
            None::<&str>,
            rumble_capable(None, || {
                asked = true;
                true
            })
        );
        assert!(!asked);
    }
}
