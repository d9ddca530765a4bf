// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conversions between the backend-neutral types and the sdl2 crate's.

use platform_abstraction_layer::{
    event_text, BlendMode, Color, ControllerAxis, ControllerButton, Event, EventType,
    MouseButton, PixelFormat, Rect, WindowEventId,
};
use sdl2::{
    controller::{Axis, Button},
    event::{Event as SdlEvent, WindowEvent},
    keyboard::{Keycode, Mod, Scancode},
    mouse::MouseButton as SdlMouseButton,
    pixels::PixelFormatEnum,
};
use sdl2_sys::SDL_EventType;

pub(crate) fn sdl_rect(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(rect.x, rect.y, rect.w.max(0) as u32, rect.h.max(0) as u32)
}

pub(crate) fn sdl_color(color: Color) -> sdl2::pixels::Color {
    sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a)
}

pub(crate) fn sdl_blend_mode(mode: BlendMode) -> sdl2::render::BlendMode {
    match mode {
        BlendMode::None => sdl2::render::BlendMode::None,
        BlendMode::Blend => sdl2::render::BlendMode::Blend,
        BlendMode::Add => sdl2::render::BlendMode::Add,
    }
}

pub(crate) fn pixel_format(format: PixelFormatEnum) -> Option<PixelFormat> {
    match format {
        PixelFormatEnum::ARGB8888 => Some(PixelFormat::Argb8888),
        PixelFormatEnum::IYUV => Some(PixelFormat::Iyuv),
        _ => None,
    }
}

pub(crate) fn sdl_controller_button(button: ControllerButton) -> Option<Button> {
    Some(match button {
        ControllerButton::A => Button::A,
        ControllerButton::B => Button::B,
        ControllerButton::X => Button::X,
        ControllerButton::Y => Button::Y,
        ControllerButton::Back => Button::Back,
        ControllerButton::Guide => Button::Guide,
        ControllerButton::Start => Button::Start,
        ControllerButton::LeftStick => Button::LeftStick,
        ControllerButton::RightStick => Button::RightStick,
        ControllerButton::LeftShoulder => Button::LeftShoulder,
        ControllerButton::RightShoulder => Button::RightShoulder,
        ControllerButton::DPadUp => Button::DPadUp,
        ControllerButton::DPadDown => Button::DPadDown,
        ControllerButton::DPadLeft => Button::DPadLeft,
        ControllerButton::DPadRight => Button::DPadRight,
        ControllerButton::Misc1 => Button::Misc1,
        ControllerButton::Paddle1 => Button::Paddle1,
        ControllerButton::Paddle2 => Button::Paddle2,
        ControllerButton::Paddle3 => Button::Paddle3,
        ControllerButton::Paddle4 => Button::Paddle4,
        ControllerButton::Touchpad => Button::Touchpad,
        ControllerButton::Invalid | ControllerButton::Max => return None,
    })
}

pub(crate) fn controller_button(button: Button) -> ControllerButton {
    match button {
        Button::A => ControllerButton::A,
        Button::B => ControllerButton::B,
        Button::X => ControllerButton::X,
        Button::Y => ControllerButton::Y,
        Button::Back => ControllerButton::Back,
        Button::Guide => ControllerButton::Guide,
        Button::Start => ControllerButton::Start,
        Button::LeftStick => ControllerButton::LeftStick,
        Button::RightStick => ControllerButton::RightStick,
        Button::LeftShoulder => ControllerButton::LeftShoulder,
        Button::RightShoulder => ControllerButton::RightShoulder,
        Button::DPadUp => ControllerButton::DPadUp,
        Button::DPadDown => ControllerButton::DPadDown,
        Button::DPadLeft => ControllerButton::DPadLeft,
        Button::DPadRight => ControllerButton::DPadRight,
        Button::Misc1 => ControllerButton::Misc1,
        Button::Paddle1 => ControllerButton::Paddle1,
        Button::Paddle2 => ControllerButton::Paddle2,
        Button::Paddle3 => ControllerButton::Paddle3,
        Button::Paddle4 => ControllerButton::Paddle4,
        Button::Touchpad => ControllerButton::Touchpad,
    }
}

pub(crate) fn sdl_controller_axis(axis: ControllerAxis) -> Option<Axis> {
    Some(match axis {
        ControllerAxis::LeftX => Axis::LeftX,
        ControllerAxis::LeftY => Axis::LeftY,
        ControllerAxis::RightX => Axis::RightX,
        ControllerAxis::RightY => Axis::RightY,
        ControllerAxis::TriggerLeft => Axis::TriggerLeft,
        ControllerAxis::TriggerRight => Axis::TriggerRight,
        ControllerAxis::Invalid | ControllerAxis::Max => return None,
    })
}

pub(crate) fn controller_axis(axis: Axis) -> ControllerAxis {
    match axis {
        Axis::LeftX => ControllerAxis::LeftX,
        Axis::LeftY => ControllerAxis::LeftY,
        Axis::RightX => ControllerAxis::RightX,
        Axis::RightY => ControllerAxis::RightY,
        Axis::TriggerLeft => ControllerAxis::TriggerLeft,
        Axis::TriggerRight => ControllerAxis::TriggerRight,
    }
}

fn mouse_button(button: SdlMouseButton) -> Option<MouseButton> {
    match button {
        SdlMouseButton::Left => Some(MouseButton::Left),
        SdlMouseButton::Middle => Some(MouseButton::Middle),
        SdlMouseButton::Right => Some(MouseButton::Right),
        SdlMouseButton::X1 => Some(MouseButton::X1),
        SdlMouseButton::X2 => Some(MouseButton::X2),
        SdlMouseButton::Unknown => None,
    }
}

/// Splits a window event into its id and data fields. Window events without
/// a [`WindowEventId`] counterpart come out as [`WindowEventId::None`].
pub(crate) fn window_event(event: WindowEvent) -> (WindowEventId, i32, i32) {
    match event {
        WindowEvent::Shown => (WindowEventId::Shown, 0, 0),
        WindowEvent::Hidden => (WindowEventId::Hidden, 0, 0),
        WindowEvent::Exposed => (WindowEventId::Exposed, 0, 0),
        WindowEvent::Moved(x, y) => (WindowEventId::Moved, x, y),
        WindowEvent::Resized(w, h) => (WindowEventId::Resized, w, h),
        WindowEvent::SizeChanged(w, h) => (WindowEventId::SizeChanged, w, h),
        WindowEvent::Minimized => (WindowEventId::Minimized, 0, 0),
        WindowEvent::Maximized => (WindowEventId::Maximized, 0, 0),
        WindowEvent::Restored => (WindowEventId::Restored, 0, 0),
        WindowEvent::Enter => (WindowEventId::Enter, 0, 0),
        WindowEvent::Leave => (WindowEventId::Leave, 0, 0),
        WindowEvent::FocusGained => (WindowEventId::FocusGained, 0, 0),
        WindowEvent::FocusLost => (WindowEventId::FocusLost, 0, 0),
        WindowEvent::Close => (WindowEventId::Close, 0, 0),
        _ => (WindowEventId::None, 0, 0),
    }
}

/// The inverse of [`window_event`].
pub(crate) fn sdl_window_event(id: WindowEventId, data1: i32, data2: i32) -> WindowEvent {
    match id {
        WindowEventId::None => WindowEvent::None,
        WindowEventId::Shown => WindowEvent::Shown,
        WindowEventId::Hidden => WindowEvent::Hidden,
        WindowEventId::Exposed => WindowEvent::Exposed,
        WindowEventId::Moved => WindowEvent::Moved(data1, data2),
        WindowEventId::Resized => WindowEvent::Resized(data1, data2),
        WindowEventId::SizeChanged => WindowEvent::SizeChanged(data1, data2),
        WindowEventId::Minimized => WindowEvent::Minimized,
        WindowEventId::Maximized => WindowEvent::Maximized,
        WindowEventId::Restored => WindowEvent::Restored,
        WindowEventId::Enter => WindowEvent::Enter,
        WindowEventId::Leave => WindowEvent::Leave,
        WindowEventId::FocusGained => WindowEvent::FocusGained,
        WindowEventId::FocusLost => WindowEvent::FocusLost,
        WindowEventId::Close => WindowEvent::Close,
    }
}

/// Translates an SDL event into an [`Event`]. Mouse coordinates are left in
/// window space, the engine maps them afterwards.
pub(crate) fn event(event: SdlEvent) -> Event {
    match event {
        SdlEvent::Quit { .. } => Event::Quit,
        SdlEvent::Window { win_event, .. } => {
            let (event, data1, data2) = window_event(win_event);
            Event::Window {
                event,
                data1,
                data2,
            }
        }
        SdlEvent::KeyDown {
            keycode, repeat, ..
        } => Event::KeyDown {
            keycode: keycode.map_or(0, |keycode| keycode.into_i32()),
            repeat,
        },
        SdlEvent::KeyUp { keycode, .. } => Event::KeyUp {
            keycode: keycode.map_or(0, |keycode| keycode.into_i32()),
        },
        SdlEvent::TextEditing {
            text,
            start,
            length,
            ..
        } => Event::TextEditing {
            text: event_text(&text),
            start,
            length,
        },
        SdlEvent::TextInput { text, .. } => Event::TextInput {
            text: event_text(&text),
        },
        SdlEvent::MouseMotion {
            x, y, xrel, yrel, ..
        } => Event::MouseMotion { x, y, xrel, yrel },
        SdlEvent::MouseButtonDown {
            mouse_btn,
            clicks,
            x,
            y,
            ..
        } => Event::MouseButtonDown {
            button: mouse_button(mouse_btn),
            clicks,
            x,
            y,
        },
        SdlEvent::MouseButtonUp {
            mouse_btn,
            clicks,
            x,
            y,
            ..
        } => Event::MouseButtonUp {
            button: mouse_button(mouse_btn),
            clicks,
            x,
            y,
        },
        SdlEvent::MouseWheel { x, y, .. } => Event::MouseWheel { x, y },
        SdlEvent::JoyAxisMotion {
            which,
            axis_idx,
            value,
            ..
        } => Event::JoyAxisMotion {
            which,
            axis: axis_idx,
            value,
        },
        SdlEvent::JoyBallMotion {
            which,
            ball_idx,
            xrel,
            yrel,
            ..
        } => Event::JoyBallMotion {
            which,
            ball: ball_idx,
            xrel,
            yrel,
        },
        SdlEvent::JoyHatMotion {
            which,
            hat_idx,
            state,
            ..
        } => Event::JoyHatMotion {
            which,
            hat: hat_idx,
            value: state.to_raw(),
        },
        SdlEvent::JoyButtonDown {
            which, button_idx, ..
        } => Event::JoyButtonDown {
            which,
            button: button_idx,
        },
        SdlEvent::JoyButtonUp {
            which, button_idx, ..
        } => Event::JoyButtonUp {
            which,
            button: button_idx,
        },
        SdlEvent::JoyDeviceAdded { which, .. } => Event::JoyDeviceAdded { which },
        SdlEvent::JoyDeviceRemoved { which, .. } => Event::JoyDeviceRemoved { which },
        SdlEvent::ControllerAxisMotion {
            which, axis, value, ..
        } => Event::ControllerAxisMotion {
            which,
            axis: controller_axis(axis),
            value,
        },
        SdlEvent::ControllerButtonDown { which, button, .. } => Event::ControllerButtonDown {
            which,
            button: controller_button(button),
        },
        SdlEvent::ControllerButtonUp { which, button, .. } => Event::ControllerButtonUp {
            which,
            button: controller_button(button),
        },
        SdlEvent::ControllerDeviceAdded { which, .. } => Event::ControllerDeviceAdded { which },
        SdlEvent::ControllerDeviceRemoved { which, .. } => {
            Event::ControllerDeviceRemoved { which }
        }
        SdlEvent::ControllerDeviceRemapped { which, .. } => {
            Event::ControllerDeviceRemapped { which }
        }
        SdlEvent::ClipboardUpdate { .. } => Event::ClipboardUpdate,
        SdlEvent::DropFile { filename, .. } => Event::DropFile { filename },
        SdlEvent::RenderTargetsReset { .. } => Event::RenderTargetsReset,
        SdlEvent::User { type_, .. } | SdlEvent::Unknown { type_, .. } => {
            Event::Other { kind: type_ }
        }
        other => Event::Other {
            kind: raw_event_type(&other),
        },
    }
}

/// The raw SDL type of an event that has no [`Event`] variant of its own.
/// Events this doesn't recognize come out as [`EventType::FirstEvent`].
fn raw_event_type(event: &SdlEvent) -> u32 {
    use SDL_EventType as Raw;
    let raw = match event {
        SdlEvent::AppTerminating { .. } => Raw::SDL_APP_TERMINATING,
        SdlEvent::AppLowMemory { .. } => Raw::SDL_APP_LOWMEMORY,
        SdlEvent::AppWillEnterBackground { .. } => Raw::SDL_APP_WILLENTERBACKGROUND,
        SdlEvent::AppDidEnterBackground { .. } => Raw::SDL_APP_DIDENTERBACKGROUND,
        SdlEvent::AppWillEnterForeground { .. } => Raw::SDL_APP_WILLENTERFOREGROUND,
        SdlEvent::AppDidEnterForeground { .. } => Raw::SDL_APP_DIDENTERFOREGROUND,
        SdlEvent::Display { .. } => Raw::SDL_DISPLAYEVENT,
        SdlEvent::ControllerTouchpadDown { .. } => Raw::SDL_CONTROLLERTOUCHPADDOWN,
        SdlEvent::ControllerTouchpadMotion { .. } => Raw::SDL_CONTROLLERTOUCHPADMOTION,
        SdlEvent::ControllerTouchpadUp { .. } => Raw::SDL_CONTROLLERTOUCHPADUP,
        // ControllerSensorUpdated only exists with sdl2's `hidapi` feature (broken in
        // sdl2 0.37); without it sensor events arrive as `Unknown` with their raw type.
        SdlEvent::FingerDown { .. } => Raw::SDL_FINGERDOWN,
        SdlEvent::FingerUp { .. } => Raw::SDL_FINGERUP,
        SdlEvent::FingerMotion { .. } => Raw::SDL_FINGERMOTION,
        SdlEvent::DollarGesture { .. } => Raw::SDL_DOLLARGESTURE,
        SdlEvent::DollarRecord { .. } => Raw::SDL_DOLLARRECORD,
        SdlEvent::MultiGesture { .. } => Raw::SDL_MULTIGESTURE,
        SdlEvent::DropText { .. } => Raw::SDL_DROPTEXT,
        SdlEvent::DropBegin { .. } => Raw::SDL_DROPBEGIN,
        SdlEvent::DropComplete { .. } => Raw::SDL_DROPCOMPLETE,
        SdlEvent::AudioDeviceAdded { .. } => Raw::SDL_AUDIODEVICEADDED,
        SdlEvent::AudioDeviceRemoved { .. } => Raw::SDL_AUDIODEVICEREMOVED,
        SdlEvent::RenderDeviceReset { .. } => Raw::SDL_RENDER_DEVICE_RESET,
        _ => return EventType::FirstEvent.raw(),
    };
    raw as u32
}

/// Builds an SDL event to push into the event queue. Only key events and
/// events which carry no device-specific data can be pushed.
pub(crate) fn sdl_event(event: &Event, window_id: u32) -> Option<SdlEvent> {
    Some(match *event {
        Event::Quit => SdlEvent::Quit { timestamp: 0 },
        Event::Window {
            event,
            data1,
            data2,
        } => SdlEvent::Window {
            timestamp: 0,
            window_id,
            win_event: sdl_window_event(event, data1, data2),
        },
        Event::KeyDown { keycode, repeat } => {
            let keycode = Keycode::from_i32(keycode);
            SdlEvent::KeyDown {
                timestamp: 0,
                window_id,
                keycode,
                scancode: keycode.and_then(Scancode::from_keycode),
                keymod: Mod::NOMOD,
                repeat,
            }
        }
        Event::KeyUp { keycode } => {
            let keycode = Keycode::from_i32(keycode);
            SdlEvent::KeyUp {
                timestamp: 0,
                window_id,
                keycode,
                scancode: keycode.and_then(Scancode::from_keycode),
                keymod: Mod::NOMOD,
                repeat: false,
            }
        }
        Event::ClipboardUpdate => SdlEvent::ClipboardUpdate { timestamp: 0 },
        Event::RenderTargetsReset => SdlEvent::RenderTargetsReset { timestamp: 0 },
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use platform_abstraction_layer::{ControllerAxis, ControllerButton, Event, WindowEventId};
    use sdl2::event::{Event as SdlEvent, WindowEvent};

    use super::*;

    #[test]
    fn window_events_keep_their_data() {
        assert_eq!(
            (WindowEventId::Resized, 800, 600),
            window_event(WindowEvent::Resized(800, 600))
        );
        assert_eq!(
            (WindowEventId::None, 0, 0),
            window_event(WindowEvent::TakeFocus)
        );
        let (id, x, y) = window_event(WindowEvent::Moved(-5, 12));
        assert_eq!(WindowEvent::Moved(-5, 12), sdl_window_event(id, x, y));
    }

    #[test]
    fn simple_events_translate() {
        assert_eq!(Event::Quit, event(SdlEvent::Quit { timestamp: 7 }));
        assert_eq!(
            Event::Window {
                event: WindowEventId::Close,
                data1: 0,
                data2: 0,
            },
            event(SdlEvent::Window {
                timestamp: 0,
                window_id: 1,
                win_event: WindowEvent::Close,
            })
        );
        assert_eq!(
            Event::DropFile {
                filename: "save.grp".to_string()
            },
            event(SdlEvent::DropFile {
                timestamp: 0,
                window_id: 1,
                filename: "save.grp".to_string(),
            })
        );
    }

    #[test]
    fn untranslated_events_keep_their_raw_type() {
        let drop_begin = event(SdlEvent::DropBegin {
            timestamp: 0,
            window_id: 1,
        });
        assert_eq!(Event::Other { kind: 0x1002 }, drop_begin);
        assert_eq!(None, drop_begin.event_type());
        assert_eq!(
            Event::Other { kind: 0x1101 },
            event(SdlEvent::AudioDeviceRemoved {
                timestamp: 0,
                which: 0,
                iscapture: false,
            })
        );
        assert_eq!(
            Event::Other { kind: 0x103 },
            event(SdlEvent::AppWillEnterBackground { timestamp: 0 })
        );
        // keymap changes have no sdl2 variant
        assert_eq!(
            Event::Other { kind: 0x304 },
            event(SdlEvent::Unknown {
                timestamp: 0,
                type_: 0x304,
            })
        );
    }

    #[test]
    fn text_input_is_truncated_to_capacity() {
        let translated = event(SdlEvent::TextInput {
            timestamp: 0,
            window_id: 1,
            text: "x".repeat(40),
        });
        let Event::TextInput { text } = translated else {
            panic!("expected a text input event, got {translated:?}");
        };
        assert_eq!(32, text.len());
    }

    #[test]
    fn only_plain_events_can_be_pushed() {
        assert!(matches!(
            sdl_event(&Event::Quit, 1),
            Some(SdlEvent::Quit { .. })
        ));
        assert!(matches!(
            sdl_event(&Event::KeyUp { keycode: 0x20 }, 1),
            Some(SdlEvent::KeyUp {
                keycode: Some(Keycode::SPACE),
                scancode: Some(Scancode::Space),
                ..
            })
        ));
        assert!(sdl_event(&Event::MouseWheel { x: 0, y: 1 }, 1).is_none());
        let resize = Event::Window {
            event: WindowEventId::Resized,
            data1: 640,
            data2: 480,
        };
        assert!(matches!(
            sdl_event(&resize, 3),
            Some(SdlEvent::Window {
                window_id: 3,
                win_event: WindowEvent::Resized(640, 480),
                ..
            })
        ));
    }

    #[test]
    fn controller_mappings_are_inverse() {
        for raw in 0..21 {
            let button = ControllerButton::try_from(raw).unwrap();
            let sdl_button = sdl_controller_button(button).unwrap();
            assert_eq!(button, controller_button(sdl_button));
        }
        assert!(sdl_controller_button(ControllerButton::Max).is_none());
        for raw in 0..6 {
            let axis = ControllerAxis::try_from(raw).unwrap();
            assert_eq!(axis, controller_axis(sdl_controller_axis(axis).unwrap()));
        }
        assert!(sdl_controller_axis(ControllerAxis::Invalid).is_none());
    }
}
