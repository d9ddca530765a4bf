// SPDX-FileCopyrightText: 2024 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use alloc::string::String;
use arrayvec::ArrayString;

use crate::{ButtonState, ControllerAxis, ControllerButton, Key, MouseButton};

/// Capacity of the text carried by [`Event::TextInput`] and
/// [`Event::TextEditing`], matching the underlying library's buffer.
pub const TEXT_EVENT_CAPACITY: usize = 32;

/// Text payload of a text input event.
pub type EventText = ArrayString<TEXT_EVENT_CAPACITY>;

value_enum! {
    /// The kind of an [`Event`], with the underlying library's values.
    #[allow(missing_docs)]
    pub enum EventType: u32 {
        FirstEvent = 0,
        /// The user asked the application to close, e.g. with the window's
        /// close button.
        Quit = 0x100,
        WindowEvent = 0x200,
        SysWmEvent = 0x201,
        KeyDown = 0x300,
        KeyUp = 0x301,
        TextEditing = 0x302,
        TextInput = 0x303,
        MouseMotion = 0x400,
        MouseButtonDown = 0x401,
        MouseButtonUp = 0x402,
        MouseWheel = 0x403,
        JoyAxisMotion = 0x600,
        JoyBallMotion = 0x601,
        JoyHatMotion = 0x602,
        JoyButtonDown = 0x603,
        JoyButtonUp = 0x604,
        JoyDeviceAdded = 0x605,
        JoyDeviceRemoved = 0x606,
        ControllerAxisMotion = 0x650,
        ControllerButtonDown = 0x651,
        ControllerButtonUp = 0x652,
        ControllerDeviceAdded = 0x653,
        ControllerDeviceRemoved = 0x654,
        ControllerDeviceRemapped = 0x655,
        ClipboardUpdate = 0x900,
        /// A file was dropped onto the window.
        DropFile = 0x1000,
        /// The render targets were lost and their contents need to be redrawn.
        RenderTargetsReset = 0x2000,
        LastEvent = 0xFFFF,
    }
}

value_enum! {
    /// Sub-kinds of [`Event::Window`], with the underlying library's values.
    #[allow(missing_docs)]
    pub enum WindowEventId: u8 {
        /// Never sent by the platform.
        None = 0,
        Shown = 1,
        Hidden = 2,
        Exposed = 3,
        Moved = 4,
        Resized = 5,
        SizeChanged = 6,
        Minimized = 7,
        Maximized = 8,
        Restored = 9,
        Enter = 10,
        Leave = 11,
        FocusGained = 12,
        FocusLost = 13,
        Close = 14,
    }
}

/// An event sent by the platform to the game.
///
/// Mouse coordinates are in content space: when the engine letterboxes its
/// main render target onto the window, the coordinates have already been
/// mapped from window pixels to render target pixels.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Event {
    Quit,
    /// `data1` and `data2` are the new position for [`WindowEventId::Moved`]
    /// and the new size for the resize events, zero otherwise.
    Window {
        event: WindowEventId,
        data1: i32,
        data2: i32,
    },
    /// `keycode` is the raw keycode, see [`Event::key`] for the subset the
    /// game has names for.
    KeyDown {
        keycode: i32,
        repeat: bool,
    },
    KeyUp {
        keycode: i32,
    },
    TextEditing {
        text: EventText,
        start: i32,
        length: i32,
    },
    TextInput {
        text: EventText,
    },
    MouseMotion {
        x: i32,
        y: i32,
        xrel: i32,
        yrel: i32,
    },
    MouseButtonDown {
        button: Option<MouseButton>,
        clicks: u8,
        x: i32,
        y: i32,
    },
    MouseButtonUp {
        button: Option<MouseButton>,
        clicks: u8,
        x: i32,
        y: i32,
    },
    MouseWheel {
        x: i32,
        y: i32,
    },
    JoyAxisMotion {
        which: u32,
        axis: u8,
        value: i16,
    },
    JoyBallMotion {
        which: u32,
        ball: u8,
        xrel: i16,
        yrel: i16,
    },
    JoyHatMotion {
        which: u32,
        hat: u8,
        value: u8,
    },
    JoyButtonDown {
        which: u32,
        button: u8,
    },
    JoyButtonUp {
        which: u32,
        button: u8,
    },
    JoyDeviceAdded {
        which: u32,
    },
    JoyDeviceRemoved {
        which: u32,
    },
    ControllerAxisMotion {
        which: u32,
        axis: ControllerAxis,
        value: i16,
    },
    ControllerButtonDown {
        which: u32,
        button: ControllerButton,
    },
    ControllerButtonUp {
        which: u32,
        button: ControllerButton,
    },
    /// `which` is the device index, unlike the other controller events,
    /// where it's the instance id of an opened controller.
    ControllerDeviceAdded {
        which: u32,
    },
    ControllerDeviceRemoved {
        which: u32,
    },
    ControllerDeviceRemapped {
        which: u32,
    },
    ClipboardUpdate,
    DropFile {
        filename: String,
    },
    RenderTargetsReset,
    /// Anything the engine doesn't translate, with its raw type.
    Other {
        kind: u32,
    },
}

impl Event {
    /// Returns the [`EventType`] of the event, or None for [`Event::Other`]
    /// events of a type with no [`EventType`] variant.
    pub fn event_type(&self) -> Option<EventType> {
        Some(match self {
            Event::Quit => EventType::Quit,
            Event::Window { .. } => EventType::WindowEvent,
            Event::KeyDown { .. } => EventType::KeyDown,
            Event::KeyUp { .. } => EventType::KeyUp,
            Event::TextEditing { .. } => EventType::TextEditing,
            Event::TextInput { .. } => EventType::TextInput,
            Event::MouseMotion { .. } => EventType::MouseMotion,
            Event::MouseButtonDown { .. } => EventType::MouseButtonDown,
            Event::MouseButtonUp { .. } => EventType::MouseButtonUp,
            Event::MouseWheel { .. } => EventType::MouseWheel,
            Event::JoyAxisMotion { .. } => EventType::JoyAxisMotion,
            Event::JoyBallMotion { .. } => EventType::JoyBallMotion,
            Event::JoyHatMotion { .. } => EventType::JoyHatMotion,
            Event::JoyButtonDown { .. } => EventType::JoyButtonDown,
            Event::JoyButtonUp { .. } => EventType::JoyButtonUp,
            Event::JoyDeviceAdded { .. } => EventType::JoyDeviceAdded,
            Event::JoyDeviceRemoved { .. } => EventType::JoyDeviceRemoved,
            Event::ControllerAxisMotion { .. } => EventType::ControllerAxisMotion,
            Event::ControllerButtonDown { .. } => EventType::ControllerButtonDown,
            Event::ControllerButtonUp { .. } => EventType::ControllerButtonUp,
            Event::ControllerDeviceAdded { .. } => EventType::ControllerDeviceAdded,
            Event::ControllerDeviceRemoved { .. } => EventType::ControllerDeviceRemoved,
            Event::ControllerDeviceRemapped { .. } => EventType::ControllerDeviceRemapped,
            Event::ClipboardUpdate => EventType::ClipboardUpdate,
            Event::DropFile { .. } => EventType::DropFile,
            Event::RenderTargetsReset => EventType::RenderTargetsReset,
            Event::Other { kind } => return EventType::try_from(*kind).ok(),
        })
    }

    /// Returns the named key of a key event, if it has one.
    pub fn key(&self) -> Option<Key> {
        match self {
            Event::KeyDown { keycode, .. } | Event::KeyUp { keycode } => {
                Key::try_from(*keycode).ok()
            }
            _ => None,
        }
    }

    /// Returns the button state for key, mouse button, joystick button and
    /// controller button events.
    pub fn state(&self) -> Option<ButtonState> {
        match self {
            Event::KeyDown { .. }
            | Event::MouseButtonDown { .. }
            | Event::JoyButtonDown { .. }
            | Event::ControllerButtonDown { .. } => Some(ButtonState::Pressed),
            Event::KeyUp { .. }
            | Event::MouseButtonUp { .. }
            | Event::JoyButtonUp { .. }
            | Event::ControllerButtonUp { .. } => Some(ButtonState::Released),
            _ => None,
        }
    }

    /// Returns mutable references to the pointer position of mouse motion and
    /// mouse button events, for remapping them into another coordinate space.
    pub fn position_mut(&mut self) -> Option<(&mut i32, &mut i32)> {
        match self {
            Event::MouseMotion { x, y, .. }
            | Event::MouseButtonDown { x, y, .. }
            | Event::MouseButtonUp { x, y, .. } => Some((x, y)),
            _ => None,
        }
    }
}

/// Copies as much of `text` into an [`EventText`] as fits, cutting at a char
/// boundary.
pub fn event_text(text: &str) -> EventText {
    let mut end = text.len().min(TEXT_EVENT_CAPACITY);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let mut result = EventText::new();
    result.push_str(&text[..end]);
    result
}

#[cfg(test)]
mod tests {
    use super::{event_text, Event, EventType, WindowEventId};
    use crate::{ButtonState, Key, MouseButton};

    #[test]
    fn event_types_round_trip_through_raw_values() {
        assert_eq!(Ok(EventType::ControllerDeviceRemapped), EventType::try_from(0x655));
        assert_eq!(Ok(WindowEventId::Close), WindowEventId::try_from(14));
        assert_eq!(Err(15), WindowEventId::try_from(15));
        assert_eq!(0x2000, EventType::RenderTargetsReset.raw());
    }

    #[test]
    fn event_type_of_events() {
        assert_eq!(Some(EventType::Quit), Event::Quit.event_type());
        let motion = Event::MouseMotion {
            x: 1,
            y: 2,
            xrel: 0,
            yrel: 0,
        };
        assert_eq!(Some(EventType::MouseMotion), motion.event_type());
        assert_eq!(
            Some(EventType::SysWmEvent),
            Event::Other { kind: 0x201 }.event_type()
        );
        assert_eq!(None, Event::Other { kind: 0x8000 }.event_type());
    }

    #[test]
    fn key_and_state_helpers() {
        let down = Event::KeyDown {
            keycode: Key::Escape.raw(),
            repeat: false,
        };
        assert_eq!(Some(Key::Escape), down.key());
        assert_eq!(Some(ButtonState::Pressed), down.state());

        let unnamed = Event::KeyUp { keycode: 0x4000_003A };
        assert_eq!(None, unnamed.key());
        assert_eq!(Some(ButtonState::Released), unnamed.state());
        assert_eq!(None, Event::Quit.state());
    }

    #[test]
    fn mouse_positions_can_be_remapped() {
        let mut event = Event::MouseButtonDown {
            button: Some(MouseButton::Left),
            clicks: 1,
            x: 10,
            y: 20,
        };
        if let Some((x, y)) = event.position_mut() {
            *x *= 2;
            *y -= 5;
        }
        assert_eq!(
            Event::MouseButtonDown {
                button: Some(MouseButton::Left),
                clicks: 1,
                x: 20,
                y: 15,
            },
            event
        );
        assert!(Event::MouseWheel { x: 0, y: 1 }.position_mut().is_none());
    }

    #[test]
    fn long_text_is_cut_at_char_boundary() {
        assert_eq!("hello", event_text("hello").as_str());
        // 11 three-byte characters, 33 bytes, only 10 fit
        let text = "金庸群侠传金庸群侠传金";
        assert_eq!(30, event_text(text).len());
    }
}
