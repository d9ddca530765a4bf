// SPDX-FileCopyrightText: 2024 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

value_enum! {
    /// Keyboard keys the game checks for. The values are SDL keycodes:
    /// printable keys are their ASCII values, and the rest are scancodes with
    /// bit 30 set.
    #[allow(missing_docs)]
    pub enum Key: i32 {
        Left = 0x4000_0050,
        Right = 0x4000_004F,
        Up = 0x4000_0052,
        Down = 0x4000_0051,
        Space = 0x20,
        Escape = 0x1B,
        Return = 0x0D,
        Delete = 0x7F,
        Backspace = 0x08,
        Tab = 0x09,
        PageUp = 0x4000_004B,
        PageDown = 0x4000_004E,
        Num1 = 0x31,
        Num2 = 0x32,
        Num3 = 0x33,
        Num4 = 0x34,
        A = 0x61,
        B = 0x62,
        C = 0x63,
        D = 0x64,
        E = 0x65,
        F = 0x66,
        G = 0x67,
        H = 0x68,
        I = 0x69,
        J = 0x6A,
        K = 0x6B,
        L = 0x6C,
        M = 0x6D,
        N = 0x6E,
        O = 0x6F,
        P = 0x70,
        Q = 0x71,
        R = 0x72,
        S = 0x73,
        T = 0x74,
        U = 0x75,
        V = 0x76,
        W = 0x77,
        X = 0x78,
        Y = 0x79,
        Z = 0x7A,
    }
}

value_enum! {
    /// Mouse buttons.
    #[allow(missing_docs)]
    pub enum MouseButton: u8 {
        Left = 1,
        Middle = 2,
        Right = 3,
        X1 = 4,
        X2 = 5,
    }
}

value_enum! {
    /// Whether a button is held down.
    #[allow(missing_docs)]
    pub enum ButtonState: u8 {
        Released = 0,
        Pressed = 1,
    }
}

value_enum! {
    /// Buttons of a game controller, named after the Xbox controller layout.
    ///
    /// `Invalid` and `Max` exist for parity with the underlying library and
    /// never refer to a real button.
    #[allow(missing_docs)]
    pub enum ControllerButton: i32 {
        Invalid = -1,
        A = 0,
        B = 1,
        X = 2,
        Y = 3,
        Back = 4,
        Guide = 5,
        Start = 6,
        LeftStick = 7,
        RightStick = 8,
        LeftShoulder = 9,
        RightShoulder = 10,
        DPadUp = 11,
        DPadDown = 12,
        DPadLeft = 13,
        DPadRight = 14,
        Misc1 = 15,
        Paddle1 = 16,
        Paddle2 = 17,
        Paddle3 = 18,
        Paddle4 = 19,
        Touchpad = 20,
        Max = 21,
    }
}

value_enum! {
    /// Analog axes of a game controller. Sticks range from -32768 to 32767,
    /// triggers from 0 to 32767.
    ///
    /// `Invalid` and `Max` exist for parity with the underlying library and
    /// never refer to a real axis.
    #[allow(missing_docs)]
    pub enum ControllerAxis: i32 {
        Invalid = -1,
        LeftX = 0,
        LeftY = 1,
        RightX = 2,
        RightY = 3,
        TriggerLeft = 4,
        TriggerRight = 5,
        Max = 6,
    }
}

impl ControllerButton {
    /// Returns false for the `Invalid` and `Max` placeholders.
    pub const fn is_real(self) -> bool {
        !matches!(self, ControllerButton::Invalid | ControllerButton::Max)
    }
}

impl ControllerAxis {
    /// Returns false for the `Invalid` and `Max` placeholders.
    pub const fn is_real(self) -> bool {
        !matches!(self, ControllerAxis::Invalid | ControllerAxis::Max)
    }
}

#[cfg(test)]
mod tests {
    use super::{ButtonState, ControllerAxis, ControllerButton, Key, MouseButton};

    #[test]
    fn keycodes_match_sdl() {
        assert_eq!(Ok(Key::A), Key::try_from('a' as i32));
        assert_eq!(Ok(Key::Z), Key::try_from('z' as i32));
        assert_eq!(Ok(Key::Num3), Key::try_from('3' as i32));
        // SDLK_LEFT is SDL_SCANCODE_LEFT (80) with the scancode mask bit set
        assert_eq!(80 | (1 << 30), Key::Left.raw());
        assert_eq!(Err('A' as i32), Key::try_from('A' as i32));
    }

    #[test]
    fn controller_placeholders() {
        assert_eq!(-1, ControllerButton::Invalid.raw());
        assert_eq!(21, ControllerButton::Max.raw());
        assert!(!ControllerButton::Max.is_real());
        assert!(ControllerButton::Touchpad.is_real());
        assert_eq!(Ok(ControllerAxis::TriggerRight), ControllerAxis::try_from(5));
        assert!(!ControllerAxis::Invalid.is_real());
        assert_eq!(Err(7), ControllerAxis::try_from(7));
    }

    #[test]
    fn mouse_and_state_values() {
        assert_eq!(Ok(MouseButton::Right), MouseButton::try_from(3));
        assert_eq!(Err(0), MouseButton::try_from(0));
        assert_eq!(1, ButtonState::Pressed.raw());
        assert_eq!(0, ButtonState::Released.raw());
    }
}
