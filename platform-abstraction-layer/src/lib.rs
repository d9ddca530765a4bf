// SPDX-FileCopyrightText: 2024 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backend-neutral types for the engine facade: the enums and constants that
//! mirror the multimedia library's own, the event type handed out by the
//! engine, and the few bits of actual logic that don't need the library at
//! all (letterboxing and pixel conversions).
//!
//! Swapping out the underlying library means reimplementing the facade in a
//! new platform crate, but everything in here should carry over as is. The
//! enum values intentionally match SDL2's, so the SDL2 implementation can
//! convert between the two without lookup tables.

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

/// Defines a fieldless enum whose discriminants are the raw values used by the
/// underlying library, along with a `raw` getter and a `TryFrom` conversion
/// that hands back the raw value if it doesn't match any variant.
macro_rules! value_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )*
        }

        impl $name {
            /// Returns the raw value of this variant, as used by the
            /// underlying library.
            pub const fn raw(self) -> $repr {
                self as $repr
            }
        }

        impl TryFrom<$repr> for $name {
            type Error = $repr;

            fn try_from(value: $repr) -> Result<Self, Self::Error> {
                $(
                    if value == $value {
                        return Ok($name::$variant);
                    }
                )*
                Err(value)
            }
        }
    };
}

mod audio;
mod event;
mod geom;
mod input;
pub mod pixels;
mod render;
mod viewport;

pub use audio::*;
pub use event::*;
pub use geom::*;
pub use input::*;
pub use render::*;
pub use viewport::*;

/// Red channel mask of a 32-bit ARGB pixel.
pub const RMASK: u32 = 0x00ff_0000;
/// Green channel mask of a 32-bit ARGB pixel.
pub const GMASK: u32 = 0x0000_ff00;
/// Blue channel mask of a 32-bit ARGB pixel.
pub const BMASK: u32 = 0x0000_00ff;
/// Alpha channel mask of a 32-bit ARGB pixel.
pub const AMASK: u32 = 0xff00_0000;

/// The window title used when the configuration doesn't specify one.
pub const DEFAULT_TITLE: &str = "All Heroes in Kam Yung Stories";

/// Window position value which asks the platform to center the window.
pub const WINDOWPOS_CENTERED: i32 = 0x2FFF_0000;

/// The window size used when the configuration doesn't specify one.
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (1024, 640);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_cover_all_bits_once() {
        assert_eq!(RMASK | GMASK | BMASK | AMASK, u32::MAX);
        assert_eq!(RMASK & GMASK, 0);
        assert_eq!(BMASK & AMASK, 0);
        assert_eq!(RMASK.count_ones(), 8);
    }
}
