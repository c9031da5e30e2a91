//! Plain RGBA colors used by the presentation layer.
//!
//! Colors serialize as hex strings (`#RRGGBB` or `#RRGGBBAA`) so they read
//! naturally in YAML configuration files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CalendarError;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a 0xRRGGBB value
    pub const fn from_hex(hex: u32) -> Self {
        Self::from_rgb(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Color::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::from_rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Named colors of the widget's default scheme (iOS 7 palette)
pub mod palette {
    use super::Color;

    pub const LIGHT_BLACK: Color = Color::from_hex(0x4A4A4A);
    pub const BLACK: Color = Color::from_hex(0x2B2B2B);
    pub const DARK_BLACK: Color = Color::from_hex(0x1F1F21);
    pub const LIGHT_GRAY: Color = Color::from_hex(0x8E8E93);
    pub const DARK_GRAY: Color = Color::from_hex(0x555558);
    pub const LIGHT_YELLOW: Color = Color::from_hex(0xFFDB4C);
    pub const LIGHT_PURPLE: Color = Color::from_hex(0xC86EDF);
    pub const LIGHT_GREEN: Color = Color::from_hex(0xA4E786);
    pub const LIGHT_PINK: Color = Color::from_hex(0xFFD3E0);

    pub const RED: Color = Color::from_hex(0xFF3B30);
    pub const ORANGE: Color = Color::from_hex(0xFF9500);
    pub const GREEN: Color = Color::from_hex(0x4CD964);
    pub const BLUE: Color = Color::from_hex(0x007AFF);
    pub const PURPLE: Color = Color::from_hex(0x5856D6);
    pub const YELLOW: Color = Color::from_hex(0xFFCC00);
    pub const TEAL_BLUE: Color = Color::from_hex(0x5AC8FA);
    pub const PINK: Color = Color::from_hex(0xFF2D55);
}
