//! Packed ARGB color values.
//!
//! Colors are stored as `0xAARRGGBB`. Textual form is `#RRGGBB` (opaque) or
//! `#AARRGGBB`; `Display` round-trips through `FromStr`.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const MAGENTA: Color = Color(0xFFFF_00FF);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xFF, r, g, b)
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn to_argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 0xFF {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color value is empty")]
    Empty,
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{value}` has {len} hex digits, expected 6 or 8")]
    BadLength { value: String, len: usize },
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(s.to_string()));
        };
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }
        let alpha = match hex.len() {
            6 => 0xFF00_0000,
            8 => 0,
            len => {
                return Err(ColorParseError::BadLength {
                    value: s.to_string(),
                    len,
                });
            }
        };
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        Ok(Self(alpha | value))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        crossterm::style::Color::Rgb {
            r: color.red(),
            g: color.green(),
            b: color.blue(),
        }
    }
}
