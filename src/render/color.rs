use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{DelicacyError, DelicacyResult};

/// Opaque 8-bit sRGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb8 {
    /// Colour from components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional, case-insensitive).
    pub fn parse_hex(s: &str) -> DelicacyResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> DelicacyResult<u8> {
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(DelicacyError::invalid_input(format!("invalid hex byte \"{pair}\"")));
            }
            u8::from_str_radix(pair, 16)
                .map_err(|_| DelicacyError::invalid_input(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(DelicacyError::invalid_input("hex colour must be ASCII"));
        }
        match s.len() {
            6 => Ok(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            3 => {
                let nibble = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => Err(DelicacyError::invalid_input(
                "hex colour must be #RRGGBB or #RGB (case-insensitive)",
            )),
        }
    }

    /// `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `[r, g, b, 255]`.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = DelicacyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// Named background colours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Deep navy, `#09132b`.
    #[default]
    Dark,
    /// Pale blue-grey, `#ced5e5`.
    Light,
}

impl Theme {
    /// The theme's solid colour.
    pub const fn color(self) -> Rgb8 {
        match self {
            Self::Dark => Rgb8::new(0x09, 0x13, 0x2b),
            Self::Light => Rgb8::new(0xce, 0xd5, 0xe5),
        }
    }
}

impl FromStr for Theme {
    type Err = DelicacyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(DelicacyError::invalid_input(format!(
                "unknown theme \"{other}\" (expected dark or light)"
            ))),
        }
    }
}

/// Parse a background option: a theme name, a hex colour, or `none` / `transparent` for no
/// background.
pub fn parse_background(s: &str) -> DelicacyResult<Option<Rgb8>> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("none") || t.eq_ignore_ascii_case("transparent") {
        return Ok(None);
    }
    if let Ok(theme) = t.parse::<Theme>() {
        return Ok(Some(theme.color()));
    }
    Rgb8::parse_hex(t).map(Some)
}

#[cfg(test)]
#[path = "../../tests/unit/render/color.rs"]
mod tests;
