use std::{
    fmt,
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An RGBA color.
///
/// Colors serialize as `#rrggbb` or `#rrggbbaa` hex strings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Construct an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Construct a color with an explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque color from a `0xrrggbb` value.
    pub const fn from_hex(v: u32) -> Self {
        Self::rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Return the same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// A lighter variant used for bevel highlights.
    pub fn highlight(self) -> Self {
        (self + Self::from_hex(0x303030)).with_alpha(self.a)
    }

    /// A darker variant used for bevel shadows.
    pub fn shadow(self) -> Self {
        (self - Self::from_hex(0x303030)).with_alpha(self.a)
    }
}

/// Channel-wise saturating addition. Alpha is kept from the left operand.
impl Add for Color {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        Self {
            r: self.r.saturating_add(o.r),
            g: self.g.saturating_add(o.g),
            b: self.b.saturating_add(o.b),
            a: self.a,
        }
    }
}

/// Channel-wise saturating subtraction. Alpha is kept from the left operand.
impl Sub for Color {
    type Output = Self;

    fn sub(self, o: Self) -> Self {
        Self {
            r: self.r.saturating_sub(o.r),
            g: self.g.saturating_sub(o.g),
            b: self.b.saturating_sub(o.b),
            a: self.a,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Config(format!("invalid color: {s:?}")));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| Error::Config(format!("invalid color {s:?}: {e}")))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() -> Result<()> {
        assert_eq!("#808090".parse::<Color>()?, Color::rgb(0x80, 0x80, 0x90));
        assert_eq!("c3d9ff80".parse::<Color>()?, Color::rgba(0xc3, 0xd9, 0xff, 0x80));
        assert!("#80809".parse::<Color>().is_err());
        assert!("#zz8090".parse::<Color>().is_err());
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
        assert_eq!(Color::from_hex(0x808090).to_string(), "#808090");
        Ok(())
    }

    #[test]
    fn bevel() -> Result<()> {
        let base = Color::rgba(0x80, 0x80, 0x90, 0x40);
        assert_eq!(base.highlight(), Color::rgba(0xb0, 0xb0, 0xc0, 0x40));
        assert_eq!(base.shadow(), Color::rgba(0x50, 0x50, 0x60, 0x40));
        assert_eq!(Color::WHITE.highlight(), Color::WHITE);
        assert_eq!(Color::BLACK.shadow(), Color::BLACK);
        Ok(())
    }
}
