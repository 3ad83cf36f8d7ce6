//! Color value types.
//!
//! - [`Rgb8`] - raw 8-bit sRGB sample, what decoders and quantizers produce
//! - [`HexColor`] - validated `#RRGGBB` value
//! - [`ExtractedColor`] - representative color of a photo with its weight
//!
//! Hex strings are the external representation: catalogs, reports and
//! stored analyses all carry them as text. Parsing is case-insensitive and
//! tolerates a missing leading `#`; formatting is always lowercase with `#`.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb8 {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an array `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Hex form of this color.
    #[inline]
    pub const fn to_hex(self) -> HexColor {
        HexColor(self)
    }
}

impl From<[u8; 3]> for Rgb8 {
    #[inline]
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A validated `#RRGGBB` color.
///
/// # Example
///
/// ```rust
/// use paint_core::{HexColor, Rgb8};
///
/// let a: HexColor = "ff0000".parse().unwrap();
/// let b: HexColor = "#FF0000".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.rgb(), Rgb8::new(255, 0, 0));
/// assert!("#ff00".parse::<HexColor>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(Rgb8);

impl HexColor {
    /// Parses a hex string, returning [`Error::InvalidColorFormat`] on failure.
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::invalid_color(s));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| Error::invalid_color(s))
        };
        Ok(Self(Rgb8::new(channel(0)?, channel(2)?, channel(4)?)))
    }

    /// The color as an [`Rgb8`].
    #[inline]
    pub const fn rgb(self) -> Rgb8 {
        self.0
    }
}

impl From<Rgb8> for HexColor {
    #[inline]
    fn from(rgb: Rgb8) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for Rgb8 {
    #[inline]
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0.r, self.0.g, self.0.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A representative color of a photo.
///
/// `hex` stays textual because extracted colors may arrive from any source
/// (a stored analysis, a JSON request). The matcher validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtractedColor {
    /// `#RRGGBB` color
    pub hex: String,
    /// Share of the photo, 0..=100
    pub percentage: u8,
}

impl ExtractedColor {
    /// Creates an entry from a hex string and percentage.
    pub fn new(hex: impl Into<String>, percentage: u8) -> Self {
        Self {
            hex: hex.into(),
            percentage,
        }
    }

    /// Creates an entry from an RGB sample.
    pub fn from_rgb(rgb: Rgb8, percentage: u8) -> Self {
        Self::new(rgb.to_hex().to_string(), percentage)
    }

    /// Parses the hex field.
    #[inline]
    pub fn parse_hex(&self) -> Result<HexColor> {
        HexColor::parse(&self.hex)
    }
}
