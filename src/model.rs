//! The closed set of color models the conversion table knows about.

use crate::error::UnknownModelError;
use crate::value::ValueKind;
use std::fmt;
use std::str::FromStr;

/// The color models supported by the conversion table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Model {
    /// RGB with channels in 0..=255.
    Rgb = 0,
    /// Hue (0..=360), saturation and lightness (0..=100).
    Hsl = 1,
    /// Hue (0..=360), saturation and value (0..=100).
    Hsv = 2,
    /// Hue (0..=360), whiteness and blackness (0..=100).
    Hwb = 3,
    /// Cyan, magenta, yellow and black, each in 0..=100.
    Cmyk = 4,
    /// CIE-XYZ scaled to roughly 0..=100 per channel.
    Xyz = 5,
    /// CIE-Lab: lightness in 0..=100, a and b signed.
    Lab = 6,
    /// CIE-LCh: the polar form of CIE-Lab.
    Lch = 7,
    /// A six-digit uppercase hex string.
    Hex = 8,
    /// A CSS color keyword.
    Keyword = 9,
    /// An ANSI-16 terminal color code (30..=37 or 90..=97).
    Ansi16 = 10,
    /// An ANSI-256 terminal color code (16..=255).
    Ansi256 = 11,
    /// Hue (0..=360), chroma and grayscale (0..=100).
    Hcg = 12,
    /// 16-bit RGB as used by AppleScript, each channel in 0..=65535.
    Apple = 13,
    /// A single grey level in 0..=100.
    Gray = 14,
}

impl Model {
    /// Every registered model, in declaration order.
    pub const ALL: [Model; Model::COUNT] = [
        Model::Rgb,
        Model::Hsl,
        Model::Hsv,
        Model::Hwb,
        Model::Cmyk,
        Model::Xyz,
        Model::Lab,
        Model::Lch,
        Model::Hex,
        Model::Keyword,
        Model::Ansi16,
        Model::Ansi256,
        Model::Hcg,
        Model::Apple,
        Model::Gray,
    ];

    pub(crate) const COUNT: usize = 15;

    /// The serialization name of this model.
    pub fn name(&self) -> &'static str {
        match self {
            Model::Rgb => "rgb",
            Model::Hsl => "hsl",
            Model::Hsv => "hsv",
            Model::Hwb => "hwb",
            Model::Cmyk => "cmyk",
            Model::Xyz => "xyz",
            Model::Lab => "lab",
            Model::Lch => "lch",
            Model::Hex => "hex",
            Model::Keyword => "keyword",
            Model::Ansi16 => "ansi16",
            Model::Ansi256 => "ansi256",
            Model::Hcg => "hcg",
            Model::Apple => "apple",
            Model::Gray => "gray",
        }
    }

    /// The value kind this model's colors are carried as.
    pub fn kind(&self) -> ValueKind {
        match self {
            Model::Hex => ValueKind::Hex,
            Model::Keyword => ValueKind::Keyword,
            _ => ValueKind::Channels,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Model {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .iter()
            .find(|model| model.name() == s)
            .copied()
            .ok_or_else(|| UnknownModelError(s.to_string()))
    }
}
