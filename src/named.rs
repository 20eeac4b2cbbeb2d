//! Named color constants offered by the color picker block.

use crate::colors::PackedColor;
use crate::error::LabelError;

/// One of the ten predefined block colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NamedColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    Purple,
    White,
    Black,
}

impl NamedColor {
    /// Every named color, in picker order.
    pub const ALL: [NamedColor; 10] = [
        NamedColor::Red,
        NamedColor::Orange,
        NamedColor::Yellow,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Indigo,
        NamedColor::Violet,
        NamedColor::Purple,
        NamedColor::White,
        NamedColor::Black,
    ];

    /// Returns the packed value of this color.
    pub const fn packed(self) -> PackedColor {
        let raw = match self {
            NamedColor::Red => 0xFF0000,
            NamedColor::Orange => 0xFFA500,
            NamedColor::Yellow => 0xFFFF00,
            NamedColor::Green => 0x00FF00,
            NamedColor::Blue => 0x0000FF,
            NamedColor::Indigo => 0x4B0082,
            NamedColor::Violet => 0x8A2BE2,
            NamedColor::Purple => 0xFF00FF,
            NamedColor::White => 0xFFFFFF,
            NamedColor::Black => 0x000000,
        };
        PackedColor::new(raw)
    }

    /// Lower-case label shown on the block.
    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Red => "red",
            NamedColor::Orange => "orange",
            NamedColor::Yellow => "yellow",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Indigo => "indigo",
            NamedColor::Violet => "violet",
            NamedColor::Purple => "purple",
            NamedColor::White => "white",
            NamedColor::Black => "black",
        }
    }
}

/// Looks up the packed value of a named color.
#[inline]
pub const fn named_color_to_packed(color: NamedColor) -> PackedColor {
    color.packed()
}

impl From<NamedColor> for PackedColor {
    fn from(color: NamedColor) -> Self {
        color.packed()
    }
}

impl TryFrom<u32> for NamedColor {
    type Error = LabelError;

    /// Recovers the named color whose packed value is exactly `value`.
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NamedColor::ALL
            .into_iter()
            .find(|color| color.packed().raw() == value)
            .ok_or(LabelError::UnknownColor(value))
    }
}

impl core::str::FromStr for NamedColor {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamedColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or(LabelError::UnknownColorName)
    }
}

impl core::fmt::Display for NamedColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
