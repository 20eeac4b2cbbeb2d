//! Color space conversion helpers.
//!
//! Blocks take colors as percentages (0-100) because that is what users reason
//! about, while LED strip drivers want a single packed `0xRRGGBB` value. This
//! module converts between the two.
//!
//! Out-of-range inputs are never rejected. Each channel is scaled, rounded and
//! then masked to its low 8 bits, so `-1%` or `200%` produce a wrapped (but
//! always valid) 24-bit color rather than an error.

use palette::Srgb;

const PERCENT_MAX: f32 = 100.0;
const BYTE_MAX: f32 = 255.0;
const HUE_SECTORS: f32 = 6.0;

/// A 24-bit RGB color packed as `0xRRGGBB`.
///
/// Red occupies bits 16-23, green bits 8-15 and blue bits 0-7. The upper byte
/// is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedColor(u32);

impl PackedColor {
    /// All channels off.
    pub const BLACK: Self = Self(0x00_0000);

    /// All channels at full intensity.
    pub const WHITE: Self = Self(0xFF_FFFF);

    /// Creates a packed color from a raw value, discarding bits above 24.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw & 0xFF_FFFF)
    }

    /// Creates a packed color from 8-bit channels.
    #[inline]
    pub const fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Returns the raw `0xRRGGBB` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Returns `(red, green, blue)`.
    #[inline]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

impl From<PackedColor> for Srgb<u8> {
    fn from(color: PackedColor) -> Self {
        Srgb::new(color.red(), color.green(), color.blue())
    }
}

impl From<Srgb<u8>> for PackedColor {
    fn from(color: Srgb<u8>) -> Self {
        PackedColor::from_channels(color.red, color.green, color.blue)
    }
}

impl From<PackedColor> for Srgb {
    fn from(color: PackedColor) -> Self {
        Srgb::<u8>::from(color).into_format()
    }
}

impl core::fmt::Display for PackedColor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

#[inline]
const fn mask_channel(value: i32) -> u8 {
    (value & 0xFF) as u8
}

/// Scales a percentage to a byte: `round(percent / 100 * 255)`, masked to 8 bits.
///
/// NaN maps to 0. Values outside 0-100 wrap rather than saturate.
#[inline]
pub fn percent_to_byte(percent: f32) -> u8 {
    // `as` saturates out-of-range floats and maps NaN to 0
    mask_channel(libm::roundf(percent / PERCENT_MAX * BYTE_MAX) as i32)
}

/// Packs red, green and blue percentages (nominally 0-100) into a color.
///
/// ```
/// use strawbees_blocks::colors::rgb_percent_to_packed;
///
/// assert_eq!(rgb_percent_to_packed(100.0, 0.0, 0.0).raw(), 0xFF0000);
/// assert_eq!(rgb_percent_to_packed(0.0, 50.0, 100.0).raw(), 0x0080FF);
/// ```
#[inline]
pub fn rgb_percent_to_packed(red: f32, green: f32, blue: f32) -> PackedColor {
    PackedColor::from_channels(
        percent_to_byte(red),
        percent_to_byte(green),
        percent_to_byte(blue),
    )
}

/// Packs byte-range channels (nominally 0-255) into a color, masking each to 8 bits.
#[inline]
pub const fn rgb_byte_to_packed(red: i32, green: i32, blue: i32) -> PackedColor {
    PackedColor::from_channels(mask_channel(red), mask_channel(green), mask_channel(blue))
}

/// Converts hue, saturation and brightness percentages (nominally 0-100) into a color.
///
/// Hue is cyclic: 0 and 100 both land in the red sector. The hue circle is
/// split into six sectors selected with `floor`, so a hue exactly on a sector
/// boundary always belongs to the sector that starts there.
///
/// ```
/// use strawbees_blocks::colors::hsb_to_packed;
///
/// assert_eq!(hsb_to_packed(0.0, 100.0, 100.0).raw(), 0xFF0000);
/// assert_eq!(hsb_to_packed(100.0, 100.0, 100.0).raw(), 0xFF0000);
/// ```
pub fn hsb_to_packed(hue: f32, saturation: f32, brightness: f32) -> PackedColor {
    let h = hue / PERCENT_MAX;
    let s = saturation / PERCENT_MAX;
    let v = brightness / PERCENT_MAX;

    let scaled = h * HUE_SECTORS;
    let sector_start = libm::floorf(scaled);
    let f = scaled - sector_start;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // rem_euclid keeps negative hues on the circle
    let (r, g, b) = match (sector_start as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    rgb_percent_to_packed(r * PERCENT_MAX, g * PERCENT_MAX, b * PERCENT_MAX)
}
