//! Addressable LED strip abstraction.
//!
//! Defines the [`LedStrip`] trait the neopixel blocks drive, and the
//! [`StripConfig`] describing the strip fitted to the board.

use crate::colors::PackedColor;

/// Trait for abstracting an addressable LED strip driver.
///
/// Implement this for your strip hardware (RMT, SPI, PIO, bit-banged GPIO, etc.)
/// to let the blocks control it. Color and brightness changes are buffered
/// until [`show`](LedStrip::show) is called.
pub trait LedStrip {
    /// Buffers the color of the pixel at `index`.
    ///
    /// The color is in `0xRRGGBB` layout. Implementations should ignore indices
    /// past the end of the strip and handle any hardware errors internally -
    /// this method cannot fail.
    fn set_pixel_color(&mut self, index: usize, color: PackedColor);

    /// Transmits the buffered pixels to the strip.
    fn show(&mut self);

    /// Sets the global brightness (0-255) applied to every pixel.
    fn set_brightness(&mut self, level: u8);

    /// Turns every buffered pixel off.
    fn clear(&mut self);
}

impl<S: LedStrip + ?Sized> LedStrip for &mut S {
    #[inline]
    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        (**self).set_pixel_color(index, color)
    }

    #[inline]
    fn show(&mut self) {
        (**self).show()
    }

    #[inline]
    fn set_brightness(&mut self, level: u8) {
        (**self).set_brightness(level)
    }

    #[inline]
    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Description of the strip fitted to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripConfig {
    /// Data pin number.
    pub pin: u8,

    /// Number of pixels on the strip.
    pub pixel_count: usize,

    /// Brightness (0-255) applied when the board is created.
    pub default_brightness: u8,
}

impl StripConfig {
    /// The on-board strip: two pixels on pin 8, brightness 40.
    pub const DEFAULT: Self = Self::new(8, 2, 40);

    /// Creates a strip configuration.
    #[inline]
    pub const fn new(pin: u8, pixel_count: usize, default_brightness: u8) -> Self {
        Self {
            pin,
            pixel_count,
            default_brightness,
        }
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
