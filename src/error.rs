//! Error types for block value conversion and board setup.

/// A raw block value did not name a known label or color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LabelError {
    /// Neopixel index other than 0 (A) or 1 (B).
    UnknownNeopixel(u8),

    /// Servo index other than 0 (servo 1) or 1 (servo 2).
    UnknownServo(u8),

    /// Packed value that is not one of the named colors.
    UnknownColor(u32),

    /// Color name that is not one of the named colors.
    UnknownColorName,
}

impl core::fmt::Display for LabelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LabelError::UnknownNeopixel(value) => {
                write!(f, "unknown neopixel label {}", value)
            }
            LabelError::UnknownServo(value) => {
                write!(f, "unknown servo label {}", value)
            }
            LabelError::UnknownColor(value) => {
                write!(f, "0x{:06X} is not a named color", value)
            }
            LabelError::UnknownColorName => {
                write!(f, "unknown color name")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LabelError {}

/// Errors raised while assembling a [`Board`](crate::Board).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardError {
    /// The strip is too short for every neopixel label to address a pixel.
    TooFewPixels {
        /// Pixels needed by the neopixel labels
        required: usize,
        /// Pixels the strip configuration provides
        actual: usize,
    },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::TooFewPixels { required, actual } => {
                write!(
                    f,
                    "strip has {} pixels, but the neopixel labels need {}",
                    actual, required
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
