//! Closed sets of hardware labels used by the blocks.

use crate::error::LabelError;

/// One of the two on-board neopixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NeopixelLabel {
    A,
    B,
}

impl NeopixelLabel {
    /// Every neopixel label, in pixel order.
    pub const ALL: [NeopixelLabel; 2] = [NeopixelLabel::A, NeopixelLabel::B];

    /// Pixel index on the strip.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            NeopixelLabel::A => 0,
            NeopixelLabel::B => 1,
        }
    }
}

impl TryFrom<u8> for NeopixelLabel {
    type Error = LabelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NeopixelLabel::A),
            1 => Ok(NeopixelLabel::B),
            other => Err(LabelError::UnknownNeopixel(other)),
        }
    }
}

/// One of the two servo channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoLabel {
    Servo1,
    Servo2,
}

impl ServoLabel {
    /// Every servo label, in channel order.
    pub const ALL: [ServoLabel; 2] = [ServoLabel::Servo1, ServoLabel::Servo2];

    /// Servo 1 is mounted on the left.
    pub const LEFT: ServoLabel = ServoLabel::Servo1;

    /// Servo 2 is mounted on the right.
    pub const RIGHT: ServoLabel = ServoLabel::Servo2;

    /// Channel index, also the slot in [`BoardConfig::servos`](crate::BoardConfig::servos).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ServoLabel::Servo1 => 0,
            ServoLabel::Servo2 => 1,
        }
    }
}

impl TryFrom<u8> for ServoLabel {
    type Error = LabelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ServoLabel::Servo1),
            1 => Ok(ServoLabel::Servo2),
            other => Err(LabelError::UnknownServo(other)),
        }
    }
}
