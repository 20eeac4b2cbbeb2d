//! Command-based control for the board.
//!
//! A [`BlockCommand`] is one block invocation with its arguments. Callers that
//! queue or forward block calls (over a channel, a serial link, etc.) build
//! commands and feed them to [`Board::handle_command`].

use crate::board::Board;
use crate::colors::PackedColor;
use crate::labels::{NeopixelLabel, ServoLabel};
use crate::named::NamedColor;
use crate::servo::ServoOutput;
use crate::strip::LedStrip;

/// A single block invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlockCommand {
    /// Set a neopixel from red, green and blue percentages.
    SetNeopixelRgb {
        label: NeopixelLabel,
        red: f32,
        green: f32,
        blue: f32,
    },
    /// Set a neopixel from hue, saturation and brightness percentages.
    SetNeopixelHsb {
        label: NeopixelLabel,
        hue: f32,
        saturation: f32,
        brightness: f32,
    },
    /// Set a neopixel to a named color.
    SetNeopixelNamed {
        label: NeopixelLabel,
        color: NamedColor,
    },
    /// Set a neopixel to a packed color.
    SetNeopixelPacked {
        label: NeopixelLabel,
        color: PackedColor,
    },
    /// Set the brightness of every neopixel (percent).
    SetNeopixelsBrightness(f32),
    /// Turn every neopixel off.
    ClearNeopixels,
    /// Move a servo to an angle in degrees.
    SetServoAngle { label: ServoLabel, degrees: i32 },
    /// Run a continuous servo at a speed percentage.
    SetContinuousServoSpeed { label: ServoLabel, speed: i32 },
    /// Release a servo.
    TurnOffServo(ServoLabel),
}

impl<S: LedStrip, O: ServoOutput> Board<S, O> {
    /// Handles a block command by dispatching to the matching block method.
    pub fn handle_command(&mut self, command: BlockCommand) {
        match command {
            BlockCommand::SetNeopixelRgb {
                label,
                red,
                green,
                blue,
            } => self.set_neopixel_rgb(label, red, green, blue),
            BlockCommand::SetNeopixelHsb {
                label,
                hue,
                saturation,
                brightness,
            } => self.set_neopixel_hsb(label, hue, saturation, brightness),
            BlockCommand::SetNeopixelNamed { label, color } => {
                self.set_neopixel_named(label, color)
            }
            BlockCommand::SetNeopixelPacked { label, color } => {
                self.set_neopixel_packed(label, color)
            }
            BlockCommand::SetNeopixelsBrightness(percent) => {
                self.set_neopixels_brightness(percent)
            }
            BlockCommand::ClearNeopixels => self.clear_neopixels(),
            BlockCommand::SetServoAngle { label, degrees } => {
                self.set_servo_angle(label, degrees)
            }
            BlockCommand::SetContinuousServoSpeed { label, speed } => {
                self.set_continuous_servo_speed(label, speed)
            }
            BlockCommand::TurnOffServo(label) => self.turn_off_servo(label),
        }
    }
}
