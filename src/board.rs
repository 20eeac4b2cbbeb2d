//! The board context the blocks run against.
//!
//! [`Board`] owns the strip driver and the servo pin controller and exposes
//! one method per block. It replaces module-level driver singletons: whoever
//! dispatches blocks holds the board and passes `&mut` access around.

use crate::colors::{PackedColor, hsb_to_packed, percent_to_byte, rgb_percent_to_packed};
use crate::error::BoardError;
use crate::labels::{NeopixelLabel, ServoLabel};
use crate::named::NamedColor;
use crate::servo::{CENTER_ANGLE, Servo, ServoConfig, ServoOutput};
use crate::strip::{LedStrip, StripConfig};

/// Hardware layout of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// The neopixel strip.
    pub strip: StripConfig,

    /// Servo channels, indexed by [`ServoLabel::index`].
    pub servos: [ServoConfig; 2],

    /// Angle written to a servo the first time a block touches it.
    pub initial_servo_angle: u8,
}

impl BoardConfig {
    /// Strip on pin 8, servo 1 on pin 13, servo 2 on pin 14.
    pub const DEFAULT: Self = Self {
        strip: StripConfig::DEFAULT,
        servos: [ServoConfig::new(13), ServoConfig::new(14)],
        initial_servo_angle: CENTER_ANGLE,
    };
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Context holding the strip and servo drivers.
///
/// # Type Parameters
/// * `S` - LED strip driver
/// * `O` - Servo pin controller
pub struct Board<S: LedStrip, O: ServoOutput> {
    strip: S,
    output: O,
    config: BoardConfig,
    servos: [Option<Servo>; 2],
}

impl<S: LedStrip, O: ServoOutput> Board<S, O> {
    /// Creates a board and applies the default strip brightness.
    ///
    /// Servos are attached lazily, on the first block that uses them.
    ///
    /// # Errors
    /// [`BoardError::TooFewPixels`] if the strip cannot hold every neopixel label.
    pub fn new(mut strip: S, output: O, config: BoardConfig) -> Result<Self, BoardError> {
        let required = NeopixelLabel::ALL.len();
        if config.strip.pixel_count < required {
            return Err(BoardError::TooFewPixels {
                required,
                actual: config.strip.pixel_count,
            });
        }

        debug!(
            "board: strip pin {}, {} pixels",
            config.strip.pin,
            config.strip.pixel_count
        );
        strip.set_brightness(config.strip.default_brightness);

        Ok(Self {
            strip,
            output,
            config,
            servos: [None, None],
        })
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn strip(&self) -> &S {
        &self.strip
    }

    #[inline]
    pub fn servo_output(&self) -> &O {
        &self.output
    }

    /// Sets a neopixel from red, green and blue percentages (0-100).
    pub fn set_neopixel_rgb(&mut self, label: NeopixelLabel, red: f32, green: f32, blue: f32) {
        self.set_neopixel_packed(label, rgb_percent_to_packed(red, green, blue));
    }

    /// Sets a neopixel from hue, saturation and brightness percentages (0-100).
    pub fn set_neopixel_hsb(
        &mut self,
        label: NeopixelLabel,
        hue: f32,
        saturation: f32,
        brightness: f32,
    ) {
        self.set_neopixel_packed(label, hsb_to_packed(hue, saturation, brightness));
    }

    /// Sets a neopixel to one of the named colors.
    pub fn set_neopixel_named(&mut self, label: NeopixelLabel, color: NamedColor) {
        self.set_neopixel_packed(label, color.packed());
    }

    /// Sets a neopixel to an already packed color and shows it.
    pub fn set_neopixel_packed(&mut self, label: NeopixelLabel, color: PackedColor) {
        trace!("neopixel {}: {}", label, color);
        self.strip.set_pixel_color(label.index(), color);
        self.strip.show();
    }

    /// Sets the brightness of every neopixel from a percentage (0-100).
    pub fn set_neopixels_brightness(&mut self, percent: f32) {
        let level = percent_to_byte(percent);
        trace!("neopixels: brightness {}", level);
        self.strip.set_brightness(level);
        self.strip.show();
    }

    /// Turns every neopixel off.
    pub fn clear_neopixels(&mut self) {
        self.strip.clear();
        self.strip.show();
    }

    /// Moves a servo to `degrees` (0-180).
    pub fn set_servo_angle(&mut self, label: ServoLabel, degrees: i32) {
        let (servo, output) = self.servo_and_output(label);
        servo.set_angle(output, degrees);
    }

    /// Runs a continuous servo at `speed` percent (-100 to 100).
    pub fn set_continuous_servo_speed(&mut self, label: ServoLabel, speed: i32) {
        let (servo, output) = self.servo_and_output(label);
        servo.run(output, speed);
    }

    /// Releases a servo so the horn turns freely and no power is drawn.
    pub fn turn_off_servo(&mut self, label: ServoLabel) {
        let (servo, output) = self.servo_and_output(label);
        servo.stop(output);
    }

    /// Sends a raw pulse width in microseconds to a servo.
    pub fn set_servo_pulse(&mut self, label: ServoLabel, micros: i32) {
        let (servo, output) = self.servo_and_output(label);
        servo.set_pulse(output, micros);
    }

    /// Returns a servo, attaching it first if needed, for range or neutral-stop changes.
    pub fn servo_mut(&mut self, label: ServoLabel) -> &mut Servo {
        self.servo_and_output(label).0
    }

    /// Returns a servo if a block has already attached it.
    #[inline]
    pub fn servo(&self, label: ServoLabel) -> Option<&Servo> {
        self.servos[label.index()].as_ref()
    }

    /// Consumes the board and hands back the drivers.
    pub fn release(self) -> (S, O) {
        (self.strip, self.output)
    }

    fn servo_and_output(&mut self, label: ServoLabel) -> (&mut Servo, &mut O) {
        let config = self.config.servos[label.index()];
        let initial_angle = i32::from(self.config.initial_servo_angle);
        let output = &mut self.output;

        let servo = self.servos[label.index()].get_or_insert_with(|| {
            debug!("servo {}: attaching on pin {}", label, config.pin);
            let mut servo = Servo::new(config);
            servo.set_angle(&mut *output, initial_angle);
            servo
        });
        (servo, output)
    }
}
