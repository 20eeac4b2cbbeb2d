//! Hobby servo control.
//!
//! A [`Servo`] holds the per-channel configuration and the last angle written.
//! The hardware is reached through the [`ServoOutput`] trait, passed to every
//! operation, so one pin controller can serve several servos.

/// Lowest angle a servo can be asked for, in degrees.
pub const MIN_ANGLE: u8 = 0;
/// Highest angle a servo can be asked for, in degrees.
pub const MAX_ANGLE: u8 = 180;
/// Middle of the full angle range.
pub const CENTER_ANGLE: u8 = 90;

/// Shortest pulse accepted by [`Servo::set_pulse`] by default, in microseconds.
pub const MIN_PULSE_US: u16 = 500;
/// Longest pulse accepted by [`Servo::set_pulse`] by default, in microseconds.
pub const MAX_PULSE_US: u16 = 2500;

const SPEED_LIMIT: i32 = 100;

/// Trait for abstracting the pin controller that generates servo pulses.
///
/// Implement this for your PWM hardware. Values passed in are already clamped
/// by [`Servo`]. Handle any hardware errors internally - these methods cannot
/// fail.
pub trait ServoOutput {
    /// Drives `pin` to hold the given angle (0-180 degrees).
    fn write_angle(&mut self, pin: u8, degrees: u8);

    /// Drives `pin` with a raw pulse width in microseconds.
    fn write_pulse(&mut self, pin: u8, micros: u16);

    /// Stops driving `pin` so the horn can be turned by hand.
    fn release(&mut self, pin: u8);
}

impl<O: ServoOutput + ?Sized> ServoOutput for &mut O {
    #[inline]
    fn write_angle(&mut self, pin: u8, degrees: u8) {
        (**self).write_angle(pin, degrees)
    }

    #[inline]
    fn write_pulse(&mut self, pin: u8, micros: u16) {
        (**self).write_pulse(pin, micros)
    }

    #[inline]
    fn release(&mut self, pin: u8) {
        (**self).release(pin)
    }
}

/// Configuration of a single servo channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ServoConfig {
    /// Pin the servo signal wire is connected to.
    pub pin: u8,

    /// Lowest reachable angle (0-90).
    pub min_angle: u8,

    /// Highest reachable angle (90-180).
    pub max_angle: u8,

    /// Shortest pulse width in microseconds.
    pub min_pulse_us: u16,

    /// Longest pulse width in microseconds.
    pub max_pulse_us: u16,

    /// Release the pin when [`Servo::run`] lands on the neutral angle.
    ///
    /// Continuous servos often creep at neutral; releasing the pin stops them.
    pub stop_on_neutral: bool,
}

impl ServoConfig {
    /// Creates a configuration for `pin` with the full angle and pulse ranges.
    #[inline]
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            min_angle: MIN_ANGLE,
            max_angle: MAX_ANGLE,
            min_pulse_us: MIN_PULSE_US,
            max_pulse_us: MAX_PULSE_US,
            stop_on_neutral: false,
        }
    }

    /// Sets the pulse range.
    #[inline]
    pub const fn with_pulse_range(mut self, min_us: u16, max_us: u16) -> Self {
        self.min_pulse_us = min_us;
        self.max_pulse_us = max_us;
        self
    }

    /// Sets the neutral-stop flag.
    #[inline]
    pub const fn with_stop_on_neutral(mut self, enabled: bool) -> Self {
        self.stop_on_neutral = enabled;
        self
    }

    /// Angle at which a continuous servo stands still: the middle of the range.
    #[inline]
    pub const fn neutral_angle(&self) -> u8 {
        self.min_angle + self.max_angle.saturating_sub(self.min_angle) / 2
    }

    /// Pulls the angle limits into their allowed halves and orders the pulse range.
    pub const fn normalized(mut self) -> Self {
        if self.min_angle > CENTER_ANGLE {
            self.min_angle = CENTER_ANGLE;
        }
        if self.max_angle < CENTER_ANGLE {
            self.max_angle = CENTER_ANGLE;
        } else if self.max_angle > MAX_ANGLE {
            self.max_angle = MAX_ANGLE;
        }
        if self.min_pulse_us > self.max_pulse_us {
            let min = self.max_pulse_us;
            self.max_pulse_us = self.min_pulse_us;
            self.min_pulse_us = min;
        }
        self
    }
}

/// A servo channel and the last angle it was driven to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Servo {
    config: ServoConfig,
    angle: Option<u8>,
}

impl Servo {
    /// Creates an idle servo. Nothing is written until the first operation.
    ///
    /// The configuration is [normalized](ServoConfig::normalized) first.
    #[inline]
    pub const fn new(config: ServoConfig) -> Self {
        Self {
            config: config.normalized(),
            angle: None,
        }
    }

    #[inline]
    pub const fn config(&self) -> &ServoConfig {
        &self.config
    }

    /// Last angle written, or `None` if the servo is released or was never driven.
    #[inline]
    pub const fn angle(&self) -> Option<u8> {
        self.angle
    }

    /// Moves the servo to `degrees`, clamped to the configured angle range.
    pub fn set_angle<O: ServoOutput>(&mut self, output: &mut O, degrees: i32) {
        let degrees = self.clamp_degrees(degrees);
        trace!("servo pin {}: angle {}", self.config.pin, degrees);
        output.write_angle(self.config.pin, degrees);
        self.angle = Some(degrees);
    }

    /// Runs a continuous servo at `speed` percent (-100 to 100).
    ///
    /// The speed is mapped linearly onto the angle range. With
    /// [`stop_on_neutral`](ServoConfig::stop_on_neutral) set, landing on the
    /// neutral angle releases the pin instead.
    pub fn run<O: ServoOutput>(&mut self, output: &mut O, speed: i32) {
        let speed = speed.clamp(-SPEED_LIMIT, SPEED_LIMIT);
        let min = i32::from(self.config.min_angle);
        let span = i32::from(self.config.max_angle) - min;
        let degrees = min + (speed + SPEED_LIMIT) * span / (2 * SPEED_LIMIT);

        if self.config.stop_on_neutral && degrees == i32::from(self.config.neutral_angle()) {
            self.stop(output);
        } else {
            self.set_angle(output, degrees);
        }
    }

    /// Sends a raw pulse, clamped to the configured pulse range.
    ///
    /// The held angle is left untouched since the pulse may not correspond to one.
    pub fn set_pulse<O: ServoOutput>(&mut self, output: &mut O, micros: i32) {
        let micros = micros.clamp(
            i32::from(self.config.min_pulse_us),
            i32::from(self.config.max_pulse_us),
        ) as u16;
        trace!("servo pin {}: pulse {}us", self.config.pin, micros);
        output.write_pulse(self.config.pin, micros);
    }

    /// Releases the pin if the servo is holding an angle.
    pub fn stop<O: ServoOutput>(&mut self, output: &mut O) {
        if self.angle.take().is_some() {
            trace!("servo pin {}: released", self.config.pin);
            output.release(self.config.pin);
        }
    }

    /// Restricts the reachable angles.
    ///
    /// `min` is clamped to 0-90 and `max` to 90-180. The current position is
    /// not rewritten.
    pub fn set_range(&mut self, min: i32, max: i32) {
        self.config.min_angle = min.clamp(i32::from(MIN_ANGLE), i32::from(CENTER_ANGLE)) as u8;
        self.config.max_angle = max.clamp(i32::from(CENTER_ANGLE), i32::from(MAX_ANGLE)) as u8;
    }

    #[inline]
    pub fn set_stop_on_neutral(&mut self, enabled: bool) {
        self.config.stop_on_neutral = enabled;
    }

    fn clamp_degrees(&self, degrees: i32) -> u8 {
        degrees.clamp(
            i32::from(self.config.min_angle),
            i32::from(self.config.max_angle),
        ) as u8
    }
}
