#![no_std]
#![no_main]

use cortex_m_rt::entry;
use palette::Srgb;
use panic_halt as _;
use strawbees_blocks::{
    BlockCommand, Board, BoardConfig, LedStrip, NamedColor, NeopixelLabel, PackedColor,
    ServoLabel, ServoOutput, hsb_to_packed, rgb_byte_to_packed,
};

// ============================================================================
// Minimal Strip Implementation
// ============================================================================

/// Zero-size strip implementation for measuring library overhead
pub struct MinimalStrip;

impl LedStrip for MinimalStrip {
    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        core::hint::black_box((index, color));
    }

    fn show(&mut self) {
        core::hint::black_box(());
    }

    fn set_brightness(&mut self, level: u8) {
        core::hint::black_box(level);
    }

    fn clear(&mut self) {
        core::hint::black_box(());
    }
}

// ============================================================================
// Minimal Servo Output Implementation
// ============================================================================

pub struct MinimalServoOutput;

impl ServoOutput for MinimalServoOutput {
    fn write_angle(&mut self, pin: u8, degrees: u8) {
        core::hint::black_box((pin, degrees));
    }

    fn write_pulse(&mut self, pin: u8, micros: u16) {
        core::hint::black_box((pin, micros));
    }

    fn release(&mut self, pin: u8) {
        core::hint::black_box(pin);
    }
}

// ============================================================================
// Block Calls
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_blocks() {
    let Ok(mut board) = Board::new(MinimalStrip, MinimalServoOutput, BoardConfig::default())
    else {
        return;
    };

    let hue = core::hint::black_box(33.0);
    board.set_neopixel_rgb(NeopixelLabel::A, 100.0, 40.0, 0.0);
    board.set_neopixel_hsb(NeopixelLabel::B, hue, 100.0, 100.0);
    board.set_neopixel_named(NeopixelLabel::A, NamedColor::Violet);
    board.set_neopixels_brightness(60.0);
    board.clear_neopixels();

    board.set_servo_angle(ServoLabel::LEFT, 45);
    board.servo_mut(ServoLabel::RIGHT).set_stop_on_neutral(true);
    board.set_continuous_servo_speed(ServoLabel::RIGHT, -70);
    board.turn_off_servo(ServoLabel::LEFT);

    board.handle_command(BlockCommand::SetNeopixelPacked {
        label: NeopixelLabel::B,
        color: rgb_byte_to_packed(10, 20, 30),
    });

    let srgb: Srgb<u8> = hsb_to_packed(hue, 50.0, 50.0).into();
    core::hint::black_box(srgb);
    core::hint::black_box(board);
}

#[entry]
fn main() -> ! {
    // Call block function to ensure all code is included
    exercise_blocks();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
