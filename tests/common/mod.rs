//! Shared test infrastructure for strawbees-blocks integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strawbees_blocks::{LedStrip, PackedColor, ServoOutput};

// ============================================================================
// Mock LED Strip
// ============================================================================

/// A call made on the mock strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripOp {
    SetPixel(usize, PackedColor),
    Show,
    Brightness(u8),
    Clear,
}

/// Mock strip that records every call and tracks the shown pixels
pub struct MockStrip {
    pixels: [PackedColor; 2],
    shown: [PackedColor; 2],
    brightness: u8,
    ops: heapless::Vec<StripOp, 64>,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            pixels: [PackedColor::BLACK; 2],
            shown: [PackedColor::BLACK; 2],
            brightness: 255,
            ops: heapless::Vec::new(),
        }
    }

    /// Colors as of the last `show()`
    pub fn shown(&self) -> [PackedColor; 2] {
        self.shown
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn ops(&self) -> &[StripOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl LedStrip for MockStrip {
    fn set_pixel_color(&mut self, index: usize, color: PackedColor) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
        let _ = self.ops.push(StripOp::SetPixel(index, color));
    }

    fn show(&mut self) {
        self.shown = self.pixels;
        let _ = self.ops.push(StripOp::Show);
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
        let _ = self.ops.push(StripOp::Brightness(level));
    }

    fn clear(&mut self) {
        self.pixels = [PackedColor::BLACK; 2];
        let _ = self.ops.push(StripOp::Clear);
    }
}

// ============================================================================
// Mock Servo Output
// ============================================================================

/// A call made on the mock servo output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServoOp {
    Angle { pin: u8, degrees: u8 },
    Pulse { pin: u8, micros: u16 },
    Release { pin: u8 },
}

/// Mock pin controller that records every servo call
pub struct MockServoOutput {
    ops: heapless::Vec<ServoOp, 64>,
}

impl MockServoOutput {
    pub fn new() -> Self {
        Self {
            ops: heapless::Vec::new(),
        }
    }

    pub fn ops(&self) -> &[ServoOp] {
        &self.ops
    }

    pub fn last_op(&self) -> Option<ServoOp> {
        self.ops.last().copied()
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl ServoOutput for MockServoOutput {
    fn write_angle(&mut self, pin: u8, degrees: u8) {
        let _ = self.ops.push(ServoOp::Angle { pin, degrees });
    }

    fn write_pulse(&mut self, pin: u8, micros: u16) {
        let _ = self.ops.push(ServoOp::Pulse { pin, micros });
    }

    fn release(&mut self, pin: u8) {
        let _ = self.ops.push(ServoOp::Release { pin });
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Largest per-channel difference between two colors
pub fn max_channel_delta(a: PackedColor, b: PackedColor) -> u8 {
    let (ar, ag, ab) = a.channels();
    let (br, bg, bb) = b.channels();
    ar.abs_diff(br).max(ag.abs_diff(bg)).max(ab.abs_diff(bb))
}
