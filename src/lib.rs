#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`PackedColor`**: A 24-bit `0xRRGGBB` color, the format LED strip drivers consume
//! - **`rgb_percent_to_packed` / `hsb_to_packed`**: Convert percentage inputs (0-100) to a packed color
//! - **`rgb_byte_to_packed`**: Pack byte-range (0-255) channels
//! - **`NamedColor`**: The ten predefined block colors
//! - **`NeopixelLabel`** / **`ServoLabel`**: The two neopixels (A, B) and two servos (1, 2)
//! - **`LedStrip`**: Trait to implement for your LED strip driver
//! - **`ServoOutput`**: Trait to implement for your servo pin controller
//! - **`Servo`**: Angle clamping, speed mapping and neutral stop for one servo channel
//! - **`Board`**: Owns the drivers and exposes one method per block
//! - **`BlockCommand`**: A block invocation that can be queued and dispatched later
//!
//! Color conversion never fails: out-of-range channels are masked to 8 bits,
//! so every result lies in `0x000000..=0xFFFFFF`.

#[macro_use]
mod fmt;

pub mod colors;
pub mod named;
pub mod labels;
pub mod error;
pub mod strip;
pub mod servo;
pub mod board;
pub mod command;

pub use colors::{
    PackedColor, hsb_to_packed, percent_to_byte, rgb_byte_to_packed, rgb_percent_to_packed,
};
pub use named::{NamedColor, named_color_to_packed};
pub use labels::{NeopixelLabel, ServoLabel};
pub use error::{BoardError, LabelError};
pub use strip::{LedStrip, StripConfig};
pub use servo::{Servo, ServoConfig, ServoOutput};
pub use board::{Board, BoardConfig};
pub use command::BlockCommand;
