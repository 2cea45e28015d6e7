//! Color type and hex conversions
//!
//! Colors travel through the pipeline as [`Rgb`] (`smart_leds::RGB8`).
//! User-facing colors are `#RRGGBB` strings, parsed strictly: a malformed
//! value is an error, never black.

mod hex;

use smart_leds::RGB8;

pub use hex::{ColorFormatError, HEX_COLOR_LEN, HexColor, parse_hex, to_hex};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
