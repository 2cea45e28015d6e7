use core::fmt;

use heapless::String;

use super::Rgb;

/// `#rrggbb`
pub const HEX_COLOR_LEN: usize = 7;

/// Formatted hex color string
pub type HexColor = String<HEX_COLOR_LEN>;

/// Color string did not match `#?[0-9a-fA-F]{6}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormatError {
    /// Wrong number of hex digits after the optional `#`
    InvalidLength(usize),
    /// Non hex character at the given byte offset
    InvalidDigit(usize),
}

impl fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormatError::InvalidLength(len) => {
                write!(f, "expected 6 hex digits, got {} bytes", len)
            }
            ColorFormatError::InvalidDigit(offset) => {
                write!(f, "invalid hex digit at offset {}", offset)
            }
        }
    }
}

impl core::error::Error for ColorFormatError {}

/// Parse a `#RRGGBB` color string
///
/// The leading `#` is optional and digits are case-insensitive.
pub fn parse_hex(value: &str) -> Result<Rgb, ColorFormatError> {
    let (offset, digits) = match value.strip_prefix('#') {
        Some(rest) => (1, rest.as_bytes()),
        None => (0, value.as_bytes()),
    };
    if digits.len() != 6 {
        return Err(ColorFormatError::InvalidLength(digits.len()));
    }

    let mut channels = [0u8; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let hi = nibble(digits[i * 2]).ok_or(ColorFormatError::InvalidDigit(offset + i * 2))?;
        let lo =
            nibble(digits[i * 2 + 1]).ok_or(ColorFormatError::InvalidDigit(offset + i * 2 + 1))?;
        *channel = (hi << 4) | lo;
    }

    Ok(Rgb {
        r: channels[0],
        g: channels[1],
        b: channels[2],
    })
}

/// Format a color as lowercase `#rrggbb`
pub fn to_hex(color: Rgb) -> HexColor {
    const DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut out = HexColor::new();
    // Capacity is exactly seven characters, pushes cannot fail.
    let _ = out.push('#');
    for channel in [color.r, color.g, color.b] {
        let _ = out.push(char::from(DIGITS[usize::from(channel >> 4)]));
        let _ = out.push(char::from(DIGITS[usize::from(channel & 0x0f)]));
    }
    out
}

const fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
