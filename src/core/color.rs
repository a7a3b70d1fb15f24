//! ANSI tint for chart markers.

use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl Error for ColorError {}

/// Foreground colour, either one of the 8 basic ANSI colours or 24-bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    /// SGR code 30..=37
    Basic(u8),
    Rgb(u8, u8, u8),
}

const RESET: &str = "\x1b[0m";

/// Names accepted by `--color`, in SGR order.
pub const NAMED: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl Tint {
    /// Parse a colour name or `#rrggbb`.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let name = s.trim().to_ascii_lowercase();
        if let Some((_, code)) = NAMED.iter().zip(30u8..).find(|(n, _)| **n == name) {
            return Ok(Self::Basic(code));
        }
        Self::from_hex(&name)
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if !h.is_ascii() {
            return Err(ColorError::InvalidHexDigit);
        }
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// Wrap `text` in this colour + reset sequence.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        format!("{self}{text}{RESET}")
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tint::Basic(code) => write!(f, "\x1b[{code}m"),
            Tint::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}
