use crate::error::{Error, Result};
use std::fmt;

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use deckforge::common::RGBColor;
///
/// let orange = RGBColor::new(0xFF, 0x79, 0x32);
/// let same = RGBColor::from_hex("#FF7932").unwrap();
/// assert_eq!(orange, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string (e.g., "FF7932" or "#FF7932").
    ///
    /// Fails with [`Error::InvalidColor`] on anything other than six hex
    /// digits; this is the entry point for all literal palette data, so a bad
    /// value aborts the deck build instead of producing a wrong color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Convert to hex string (without # prefix), as used by `a:srgbClr/@val`.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let color = RGBColor::from_hex("FF7932").unwrap();
        assert_eq!(color, RGBColor::new(255, 121, 50));

        let with_prefix = RGBColor::from_hex("#1A1A1A").unwrap();
        assert_eq!(with_prefix, RGBColor::new(26, 26, 26));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(RGBColor::from_hex("FF79").is_err());
        assert!(RGBColor::from_hex("GGGGGG").is_err());
        assert!(RGBColor::from_hex("#FF79321").is_err());
        assert!(RGBColor::from_hex("").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RGBColor::new(255, 0, 0).to_hex(), "FF0000");
        assert_eq!(RGBColor::new(13, 13, 13).to_hex(), "0D0D0D");
        assert_eq!(RGBColor::new(255, 121, 50).to_string(), "#FF7932");
    }
}
