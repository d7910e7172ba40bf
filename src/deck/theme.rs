//! Brand theme shared by all deck designs.

use crate::common::RGBColor;

/// Immutable brand palette and font choices.
///
/// Passed explicitly into every design builder; deck builds share no
/// module-level state.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent (#FF7932).
    pub orange: RGBColor,
    /// Near-black brand ink (#1A1A1A).
    pub ink: RGBColor,
    /// Brand white (#FFFFFF).
    pub paper: RGBColor,
    pub gray_dark: RGBColor,
    pub gray_mid: RGBColor,
    pub gray_light: RGBColor,
    pub body_font: &'static str,
    pub display_font: &'static str,
}

impl Theme {
    /// The AVEMO brand theme.
    pub fn avemo() -> Self {
        Self {
            orange: RGBColor::new(0xFF, 0x79, 0x32),
            ink: RGBColor::new(0x1A, 0x1A, 0x1A),
            paper: RGBColor::new(0xFF, 0xFF, 0xFF),
            gray_dark: RGBColor::new(0x33, 0x33, 0x33),
            gray_mid: RGBColor::new(0x66, 0x66, 0x66),
            gray_light: RGBColor::new(0xF5, 0xF5, 0xF5),
            body_font: "Arial",
            display_font: "Arial Black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_palette() {
        let theme = Theme::avemo();
        assert_eq!(theme.orange.to_hex(), "FF7932");
        assert_eq!(theme.ink.to_hex(), "1A1A1A");
        assert_eq!(theme.gray_light.to_hex(), "F5F5F5");
    }
}
