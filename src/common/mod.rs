//! Shared value types: measurement units and colors.

pub mod color;
pub mod unit;

pub use color::RGBColor;
