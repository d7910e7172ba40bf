//! The five deck designs.
//!
//! Each submodule exposes one `build(theme) -> Result<Presentation>` that
//! composes exactly five slides: title, problem, solution, MVP features,
//! closing. Geometry below is written in inches and converted at the call
//! boundary; the shared helpers keep the composition code close to the
//! layout values.

pub mod asymmetric;
pub mod cinematic;
pub mod dashboard;
pub mod editorial;
pub mod minimal;

use crate::common::RGBColor;
use crate::common::unit::inches;
use crate::deck::theme::Theme;
use crate::error::Result;
use crate::pptx::{Shape, ShapeKind, Slide, TextStyle};

/// Canvas width in inches.
pub(crate) const SLIDE_W: f64 = 13.333;

/// Canvas height in inches.
pub(crate) const SLIDE_H: f64 = 7.5;

/// Fill the whole canvas with a background rectangle.
pub(crate) fn canvas(slide: &mut Slide, color: RGBColor) -> Result<()> {
    slide.add_shape(
        ShapeKind::Rectangle,
        0,
        0,
        inches(SLIDE_W),
        inches(SLIDE_H),
        Some(color),
    )?;
    Ok(())
}

/// Add a filled shape with an inch-based frame.
pub(crate) fn shape<'a>(
    slide: &'a mut Slide,
    kind: ShapeKind,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    fill: RGBColor,
) -> Result<&'a mut Shape> {
    slide.add_shape(kind, inches(x), inches(y), inches(width), inches(height), Some(fill))
}

/// Add an unfilled (outline-only) shape with an inch-based frame.
pub(crate) fn unfilled<'a>(
    slide: &'a mut Slide,
    kind: ShapeKind,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<&'a mut Shape> {
    slide.add_shape(kind, inches(x), inches(y), inches(width), inches(height), None)
}

/// Add a text box with an inch-based frame.
pub(crate) fn text(
    slide: &mut Slide,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    content: &str,
    style: TextStyle,
) -> Result<()> {
    slide.add_text_box(inches(x), inches(y), inches(width), inches(height), content, style)?;
    Ok(())
}

/// Body-font text style in the given size and color.
pub(crate) fn body(theme: &Theme, size_pt: f64, color: RGBColor) -> TextStyle {
    TextStyle::new(size_pt, color).font(theme.body_font)
}
