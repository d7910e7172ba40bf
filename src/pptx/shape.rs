//! Shape model and DrawingML emission.

use crate::common::RGBColor;
use crate::common::unit::{degrees_to_rot, pt};
use crate::error::Result;
use std::fmt::Write;

/// Geometric primitive kinds a slide can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Oval,
}

impl ShapeKind {
    /// The `a:prstGeom/@prst` value.
    fn preset(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rect",
            ShapeKind::RoundedRectangle => "roundRect",
            ShapeKind::Oval => "ellipse",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded Rectangle",
            ShapeKind::Oval => "Oval",
        }
    }
}

/// Outline styling for a shape.
#[derive(Debug, Clone, Copy)]
pub struct Outline {
    pub color: RGBColor,
    pub width_pt: f64,
}

/// A positioned, styled drawing primitive.
///
/// Position and extent are EMU. Styling setters return `&mut Self` so call
/// sites can chain them after [`Slide::add_shape`](crate::pptx::Slide::add_shape).
#[derive(Debug, Clone)]
pub struct Shape {
    shape_id: u32,
    kind: ShapeKind,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    fill: Option<RGBColor>,
    /// Fill opacity percent, 0 (invisible) to 100 (opaque). Meaningful only
    /// while a solid fill is present.
    fill_opacity: Option<u8>,
    outline: Option<Outline>,
    rotation_deg: f64,
    corner_adjust: Option<f64>,
}

impl Shape {
    pub(crate) fn new(
        shape_id: u32,
        kind: ShapeKind,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: Option<RGBColor>,
    ) -> Self {
        Self {
            shape_id,
            kind,
            x,
            y,
            width,
            height,
            fill,
            fill_opacity: None,
            outline: None,
            rotation_deg: 0.0,
            corner_adjust: None,
        }
    }

    /// Set the outline color and width in points.
    pub fn line(&mut self, color: RGBColor, width_pt: f64) -> &mut Self {
        self.outline = Some(Outline { color, width_pt });
        self
    }

    /// Rotate the shape clockwise by the given number of degrees.
    pub fn rotation(&mut self, degrees: f64) -> &mut Self {
        self.rotation_deg = degrees;
        self
    }

    /// Set the corner radius adjustment of a rounded rectangle
    /// (0.0 = square, 0.5 = pill). Ignored for other shape kinds.
    pub fn corner_radius(&mut self, adjust: f64) -> &mut Self {
        self.corner_adjust = Some(adjust);
        self
    }

    /// Set the fill opacity in percent. Values above 100 clamp to 100.
    ///
    /// The last call wins; repeated calls overwrite the previous value. On a
    /// shape without a solid fill this is a no-op and the shape renders fully
    /// opaque.
    pub fn opacity(&mut self, percent: u8) -> &mut Self {
        if self.fill.is_some() {
            self.fill_opacity = Some(percent.min(100));
        } else {
            tracing::debug!(shape_id = self.shape_id, "opacity ignored: shape has no solid fill");
        }
        self
    }

    /// The shape's frame as (x, y, width, height) in EMU.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// Effective fill opacity in percent.
    pub fn fill_opacity(&self) -> u8 {
        self.fill_opacity.unwrap_or(100)
    }

    /// The shape's fill color, if it has a solid fill.
    pub fn fill(&self) -> Option<RGBColor> {
        self.fill
    }

    /// Emit the `p:sp` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp><p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{} {}"/>"#,
            self.shape_id,
            self.kind.display_name(),
            self.shape_id
        )?;
        xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>");

        if self.rotation_deg != 0.0 {
            write!(xml, r#"<a:xfrm rot="{}">"#, degrees_to_rot(self.rotation_deg))?;
        } else {
            xml.push_str("<a:xfrm>");
        }
        write!(
            xml,
            r#"<a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/>"#,
            self.x, self.y, self.width, self.height
        )?;
        xml.push_str("</a:xfrm>");

        match (self.kind, self.corner_adjust) {
            (ShapeKind::RoundedRectangle, Some(adjust)) => {
                // adjust is a fraction of the shorter side, scaled to 100000ths
                write!(
                    xml,
                    r#"<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val {}"/></a:avLst></a:prstGeom>"#,
                    (adjust * 100_000.0).round() as i64
                )?;
            },
            _ => {
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    self.kind.preset()
                )?;
            },
        }

        match self.fill {
            Some(color) => {
                xml.push_str("<a:solidFill>");
                match self.fill_opacity {
                    Some(percent) if percent < 100 => {
                        write!(
                            xml,
                            r#"<a:srgbClr val="{}"><a:alpha val="{}"/></a:srgbClr>"#,
                            color.to_hex(),
                            u32::from(percent) * 1000
                        )?;
                    },
                    _ => write!(xml, r#"<a:srgbClr val="{}"/>"#, color.to_hex())?,
                }
                xml.push_str("</a:solidFill>");
            },
            None => xml.push_str("<a:noFill/>"),
        }

        match self.outline {
            Some(outline) => {
                write!(
                    xml,
                    r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                    pt(outline.width_pt),
                    outline.color.to_hex()
                )?;
            },
            None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
        }

        xml.push_str("</p:spPr></p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &Shape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    fn orange() -> RGBColor {
        RGBColor::new(0xFF, 0x79, 0x32)
    }

    #[test]
    fn test_plain_rectangle() {
        let shape = Shape::new(2, ShapeKind::Rectangle, 0, 0, 914_400, 457_200, Some(orange()));
        let xml = render(&shape);

        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 2"/>"#));
        assert!(xml.contains(r#"<a:off x="0" y="0"/><a:ext cx="914400" cy="457200"/>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="FF7932"/></a:solidFill>"#));
        assert!(!xml.contains("a:alpha"));
        // No outline set: explicit noFill line
        assert!(xml.contains("<a:ln><a:noFill/></a:ln>"));
    }

    #[test]
    fn test_opacity_emits_single_alpha() {
        let mut shape = Shape::new(2, ShapeKind::Oval, 0, 0, 100, 100, Some(orange()));
        shape.opacity(15);
        let xml = render(&shape);

        assert!(xml.contains(r#"<a:srgbClr val="FF7932"><a:alpha val="15000"/></a:srgbClr>"#));
        assert_eq!(xml.matches("<a:alpha").count(), 1);
    }

    #[test]
    fn test_opacity_overwrites() {
        let mut shape = Shape::new(2, ShapeKind::Rectangle, 0, 0, 100, 100, Some(orange()));
        shape.opacity(70);
        shape.opacity(40);
        assert_eq!(shape.fill_opacity(), 40);

        let xml = render(&shape);
        assert!(xml.contains(r#"<a:alpha val="40000"/>"#));
        assert!(!xml.contains("70000"));
    }

    #[test]
    fn test_opacity_clamps() {
        let mut shape = Shape::new(2, ShapeKind::Rectangle, 0, 0, 100, 100, Some(orange()));
        shape.opacity(250);
        assert_eq!(shape.fill_opacity(), 100);
        assert!(!render(&shape).contains("a:alpha"));
    }

    #[test]
    fn test_opacity_noop_without_fill() {
        let mut shape = Shape::new(2, ShapeKind::Rectangle, 0, 0, 100, 100, None);
        shape.opacity(30);
        assert_eq!(shape.fill_opacity(), 100);

        let xml = render(&shape);
        assert!(xml.contains("<a:noFill/>"));
        assert!(!xml.contains("a:alpha"));
    }

    #[test]
    fn test_rotation() {
        let mut shape = Shape::new(2, ShapeKind::Rectangle, -914_400, 0, 100, 100, Some(orange()));
        shape.rotation(-15.0);
        let xml = render(&shape);

        assert!(xml.contains(r#"<a:xfrm rot="-900000">"#));
        // negative offsets are legal (off-canvas placement)
        assert!(xml.contains(r#"<a:off x="-914400" y="0"/>"#));
    }

    #[test]
    fn test_corner_radius() {
        let mut shape =
            Shape::new(2, ShapeKind::RoundedRectangle, 0, 0, 100, 100, Some(orange()));
        shape.corner_radius(0.15);
        let xml = render(&shape);

        assert!(xml.contains(
            r#"<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val 15000"/></a:avLst></a:prstGeom>"#
        ));
    }

    #[test]
    fn test_outline_only_shape() {
        let mut shape = Shape::new(2, ShapeKind::Rectangle, 0, 0, 100, 100, None);
        shape.line(orange(), 2.0);
        let xml = render(&shape);

        assert!(xml.contains("<a:noFill/>"));
        assert!(xml.contains(
            r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="FF7932"/></a:solidFill></a:ln>"#
        ));
    }
}
