//! Slide construction: an ordered stack of shapes and text boxes.

use crate::common::RGBColor;
use crate::error::{Error, Result};
use crate::pptx::shape::{Shape, ShapeKind};
use crate::pptx::text::{TextBox, TextStyle};

/// One element in a slide's z-order.
#[derive(Debug, Clone)]
pub enum Element {
    Shape(Shape),
    Text(TextBox),
}

/// A single slide under construction.
///
/// Elements render in insertion order: later additions draw above earlier
/// ones. There is no removal or reordering; a deck is composed once, bottom
/// to top.
#[derive(Debug, Clone)]
pub struct Slide {
    slide_id: u32,
    elements: Vec<Element>,
}

impl Slide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            elements: Vec::new(),
        }
    }

    /// The slide's ID as used in `p:sldIdLst`.
    #[inline]
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Append a shape at (x, y) with extent (width, height), all in EMU.
    ///
    /// `fill` of `None` leaves the shape unfilled (outline-only once
    /// [`Shape::line`] is set). Non-positive extents are rejected with
    /// [`Error::InvalidGeometry`]; negative offsets are legal, several deck
    /// designs bleed shapes off the canvas.
    pub fn add_shape(
        &mut self,
        kind: ShapeKind,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill: Option<RGBColor>,
    ) -> Result<&mut Shape> {
        Self::check_extent(width, height)?;
        let shape_id = self.next_shape_id();
        self.elements
            .push(Element::Shape(Shape::new(shape_id, kind, x, y, width, height, fill)));
        match self.elements.last_mut() {
            Some(Element::Shape(shape)) => Ok(shape),
            _ => unreachable!("just pushed a shape"),
        }
    }

    /// Append a text box at (x, y) with extent (width, height), all in EMU.
    pub fn add_text_box(
        &mut self,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        text: &str,
        style: TextStyle,
    ) -> Result<&mut TextBox> {
        Self::check_extent(width, height)?;
        let shape_id = self.next_shape_id();
        self.elements
            .push(Element::Text(TextBox::new(shape_id, x, y, width, height, text, style)));
        match self.elements.last_mut() {
            Some(Element::Text(text_box)) => Ok(text_box),
            _ => unreachable!("just pushed a text box"),
        }
    }

    fn check_extent(width: i64, height: i64) -> Result<()> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidGeometry { width, height });
        }
        Ok(())
    }

    /// Element IDs start at 2; ID 1 belongs to the implicit group shape.
    fn next_shape_id(&self) -> u32 {
        (self.elements.len() + 2) as u32
    }

    /// The number of elements on the slide.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// The elements in z-order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Generate the complete slideN.xml for this slide.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.elements.len() * 512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        );
        xml.push_str("<p:cSld><p:spTree>");

        // Required group shape header
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
        );

        for element in &self.elements {
            match element {
                Element::Shape(shape) => shape.to_xml(&mut xml)?,
                Element::Text(text_box) => text_box.to_xml(&mut xml)?,
            }
        }

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> RGBColor {
        RGBColor::new(0xFF, 0xFF, 0xFF)
    }

    #[test]
    fn test_rejects_non_positive_extents() {
        let mut slide = Slide::new(256);

        let err = slide
            .add_shape(ShapeKind::Rectangle, 0, 0, 0, 914_400, Some(white()))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { width: 0, .. }));

        let err = slide
            .add_text_box(0, 0, 914_400, -1, "x", TextStyle::new(12.0, white()))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry { height: -1, .. }));

        // Failed adds leave the slide untouched
        assert_eq!(slide.element_count(), 0);
    }

    #[test]
    fn test_accepts_negative_offsets() {
        let mut slide = Slide::new(256);
        assert!(
            slide
                .add_shape(ShapeKind::Oval, -914_400, -457_200, 914_400, 914_400, Some(white()))
                .is_ok()
        );
    }

    #[test]
    fn test_shape_ids_follow_insertion_order() {
        let mut slide = Slide::new(256);
        slide
            .add_shape(ShapeKind::Rectangle, 0, 0, 100, 100, Some(white()))
            .unwrap();
        slide
            .add_text_box(0, 0, 100, 100, "a", TextStyle::new(12.0, white()))
            .unwrap();
        slide
            .add_shape(ShapeKind::Oval, 0, 0, 100, 100, Some(white()))
            .unwrap();

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 2"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 3"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="4" name="Oval 4"/>"#));
    }

    #[test]
    fn test_z_order_is_insertion_order() {
        let mut slide = Slide::new(256);
        slide
            .add_shape(ShapeKind::Rectangle, 0, 0, 100, 100, Some(white()))
            .unwrap();
        slide
            .add_text_box(0, 0, 100, 100, "above", TextStyle::new(12.0, white()))
            .unwrap();

        let xml = slide.to_xml().unwrap();
        let rect_pos = xml.find("Rectangle 2").unwrap();
        let text_pos = xml.find("TextBox 3").unwrap();
        assert!(rect_pos < text_pos);
    }

    #[test]
    fn test_slide_wrapper_structure() {
        let slide = Slide::new(256);
        let xml = slide.to_xml().unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.contains("<p:cSld><p:spTree>"));
        assert!(xml.contains(r#"<p:cNvPr id="1" name=""/>"#));
        assert!(xml.contains("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
