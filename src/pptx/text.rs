//! Text box model and DrawingML emission.

use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::error::Result;
use crate::opc::rel::escape_xml;
use std::fmt::Write;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// The `a:pPr/@algn` value; left alignment is the DrawingML default and
    /// emits no attribute.
    fn attr(self) -> Option<&'static str> {
        match self {
            Align::Left => None,
            Align::Center => Some("ctr"),
            Align::Right => Some("r"),
        }
    }
}

/// Character and paragraph styling for a text box.
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub size_pt: f64,
    pub color: RGBColor,
    pub bold: bool,
    /// Explicit font family; `None` inherits the theme's minor font.
    pub font: Option<String>,
    pub align: Align,
}

impl TextStyle {
    /// A left-aligned, regular-weight style in the given size and color.
    pub fn new(size_pt: f64, color: RGBColor) -> Self {
        Self {
            size_pt,
            color,
            bold: false,
            font: None,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn font(mut self, name: &str) -> Self {
        self.font = Some(name.to_string());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn centered(self) -> Self {
        self.align(Align::Center)
    }
}

/// A positioned box containing one styled run of text.
///
/// Text boxes have no fill, no outline, and no opacity; transparency is a
/// shape concern.
#[derive(Debug, Clone)]
pub struct TextBox {
    shape_id: u32,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    text: String,
    style: TextStyle,
}

impl TextBox {
    pub(crate) fn new(
        shape_id: u32,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        text: &str,
        style: TextStyle,
    ) -> Self {
        Self {
            shape_id,
            x,
            y,
            width,
            height,
            text: text.to_string(),
            style,
        }
    }

    /// The box's frame as (x, y, width, height) in EMU.
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y, self.width, self.height)
    }

    /// The text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The run styling.
    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Emit the `p:sp` element for this text box.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp><p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
            self.shape_id, self.shape_id
        )?;
        xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>"#);
        write!(
            xml,
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.x, self.y, self.width, self.height
        )?;
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>"#);

        xml.push_str(r#"<p:txBody><a:bodyPr wrap="square" rtlCol="0"/><a:lstStyle/>"#);
        match self.style.align.attr() {
            Some(algn) => write!(xml, r#"<a:p><a:pPr algn="{algn}"/>"#)?,
            None => xml.push_str("<a:p>"),
        }

        write!(
            xml,
            r#"<a:r><a:rPr lang="de-DE" sz="{}"{} dirty="0">"#,
            pt_to_centipoints(self.style.size_pt),
            if self.style.bold { r#" b="1""# } else { "" }
        )?;
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            self.style.color.to_hex()
        )?;
        if let Some(font) = &self.style.font {
            write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))?;
        }
        write!(xml, "</a:rPr><a:t>{}</a:t></a:r>", escape_xml(&self.text))?;

        xml.push_str("</a:p></p:txBody></p:sp>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text_box: &TextBox) -> String {
        let mut xml = String::new();
        text_box.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_basic_run() {
        let style = TextStyle::new(20.0, RGBColor::new(0xFF, 0xFF, 0xFF));
        let text_box = TextBox::new(3, 0, 0, 914_400, 457_200, "Hallo", style);
        let xml = render(&text_box);

        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 3"/>"#));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"sz="2000""#));
        assert!(xml.contains(r#"<a:srgbClr val="FFFFFF"/>"#));
        assert!(xml.contains("<a:t>Hallo</a:t>"));
        // Regular weight, left aligned, theme font: none of these attributes
        assert!(!xml.contains(r#"b="1""#));
        assert!(!xml.contains("a:pPr"));
        assert!(!xml.contains("a:latin"));
    }

    #[test]
    fn test_styled_run() {
        let style = TextStyle::new(96.0, RGBColor::new(0, 0, 0))
            .bold()
            .font("Arial Black")
            .centered();
        let text_box = TextBox::new(4, 0, 0, 100, 100, "FAHRER", style);
        let xml = render(&text_box);

        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"sz="9600" b="1""#));
        assert!(xml.contains(r#"<a:latin typeface="Arial Black"/>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let style = TextStyle::new(12.0, RGBColor::new(0, 0, 0));
        let text_box = TextBox::new(2, 0, 0, 100, 100, "Q3 & Q4 <2026>", style);
        let xml = render(&text_box);

        assert!(xml.contains("<a:t>Q3 &amp; Q4 &lt;2026&gt;</a:t>"));
    }
}
