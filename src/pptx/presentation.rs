//! Presentation assembly and .pptx serialization.

use crate::common::unit::inches;
use crate::error::Result;
use crate::opc::constants::{content_type, relationship_type};
use crate::opc::{OpcPackage, PackURI, PackageWriter, Part};
use crate::pptx::slide::Slide;
use crate::pptx::template;
use std::fmt::Write;
use std::path::Path;

/// A presentation document under construction.
///
/// Slides are appended in order and serialized against a fixed blank
/// master/layout/theme. Serializing the same presentation twice produces
/// byte-identical output.
#[derive(Debug)]
pub struct Presentation {
    slides: Vec<Slide>,
    slide_width: i64,
    slide_height: i64,
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

impl Presentation {
    /// Create an empty 16:9 presentation (13.333in x 7.5in).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inches(13.333),
            slide_height: inches(7.5),
        }
    }

    /// Append a new empty slide and return it for composition.
    pub fn add_slide(&mut self) -> &mut Slide {
        // Slide IDs must be >= 256
        let slide_id = (self.slides.len() + 256) as u32;
        let index = self.slides.len();
        self.slides.push(Slide::new(slide_id));
        &mut self.slides[index]
    }

    /// The number of slides.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// The slides, in order.
    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide width in EMU.
    #[inline]
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Slide height in EMU.
    #[inline]
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the slide size in EMU.
    pub fn set_slide_size(&mut self, width: i64, height: i64) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Serialize to .pptx bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let package = self.build_package()?;
        tracing::debug!(
            slides = self.slides.len(),
            parts = package.part_count(),
            "presentation package assembled"
        );
        PackageWriter::to_bytes(&package)
    }

    /// Serialize and write to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Generate presentation.xml. `slide_rel_ids` are the rIds of the slide
    /// relationships, in slide order.
    fn presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#,
        );

        xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);

        xml.push_str("<p:sldIdLst>");
        for (slide, r_id) in self.slides.iter().zip(slide_rel_ids) {
            write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), r_id)?;
        }
        xml.push_str("</p:sldIdLst>");

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the complete OPC package for this presentation.
    fn build_package(&self) -> Result<OpcPackage> {
        let mut package = OpcPackage::new();

        // Main document part; its slide rIds feed presentation.xml, so
        // relationships come first and the blob after.
        let pres_uri = PackURI::new("/ppt/presentation.xml")?;
        let mut pres_part = Part::new(pres_uri, content_type::PML_PRESENTATION_MAIN, Vec::new());
        // rId1 is the master; slides follow from rId2
        pres_part.relate_to("slideMasters/slideMaster1.xml", relationship_type::SLIDE_MASTER);
        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for index in 0..self.slides.len() {
            let r_id = pres_part.relate_to(
                &format!("slides/slide{}.xml", index + 1),
                relationship_type::SLIDE,
            );
            slide_rel_ids.push(r_id);
        }
        pres_part.relate_to("presProps.xml", relationship_type::PRES_PROPS);
        pres_part.relate_to("viewProps.xml", relationship_type::VIEW_PROPS);
        pres_part.relate_to("tableStyles.xml", relationship_type::TABLE_STYLES);
        pres_part.relate_to("theme/theme1.xml", relationship_type::THEME);
        pres_part.set_blob(self.presentation_xml(&slide_rel_ids)?.into_bytes());
        package.relate_to("ppt/presentation.xml", relationship_type::OFFICE_DOCUMENT);
        package.add_part(pres_part);

        let mut master_part = Part::new(
            PackURI::new("/ppt/slideMasters/slideMaster1.xml")?,
            content_type::PML_SLIDE_MASTER,
            template::SLIDE_MASTER_XML.as_bytes().to_vec(),
        );
        // The master XML references the layout as rId1
        master_part.relate_to("../slideLayouts/slideLayout1.xml", relationship_type::SLIDE_LAYOUT);
        master_part.relate_to("../theme/theme1.xml", relationship_type::THEME);
        package.add_part(master_part);

        let mut layout_part = Part::new(
            PackURI::new("/ppt/slideLayouts/slideLayout1.xml")?,
            content_type::PML_SLIDE_LAYOUT,
            template::SLIDE_LAYOUT_XML.as_bytes().to_vec(),
        );
        layout_part.relate_to("../slideMasters/slideMaster1.xml", relationship_type::SLIDE_MASTER);
        package.add_part(layout_part);

        package.add_part(Part::new(
            PackURI::new("/ppt/theme/theme1.xml")?,
            content_type::OFC_THEME,
            template::THEME_XML.as_bytes().to_vec(),
        ));
        package.add_part(Part::new(
            PackURI::new("/ppt/presProps.xml")?,
            content_type::PML_PRES_PROPS,
            template::PRES_PROPS_XML.as_bytes().to_vec(),
        ));
        package.add_part(Part::new(
            PackURI::new("/ppt/viewProps.xml")?,
            content_type::PML_VIEW_PROPS,
            template::VIEW_PROPS_XML.as_bytes().to_vec(),
        ));
        package.add_part(Part::new(
            PackURI::new("/ppt/tableStyles.xml")?,
            content_type::PML_TABLE_STYLES,
            template::TABLE_STYLES_XML.as_bytes().to_vec(),
        ));

        for (index, slide) in self.slides.iter().enumerate() {
            let uri = PackURI::new(&format!("/ppt/slides/slide{}.xml", index + 1))?;
            let mut slide_part =
                Part::new(uri, content_type::PML_SLIDE, slide.to_xml()?.into_bytes());
            slide_part.relate_to("../slideLayouts/slideLayout1.xml", relationship_type::SLIDE_LAYOUT);
            package.add_part(slide_part);
        }

        package.add_part(Part::new(
            PackURI::new("/docProps/core.xml")?,
            content_type::OPC_CORE_PROPERTIES,
            template::CORE_PROPS_XML.as_bytes().to_vec(),
        ));
        package.add_part(Part::new(
            PackURI::new("/docProps/app.xml")?,
            content_type::OFC_EXTENDED_PROPERTIES,
            template::APP_PROPS_XML.as_bytes().to_vec(),
        ));
        package.relate_to("docProps/core.xml", relationship_type::CORE_PROPERTIES);
        package.relate_to("docProps/app.xml", relationship_type::EXTENDED_PROPERTIES);

        Ok(package)
    }
}
