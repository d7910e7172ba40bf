//! Package serializer: turns an [`OpcPackage`] into a .pptx byte stream.

use crate::error::Result;
use crate::opc::constants::content_type;
use crate::opc::package::OpcPackage;
use crate::opc::packuri::{self, PackURI};
use crate::opc::phys_pkg::PhysPkgWriter;
use crate::opc::rel::escape_xml;
use std::collections::BTreeMap;
use std::path::Path;

/// Writes a complete OPC package: content types, package rels, each part
/// and its rels.
pub struct PackageWriter;

impl PackageWriter {
    /// Serialize a package to bytes.
    pub fn to_bytes(package: &OpcPackage) -> Result<Vec<u8>> {
        let mut phys_writer = PhysPkgWriter::new();

        Self::write_content_types(&mut phys_writer, package)?;
        Self::write_package_rels(&mut phys_writer, package)?;
        Self::write_parts(&mut phys_writer, package)?;

        phys_writer.finish()
    }

    /// Serialize a package and write it to a file.
    pub fn write<P: AsRef<Path>>(path: P, package: &OpcPackage) -> Result<()> {
        let bytes = Self::to_bytes(package)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn write_content_types(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let item = ContentTypesItem::from_package(package);
        let uri = PackURI::new(packuri::CONTENT_TYPES_URI)?;
        phys_writer.write(&uri, item.to_xml().as_bytes())
    }

    fn write_package_rels(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        let uri = packuri::package_uri().rels_uri();
        phys_writer.write(&uri, package.rels().to_xml().as_bytes())
    }

    fn write_parts(phys_writer: &mut PhysPkgWriter, package: &OpcPackage) -> Result<()> {
        for part in package.iter_parts() {
            phys_writer.write(part.partname(), part.blob())?;
            if !part.rels().is_empty() {
                phys_writer.write(&part.partname().rels_uri(), part.rels().to_xml().as_bytes())?;
            }
        }
        Ok(())
    }
}

/// Builds the `[Content_Types].xml` stream for a package.
///
/// Extensions covered by a `Default` entry (rels, xml) are not repeated as
/// overrides; every part with a more specific content type gets an
/// `Override`. Both maps are BTree-ordered for deterministic output.
struct ContentTypesItem {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn from_package(package: &OpcPackage) -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert(
            "rels".to_string(),
            content_type::OPC_RELATIONSHIPS.to_string(),
        );
        defaults.insert("xml".to_string(), content_type::XML.to_string());

        let mut overrides = BTreeMap::new();
        for part in package.iter_parts() {
            let ext = part.partname().ext();
            let covered = defaults.get(&ext).map(String::as_str) == Some(part.content_type());
            if !covered {
                overrides.insert(
                    part.partname().as_str().to_string(),
                    part.content_type().to_string(),
                );
            }
        }

        Self {
            defaults,
            overrides,
        }
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push('\n');

        for (extension, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"  <Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(extension),
                escape_xml(content_type),
            ));
            xml.push('\n');
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"  <Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type),
            ));
            xml.push('\n');
        }

        xml.push_str("</Types>");

        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::constants::relationship_type;
    use crate::opc::part::Part;
    use std::io::{Cursor, Read};

    fn sample_package() -> OpcPackage {
        let mut package = OpcPackage::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        let mut part = Part::new(
            uri,
            content_type::PML_PRESENTATION_MAIN,
            b"<presentation/>".to_vec(),
        );
        part.relate_to("slides/slide1.xml", relationship_type::SLIDE);
        package.relate_to("ppt/presentation.xml", relationship_type::OFFICE_DOCUMENT);
        package.add_part(part);
        package
    }

    #[test]
    fn test_content_types() {
        let package = sample_package();
        let xml = ContentTypesItem::from_package(&package).to_xml();

        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Default Extension="xml""#));
        assert!(xml.contains(&format!(
            r#"<Override PartName="/ppt/presentation.xml" ContentType="{}"/>"#,
            content_type::PML_PRESENTATION_MAIN
        )));
    }

    #[test]
    fn test_package_member_inventory() {
        let bytes = PackageWriter::to_bytes(&sample_package()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "[Content_Types].xml",
                "_rels/.rels",
                "ppt/_rels/presentation.xml.rels",
                "ppt/presentation.xml",
            ]
        );

        let mut rels = String::new();
        archive
            .by_name("_rels/.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains(r#"Target="ppt/presentation.xml""#));
    }

    #[test]
    fn test_byte_identical_serialization() {
        let first = PackageWriter::to_bytes(&sample_package()).unwrap();
        let second = PackageWriter::to_bytes(&sample_package()).unwrap();
        assert_eq!(first, second);
    }
}
