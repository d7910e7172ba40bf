//! In-memory OPC package.

use crate::error::{Error, Result};
use crate::opc::packuri::PackURI;
use crate::opc::part::Part;
use crate::opc::rel::Relationships;

/// An OPC package under construction: package-level relationships plus an
/// ordered list of parts.
///
/// Parts keep insertion order so that serializing the same logical package
/// twice produces byte-identical archives.
#[derive(Debug, Default)]
pub struct OpcPackage {
    rels: Relationships,
    parts: Vec<Part>,
}

impl OpcPackage {
    /// Create a new empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part to the package.
    pub fn add_part(&mut self, part: Part) {
        self.parts.push(part);
    }

    /// Relate the package to a part, returning the rId.
    ///
    /// `target_ref` is relative to the package root (no leading slash).
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }

    /// Get the package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Get a part by name.
    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .iter()
            .find(|part| part.partname() == partname)
            .ok_or_else(|| Error::PartNotFound(partname.to_string()))
    }

    /// Check whether the package contains a part with the given name.
    pub fn contains_part(&self, partname: &PackURI) -> bool {
        self.parts.iter().any(|part| part.partname() == partname)
    }

    /// Iterate over all parts in insertion order.
    #[inline]
    pub fn iter_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Get the number of parts in the package.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_lookup() {
        let mut package = OpcPackage::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        package.add_part(Part::new(uri.clone(), "application/xml", b"<x/>".to_vec()));

        assert!(package.contains_part(&uri));
        assert_eq!(package.get_part(&uri).unwrap().blob(), b"<x/>");

        let missing = PackURI::new("/ppt/missing.xml").unwrap();
        assert!(matches!(
            package.get_part(&missing),
            Err(Error::PartNotFound(_))
        ));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut package = OpcPackage::new();
        for name in ["/z.xml", "/a.xml", "/m.xml"] {
            let uri = PackURI::new(name).unwrap();
            package.add_part(Part::new(uri, "application/xml", Vec::new()));
        }

        let names: Vec<&str> = package
            .iter_parts()
            .map(|part| part.partname().as_str())
            .collect();
        assert_eq!(names, ["/z.xml", "/a.xml", "/m.xml"]);
    }
}
