//! Package parts.

use crate::opc::packuri::PackURI;
use crate::opc::rel::Relationships;

/// A single part in an OPC package: part name, content type, content blob,
/// and the part's own relationships.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    /// Create a new part.
    pub fn new(partname: PackURI, content_type: &str, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.to_string(),
            blob,
            rels: Relationships::new(),
        }
    }

    /// Get the part name.
    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    /// Get the content type.
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the content blob.
    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    /// Replace the content blob.
    ///
    /// Used when a part's relationships must be established before its XML
    /// (which embeds the rIds) can be generated.
    pub fn set_blob(&mut self, blob: Vec<u8>) {
        self.blob = blob;
    }

    /// Relate this part to a target, returning the rId.
    ///
    /// `target_ref` is relative to this part's base URI.
    pub fn relate_to(&mut self, target_ref: &str, reltype: &str) -> String {
        self.rels.get_or_add(reltype, target_ref)
    }

    /// Get this part's relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relate_to() {
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        let mut part = Part::new(uri, "application/xml", Vec::new());

        let r_id = part.relate_to("slides/slide1.xml", "http://reltype/slide");
        assert_eq!(r_id, "rId1");
        assert_eq!(part.rels().len(), 1);

        // Relating again to the same target is idempotent
        let same = part.relate_to("slides/slide1.xml", "http://reltype/slide");
        assert_eq!(same, "rId1");
        assert_eq!(part.rels().len(), 1);
    }
}
