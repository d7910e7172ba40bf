//! Pack URI (part name) handling for OPC packages.

use crate::error::{Error, Result};
use std::fmt;

/// URI of the package root.
pub const PACKAGE_URI: &str = "/";

/// URI of the content types stream.
pub const CONTENT_TYPES_URI: &str = "/[Content_Types].xml";

/// A validated OPC pack URI, e.g. `/ppt/slides/slide1.xml`.
///
/// Part names always begin with a forward slash; the corresponding ZIP
/// member name is the same string without it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackURI(String);

impl PackURI {
    /// Create a pack URI, validating the leading slash.
    pub fn new(uri: &str) -> Result<Self> {
        if !uri.starts_with('/') {
            return Err(Error::InvalidPackUri(format!(
                "PackURI must begin with slash, got '{uri}'"
            )));
        }
        Ok(Self(uri.to_string()))
    }

    /// The URI as a string, including the leading slash.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The ZIP member name for this part (URI without the leading slash).
    #[inline]
    pub fn membername(&self) -> &str {
        &self.0[1..]
    }

    /// The directory portion of the URI, without a trailing slash.
    pub fn base_uri(&self) -> &str {
        match self.0.rfind('/') {
            Some(0) | None => "/",
            Some(idx) => &self.0[..idx],
        }
    }

    /// The filename portion of the URI.
    pub fn filename(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// The extension, without the dot, lowercased.
    pub fn ext(&self) -> String {
        match self.filename().rfind('.') {
            Some(idx) => self.filename()[idx + 1..].to_lowercase(),
            None => String::new(),
        }
    }

    /// The pack URI of this part's relationships part.
    ///
    /// `/ppt/slides/slide1.xml` maps to `/ppt/slides/_rels/slide1.xml.rels`;
    /// the package root maps to `/_rels/.rels`.
    pub fn rels_uri(&self) -> PackURI {
        if self.0 == PACKAGE_URI {
            return PackURI("/_rels/.rels".to_string());
        }
        let base = self.base_uri();
        let base = if base == "/" { "" } else { base };
        PackURI(format!("{base}/_rels/{}.rels", self.filename()))
    }
}

impl fmt::Display for PackURI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The package root pseudo-URI.
pub fn package_uri() -> PackURI {
    PackURI(PACKAGE_URI.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(PackURI::new("/ppt/presentation.xml").is_ok());
        assert!(PackURI::new("ppt/presentation.xml").is_err());
        assert!(PackURI::new("").is_err());
    }

    #[test]
    fn test_accessors() {
        let uri = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(uri.membername(), "ppt/slides/slide1.xml");
        assert_eq!(uri.base_uri(), "/ppt/slides");
        assert_eq!(uri.filename(), "slide1.xml");
        assert_eq!(uri.ext(), "xml");
    }

    #[test]
    fn test_rels_uri() {
        let slide = PackURI::new("/ppt/slides/slide1.xml").unwrap();
        assert_eq!(slide.rels_uri().as_str(), "/ppt/slides/_rels/slide1.xml.rels");

        let pres = PackURI::new("/ppt/presentation.xml").unwrap();
        assert_eq!(pres.rels_uri().as_str(), "/ppt/_rels/presentation.xml.rels");

        assert_eq!(package_uri().rels_uri().as_str(), "/_rels/.rels");
    }
}
