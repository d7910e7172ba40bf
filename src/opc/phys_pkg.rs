//! Physical package writer: the ZIP container under an OPC package.

use crate::error::Result;
use crate::opc::packuri::PackURI;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Writes package members into an in-memory ZIP archive.
///
/// Uses fixed default timestamps so repeated serialization of the same
/// package yields byte-identical archives.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a new physical package writer.
    pub fn new() -> Self {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    /// Write a member with the given pack URI and content.
    pub fn write(&mut self, partname: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.start_file(partname.membername(), self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish the archive and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_write_members() {
        let mut writer = PhysPkgWriter::new();
        let uri = PackURI::new("/ppt/presentation.xml").unwrap();
        writer.write(&uri, b"<presentation/>").unwrap();
        let bytes = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 1);
        let mut member = archive.by_name("ppt/presentation.xml").unwrap();
        let mut content = String::new();
        member.read_to_string(&mut content).unwrap();
        assert_eq!(content, "<presentation/>");
    }

    #[test]
    fn test_deterministic_output() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            let uri = PackURI::new("/a.xml").unwrap();
            writer.write(&uri, b"<a/>").unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
