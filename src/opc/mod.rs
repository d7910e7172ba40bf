//! Open Packaging Conventions (OPC) support, scoped to writing .pptx
//! containers: part names, relationships, parts, and the ZIP-backed
//! package serializer.

pub mod constants;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
