//! Presentation document model and .pptx serialization.

pub mod presentation;
pub mod shape;
pub mod slide;
pub mod template;
pub mod text;

pub use presentation::Presentation;
pub use shape::{Outline, Shape, ShapeKind};
pub use slide::{Element, Slide};
pub use text::{Align, TextBox, TextStyle};
