//! deckforge - generates the five AVEMO pitch decks as PowerPoint (.pptx)
//! files.
//!
//! The crate is split into a small OOXML writing stack and the deck content
//! on top of it:
//!
//! - [`common`]: measurement units (EMU) and RGB colors
//! - [`opc`]: the Open Packaging Conventions container (ZIP + content types
//!   + relationships)
//! - [`pptx`]: the presentation document model ([`Presentation`],
//!   [`pptx::Slide`], shapes and text boxes) and its XML emission
//! - [`deck`]: the five deck designs and the batch builder
//!
//! # Example
//!
//! ```no_run
//! use deckforge::common::unit::inches;
//! use deckforge::{Presentation, RGBColor, ShapeKind, TextStyle};
//!
//! # fn main() -> deckforge::Result<()> {
//! let mut pres = Presentation::new();
//! let slide = pres.add_slide();
//! slide
//!     .add_shape(
//!         ShapeKind::RoundedRectangle,
//!         inches(0.8),
//!         inches(5.2),
//!         inches(7.0),
//!         inches(1.5),
//!         Some(RGBColor::new(0x1A, 0x1A, 0x1A)),
//!     )?
//!     .line(RGBColor::new(0xFF, 0x79, 0x32), 2.0)
//!     .opacity(70);
//! slide.add_text_box(
//!     inches(0.8),
//!     inches(2.2),
//!     inches(10.0),
//!     inches(1.5),
//!     "Fahrersoftware",
//!     TextStyle::new(96.0, RGBColor::new(0xFF, 0xFF, 0xFF)).bold(),
//! )?;
//! pres.save("deck.pptx")?;
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod deck;
pub mod error;
pub mod opc;
pub mod pptx;

pub use common::RGBColor;
pub use error::{Error, Result};
pub use pptx::{Align, Presentation, ShapeKind, TextStyle};
