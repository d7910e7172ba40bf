//! Copy shared by all five deck designs.
//!
//! Per-design wording lives with the design that uses it; only strings that
//! appear across designs belong here.

pub const PRODUCT: &str = "Fahrersoftware";
pub const SUBTITLE: &str = "Die Zukunft der Fahrzeugdisposition";
pub const TAGLINE: &str = "Eine Software für alle Standorte";
pub const MVP_HEADLINE: &str = "Die Kernfunktionen";

pub const CLOSING_LEAD: &str = "Bereit für die";
pub const CLOSING_QUESTION: &str = "Zukunft?";
pub const CLOSING_BODY_LONG: &str =
    "Gemeinsam gestalten wir die digitale Transformation Ihrer Fahrzeugdisposition.";
pub const CLOSING_BODY_SHORT: &str = "Gemeinsam gestalten wir die digitale Transformation.";
pub const CLOSING_BODY_TRANSFORM: &str =
    "Gemeinsam transformieren wir Ihre Fahrzeugdisposition.";
