//! The five AVEMO deck designs and the batch builder.

pub mod content;
pub mod designs;
pub mod theme;

pub use theme::Theme;

use crate::error::Result;
use crate::pptx::Presentation;
use std::path::{Path, PathBuf};

/// Outcome of building one deck artifact.
#[derive(Debug)]
pub struct DeckReport {
    /// Output file name, e.g. "design-1-cinematic-dark.pptx".
    pub file_name: &'static str,
    /// Path written on success, or the error that stopped this deck.
    pub result: Result<PathBuf>,
}

type DeckBuilder = fn(&Theme) -> Result<Presentation>;

/// The five designs, in order, with their output file names.
pub fn catalog() -> [(&'static str, DeckBuilder); 5] {
    [
        ("design-1-cinematic-dark.pptx", designs::cinematic::build as DeckBuilder),
        ("design-2-minimal-glass.pptx", designs::minimal::build),
        ("design-3-bold-editorial.pptx", designs::editorial::build),
        ("design-4-asymmetric-modern.pptx", designs::asymmetric::build),
        ("design-5-dashboard-tech.pptx", designs::dashboard::build),
    ]
}

/// Build all five decks into `dir`.
///
/// Each deck is built and written independently: one deck's failure does not
/// abort the others. The returned reports are in catalog order, one per
/// artifact. Fails outright only if the output directory cannot be created.
pub fn build_all(dir: &Path) -> Result<Vec<DeckReport>> {
    std::fs::create_dir_all(dir)?;

    let theme = Theme::avemo();
    let mut reports = Vec::with_capacity(catalog().len());
    for (file_name, builder) in catalog() {
        let path = dir.join(file_name);
        let result = builder(&theme).and_then(|pres| {
            pres.save(&path)?;
            Ok(path)
        });
        match &result {
            Ok(path) => tracing::info!(artifact = file_name, path = %path.display(), "deck written"),
            Err(err) => tracing::error!(artifact = file_name, error = %err, "deck build failed"),
        }
        reports.push(DeckReport { file_name, result });
    }

    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_design_builds_five_slides() {
        let theme = Theme::avemo();
        for (file_name, builder) in catalog() {
            let pres = builder(&theme).unwrap();
            assert_eq!(pres.slide_count(), 5, "wrong slide count for {file_name}");
            for slide in pres.slides() {
                assert!(slide.element_count() > 0);
            }
        }
    }

    #[test]
    fn test_catalog_file_names() {
        let names: Vec<&str> = catalog().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "design-1-cinematic-dark.pptx",
                "design-2-minimal-glass.pptx",
                "design-3-bold-editorial.pptx",
                "design-4-asymmetric-modern.pptx",
                "design-5-dashboard-tech.pptx",
            ]
        );
    }
}
