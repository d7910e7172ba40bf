//! Design 4: modern asymmetric editorial. Soft gray canvases, rounded cards
//! with explicit corner radii, split-color closing.

use super::{SLIDE_H, SLIDE_W, body, canvas, shape, text};
use crate::common::RGBColor;
use crate::deck::content;
use crate::deck::theme::Theme;
use crate::error::Result;
use crate::pptx::{Presentation, ShapeKind};

const MIST: RGBColor = RGBColor::new(0xF8, 0xF9, 0xFA);

pub fn build(theme: &Theme) -> Result<Presentation> {
    let mut pres = Presentation::new();

    title_slide(&mut pres, theme)?;
    problem_slide(&mut pres, theme)?;
    solution_slide(&mut pres, theme)?;
    mvp_slide(&mut pres, theme)?;
    closing_slide(&mut pres, theme)?;

    Ok(pres)
}

fn title_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, MIST)?;

    // Rounded orange slab bleeding off top and bottom right
    shape(slide, ShapeKind::RoundedRectangle, 7.0, -1.0, 7.0, 10.0, theme.orange)?
        .corner_radius(0.1);

    text(slide, 1.0, 2.5, 5.0, 1.0, content::PRODUCT, body(theme, 52.0, theme.ink).bold())?;
    text(slide, 1.0, 3.6, 5.0, 0.8, content::SUBTITLE, body(theme, 20.0, theme.gray_mid))?;

    shape(slide, ShapeKind::Rectangle, 1.0, 4.6, 2.0, 0.04, theme.orange)?;

    text(slide, 7.5, 3.0, 5.0, 2.0, content::TAGLINE, body(theme, 28.0, theme.paper).bold())?;

    Ok(())
}

fn problem_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.paper)?;

    shape(slide, ShapeKind::Rectangle, 0.0, 0.0, SLIDE_W, 1.5, theme.orange)?;
    text(
        slide,
        0.8,
        0.5,
        10.0,
        0.6,
        "Aktuelle Herausforderungen",
        body(theme, 32.0, theme.paper).bold(),
    )?;

    let problems = [
        ("Isolierte Standorte", "Keine Vernetzung zwischen den Niederlassungen", 0.8, 1.8),
        ("Manuelle Prozesse", "Abhängigkeit von Excel und Outlook", 4.5, 1.8),
        ("Fehlende Daten", "Keine KPIs für Entscheidungen", 8.2, 1.8),
        ("Hohe Leerlaufzeit", "2,5 Stunden pro Fahrzeug täglich", 2.6, 4.2),
        ("Lange Wartezeiten", "30 Tage durchschnittlich", 6.3, 4.2),
    ];
    for (title, desc, x, y) in problems {
        shape(slide, ShapeKind::RoundedRectangle, x, y, 3.5, 2.0, MIST)?.corner_radius(0.15);
        text(slide, x + 0.2, y + 0.3, 3.1, 0.6, title, body(theme, 18.0, theme.ink).bold())?;
        text(slide, x + 0.2, y + 1.0, 3.1, 0.8, desc, body(theme, 13.0, theme.gray_mid))?;
    }

    Ok(())
}

fn solution_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, MIST)?;

    shape(slide, ShapeKind::RoundedRectangle, 0.8, 0.8, 11.7, 6.0, theme.paper)?
        .corner_radius(0.05);

    text(slide, 1.3, 1.3, 6.0, 0.5, "Die Lösung", body(theme, 14.0, theme.orange).bold())?;
    text(slide, 1.3, 1.9, 10.0, 0.8, content::TAGLINE, body(theme, 36.0, theme.ink).bold())?;

    let solutions = [
        ("Synergien nutzen", "Vernetzung aller Standorte für maximale Effizienz"),
        ("Effizienz steigern", "Optimale Nutzung jedes Fahrzeugs"),
        ("Automatisierung", "Reduzierung manueller Prozesse"),
        ("Kosteneinsparung", "Potenzial von 260.000 € jährlich"),
    ];
    for (index, (title, desc)) in solutions.iter().enumerate() {
        let y = 3.0 + index as f64 * 0.9;
        shape(slide, ShapeKind::Oval, 1.3, y, 0.4, 0.4, theme.orange)?;
        text(slide, 2.0, y, 3.0, 0.4, title, body(theme, 18.0, theme.ink).bold())?;
        text(slide, 5.0, y, 6.0, 0.4, desc, body(theme, 14.0, theme.gray_mid))?;
    }

    Ok(())
}

fn mvp_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.paper)?;

    text(
        slide,
        0.8,
        0.6,
        8.0,
        0.5,
        "Minimum Viable Product",
        body(theme, 14.0, theme.orange).bold(),
    )?;
    text(slide, 0.8, 1.2, 8.0, 0.7, content::MVP_HEADLINE, body(theme, 36.0, theme.ink).bold())?;

    let features = [
        "Planungsalgorithmus",
        "Driver App",
        "Web-Backoffice",
        "Externe Dienstleister",
        "Monitoring",
        "Reporting",
    ];
    // Asymmetric 2-3-1 arrangement
    let positions = [
        (0.8, 2.2),
        (4.5, 2.2),
        (0.8, 4.0),
        (4.5, 4.0),
        (8.2, 4.0),
        (4.5, 5.8),
    ];
    for (index, (feature, (x, y))) in features.iter().zip(positions).enumerate() {
        let accented = index % 2 != 0;
        let pill_fill = if accented { theme.orange } else { MIST };
        shape(slide, ShapeKind::RoundedRectangle, x, y, 3.3, 1.4, pill_fill)?.corner_radius(0.5);

        let text_color = if accented { theme.paper } else { theme.ink };
        text(slide, x + 0.3, y + 0.45, 2.7, 0.6, feature, body(theme, 18.0, text_color).bold())?;
    }

    Ok(())
}

fn closing_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();

    // Split canvas, ink over orange
    shape(slide, ShapeKind::Rectangle, 0.0, 0.0, SLIDE_W, SLIDE_H / 2.0, theme.ink)?;
    shape(slide, ShapeKind::Rectangle, 0.0, SLIDE_H / 2.0, SLIDE_W, SLIDE_H / 2.0, theme.orange)?;

    text(slide, 0.8, 1.2, 10.0, 1.0, content::CLOSING_LEAD, body(theme, 36.0, theme.paper))?;
    text(
        slide,
        0.8,
        2.1,
        10.0,
        1.0,
        content::CLOSING_QUESTION,
        body(theme, 72.0, theme.paper).bold(),
    )?;

    text(
        slide,
        0.8,
        4.5,
        10.0,
        1.0,
        content::CLOSING_BODY_LONG,
        body(theme, 18.0, theme.ink),
    )?;

    Ok(())
}
