//! Design 5: data-driven dashboard style. Dark navy tech palette, bordered
//! metric cards, neon orange accents.

use super::{SLIDE_H, SLIDE_W, body, canvas, shape, text, unfilled};
use crate::common::RGBColor;
use crate::deck::content;
use crate::deck::theme::Theme;
use crate::error::Result;
use crate::pptx::{Presentation, ShapeKind, Slide};

const NAVY: RGBColor = RGBColor::new(0x0A, 0x0E, 0x17);
const PANEL: RGBColor = RGBColor::new(0x11, 0x18, 0x27);
const GRID: RGBColor = RGBColor::new(0x1A, 0x1F, 0x2E);
const MUTED: RGBColor = RGBColor::new(0x8A, 0x9A, 0xB0);
const BORDER: RGBColor = RGBColor::new(0x33, 0x44, 0x66);
const AMBER: RGBColor = RGBColor::new(0xFF, 0xC1, 0x07);

pub fn build(theme: &Theme) -> Result<Presentation> {
    let mut pres = Presentation::new();

    title_slide(&mut pres, theme)?;
    problem_slide(&mut pres, theme)?;
    solution_slide(&mut pres, theme)?;
    mvp_slide(&mut pres, theme)?;
    closing_slide(&mut pres, theme)?;

    Ok(pres)
}

fn header_bar(slide: &mut Slide, theme: &Theme, label: &str) -> Result<()> {
    shape(slide, ShapeKind::Rectangle, 0.0, 0.0, SLIDE_W, 1.2, PANEL)?;
    text(
        slide,
        0.8,
        0.35,
        10.0,
        0.6,
        label,
        body(theme, 18.0, theme.orange).bold(),
    )?;
    Ok(())
}

fn title_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NAVY)?;

    // Faint vertical grid lines
    for index in 0..15 {
        let x = index as f64 * 0.9;
        shape(slide, ShapeKind::Rectangle, x, 0.0, 0.01, SLIDE_H, GRID)?.opacity(50);
    }

    shape(slide, ShapeKind::RoundedRectangle, 1.0, 1.5, 11.0, 4.5, PANEL)?
        .line(theme.orange, 2.0)
        .opacity(80);
    shape(slide, ShapeKind::Rectangle, 1.0, 1.5, 0.2, 4.5, theme.orange)?;

    text(slide, 1.5, 1.8, 10.0, 1.2, content::PRODUCT, body(theme, 64.0, theme.paper).bold())?;
    text(slide, 1.5, 3.2, 10.0, 0.6, content::SUBTITLE, body(theme, 24.0, MUTED))?;
    text(slide, 1.5, 4.2, 10.0, 0.6, content::TAGLINE, body(theme, 20.0, theme.orange).bold())?;

    let stats = [
        ("260K€", "Einsparung"),
        ("30", "Tage gespart"),
        ("2.5h", "Weniger Leerlauf"),
    ];
    for (index, (value, label)) in stats.iter().enumerate() {
        let x = 1.5 + index as f64 * 3.5;
        text(slide, x, 6.2, 3.0, 0.6, value, body(theme, 32.0, theme.orange).bold())?;
        text(slide, x, 6.8, 3.0, 0.4, label, body(theme, 12.0, MUTED))?;
    }

    Ok(())
}

fn problem_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NAVY)?;
    header_bar(slide, theme, "SYSTEM STATUS: PROBLEME ERKANNT")?;

    let problems = [
        ("Standorte", "5", "Isoliert", true),
        ("Prozesse", "100%", "Manuell", false),
        ("Leerlauf", "2.5h", "Pro Tag", false),
        ("Wartezeit", "30", "Tage", true),
    ];
    for (index, (title, value, unit, critical)) in problems.iter().enumerate() {
        let x = 0.8 + (index % 2) as f64 * 6.0;
        let y = 1.6 + (index / 2) as f64 * 2.8;

        let border = if *critical { theme.orange } else { BORDER };
        shape(slide, ShapeKind::RoundedRectangle, x, y, 5.5, 2.4, PANEL)?.line(border, 1.5);

        text(slide, x + 0.3, y + 0.2, 3.0, 0.4, title, body(theme, 14.0, MUTED))?;
        text(slide, x + 0.3, y + 0.7, 3.0, 0.8, value, body(theme, 48.0, theme.paper).bold())?;
        text(slide, x + 0.3, y + 1.5, 3.0, 0.4, unit, body(theme, 14.0, MUTED))?;

        let status_color = if *critical { theme.orange } else { AMBER };
        shape(slide, ShapeKind::Oval, x + 4.5, y + 0.3, 0.5, 0.5, status_color)?;
        let status = if *critical { "CRITICAL" } else { "WARNING" };
        text(slide, x + 4.2, y + 0.9, 1.0, 0.4, status, body(theme, 10.0, status_color).bold())?;
    }

    Ok(())
}

fn solution_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NAVY)?;
    header_bar(slide, theme, "SYSTEM UPGRADE: LÖSUNG BEREIT")?;

    shape(slide, ShapeKind::RoundedRectangle, 0.8, 1.6, 7.0, 5.4, PANEL)?.line(theme.orange, 2.0);
    text(slide, 1.1, 1.9, 6.0, 0.8, content::TAGLINE, body(theme, 28.0, theme.paper).bold())?;

    let benefits = [
        ("Synergien", "Vernetzung aller Standorte"),
        ("Effizienz", "Optimale Nutzung"),
        ("Automatisierung", "Weniger manuelle Arbeit"),
        ("Einsparung", "260.000 € jährlich"),
    ];
    for (index, (title, desc)) in benefits.iter().enumerate() {
        let y = 3.0 + index as f64 * 0.9;
        shape(slide, ShapeKind::Oval, 1.1, y + 0.05, 0.3, 0.3, theme.orange)?;
        text(slide, 1.6, y, 2.0, 0.4, title, body(theme, 16.0, theme.orange).bold())?;
        text(slide, 3.2, y, 4.0, 0.4, desc, body(theme, 14.0, MUTED))?;
    }

    shape(slide, ShapeKind::RoundedRectangle, 8.0, 1.6, 4.5, 5.4, PANEL)?;
    text(
        slide,
        8.3,
        1.9,
        4.0,
        0.5,
        "PROJEKTIERTE METRIKEN",
        body(theme, 12.0, theme.orange).bold(),
    )?;

    let metrics = [
        ("ROI", "< 12 Monate"),
        ("Effizienz", "+ 40%"),
        ("Transparenz", "100%"),
        ("Standorte", "Verbindung"),
    ];
    for (index, (label, value)) in metrics.iter().enumerate() {
        let y = 2.6 + index as f64 * 1.1;
        text(slide, 8.3, y, 2.0, 0.4, label, body(theme, 14.0, MUTED))?;
        text(slide, 8.3, y + 0.4, 4.0, 0.5, value, body(theme, 24.0, theme.paper).bold())?;
    }

    Ok(())
}

fn mvp_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NAVY)?;
    header_bar(slide, theme, "MODULE: MINIMUM VIABLE PRODUCT")?;

    let features = [
        ("ALGORITHM", "Planungs-Engine"),
        ("MOBILE", "Driver App"),
        ("WEB", "Backoffice"),
        ("INTEGRATION", "Externe APIs"),
        ("MONITOR", "Live-Dashboard"),
        ("ANALYTICS", "Reporting"),
    ];
    for (index, (code, name)) in features.iter().enumerate() {
        let x = 0.8 + (index % 3) as f64 * 4.1;
        let y = 1.6 + (index / 3) as f64 * 2.8;

        shape(slide, ShapeKind::RoundedRectangle, x, y, 3.8, 2.4, PANEL)?.line(BORDER, 1.0);

        text(slide, x + 0.2, y + 0.2, 3.4, 0.35, code, body(theme, 11.0, theme.orange).bold())?;
        text(slide, x + 0.2, y + 0.8, 3.4, 0.8, name, body(theme, 22.0, theme.paper).bold())?;
        text(
            slide,
            x + 3.0,
            y + 1.9,
            0.6,
            0.4,
            &format!("M0{}", index + 1),
            body(theme, 10.0, MUTED),
        )?;
    }

    Ok(())
}

fn closing_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NAVY)?;

    shape(slide, ShapeKind::RoundedRectangle, 2.0, 1.5, 9.3, 4.5, PANEL)?.line(theme.orange, 3.0);

    // Concentric outline-only echoes of the card border
    for offset in [0.02, 0.04] {
        unfilled(
            slide,
            ShapeKind::RoundedRectangle,
            2.0 - offset,
            1.5 - offset,
            9.3 + offset * 2.0,
            4.5 + offset * 2.0,
        )?
        .line(theme.orange, 1.0);
    }

    text(slide, 2.5, 2.2, 8.0, 1.0, "SYSTEM READY", body(theme, 18.0, theme.orange).bold())?;
    text(
        slide,
        2.5,
        3.0,
        8.0,
        1.0,
        "Bereit für die Zukunft?",
        body(theme, 44.0, theme.paper).bold(),
    )?;
    text(
        slide,
        2.5,
        4.2,
        8.0,
        0.8,
        content::CLOSING_BODY_TRANSFORM,
        body(theme, 16.0, MUTED),
    )?;

    Ok(())
}
