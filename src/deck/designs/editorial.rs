//! Design 3: bold typographic editorial. High-contrast black/white/orange
//! blocks, massive type as the design element, almost no transparency.

use super::{SLIDE_H, body, canvas, shape, text};
use crate::common::RGBColor;
use crate::deck::content;
use crate::deck::theme::Theme;
use crate::error::Result;
use crate::pptx::{Presentation, ShapeKind};

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
    canvas(slide, theme.ink)?;

    // Headline runs off the left edge
    text(slide, -0.2, 1.5, 14.0, 2.0, "FAHRER", body(theme, 140.0, theme.paper).bold())?;

    shape(slide, ShapeKind::Rectangle, 5.5, 3.3, 8.0, 1.8, theme.orange)?;
    text(slide, 5.7, 3.4, 7.0, 1.6, "SOFTWARE", body(theme, 100.0, theme.ink).bold())?;

    text(slide, 0.8, 5.8, 8.0, 0.6, content::SUBTITLE, body(theme, 24.0, theme.paper))?;

    Ok(())
}

fn problem_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();

    // Hard vertical split, orange against white
    shape(slide, ShapeKind::Rectangle, 0.0, 0.0, 4.0, SLIDE_H, theme.orange)?;
    shape(slide, ShapeKind::Rectangle, 4.0, 0.0, 9.333, SLIDE_H, theme.paper)?;

    text(slide, 0.5, 2.5, 3.0, 2.0, "01", body(theme, 120.0, theme.ink).bold())?;
    text(slide, 0.8, 5.0, 3.0, 1.0, "PROBLEM", body(theme, 18.0, theme.ink).bold())?;

    text(
        slide,
        4.5,
        0.8,
        8.0,
        0.6,
        "Aktuelle Herausforderungen",
        body(theme, 32.0, theme.ink).bold(),
    )?;

    let problems = [
        "Isolierte Standorte",
        "Manuelle Prozesse",
        "Fehlende KPIs",
        "2,5h Leerlauf",
        "30 Tage Wartezeit",
    ];
    for (index, problem) in problems.iter().enumerate() {
        let y = 1.8 + index as f64;
        shape(slide, ShapeKind::Rectangle, 4.5, y + 0.15, 0.4, 0.04, theme.ink)?;
        text(slide, 5.1, y, 7.0, 0.5, problem, body(theme, 22.0, theme.ink).bold())?;
    }

    Ok(())
}

fn solution_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.ink)?;

    shape(slide, ShapeKind::Rectangle, 2.0, 1.5, 9.0, 4.5, theme.paper)?;

    text(slide, 2.5, 1.8, 8.0, 0.5, "DIE LÖSUNG", body(theme, 14.0, theme.orange).bold())?;
    text(slide, 2.5, 2.4, 8.0, 1.0, content::TAGLINE, body(theme, 36.0, theme.ink).bold())?;

    let solutions = [
        ("Synergien", "Vernetzung aller Standorte"),
        ("Effizienz", "Optimierte Fahrzeugnutzung"),
        ("Automatisierung", "Reduzierung manueller Arbeit"),
        ("Kosten", "260.000 € Einsparung"),
    ];
    for (index, (title, desc)) in solutions.iter().enumerate() {
        let y = 3.6 + index as f64 * 0.6;
        text(slide, 2.5, y, 3.0, 0.4, title, body(theme, 16.0, theme.orange).bold())?;
        text(slide, 5.0, y, 5.0, 0.4, desc, body(theme, 14.0, theme.gray_mid))?;
    }

    Ok(())
}

fn mvp_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.paper)?;

    // Giant watermark behind the grid
    text(
        slide,
        -1.0,
        5.5,
        20.0,
        2.0,
        "MVP",
        body(theme, 200.0, RGBColor::new(0xF0, 0xF0, 0xF0)).bold(),
    )?;

    text(
        slide,
        0.8,
        0.6,
        6.0,
        0.5,
        "MINIMUM VIABLE PRODUCT",
        body(theme, 14.0, theme.orange).bold(),
    )?;

    let features = [
        ("Planungs- algorithmus", "Optimierte Tourenplanung"),
        ("Driver App", "Intuitive Bedienung"),
        ("Web- Backoffice", "Moderne Oberfläche"),
        ("Monitoring", "Echtzeit-Übersicht"),
        ("Reporting", "Automatisierte Reports"),
        ("Integration", "Externe Dienstleister"),
    ];
    for (index, (title, desc)) in features.iter().enumerate() {
        let x = 0.8 + (index % 3) as f64 * 4.1;
        let y = 1.5 + (index / 3) as f64 * 2.8;

        text(
            slide,
            x,
            y,
            1.0,
            0.8,
            &format!("0{}", index + 1),
            body(theme, 48.0, theme.orange).bold(),
        )?;
        text(slide, x, y + 0.8, 3.8, 0.6, title, body(theme, 20.0, theme.ink).bold())?;
        text(slide, x, y + 1.3, 3.8, 0.5, desc, body(theme, 13.0, theme.gray_mid))?;
    }

    Ok(())
}

fn closing_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.ink)?;

    // Steep orange diagonal through the right half
    shape(slide, ShapeKind::Rectangle, 6.0, -2.0, 4.0, 12.0, theme.orange)?.rotation(-25.0);

    text(slide, 0.8, 2.5, 8.0, 1.0, "Bereit für", body(theme, 36.0, theme.paper))?;
    text(slide, 0.8, 3.3, 8.0, 1.2, "die Zukunft?", body(theme, 60.0, theme.orange).bold())?;
    text(
        slide,
        0.8,
        4.8,
        7.0,
        1.0,
        content::CLOSING_BODY_TRANSFORM,
        body(theme, 16.0, theme.gray_mid),
    )?;

    Ok(())
}
