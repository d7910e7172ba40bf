//! Design 1: cinematic dark with orange glow. Deep black canvases, large
//! typography, glassmorphism cards over a glow oval.

use super::{SLIDE_H, SLIDE_W, body, canvas, shape, text};
use crate::common::RGBColor;
use crate::deck::content;
use crate::deck::theme::Theme;
use crate::error::Result;
use crate::pptx::{Presentation, ShapeKind, TextStyle};

const NIGHT: RGBColor = RGBColor::new(0x0D, 0x0D, 0x0D);
const PANEL: RGBColor = RGBColor::new(0x14, 0x14, 0x14);
const CARD: RGBColor = RGBColor::new(0x22, 0x22, 0x22);

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
    canvas(slide, NIGHT)?;

    // Orange bar across the top edge
    shape(slide, ShapeKind::Rectangle, 0.0, 0.0, SLIDE_W, 0.15, theme.orange)?;

    // Glow oval behind the title, bleeding off the right edge
    shape(slide, ShapeKind::Oval, 8.0, 1.0, 6.0, 6.0, theme.orange)?.opacity(15);

    text(
        slide,
        0.8,
        2.2,
        10.0,
        1.5,
        content::PRODUCT,
        TextStyle::new(96.0, theme.paper).bold().font(theme.display_font),
    )?;
    text(
        slide,
        0.8,
        4.0,
        8.0,
        0.8,
        content::SUBTITLE,
        body(theme, 32.0, theme.orange).bold(),
    )?;

    // Glass card
    shape(slide, ShapeKind::RoundedRectangle, 0.8, 5.2, 7.0, 1.5, theme.ink)?
        .line(theme.orange, 2.0)
        .opacity(70);
    text(slide, 1.0, 5.5, 6.6, 1.0, content::TAGLINE, body(theme, 20.0, theme.paper))?;

    Ok(())
}

fn problem_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NIGHT)?;

    shape(slide, ShapeKind::Rectangle, 0.0, 0.0, 5.0, SLIDE_H, PANEL)?;

    text(slide, 0.5, 0.8, 4.0, 0.6, "DAS PROBLEM", body(theme, 14.0, theme.orange).bold())?;
    text(
        slide,
        0.5,
        1.5,
        4.0,
        1.0,
        "Aktuelle Herausforderungen",
        body(theme, 36.0, theme.paper).bold(),
    )?;

    let problems = [
        ("Isolierte Standorte", "Keine Vernetzung zwischen den Niederlassungen"),
        ("Manuelle Prozesse", "Excel, Outlook & Kalender führen zu Chaos"),
        ("Fehlende Daten", "Keine KPIs, keine Optimierung möglich"),
        ("Hohe Leerlaufzeit", "2,5 Stunden täglich pro Fahrzeug"),
    ];
    for (index, (title, desc)) in problems.iter().enumerate() {
        let y = 3.0 + index as f64;
        shape(slide, ShapeKind::RoundedRectangle, 0.5, y, 4.0, 0.85, CARD)?
            .line(theme.orange, 1.0)
            .opacity(60);
        text(slide, 0.7, y + 0.15, 3.6, 0.3, title, body(theme, 16.0, theme.paper).bold())?;
        text(
            slide,
            0.7,
            y + 0.45,
            3.6,
            0.3,
            desc,
            body(theme, 11.0, RGBColor::new(0xAA, 0xAA, 0xAA)),
        )?;
    }

    text(
        slide,
        5.5,
        3.0,
        7.0,
        2.0,
        "30 Tage",
        body(theme, 120.0, theme.orange).bold().centered(),
    )?;
    text(
        slide,
        5.5,
        5.0,
        7.0,
        0.5,
        "durchschnittliche Wartezeit auf Fahrzeuge",
        body(theme, 20.0, theme.paper).centered(),
    )?;

    Ok(())
}

fn solution_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NIGHT)?;

    // Rotated orange band sweeping across the lower half
    shape(slide, ShapeKind::Rectangle, -2.0, 5.0, 20.0, 4.0, theme.orange)?
        .rotation(-15.0)
        .opacity(20);

    text(slide, 0.8, 0.8, 5.0, 0.6, "DIE LÖSUNG", body(theme, 14.0, theme.orange).bold())?;
    text(
        slide,
        0.8,
        1.5,
        10.0,
        1.0,
        content::TAGLINE,
        body(theme, 44.0, theme.paper).bold(),
    )?;

    let benefits = [
        ("Synergien nutzen", "Vernetzung aller Standorte"),
        ("Effizienz steigern", "Optimierte Fahrzeugnutzung"),
        ("Automatisierung", "Weniger manuelle Arbeit"),
        ("Kosteneinsparung", "Potenzial von 260.000 € pro Jahr"),
    ];
    for (index, (title, desc)) in benefits.iter().enumerate() {
        let x = 0.8 + (index % 2) as f64 * 6.0;
        let y = 3.0 + (index / 2) as f64 * 1.8;

        shape(slide, ShapeKind::Rectangle, x, y, 0.08, 1.2, theme.orange)?;
        text(slide, x + 0.2, y + 0.1, 5.0, 0.4, title, body(theme, 22.0, theme.paper).bold())?;
        text(
            slide,
            x + 0.2,
            y + 0.55,
            5.0,
            0.5,
            desc,
            body(theme, 14.0, RGBColor::new(0xBB, 0xBB, 0xBB)),
        )?;
    }

    Ok(())
}

fn mvp_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NIGHT)?;

    text(
        slide,
        0.8,
        0.6,
        6.0,
        0.5,
        "MINIMUM VIABLE PRODUCT",
        body(theme, 12.0, theme.orange).bold(),
    )?;
    text(
        slide,
        0.8,
        1.2,
        10.0,
        0.8,
        content::MVP_HEADLINE,
        body(theme, 40.0, theme.paper).bold(),
    )?;

    let features = [
        "Optimierter Planungs- algorithmus",
        "Intuitive Driver App",
        "Modernes Web- Backoffice",
        "Integration externer Dienstleister",
        "Live-Monitoring Dashboard",
        "Automatisiertes Reporting",
    ];
    for (index, feature) in features.iter().enumerate() {
        let x = 0.8 + (index % 3) as f64 * 4.0;
        let y = 2.5 + (index / 3) as f64 * 2.2;

        shape(slide, ShapeKind::RoundedRectangle, x, y, 3.6, 1.8, theme.ink)?
            .line(theme.orange, 1.5)
            .opacity(50);
        text(
            slide,
            x + 0.2,
            y + 0.15,
            0.5,
            0.5,
            &format!("0{}", index + 1),
            body(theme, 28.0, theme.orange).bold(),
        )?;
        text(slide, x + 0.2, y + 0.7, 3.2, 0.9, feature, body(theme, 18.0, theme.paper).bold())?;
    }

    Ok(())
}

fn closing_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, NIGHT)?;

    // Oversized orange circle bleeding off the top and bottom right
    shape(slide, ShapeKind::Oval, 7.0, -2.0, 10.0, 12.0, theme.orange)?.opacity(20);

    text(
        slide,
        0.8,
        2.5,
        10.0,
        1.2,
        content::CLOSING_LEAD,
        body(theme, 48.0, theme.paper).bold(),
    )?;
    text(
        slide,
        0.8,
        3.5,
        10.0,
        1.5,
        content::CLOSING_QUESTION,
        body(theme, 96.0, theme.orange).bold(),
    )?;
    text(
        slide,
        0.8,
        5.5,
        6.0,
        1.0,
        content::CLOSING_BODY_LONG,
        body(theme, 18.0, RGBColor::new(0xCC, 0xCC, 0xCC)),
    )?;

    shape(slide, ShapeKind::Rectangle, 0.8, 6.8, 2.0, 0.06, theme.orange)?;

    Ok(())
}
