//! Design 2: clean minimal with liquid glass. White canvases, floating
//! near-opaque cards, orange as a sharp accent only.

use super::{SLIDE_H, body, canvas, shape, text};
use crate::common::RGBColor;
use crate::deck::content;
use crate::deck::theme::Theme;
use crate::error::Result;
use crate::pptx::{Presentation, ShapeKind};

const HAIRLINE: RGBColor = RGBColor::new(0xE0, 0xE0, 0xE0);
const HAIRLINE_SOFT: RGBColor = RGBColor::new(0xE8, 0xE8, 0xE8);
const HAIRLINE_CARD: RGBColor = RGBColor::new(0xDD, 0xDD, 0xDD);

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
    canvas(slide, theme.paper)?;

    // Soft gray block bleeding off the top left
    shape(slide, ShapeKind::Rectangle, -1.0, -1.0, 8.0, 10.0, theme.gray_light)?;

    shape(slide, ShapeKind::RoundedRectangle, 1.0, 2.0, 8.0, 3.5, theme.paper)?
        .line(HAIRLINE, 1.0)
        .opacity(85);

    shape(slide, ShapeKind::Oval, 1.5, 2.5, 0.3, 0.3, theme.orange)?;
    text(slide, 2.0, 2.4, 6.0, 0.5, content::PRODUCT, body(theme, 14.0, theme.gray_mid).bold())?;

    text(slide, 1.5, 3.2, 7.0, 1.2, content::SUBTITLE, body(theme, 48.0, theme.ink).bold())?;
    text(slide, 1.5, 4.5, 6.0, 0.6, content::TAGLINE, body(theme, 20.0, theme.gray_mid))?;

    shape(slide, ShapeKind::Rectangle, 1.5, 5.3, 1.5, 0.05, theme.orange)?;

    Ok(())
}

fn problem_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.paper)?;

    text(slide, 0.8, 0.6, 4.0, 0.4, "Aktuelle Situation", body(theme, 32.0, theme.ink).bold())?;
    shape(slide, ShapeKind::Rectangle, 0.8, 1.1, 1.2, 0.06, theme.orange)?;

    let problems = [
        ("Isolierte Standorte", "Keine Vernetzung zwischen den Niederlassungen führt zu Ineffizienz"),
        ("Manuelle Prozesse", "Abhängig von Excel, Outlook und Kalendern"),
        ("Fehlende Transparenz", "Keine KPIs für datengesteuerte Entscheidungen"),
        ("Hohe Leerlaufzeiten", "Durchschnittlich 2,5 Stunden pro Fahrzeug täglich"),
        ("Lange Wartezeiten", "30 Tage durchschnittlich auf Fahrzeuge warten"),
    ];
    for (index, (title, desc)) in problems.iter().enumerate() {
        let y = 1.6 + index as f64 * 1.1;
        let first = index == 0;

        let badge_fill = if first { theme.orange } else { theme.gray_light };
        shape(slide, ShapeKind::Oval, 0.8, y, 0.5, 0.5, badge_fill)?;
        let number_color = if first { theme.paper } else { theme.gray_mid };
        text(
            slide,
            0.95,
            y + 0.08,
            0.3,
            0.3,
            &(index + 1).to_string(),
            body(theme, 14.0, number_color).bold().centered(),
        )?;

        shape(slide, ShapeKind::RoundedRectangle, 1.5, y - 0.1, 11.0, 0.9, theme.paper)?
            .line(HAIRLINE_SOFT, 1.0)
            .opacity(90);
        text(slide, 1.7, y + 0.05, 3.0, 0.4, title, body(theme, 18.0, theme.ink).bold())?;
        text(slide, 1.7, y + 0.4, 10.0, 0.4, desc, body(theme, 13.0, theme.gray_mid))?;
    }

    Ok(())
}

fn solution_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.paper)?;

    // Orange panel on the right
    shape(slide, ShapeKind::Rectangle, 8.0, 0.0, 6.0, SLIDE_H, theme.orange)?;

    text(slide, 0.8, 0.8, 6.0, 0.5, "Unsere Lösung", body(theme, 14.0, theme.orange).bold())?;
    text(slide, 0.8, 1.5, 6.0, 1.0, content::TAGLINE, body(theme, 36.0, theme.ink).bold())?;

    let solutions = [
        ("Synergien", "Alle Standorte vernetzt"),
        ("Effizienz", "Optimierte Prozesse"),
        ("Automatisierung", "Weniger manuelle Arbeit"),
        ("Einsparung", "260.000 € jährlich"),
    ];
    for (index, (title, desc)) in solutions.iter().enumerate() {
        let y = 3.0 + index as f64 * 1.1;
        shape(slide, ShapeKind::Oval, 0.8, y, 0.6, 0.6, theme.orange)?;
        text(slide, 1.6, y + 0.1, 2.5, 0.4, title, body(theme, 22.0, theme.ink).bold())?;
        text(slide, 1.6, y + 0.5, 5.0, 0.4, desc, body(theme, 14.0, theme.gray_mid))?;
    }

    text(
        slide,
        8.5,
        3.0,
        4.0,
        3.0,
        "Transformieren Sie Ihre Fahrzeugdisposition mit moderner Technologie",
        body(theme, 24.0, theme.paper).bold(),
    )?;

    Ok(())
}

fn mvp_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.paper)?;

    text(
        slide,
        0.8,
        0.6,
        6.0,
        0.4,
        "Minimum Viable Product",
        body(theme, 14.0, theme.orange).bold(),
    )?;
    text(slide, 0.8, 1.2, 10.0, 0.8, content::MVP_HEADLINE, body(theme, 40.0, theme.ink).bold())?;

    let features = [
        "Planungsalgorithmus",
        "Driver App",
        "Web-Backoffice",
        "Externe Dienstleister",
        "Monitoring",
        "Reporting",
    ];
    for (index, feature) in features.iter().enumerate() {
        let x = 0.8 + (index % 3) as f64 * 4.1;
        let y = 2.5 + (index / 3) as f64 * 2.2;

        shape(slide, ShapeKind::RoundedRectangle, x, y, 3.8, 1.9, theme.paper)?
            .line(HAIRLINE_CARD, 1.0);
        shape(slide, ShapeKind::Rectangle, x, y, 3.8, 0.08, theme.orange)?;

        text(slide, x + 0.3, y + 0.5, 3.2, 1.0, feature, body(theme, 20.0, theme.ink).bold())?;
        text(
            slide,
            x + 0.3,
            y + 0.25,
            0.5,
            0.3,
            &format!("0{}", index + 1),
            body(theme, 12.0, theme.orange).bold(),
        )?;
    }

    Ok(())
}

fn closing_slide(pres: &mut Presentation, theme: &Theme) -> Result<()> {
    let slide = pres.add_slide();
    canvas(slide, theme.paper)?;

    // Scattered accent dots
    for (x, y) in [(2.0, 1.0), (10.0, 5.0), (11.0, 0.5), (1.0, 6.0)] {
        shape(slide, ShapeKind::Oval, x, y, 0.3, 0.3, theme.orange)?.opacity(30);
    }

    text(slide, 0.8, 2.8, 10.0, 1.0, content::CLOSING_LEAD, body(theme, 36.0, theme.gray_mid))?;
    text(
        slide,
        0.8,
        3.5,
        10.0,
        1.2,
        content::CLOSING_QUESTION,
        body(theme, 72.0, theme.ink).bold(),
    )?;

    shape(slide, ShapeKind::Rectangle, 0.8, 4.7, 3.0, 0.08, theme.orange)?;

    text(
        slide,
        0.8,
        5.2,
        8.0,
        0.8,
        content::CLOSING_BODY_SHORT,
        body(theme, 18.0, theme.gray_mid),
    )?;

    Ok(())
}
