//! End-to-end tests: build decks, write them to disk, and reopen the
//! archives to verify structure and content.

use deckforge::common::unit::inches;
use deckforge::deck::{self, Theme};
use deckforge::{Presentation, RGBColor, ShapeKind, TextStyle};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};

fn read_member(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing member: {name}"))
        .read_to_string(&mut content)
        .unwrap();
    content
}

fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(err) => panic!("malformed XML: {err}"),
        }
    }
}

/// Background rectangle, 70%-opaque card, title text: the canonical
/// composition flow, verified on the wire.
#[test]
fn composed_slide_round_trips_through_the_archive() {
    let mut pres = Presentation::new();
    let slide = pres.add_slide();

    slide
        .add_shape(
            ShapeKind::Rectangle,
            0,
            0,
            inches(13.333),
            inches(7.5),
            Some(RGBColor::new(0x0D, 0x0D, 0x0D)),
        )
        .unwrap();
    slide
        .add_shape(
            ShapeKind::RoundedRectangle,
            inches(0.8),
            inches(5.2),
            inches(7.0),
            inches(1.5),
            Some(RGBColor::new(0x1A, 0x1A, 0x1A)),
        )
        .unwrap()
        .line(RGBColor::new(0xFF, 0x79, 0x32), 2.0)
        .opacity(70);
    slide
        .add_text_box(
            inches(0.8),
            inches(2.2),
            inches(10.0),
            inches(1.5),
            "Fahrersoftware",
            TextStyle::new(96.0, RGBColor::new(0xFF, 0xFF, 0xFF))
                .bold()
                .font("Arial Black"),
        )
        .unwrap();

    let bytes = pres.to_bytes().unwrap();
    let slide_xml = read_member(&bytes, "ppt/slides/slide1.xml");
    assert_well_formed(&slide_xml);

    // Z-order: background before card before title
    let bg_pos = slide_xml.find(r#"val="0D0D0D""#).unwrap();
    let card_pos = slide_xml.find(r#"val="1A1A1A""#).unwrap();
    let title_pos = slide_xml.find("Fahrersoftware").unwrap();
    assert!(bg_pos < card_pos && card_pos < title_pos);

    // The card's alpha is present exactly once, inside its fill color
    assert_eq!(slide_xml.matches("<a:alpha").count(), 1);
    assert!(slide_xml.contains(r#"<a:srgbClr val="1A1A1A"><a:alpha val="70000"/></a:srgbClr>"#));

    // The card's outline
    assert!(slide_xml.contains(r#"<a:ln w="25400"><a:solidFill><a:srgbClr val="FF7932"/>"#));

    // The title run styling
    assert!(slide_xml.contains(r#"sz="9600" b="1""#));
    assert!(slide_xml.contains(r#"<a:latin typeface="Arial Black"/>"#));
}

#[test]
fn saved_file_is_a_readable_package() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");

    let mut pres = Presentation::new();
    pres.add_slide();
    pres.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.clone())).unwrap();
    for index in 0..archive.len() {
        let mut member = archive.by_index(index).unwrap();
        let name = member.name().to_string();
        if name.ends_with(".xml") || name.ends_with(".rels") {
            let mut content = String::new();
            member.read_to_string(&mut content).unwrap();
            assert_well_formed(&content);
        }
    }

    let content_types = read_member(&bytes, "[Content_Types].xml");
    assert!(content_types.contains("presentationml.presentation.main+xml"));
    assert!(content_types.contains("presentationml.slide+xml"));
}

#[test]
fn build_all_writes_five_decks() {
    let dir = tempfile::tempdir().unwrap();
    let reports = deck::build_all(dir.path()).unwrap();

    assert_eq!(reports.len(), 5);
    for report in &reports {
        let path = report.result.as_ref().unwrap();
        assert!(path.exists(), "missing artifact: {}", report.file_name);

        let bytes = std::fs::read(path).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        for slide_number in 1..=5 {
            let member = format!("ppt/slides/slide{slide_number}.xml");
            assert!(archive.by_name(&member).is_ok(), "{}: missing {member}", report.file_name);
        }
        assert!(archive.by_name("ppt/slides/slide6.xml").is_err());
    }
}

#[test]
fn cinematic_deck_carries_its_alpha_values() {
    let theme = Theme::avemo();
    let pres = deckforge::deck::designs::cinematic::build(&theme).unwrap();
    let bytes = pres.to_bytes().unwrap();

    // Title slide: glow oval at 15%, glass card at 70%
    let slide1 = read_member(&bytes, "ppt/slides/slide1.xml");
    assert!(slide1.contains(r#"<a:alpha val="15000"/>"#));
    assert!(slide1.contains(r#"<a:alpha val="70000"/>"#));

    // Solution slide: the rotated band at 20%
    let slide3 = read_member(&bytes, "ppt/slides/slide3.xml");
    assert!(slide3.contains(r#"<a:xfrm rot="-900000">"#));
    assert!(slide3.contains(r#"<a:alpha val="20000"/>"#));
}

#[test]
fn dashboard_border_shapes_have_no_fill() {
    let theme = Theme::avemo();
    let pres = deckforge::deck::designs::dashboard::build(&theme).unwrap();
    let bytes = pres.to_bytes().unwrap();

    let slide5 = read_member(&bytes, "ppt/slides/slide5.xml");
    // Two concentric outline-only echoes around the central card: unfilled,
    // 1pt orange stroke
    assert_eq!(slide5.matches(r#"<a:noFill/><a:ln w="12700">"#).count(), 2);
}

#[test]
fn regeneration_is_byte_identical() {
    let theme = Theme::avemo();
    for (file_name, builder) in deck::catalog() {
        let first = builder(&theme).unwrap().to_bytes().unwrap();
        let second = builder(&theme).unwrap().to_bytes().unwrap();
        assert_eq!(first, second, "non-deterministic output for {file_name}");
    }
}
