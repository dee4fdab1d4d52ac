//! Rendering tests — generate scales and render them to SVG.

use fretlib::{
    generate_scale, generate_scale_for, render_scale_to_svg, render_selection_to_svg, CanvasParams,
    DisplayMode, GuitarType, InstrumentConfig, PitchClass, ScaleType,
};

fn c_major_pentatonic_svg(mode: DisplayMode) -> String {
    let scale = generate_scale(PitchClass::C, ScaleType::MajorPentatonic, 12);
    render_scale_to_svg(&scale, &InstrumentConfig::default(), &CanvasParams::default(), mode)
}

/// Text content of every `<text>` element inside the scale-notes group.
fn note_labels(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).expect("SVG should be well-formed XML");
    doc.descendants()
        .filter(|n| n.has_tag_name("g") && n.attribute("class") == Some("scale-notes"))
        .flat_map(|g| g.children().filter(|n| n.has_tag_name("text")))
        .filter_map(|n| n.text().map(str::to_string))
        .collect()
}

#[test]
fn render_is_well_formed_svg() {
    let svg = c_major_pentatonic_svg(DisplayMode::Color);
    let doc = roxmltree::Document::parse(&svg).expect("SVG should be well-formed XML");
    let root = doc.root_element();

    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("role"), Some("img"));
    assert_eq!(
        root.attribute("aria-label"),
        Some("C Major Pentatonic scale on left-handed guitar fretboard")
    );
    assert!(root.attribute("viewBox").is_some());
}

#[test]
fn render_draws_one_marker_per_position() {
    let svg = c_major_pentatonic_svg(DisplayMode::Color);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let markers = doc
        .descendants()
        .filter(|n| n.has_tag_name("g") && n.attribute("class") == Some("scale-notes"))
        .flat_map(|g| g.children().filter(|n| n.has_tag_name("circle")))
        .count();
    assert_eq!(markers, 35);
}

#[test]
fn render_has_title_fret_numbers_and_string_labels() {
    let svg = c_major_pentatonic_svg(DisplayMode::Color);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let texts: Vec<&str> = doc
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();

    assert!(texts.contains(&"C Major Pentatonic"));
    for fret in ["1", "5", "12"] {
        assert!(texts.contains(&fret), "missing fret number {}", fret);
    }
    for note in ["E", "A", "D", "G", "B"] {
        assert!(texts.contains(&note), "missing string label {}", note);
    }
}

#[test]
fn color_mode_has_no_note_labels() {
    assert!(note_labels(&c_major_pentatonic_svg(DisplayMode::Color)).is_empty());
}

#[test]
fn notes_mode_labels_note_names() {
    let labels = note_labels(&c_major_pentatonic_svg(DisplayMode::Notes));
    assert_eq!(labels.len(), 35);
    assert!(labels.iter().any(|l| l == "C"));
}

#[test]
fn degrees_mode_labels_degrees() {
    let labels = note_labels(&c_major_pentatonic_svg(DisplayMode::Degrees));
    for d in ["1", "2", "3", "4", "5"] {
        assert!(labels.iter().any(|l| l == d), "missing degree {}", d);
    }
    assert!(!labels.iter().any(|l| l == "6"));
}

#[test]
fn solfege_mode_labels_syllables() {
    let labels = note_labels(&c_major_pentatonic_svg(DisplayMode::Solfege));
    for s in ["do", "re", "mi", "fa", "sol"] {
        assert!(labels.iter().any(|l| l == s), "missing syllable {}", s);
    }
    assert!(!labels.iter().any(|l| l == "la" || l == "ti"));
}

#[test]
fn guitar_type_changes_canvas_and_fret_count() {
    let svg = render_selection_to_svg("E", "major", "classical", "notes").unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(doc.root_element().attribute("viewBox"), Some("0 0 1000.0 500.0"));

    let texts: Vec<&str> = doc.descendants().filter(|n| n.has_tag_name("text")).filter_map(|n| n.text()).collect();
    assert!(texts.contains(&"19"));
    assert!(!texts.contains(&"20"));
}

#[test]
fn electric_neck_shows_all_24_frets() {
    let instrument = InstrumentConfig::for_guitar(GuitarType::Electric);
    let scale = generate_scale_for(PitchClass::E, ScaleType::MinorPentatonic, &instrument);
    let svg = render_scale_to_svg(&scale, &instrument, &CanvasParams::for_guitar(GuitarType::Electric), DisplayMode::Color);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let fret_lines = doc
        .descendants()
        .filter(|n| n.has_tag_name("line") && n.attribute("stroke") == Some("#666666"))
        .count();
    assert_eq!(fret_lines, 25);
}
