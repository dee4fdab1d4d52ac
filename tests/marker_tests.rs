//! Marker map tests — verify the drawing data handed to native hosts.

use fretlib::{
    generate_marker_map, generate_scale, map_to_canvas, marker_map_to_json, selection_marker_map_json,
    CanvasParams, DisplayMode, FretError, FretPosition, GuitarType, InstrumentConfig, PitchClass, ScaleType,
};
use pretty_assertions::assert_eq;

fn a_minor_pentatonic_map(mode: DisplayMode) -> fretlib::MarkerMap {
    let scale = generate_scale(PitchClass::A, ScaleType::MinorPentatonic, 12);
    generate_marker_map(&scale, &InstrumentConfig::default(), &CanvasParams::default(), mode)
}

#[test]
fn marker_map_has_line_positions() {
    let map = a_minor_pentatonic_map(DisplayMode::Color);
    let canvas = CanvasParams::default();

    assert_eq!(map.name, "A Minor Pentatonic");
    assert_eq!(map.fret_lines.len(), 13);
    assert_eq!(map.string_lines.len(), 6);

    // Mirrored: nut on the right edge of the board, last fret on the left
    assert_eq!(map.fret_lines[0], canvas.width - canvas.padding.right);
    assert!((map.fret_lines[12] - canvas.padding.left).abs() < 1e-9);
    assert_eq!(map.nut_x, map.fret_lines[0]);

    // String 1 on top
    assert_eq!(map.string_lines[0], canvas.padding.top);
    assert!((map.string_lines[5] - (canvas.height - canvas.padding.bottom)).abs() < 1e-9);
}

#[test]
fn open_markers_sit_past_the_nut_and_fretted_between_lines() {
    let map = a_minor_pentatonic_map(DisplayMode::Color);
    for m in &map.markers {
        if m.fret == 0 {
            assert!(m.x > map.nut_x, "open marker on string {} at {}", m.string, m.x);
        } else {
            let right = map.fret_lines[m.fret as usize - 1];
            let left = map.fret_lines[m.fret as usize];
            assert!(m.x < right && m.x > left);
            assert!(((right + left) / 2.0 - m.x).abs() < 1e-9);
        }
        assert_eq!(m.y, map.string_lines[m.string as usize - 1]);
    }
}

#[test]
fn map_to_canvas_agrees_with_marker_map() {
    let map = a_minor_pentatonic_map(DisplayMode::Color);
    let instrument = InstrumentConfig::default();
    let canvas = CanvasParams::default();
    for m in &map.markers {
        let p = map_to_canvas(FretPosition { string: m.string, fret: m.fret }, &instrument, &canvas);
        assert_eq!((p.x, p.y), (m.x, m.y));
    }
}

#[test]
fn labels_follow_display_mode() {
    let map = a_minor_pentatonic_map(DisplayMode::Solfege);
    let root = map.markers.iter().find(|m| m.is_root).unwrap();
    assert_eq!(root.label, "do");

    let map = a_minor_pentatonic_map(DisplayMode::Notes);
    assert!(map.markers.iter().all(|m| m.label == m.note.name()));
}

#[test]
fn marker_map_json_from_selection() {
    let json = selection_marker_map_json("A", "minor-pentatonic", "acoustic", "degrees").unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["name"], "A Minor Pentatonic");
    assert_eq!(value["fret_lines"].as_array().unwrap().len(), 21);
    assert_eq!(value["markers"][0]["label"], "1");
    assert_eq!(value["markers"][0]["note"], "A");

    let direct = marker_map_to_json(&a_minor_pentatonic_map(DisplayMode::Degrees)).unwrap();
    assert!(direct.starts_with('{'));
}

#[test]
fn canvas_params_load_from_json() {
    let canvas = CanvasParams::from_json(r#"{"width": 800, "height": 320}"#).unwrap();
    assert_eq!(canvas.padding, fretlib::Padding::default());
    assert_eq!(canvas.board_width(), 800.0 - 40.0 - 60.0);
}

#[test]
fn canvas_params_reject_padding_wider_than_canvas() {
    assert!(matches!(
        CanvasParams::from_json(r#"{"width": 50, "height": 20}"#),
        Err(FretError::InvalidCanvas(_))
    ));
    assert!(matches!(
        CanvasParams::from_json(r#"{"width": 800, "height": 320, "padding": {"top": 0, "right": 0, "bottom": 0, "left": 800}}"#),
        Err(FretError::InvalidCanvas(_))
    ));
    assert!(CanvasParams::with_width(50.0, GuitarType::Electric).is_err());
    assert!(CanvasParams::with_width(f64::NAN, GuitarType::Electric).is_err());
    assert!(CanvasParams::with_width(1200.0, GuitarType::Classical).is_ok());
}
