//! Board, fret, string, inlay, label, and note-marker rendering.

use super::constants::*;
use super::geometry::{CanvasParams, FretboardGeometry};
use super::svg_builder::SvgBuilder;
use super::NoteMarker;
use crate::model::InstrumentConfig;

// ═══════════════════════════════════════════════════════════════════════
// Header
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_title(svg: &mut SvgBuilder, name: &str, canvas: &CanvasParams) {
    svg.text(canvas.width / 2.0, TITLE_Y, name, TITLE_SIZE, "bold", TEXT_COLOR, "middle");
}

// ═══════════════════════════════════════════════════════════════════════
// Board
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_board(svg: &mut SvgBuilder, g: &FretboardGeometry) {
    svg.rect(
        g.pad_left, g.pad_top, g.board_width, g.board_height,
        BOARD_COLOR, BOARD_BORDER_COLOR, BOARD_BORDER_WIDTH,
    );
}

/// Fret lines, nut included and drawn heavier.
pub(super) fn render_frets(svg: &mut SvgBuilder, g: &FretboardGeometry) {
    let bottom = g.pad_top + g.board_height;
    for fret in 0..=g.frets {
        let x = g.fret_x(fret as f64);
        let width = if fret == 0 { NUT_WIDTH } else { FRET_LINE_WIDTH };
        svg.line(x, g.pad_top, x, bottom, FRET_COLOR, width);
    }
}

pub(super) fn render_strings(svg: &mut SvgBuilder, g: &FretboardGeometry) {
    let x1 = g.pad_left;
    let x2 = g.pad_left + g.board_width;
    for string in 1..=g.strings {
        let y = g.string_y(string);
        svg.line(x1, y, x2, y, STRING_COLOR, string_thickness(string));
    }
}

/// Stroke width for a string; strings past the table reuse the thickest gauge.
pub(super) fn string_thickness(string: u8) -> f64 {
    let idx = (string.max(1) as usize - 1).min(STRING_THICKNESSES.len() - 1);
    STRING_THICKNESSES[idx]
}

/// Position inlays, centred between fret lines. Double dots on octave frets.
pub(super) fn render_inlays(svg: &mut SvgBuilder, g: &FretboardGeometry) {
    for &fret in FRET_MARKERS.iter().filter(|&&f| f <= g.frets) {
        let x = g.fret_x(fret as f64 - 0.5);
        if DOUBLE_DOT_FRETS.contains(&fret) {
            svg.circle(x, g.pad_top + g.board_height * 0.33, INLAY_RADIUS, INLAY_COLOR, 0.5);
            svg.circle(x, g.pad_top + g.board_height * 0.67, INLAY_RADIUS, INLAY_COLOR, 0.5);
        } else {
            svg.circle(x, g.pad_top + g.board_height / 2.0, INLAY_RADIUS, INLAY_COLOR, 0.5);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Labels
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_fret_numbers(svg: &mut SvgBuilder, g: &FretboardGeometry, canvas: &CanvasParams) {
    let y = canvas.height - 10.0;
    for fret in 1..=g.frets {
        svg.text(
            g.fret_x(fret as f64 - 0.5), y, &fret.to_string(),
            FRET_NUMBER_SIZE, "normal", FRET_COLOR, "middle",
        );
    }
}

/// Open-note name of each string, in the margin on the nut side.
pub(super) fn render_string_labels(
    svg: &mut SvgBuilder,
    g: &FretboardGeometry,
    instrument: &InstrumentConfig,
    canvas: &CanvasParams,
) {
    let x = if instrument.is_left_handed() { canvas.width - 20.0 } else { 20.0 };
    for string in 1..=g.strings {
        if let Some(note) = instrument.open_note(string) {
            svg.centered_text(x, g.string_y(string), note.name(), STRING_LABEL_SIZE, "bold", TEXT_COLOR);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Scale notes
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_note_markers(svg: &mut SvgBuilder, markers: &[NoteMarker]) {
    svg.open_group("scale-notes");
    for m in markers {
        let (fill, stroke) = if m.is_root {
            (ROOT_FILL, ROOT_STROKE)
        } else {
            (NOTE_FILL, NOTE_STROKE)
        };
        svg.stroked_circle(m.x, m.y, m.radius, fill, stroke, MARKER_STROKE_WIDTH);
        if !m.label.is_empty() {
            svg.centered_text(m.x, m.y, &m.label, NOTE_LABEL_SIZE, "bold", NOTE_LABEL_COLOR);
        }
    }
    svg.close_group();
}
