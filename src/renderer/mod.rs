//! Fretboard renderer — converts a generated Scale into SVG output.
//!
//! All positions come from [`geometry`], so the SVG and the marker map
//! handed to native hosts always agree on where each note is drawn.

mod constants;
mod fretboard;
pub mod geometry;
mod svg_builder;

use serde::{Deserialize, Serialize};

use crate::labels::label_for;
use crate::model::*;
use constants::*;
use fretboard::*;
use geometry::{CanvasParams, FretboardGeometry};
use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Drawing instruction for one scale note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteMarker {
    pub string: u8,
    pub fret: u8,
    /// Marker centre in canvas coordinates
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub is_root: bool,
    pub note: PitchClass,
    pub degree: u8,
    /// Text for the active display mode ("" in colour mode)
    pub label: String,
}

/// Compute the marker for every position in the scale, in scale order.
///
/// Positions beyond the instrument's strings or frets are skipped, so a
/// scale generated for a longer neck can be drawn on a shorter one.
pub fn compute_note_markers(
    scale: &Scale,
    instrument: &InstrumentConfig,
    canvas: &CanvasParams,
    mode: DisplayMode,
) -> Vec<NoteMarker> {
    let g = FretboardGeometry::new(instrument, canvas);

    scale
        .positions
        .iter()
        .filter(|n| n.position.string >= 1 && n.position.string <= g.strings && n.position.fret <= g.frets)
        .map(|n| {
            let p = g.marker_point(n.position);
            NoteMarker {
                string: n.position.string,
                fret: n.position.fret,
                x: p.x,
                y: p.y,
                radius: if n.is_root { ROOT_RADIUS } else { NOTE_RADIUS },
                is_root: n.is_root,
                note: n.note,
                degree: n.degree,
                label: label_for(n, mode),
            }
        })
        .collect()
}

/// Render a scale on a left-handed fretboard into a complete SVG string.
pub fn render_scale_to_svg(
    scale: &Scale,
    instrument: &InstrumentConfig,
    canvas: &CanvasParams,
    mode: DisplayMode,
) -> String {
    let g = FretboardGeometry::new(instrument, canvas);
    let handedness = if instrument.is_left_handed() { "left-handed" } else { "right-handed" };
    let aria = format!("{} scale on {} guitar fretboard", scale.name, handedness);

    let mut svg = SvgBuilder::new(canvas.width, canvas.height, &aria);

    render_board(&mut svg, &g);
    render_frets(&mut svg, &g);
    render_strings(&mut svg, &g);
    render_inlays(&mut svg, &g);
    render_fret_numbers(&mut svg, &g, canvas);
    render_string_labels(&mut svg, &g, instrument, canvas);

    let markers = compute_note_markers(scale, instrument, canvas, mode);
    render_note_markers(&mut svg, &markers);

    render_title(&mut svg, &scale.name, canvas);

    svg.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::generate_scale;

    #[test]
    fn markers_skip_positions_past_the_last_fret() {
        let scale = generate_scale(PitchClass::C, ScaleType::Major, 24);
        let instrument = InstrumentConfig::default();
        let markers = compute_note_markers(&scale, &instrument, &CanvasParams::default(), DisplayMode::Color);
        assert!(markers.len() < scale.positions.len());
        assert!(markers.iter().all(|m| m.fret <= 12));
    }

    #[test]
    fn root_markers_are_larger() {
        let scale = generate_scale(PitchClass::G, ScaleType::MinorPentatonic, 12);
        let markers =
            compute_note_markers(&scale, &InstrumentConfig::default(), &CanvasParams::default(), DisplayMode::Color);
        for m in &markers {
            assert_eq!(m.radius, if m.is_root { ROOT_RADIUS } else { NOTE_RADIUS });
        }
    }

    #[test]
    fn svg_has_title_and_aria_label() {
        let scale = generate_scale(PitchClass::C, ScaleType::MajorPentatonic, 12);
        let svg = render_scale_to_svg(&scale, &InstrumentConfig::default(), &CanvasParams::default(), DisplayMode::Notes);
        assert!(svg.contains(r#"aria-label="C Major Pentatonic scale on left-handed guitar fretboard""#));
        assert!(svg.contains(">C Major Pentatonic</text>"));
    }
}
