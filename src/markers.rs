//! Marker map: the scale's note markers as plain data.
//!
//! Hosts that paint the fretboard natively (rather than displaying the
//! SVG) use this to place each marker and its label. Coordinates are the
//! same ones the SVG renderer uses.

use serde::Serialize;

use crate::error::Result;
use crate::model::{DisplayMode, InstrumentConfig, Scale};
use crate::renderer::geometry::{CanvasParams, FretboardGeometry};
use crate::renderer::{compute_note_markers, NoteMarker};

/// Everything a native host needs to draw a scale.
#[derive(Debug, Clone, Serialize)]
pub struct MarkerMap {
    /// Scale title
    pub name: String,
    /// Canvas size in user units
    pub width: f64,
    pub height: f64,
    /// X of the nut line
    pub nut_x: f64,
    /// X of each fret line, fret 0 (nut) first
    pub fret_lines: Vec<f64>,
    /// Y of each string line, string 1 first
    pub string_lines: Vec<f64>,
    /// One marker per scale position
    pub markers: Vec<NoteMarker>,
}

/// Generate the marker map for a scale on the given instrument and canvas.
pub fn generate_marker_map(
    scale: &Scale,
    instrument: &InstrumentConfig,
    canvas: &CanvasParams,
    mode: DisplayMode,
) -> MarkerMap {
    let g = FretboardGeometry::new(instrument, canvas);

    MarkerMap {
        name: scale.name.clone(),
        width: canvas.width,
        height: canvas.height,
        nut_x: g.nut_x(),
        fret_lines: (0..=g.frets).map(|f| g.fret_x(f as f64)).collect(),
        string_lines: (1..=g.strings).map(|s| g.string_y(s)).collect(),
        markers: compute_note_markers(scale, instrument, canvas, mode),
    }
}

/// Serialize a MarkerMap to JSON.
pub fn marker_map_to_json(map: &MarkerMap) -> Result<String> {
    Ok(serde_json::to_string(map)?)
}
