//! Shared constants for the fretboard renderer (all in SVG user units).

// ── Canvas & padding ────────────────────────────────────────────────
pub(crate) const DEFAULT_CANVAS_WIDTH: f64 = 1000.0;
pub(crate) const DEFAULT_ASPECT_RATIO: f64 = 2.5;
pub(crate) const PAD_TOP: f64 = 40.0;
pub(crate) const PAD_RIGHT: f64 = 60.0; // string labels sit beside the nut
pub(crate) const PAD_BOTTOM: f64 = 40.0;
pub(crate) const PAD_LEFT: f64 = 40.0;

// ── Marker geometry ─────────────────────────────────────────────────
pub(crate) const ROOT_RADIUS: f64 = 14.0;
pub(crate) const NOTE_RADIUS: f64 = 10.0;
/// Open-string markers sit this fraction of a fret width past the nut.
pub(crate) const OPEN_STRING_OFFSET: f64 = 0.25;
pub(crate) const INLAY_RADIUS: f64 = 6.0;

// ── Lines ───────────────────────────────────────────────────────────
pub(crate) const NUT_WIDTH: f64 = 4.0;
pub(crate) const FRET_LINE_WIDTH: f64 = 2.0;
pub(crate) const BOARD_BORDER_WIDTH: f64 = 2.0;
pub(crate) const MARKER_STROKE_WIDTH: f64 = 2.0;

/// Stroke width per string, string 1 (thinnest) first.
pub(crate) const STRING_THICKNESSES: [f64; 6] = [0.8, 1.2, 1.6, 2.0, 2.5, 3.0];

// ── Inlays ──────────────────────────────────────────────────────────
pub(crate) const FRET_MARKERS: [u8; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];
pub(crate) const DOUBLE_DOT_FRETS: [u8; 2] = [12, 24];

// ── Text ────────────────────────────────────────────────────────────
pub(crate) const TITLE_Y: f64 = 20.0;
pub(crate) const TITLE_SIZE: f64 = 18.0;
pub(crate) const FRET_NUMBER_SIZE: f64 = 12.0;
pub(crate) const STRING_LABEL_SIZE: f64 = 14.0;
pub(crate) const NOTE_LABEL_SIZE: f64 = 10.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const BOARD_COLOR: &str = "#8B4513";
pub(crate) const BOARD_BORDER_COLOR: &str = "#4A2511";
pub(crate) const FRET_COLOR: &str = "#666666";
pub(crate) const STRING_COLOR: &str = "#D3D3D3";
pub(crate) const INLAY_COLOR: &str = "#CCCCCC";
pub(crate) const TEXT_COLOR: &str = "#333333";
pub(crate) const ROOT_FILL: &str = "#3B82F6";
pub(crate) const ROOT_STROKE: &str = "#1E40AF";
pub(crate) const NOTE_FILL: &str = "#93C5FD";
pub(crate) const NOTE_STROKE: &str = "#3B82F6";
pub(crate) const NOTE_LABEL_COLOR: &str = "white";
