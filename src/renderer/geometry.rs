//! Coordinate mapping from logical (string, fret) to canvas pixels.
//!
//! Left-handed layout: string 1 runs along the top, the nut (fret 0) is the
//! right edge of the board and fret numbers increase leftward. Markers for
//! fretted notes sit midway between two fret lines; open-string markers sit
//! a quarter fret outside the nut, on the headstock side.

use serde::{Deserialize, Serialize};

use super::constants::*;
use crate::error::{FretError, Result};
use crate::model::{FretPosition, GuitarType, InstrumentConfig};

/// Space between the canvas edge and the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: PAD_TOP,
            right: PAD_RIGHT,
            bottom: PAD_BOTTOM,
            left: PAD_LEFT,
        }
    }
}

/// Canvas size and padding the board is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasParams {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: Padding,
}

impl Default for CanvasParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_WIDTH / DEFAULT_ASPECT_RATIO,
            padding: Padding::default(),
        }
    }
}

impl CanvasParams {
    /// Default-width canvas shaped by the guitar variant's aspect ratio.
    pub fn for_guitar(guitar: GuitarType) -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_WIDTH / guitar.aspect_ratio(),
            padding: Padding::default(),
        }
    }

    /// Canvas of the given width shaped by the guitar variant's aspect ratio.
    pub fn with_width(width: f64, guitar: GuitarType) -> Result<Self> {
        Self {
            width,
            height: width / guitar.aspect_ratio(),
            padding: Padding::default(),
        }
        .validated()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)?.validated()
    }

    /// The board area left after padding must be a finite, positive size.
    pub fn validated(self) -> Result<Self> {
        let (w, h) = (self.board_width(), self.board_height());
        if !(w.is_finite() && w > 0.0) {
            return Err(FretError::InvalidCanvas(format!(
                "board width {w} (canvas {} minus padding {} + {})",
                self.width, self.padding.left, self.padding.right
            )));
        }
        if !(h.is_finite() && h > 0.0) {
            return Err(FretError::InvalidCanvas(format!(
                "board height {h} (canvas {} minus padding {} + {})",
                self.height, self.padding.top, self.padding.bottom
            )));
        }
        Ok(self)
    }

    pub fn board_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    pub fn board_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }
}

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Precomputed spacing for one instrument on one canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretboardGeometry {
    pub pad_left: f64,
    pub pad_top: f64,
    pub board_width: f64,
    pub board_height: f64,
    pub string_spacing: f64,
    pub fret_width: f64,
    pub strings: u8,
    pub frets: u8,
    mirrored: bool,
}

impl FretboardGeometry {
    pub fn new(instrument: &InstrumentConfig, canvas: &CanvasParams) -> Self {
        let board_width = canvas.board_width();
        let board_height = canvas.board_height();
        // InstrumentConfig guarantees strings >= 2 and frets >= 1
        let strings = instrument.strings();
        let frets = instrument.frets();

        Self {
            pad_left: canvas.padding.left,
            pad_top: canvas.padding.top,
            board_width,
            board_height,
            string_spacing: board_height / (strings as f64 - 1.0),
            fret_width: board_width / frets as f64,
            strings,
            frets,
            mirrored: instrument.is_left_handed(),
        }
    }

    /// Y of a string line; string 1 on top.
    pub fn string_y(&self, string: u8) -> f64 {
        self.pad_top + (string as f64 - 1.0) * self.string_spacing
    }

    /// X of a fret line. Fractional frets address the space between lines.
    pub fn fret_x(&self, fret: f64) -> f64 {
        if self.mirrored {
            self.pad_left + self.board_width - fret * self.fret_width
        } else {
            self.pad_left + fret * self.fret_width
        }
    }

    pub fn nut_x(&self) -> f64 {
        self.fret_x(0.0)
    }

    /// X of a note marker at `fret`.
    pub fn marker_x(&self, fret: u8) -> f64 {
        if fret == 0 {
            // Outside the board, past the nut
            self.fret_x(-OPEN_STRING_OFFSET)
        } else {
            self.fret_x(fret as f64 - 0.5)
        }
    }

    /// Canvas point of a note marker.
    pub fn marker_point(&self, position: FretPosition) -> Point {
        Point {
            x: self.marker_x(position.fret),
            y: self.string_y(position.string),
        }
    }
}

/// Map a fretboard position to the canvas point where its marker is drawn.
pub fn map_to_canvas(position: FretPosition, instrument: &InstrumentConfig, canvas: &CanvasParams) -> Point {
    FretboardGeometry::new(instrument, canvas).marker_point(position)
}
