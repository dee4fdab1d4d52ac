//! Text shown inside each scale-note marker for a given display mode.

use crate::model::{DisplayMode, ScaleNote};

/// Solfège syllables for degrees 1..=7.
pub const SOLFEGE: [&str; 7] = ["do", "re", "mi", "fa", "sol", "la", "ti"];

/// Solfège syllable for a scale degree, or "" outside 1..=7.
pub fn solfege(degree: u8) -> &'static str {
    match degree {
        1..=7 => SOLFEGE[degree as usize - 1],
        _ => "",
    }
}

/// Label for a scale note. Empty in colour mode.
pub fn label_for(note: &ScaleNote, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Color => String::new(),
        DisplayMode::Notes => note.note.name().to_string(),
        DisplayMode::Degrees => note.degree.to_string(),
        DisplayMode::Solfege => solfege(note.degree).to_string(),
    }
}
