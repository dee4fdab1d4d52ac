//! Scale construction and fretboard search.
//!
//! Everything here is pitch-class arithmetic modulo 12 over fixed tables:
//! a scale is its root plus the running sum of its interval formula, and a
//! note sits at every fret whose offset from the open string lands on the
//! same pitch class.

use log::debug;

use crate::error::Result;
use crate::model::{FretPosition, InstrumentConfig, PitchClass, Scale, ScaleNote, ScaleType};

/// All 12 pitch classes, sharps-biased, starting from A.
pub const CHROMATIC: [PitchClass; 12] = PitchClass::ALL;

/// Standard guitar tuning, lowest string (6) first.
pub const STANDARD_TUNING: [PitchClass; 6] = [
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
];

/// Pitch class `semitones` above `root`, wrapping at the octave.
pub fn note_at(root: PitchClass, semitones: usize) -> PitchClass {
    CHROMATIC[(root.index() + semitones % 12) % 12]
}

/// Interval formula (semitone steps summing to 12) for a scale type.
pub fn formula_of(scale_type: ScaleType) -> &'static [u8] {
    match scale_type {
        ScaleType::Major => &[2, 2, 1, 2, 2, 2, 1],
        ScaleType::HarmonicMinor => &[2, 1, 2, 2, 1, 3, 1],
        ScaleType::MelodicMinor => &[2, 1, 2, 2, 2, 2, 1],
        ScaleType::Dorian => &[2, 1, 2, 2, 2, 1, 2],
        ScaleType::MajorPentatonic => &[2, 2, 3, 2, 3],
        ScaleType::MinorPentatonic => &[3, 2, 2, 3, 2],
    }
}

/// Notes of the scale in degree order.
///
/// The last step of the formula only closes the octave, so it is skipped
/// and the result has one note per step with the root first.
pub fn generate_scale_notes(root: PitchClass, formula: &[u8]) -> Vec<PitchClass> {
    let mut notes = Vec::with_capacity(formula.len());
    notes.push(root);

    let mut semitones = 0usize;
    for &step in formula.iter().take(formula.len().saturating_sub(1)) {
        semitones += step as usize;
        notes.push(note_at(root, semitones));
    }
    notes
}

/// Every (string, fret) up to `max_fret` (inclusive) that sounds `target`.
///
/// `tuning` is stored lowest string first; string 1 is the last entry.
/// Results are ordered by string, then fret. String numbers are `u8`, so
/// only the top 255 strings of a longer tuning are searched.
pub fn find_positions(target: PitchClass, tuning: &[PitchClass], max_fret: u8) -> Vec<FretPosition> {
    let len = tuning.len();
    let strings = u8::try_from(len).unwrap_or(u8::MAX);
    let mut positions = Vec::new();

    for string in 1..=strings {
        let open = tuning[len - string as usize];
        for fret in 0..=max_fret {
            if note_at(open, fret as usize) == target {
                positions.push(FretPosition { string, fret });
            }
        }
    }
    positions
}

/// Build a scale on the standard six-string tuning.
pub fn generate_scale(root: PitchClass, scale_type: ScaleType, max_fret: u8) -> Scale {
    build_scale(root, scale_type, &STANDARD_TUNING, max_fret)
}

/// Build a scale on an arbitrary instrument, searching up to its last fret.
pub fn generate_scale_for(root: PitchClass, scale_type: ScaleType, instrument: &InstrumentConfig) -> Scale {
    build_scale(root, scale_type, instrument.tuning(), instrument.frets())
}

/// Parse string identifiers (as sent by a host UI) and build the scale.
pub fn parse_and_generate(root: &str, scale_type: &str, max_fret: u8) -> Result<Scale> {
    let root: PitchClass = root.parse()?;
    let scale_type: ScaleType = scale_type.parse()?;
    Ok(generate_scale(root, scale_type, max_fret))
}

fn build_scale(root: PitchClass, scale_type: ScaleType, tuning: &[PitchClass], max_fret: u8) -> Scale {
    let notes = generate_scale_notes(root, formula_of(scale_type));

    // Degree and root flag come from construction order, not the note name.
    let positions: Vec<ScaleNote> = notes
        .iter()
        .enumerate()
        .flat_map(|(idx, &note)| {
            find_positions(note, tuning, max_fret)
                .into_iter()
                .map(move |position| ScaleNote {
                    position,
                    note,
                    is_root: idx == 0,
                    degree: idx as u8 + 1,
                })
        })
        .collect();

    let name = format!("{} {}", root, scale_type.label());
    debug!("generated {name}: {} notes, {} positions up to fret {max_fret}", notes.len(), positions.len());

    Scale { name, root, notes, positions }
}
