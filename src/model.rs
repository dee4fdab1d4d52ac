//! Data model for scales and fretboard positions.
//!
//! These structures capture everything a host needs to draw a scale on a
//! left-handed fretboard: the notes of the scale, every place they occur,
//! and the closed sets of choices offered by the selectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FretError, Result};

// ═══════════════════════════════════════════════════════════════════════
// Pitch classes
// ═══════════════════════════════════════════════════════════════════════

/// One of the 12 equal-tempered note names, spelled with sharps.
///
/// Variant order matches the chromatic table, so `index()` is the
/// position in [`crate::theory::CHROMATIC`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PitchClass {
    A,
    ASharp,
    B,
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl PitchClass {
    /// All pitch classes in chromatic order starting from A.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
    ];

    /// Position in the chromatic table (0..=11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at `index`, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Sharps-biased note name: "A", "A#", "B", …
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretError;

    /// Accepts sharp spellings and the flat spellings shown by the key picker.
    fn from_str(s: &str) -> Result<Self> {
        let pc = match s.trim() {
            "A" => PitchClass::A,
            "A#" | "Bb" => PitchClass::ASharp,
            "B" => PitchClass::B,
            "C" => PitchClass::C,
            "C#" | "Db" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D#" | "Eb" => PitchClass::DSharp,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "Gb" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G#" | "Ab" => PitchClass::GSharp,
            other => return Err(FretError::InvalidPitchClass(other.to_string())),
        };
        Ok(pc)
    }
}

impl From<PitchClass> for String {
    fn from(pc: PitchClass) -> Self {
        pc.name().to_string()
    }
}

impl TryFrom<String> for PitchClass {
    type Error = FretError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A key choice as presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyOption {
    pub value: PitchClass,
    pub label: &'static str,
}

/// The 12 selectable keys, with enharmonic labels for the black keys.
pub const KEYS: [KeyOption; 12] = [
    KeyOption { value: PitchClass::A, label: "A" },
    KeyOption { value: PitchClass::ASharp, label: "A# / Bb" },
    KeyOption { value: PitchClass::B, label: "B" },
    KeyOption { value: PitchClass::C, label: "C" },
    KeyOption { value: PitchClass::CSharp, label: "C# / Db" },
    KeyOption { value: PitchClass::D, label: "D" },
    KeyOption { value: PitchClass::DSharp, label: "D# / Eb" },
    KeyOption { value: PitchClass::E, label: "E" },
    KeyOption { value: PitchClass::F, label: "F" },
    KeyOption { value: PitchClass::FSharp, label: "F# / Gb" },
    KeyOption { value: PitchClass::G, label: "G" },
    KeyOption { value: PitchClass::GSharp, label: "G# / Ab" },
];

// ═══════════════════════════════════════════════════════════════════════
// Selector choices
// ═══════════════════════════════════════════════════════════════════════

/// Supported scale types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleType {
    Major,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    MajorPentatonic,
    MinorPentatonic,
}

impl ScaleType {
    pub const ALL: [ScaleType; 6] = [
        ScaleType::Major,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
    ];

    /// Stable identifier, e.g. "harmonic-minor".
    pub fn id(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::HarmonicMinor => "harmonic-minor",
            ScaleType::MelodicMinor => "melodic-minor",
            ScaleType::Dorian => "dorian",
            ScaleType::MajorPentatonic => "major-pentatonic",
            ScaleType::MinorPentatonic => "minor-pentatonic",
        }
    }

    /// Display name used in scale titles, e.g. "Harmonic Minor".
    pub fn label(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScaleType::Major => "Major scale (Ionian mode)",
            ScaleType::HarmonicMinor => "Minor scale with raised 7th",
            ScaleType::MelodicMinor => "Minor scale with raised 6th and 7th",
            ScaleType::Dorian => "Dorian mode (minor with raised 6th)",
            ScaleType::MajorPentatonic => "5-note major scale",
            ScaleType::MinorPentatonic => "5-note minor scale",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScaleType {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        ScaleType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| FretError::InvalidScaleType(s.to_string()))
    }
}

/// Guitar body/neck variant. Affects fret count and canvas aspect ratio only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuitarType {
    Electric,
    Acoustic,
    Classical,
}

impl GuitarType {
    pub const ALL: [GuitarType; 3] = [GuitarType::Electric, GuitarType::Acoustic, GuitarType::Classical];

    pub fn id(self) -> &'static str {
        match self {
            GuitarType::Electric => "electric",
            GuitarType::Acoustic => "acoustic",
            GuitarType::Classical => "classical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GuitarType::Electric => "Electric Guitar",
            GuitarType::Acoustic => "Acoustic Guitar",
            GuitarType::Classical => "Classical Guitar",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GuitarType::Electric => "Standard electric guitar neck",
            GuitarType::Acoustic => "Typical acoustic guitar neck",
            GuitarType::Classical => "Classical/nylon string guitar neck",
        }
    }

    /// Number of frets on this neck.
    pub fn fret_count(self) -> u8 {
        match self {
            GuitarType::Electric => 24,
            GuitarType::Acoustic => 20,
            GuitarType::Classical => 19,
        }
    }

    /// Canvas width / height (higher = narrower neck).
    pub fn aspect_ratio(self) -> f64 {
        match self {
            GuitarType::Electric => 2.5,
            GuitarType::Acoustic => 2.3,
            GuitarType::Classical => 2.0,
        }
    }
}

impl FromStr for GuitarType {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        GuitarType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| FretError::InvalidGuitarType(s.to_string()))
    }
}

/// How each scale note is labelled on the fretboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Colour only, no text
    #[default]
    Color,
    /// Note letters (C, D#, E, …)
    Notes,
    /// Scale degree numbers
    Degrees,
    /// Solfège syllables (do, re, mi, …)
    Solfege,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 4] =
        [DisplayMode::Color, DisplayMode::Notes, DisplayMode::Degrees, DisplayMode::Solfege];

    pub fn id(self) -> &'static str {
        match self {
            DisplayMode::Color => "color",
            DisplayMode::Notes => "notes",
            DisplayMode::Degrees => "degrees",
            DisplayMode::Solfege => "solfege",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Color => "Color Only",
            DisplayMode::Notes => "Note Names",
            DisplayMode::Degrees => "Scale Degrees",
            DisplayMode::Solfege => "Solfège",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DisplayMode::Color => "Show notes with colors only (no labels)",
            DisplayMode::Notes => "Show note letters (C, D#, E, etc.)",
            DisplayMode::Degrees => "Show scale degree numbers (1-7)",
            DisplayMode::Solfege => "Show solfège syllables (do, re, mi, etc.)",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "solfège" => Ok(DisplayMode::Solfege),
            _ => DisplayMode::ALL
                .into_iter()
                .find(|m| m.id() == s)
                .ok_or_else(|| FretError::InvalidDisplayMode(s.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Fretboard positions and scales
// ═══════════════════════════════════════════════════════════════════════

/// A place on the fretboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FretPosition {
    /// 1 = highest-pitched (thinnest) string, S = lowest
    pub string: u8,
    /// 0 = open string
    pub fret: u8,
}

/// A fretboard position occupied by a scale note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleNote {
    #[serde(flatten)]
    pub position: FretPosition,
    /// Pitch class sounding at this position
    pub note: PitchClass,
    /// Whether this is the scale's root
    pub is_root: bool,
    /// 1-based scale degree
    pub degree: u8,
}

/// A scale with every fretboard occurrence of its notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    /// e.g. "C Major Pentatonic"
    pub name: String,
    pub root: PitchClass,
    /// Notes in degree order, root first, octave repeat excluded
    pub notes: Vec<PitchClass>,
    /// Grouped by degree, each group ordered by string then fret
    pub positions: Vec<ScaleNote>,
}

impl Scale {
    /// Whether `pc` is one of the scale's notes.
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.contains(&pc)
    }

    /// Positions of the root note.
    pub fn roots(&self) -> impl Iterator<Item = &ScaleNote> {
        self.positions.iter().filter(|p| p.is_root)
    }

    /// Positions on one string, ordered by fret.
    pub fn positions_for_string(&self, string: u8) -> Vec<&ScaleNote> {
        let mut on_string: Vec<&ScaleNote> =
            self.positions.iter().filter(|p| p.position.string == string).collect();
        on_string.sort_by_key(|p| p.position.fret);
        on_string
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Instrument configuration
// ═══════════════════════════════════════════════════════════════════════

/// Strings, frets and tuning of the instrument being drawn.
///
/// Always valid once constructed: at least two strings, at least one fret,
/// and exactly one open note per string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstrumentConfig")]
pub struct InstrumentConfig {
    strings: u8,
    frets: u8,
    /// Open notes, lowest string (S) first
    tuning: Vec<PitchClass>,
    left_handed: bool,
}

#[derive(Deserialize)]
struct RawInstrumentConfig {
    strings: u8,
    frets: u8,
    tuning: Vec<PitchClass>,
    #[serde(default = "default_left_handed")]
    left_handed: bool,
}

fn default_left_handed() -> bool {
    true
}

impl TryFrom<RawInstrumentConfig> for InstrumentConfig {
    type Error = FretError;

    fn try_from(raw: RawInstrumentConfig) -> Result<Self> {
        let mut config = InstrumentConfig::new(raw.strings, raw.frets, raw.tuning)?;
        config.left_handed = raw.left_handed;
        Ok(config)
    }
}

impl InstrumentConfig {
    /// Build a left-handed instrument, validating its shape.
    pub fn new(strings: u8, frets: u8, tuning: Vec<PitchClass>) -> Result<Self> {
        if strings < 2 {
            return Err(FretError::InvalidInstrument(format!(
                "need at least 2 strings, got {strings}"
            )));
        }
        if frets < 1 {
            return Err(FretError::InvalidInstrument("need at least 1 fret".to_string()));
        }
        if tuning.len() != strings as usize {
            return Err(FretError::InvalidInstrument(format!(
                "tuning has {} notes for {} strings",
                tuning.len(),
                strings
            )));
        }
        Ok(Self { strings, frets, tuning, left_handed: true })
    }

    /// Standard tuning with the fret count of the given guitar variant.
    pub fn for_guitar(guitar: GuitarType) -> Self {
        Self {
            frets: guitar.fret_count(),
            ..Self::default()
        }
    }

    /// Load a configuration from JSON, applying the same validation as `new`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn strings(&self) -> u8 {
        self.strings
    }

    pub fn frets(&self) -> u8 {
        self.frets
    }

    /// Open notes, lowest string first.
    pub fn tuning(&self) -> &[PitchClass] {
        &self.tuning
    }

    pub fn is_left_handed(&self) -> bool {
        self.left_handed
    }

    /// Open note of `string` (1 = top). Tuning is stored low-to-high.
    pub fn open_note(&self, string: u8) -> Option<PitchClass> {
        if string == 0 || string > self.strings {
            return None;
        }
        self.tuning.get((self.strings - string) as usize).copied()
    }
}

impl Default for InstrumentConfig {
    /// Six strings in standard tuning, 12 frets, left-handed.
    fn default() -> Self {
        Self {
            strings: 6,
            frets: 12,
            tuning: crate::theory::STANDARD_TUNING.to_vec(),
            left_handed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_class_parses_sharps_and_flats() {
        assert_eq!("C#".parse::<PitchClass>().unwrap(), PitchClass::CSharp);
        assert_eq!("Bb".parse::<PitchClass>().unwrap(), PitchClass::ASharp);
        assert_eq!("Ab".parse::<PitchClass>().unwrap(), PitchClass::GSharp);
        assert!(matches!("H".parse::<PitchClass>(), Err(FretError::InvalidPitchClass(_))));
    }

    #[test]
    fn pitch_class_index_round_trips_through_table() {
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.index(), i);
            assert_eq!(PitchClass::from_index(i + 12), *pc);
        }
    }

    #[test]
    fn unknown_scale_type_is_rejected() {
        assert_eq!("dorian".parse::<ScaleType>().unwrap(), ScaleType::Dorian);
        assert!(matches!("lydian".parse::<ScaleType>(), Err(FretError::InvalidScaleType(s)) if s == "lydian"));
    }

    #[test]
    fn display_mode_accepts_accented_solfege() {
        assert_eq!("solfège".parse::<DisplayMode>().unwrap(), DisplayMode::Solfege);
        assert_eq!("solfege".parse::<DisplayMode>().unwrap(), DisplayMode::Solfege);
        assert!("labels".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn instrument_rejects_malformed_shapes() {
        assert!(InstrumentConfig::new(1, 12, vec![PitchClass::E]).is_err());
        assert!(InstrumentConfig::new(6, 0, crate::theory::STANDARD_TUNING.to_vec()).is_err());
        assert!(InstrumentConfig::new(4, 12, crate::theory::STANDARD_TUNING.to_vec()).is_err());
        assert!(InstrumentConfig::new(4, 20, vec![PitchClass::E, PitchClass::A, PitchClass::D, PitchClass::G]).is_ok());
    }

    #[test]
    fn open_note_reads_tuning_from_the_low_end() {
        let config = InstrumentConfig::default();
        assert_eq!(config.open_note(1), Some(PitchClass::E));
        assert_eq!(config.open_note(2), Some(PitchClass::B));
        assert_eq!(config.open_note(5), Some(PitchClass::A));
        assert_eq!(config.open_note(6), Some(PitchClass::E));
        assert_eq!(config.open_note(0), None);
        assert_eq!(config.open_note(7), None);
    }

    #[test]
    fn instrument_json_goes_through_validation() {
        let ok = InstrumentConfig::from_json(
            r#"{"strings": 4, "frets": 20, "tuning": ["E", "A", "D", "G"]}"#,
        )
        .unwrap();
        assert_eq!(ok.strings(), 4);
        assert!(ok.is_left_handed());

        let bad = InstrumentConfig::from_json(r#"{"strings": 4, "frets": 20, "tuning": ["E"]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn guitar_variant_sets_fret_count() {
        assert_eq!(InstrumentConfig::for_guitar(GuitarType::Classical).frets(), 19);
        assert_eq!(InstrumentConfig::for_guitar(GuitarType::Electric).frets(), 24);
    }
}
