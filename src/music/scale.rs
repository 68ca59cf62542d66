// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scales and scale degrees.
//!
//! A scale is a tonic note plus an interval pattern. Every built-in scale
//! type is an absolute pattern measured from the tonic and closed by the
//! octave, so a heptatonic scale yields eight notes (tonic through octave).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::interval::{IntervalPattern, SemiTone};
use super::note::{Note, Notes};
use super::pitch::Pitch;
use crate::error::{Result, TheoryError};

const MAJOR_STEPS: [SemiTone; 7] = [2, 4, 5, 7, 9, 11, 12];
const NATURAL_MINOR_STEPS: [SemiTone; 7] = [2, 3, 5, 7, 8, 10, 12];

/// Major scale measured from the tonic
pub const MAJOR_SCALE: IntervalPattern = IntervalPattern::absolute(&MAJOR_STEPS);

/// Natural minor scale measured from the tonic
pub const MINOR_SCALE: IntervalPattern = IntervalPattern::absolute(&NATURAL_MINOR_STEPS);

/// Named positions within a heptatonic scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Tonic,
    Supertonic,
    Mediant,
    Subdominant,
    Dominant,
    Submediant,
    LeadingTone,
    Octave,
}

impl Degree {
    pub const ALL: [Degree; 8] = [
        Degree::Tonic,
        Degree::Supertonic,
        Degree::Mediant,
        Degree::Subdominant,
        Degree::Dominant,
        Degree::Submediant,
        Degree::LeadingTone,
        Degree::Octave,
    ];

    /// Zero-based index into a derived scale
    pub fn position(self) -> usize {
        match self {
            Degree::Tonic => 0,
            Degree::Supertonic => 1,
            Degree::Mediant => 2,
            Degree::Subdominant => 3,
            Degree::Dominant => 4,
            Degree::Submediant => 5,
            Degree::LeadingTone => 6,
            Degree::Octave => 7,
        }
    }

    /// Roman numeral, lower case for the minor and diminished degrees of a major key
    pub fn numeral(self) -> &'static str {
        match self {
            Degree::Tonic => "I",
            Degree::Supertonic => "ii",
            Degree::Mediant => "iii",
            Degree::Subdominant => "IV",
            Degree::Dominant => "V",
            Degree::Submediant => "vi",
            Degree::LeadingTone => "vii",
            Degree::Octave => "VIII",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.numeral())
    }
}

/// Scale types supported by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    // Major scale and modes
    Major,        // Ionian
    Dorian,       // Minor with raised 6th
    Phrygian,     // Minor with lowered 2nd
    Lydian,       // Major with raised 4th
    Mixolydian,   // Major with lowered 7th
    NaturalMinor, // Aeolian
    Locrian,      // Diminished

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,

    // Blues
    Blues,
    MajorBlues,

    // Symmetric scales
    WholeTone,
    Diminished,   // Half-whole
    DiminishedWH, // Whole-half
    Chromatic,
}

impl ScaleType {
    pub const ALL: [ScaleType; 17] = [
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::NaturalMinor,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::MajorBlues,
        ScaleType::WholeTone,
        ScaleType::Diminished,
        ScaleType::DiminishedWH,
        ScaleType::Chromatic,
    ];

    /// Semitones from the tonic for every note after it, octave included
    pub fn steps(self) -> &'static [SemiTone] {
        match self {
            ScaleType::Major => &MAJOR_STEPS,
            ScaleType::Dorian => &[2, 3, 5, 7, 9, 10, 12],
            ScaleType::Phrygian => &[1, 3, 5, 7, 8, 10, 12],
            ScaleType::Lydian => &[2, 4, 6, 7, 9, 11, 12],
            ScaleType::Mixolydian => &[2, 4, 5, 7, 9, 10, 12],
            ScaleType::NaturalMinor => &NATURAL_MINOR_STEPS,
            ScaleType::Locrian => &[1, 3, 5, 6, 8, 10, 12],

            ScaleType::HarmonicMinor => &[2, 3, 5, 7, 8, 11, 12],
            ScaleType::MelodicMinor => &[2, 3, 5, 7, 9, 11, 12],

            ScaleType::MajorPentatonic => &[2, 4, 7, 9, 12],
            ScaleType::MinorPentatonic => &[3, 5, 7, 10, 12],

            ScaleType::Blues => &[3, 5, 6, 7, 10, 12],
            ScaleType::MajorBlues => &[2, 3, 4, 7, 9, 12],

            ScaleType::WholeTone => &[2, 4, 6, 8, 10, 12],
            ScaleType::Diminished => &[1, 3, 4, 6, 7, 9, 10, 12],
            ScaleType::DiminishedWH => &[2, 3, 5, 6, 8, 9, 11, 12],
            ScaleType::Chromatic => &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        }
    }

    pub fn pattern(self) -> IntervalPattern {
        IntervalPattern::absolute(self.steps())
    }

    /// Parse scale type from string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "ionian" => Some(ScaleType::Major),
            "dorian" => Some(ScaleType::Dorian),
            "phrygian" => Some(ScaleType::Phrygian),
            "lydian" => Some(ScaleType::Lydian),
            "mixolydian" => Some(ScaleType::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Some(ScaleType::NaturalMinor),
            "locrian" => Some(ScaleType::Locrian),
            "harmonicminor" => Some(ScaleType::HarmonicMinor),
            "melodicminor" => Some(ScaleType::MelodicMinor),
            "majorpentatonic" | "pentatonicmajor" => Some(ScaleType::MajorPentatonic),
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => {
                Some(ScaleType::MinorPentatonic)
            }
            "blues" | "minorblues" => Some(ScaleType::Blues),
            "majorblues" => Some(ScaleType::MajorBlues),
            "wholetone" => Some(ScaleType::WholeTone),
            "diminished" | "octatonic" | "halfwhole" => Some(ScaleType::Diminished),
            "diminishedwh" | "wholehalf" => Some(ScaleType::DiminishedWH),
            "chromatic" => Some(ScaleType::Chromatic),
            _ => None,
        }
    }

    /// Identifier used in configuration files, accepted by [`ScaleType::parse`]
    pub fn id(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::NaturalMinor => "natural_minor",
            ScaleType::Locrian => "locrian",
            ScaleType::HarmonicMinor => "harmonic_minor",
            ScaleType::MelodicMinor => "melodic_minor",
            ScaleType::MajorPentatonic => "major_pentatonic",
            ScaleType::MinorPentatonic => "minor_pentatonic",
            ScaleType::Blues => "blues",
            ScaleType::MajorBlues => "major_blues",
            ScaleType::WholeTone => "whole_tone",
            ScaleType::Diminished => "diminished",
            ScaleType::DiminishedWH => "diminished_wh",
            ScaleType::Chromatic => "chromatic",
        }
    }

    /// Get a human-readable name for this scale type
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::MajorBlues => "Major Blues",
            ScaleType::WholeTone => "Whole Tone",
            ScaleType::Diminished => "Diminished",
            ScaleType::DiminishedWH => "Diminished (W-H)",
            ScaleType::Chromatic => "Chromatic",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A tonic note and the pattern that derives the rest of the scale
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    tonic: Note,
    pattern: IntervalPattern,
}

impl Scale {
    pub fn new(tonic: Note, pattern: IntervalPattern) -> Self {
        Self { tonic, pattern }
    }

    pub fn of_type(tonic: Note, scale_type: ScaleType) -> Self {
        Self::new(tonic, scale_type.pattern())
    }

    pub fn pattern(&self) -> &IntervalPattern {
        &self.pattern
    }

    /// Every note of the scale, tonic first
    pub fn degrees(&self) -> Result<Notes> {
        self.pattern.from_note(self.tonic)
    }

    /// Note at a named degree.
    ///
    /// Fails if the pattern is too short to reach it, e.g. asking a
    /// pentatonic scale for its leading tone.
    pub fn degree(&self, degree: Degree) -> Result<Note> {
        let notes = self.degrees()?;
        let position = degree.position();
        notes
            .get(position)
            .copied()
            .ok_or(TheoryError::DegreeOutOfRange {
                degree: position,
                len: notes.len(),
            })
    }

    pub fn tonic(&self) -> Note {
        self.tonic
    }

    pub fn supertonic(&self) -> Result<Note> {
        self.degree(Degree::Supertonic)
    }

    pub fn mediant(&self) -> Result<Note> {
        self.degree(Degree::Mediant)
    }

    pub fn subdominant(&self) -> Result<Note> {
        self.degree(Degree::Subdominant)
    }

    pub fn dominant(&self) -> Result<Note> {
        self.degree(Degree::Dominant)
    }

    pub fn submediant(&self) -> Result<Note> {
        self.degree(Degree::Submediant)
    }

    pub fn leading_tone(&self) -> Result<Note> {
        self.degree(Degree::LeadingTone)
    }

    pub fn octave(&self) -> Result<Note> {
        self.degree(Degree::Octave)
    }

    /// Check if a pitch (in any octave, any spelling) belongs to this scale
    pub fn contains(&self, pitch: Pitch) -> Result<bool> {
        let pitch_class = pitch.pitch_class();
        Ok(self
            .degrees()?
            .iter()
            .any(|note| note.pitch.pitch_class() == pitch_class))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.tonic, self.pattern.steps())
    }
}

/// Custom scale definitions that can be loaded from config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomScaleDefinition {
    /// Name of the scale
    pub name: String,
    /// How the scale is derived from its tonic
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub pattern: IntervalPattern,
}

impl CustomScaleDefinition {
    /// Create a scale from this definition
    pub fn to_scale(&self, tonic: Note) -> Scale {
        Scale::new(tonic, self.pattern.clone())
    }
}

/// Registry for custom scale definitions
#[derive(Debug, Clone, Default)]
pub struct ScaleRegistry {
    custom_scales: HashMap<String, CustomScaleDefinition>,
}

impl ScaleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom scale
    pub fn register(&mut self, def: CustomScaleDefinition) {
        self.custom_scales.insert(def.name.clone(), def);
    }

    /// Get a pattern by name (checks custom first, then built-in)
    pub fn get_pattern(&self, name: &str) -> Option<IntervalPattern> {
        if let Some(def) = self.custom_scales.get(name) {
            return Some(def.pattern.clone());
        }

        ScaleType::parse(name).map(ScaleType::pattern)
    }

    pub fn get_scale(&self, tonic: Note, name: &str) -> Option<Scale> {
        self.get_pattern(name).map(|pattern| Scale::new(tonic, pattern))
    }

    /// List all available scale names
    pub fn available_scales(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_scales.keys().cloned().collect();

        names.extend(ScaleType::ALL.iter().map(|t| t.id().to_string()));
        names.sort();
        names.dedup();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::interval::MAJOR_THIRD;
    use crate::music::pitch::{A, B, C, D, E, F, G};

    fn pitches(notes: &[Note]) -> Vec<Pitch> {
        notes.iter().map(|n| n.pitch).collect()
    }

    #[test]
    fn test_c_major_degrees() {
        let scale = Scale::new(C.at_octave(4), MAJOR_SCALE);
        let notes = scale.degrees().unwrap();
        assert_eq!(pitches(&notes), vec![C, D, E, F, G, A, B, C]);
        assert_eq!(notes.first(), Some(&C.at_octave(4)));
        assert_eq!(notes.last(), Some(&C.at_octave(5)));
    }

    #[test]
    fn test_named_degrees() {
        let scale = Scale::of_type(G.at_octave(3), ScaleType::Major);
        assert_eq!(scale.tonic(), G.at_octave(3));
        assert_eq!(scale.supertonic().unwrap(), A.at_octave(3));
        assert_eq!(scale.mediant().unwrap(), B.at_octave(3));
        assert_eq!(scale.subdominant().unwrap(), C.at_octave(4));
        assert_eq!(scale.dominant().unwrap(), D.at_octave(4));
        assert_eq!(scale.submediant().unwrap(), E.at_octave(4));
        assert_eq!(scale.leading_tone().unwrap(), F.sharp().at_octave(4));
        assert_eq!(scale.octave().unwrap(), G.at_octave(4));
    }

    #[test]
    fn test_short_pattern_degree_fails() {
        let scale = Scale::of_type(C.at_octave(4), ScaleType::MajorPentatonic);
        assert_eq!(scale.dominant().unwrap(), A.at_octave(4));
        assert_eq!(
            scale.octave(),
            Err(TheoryError::DegreeOutOfRange { degree: 7, len: 6 })
        );
        assert!(scale.leading_tone().is_err());
    }

    #[test]
    fn test_scale_near_top_fails() {
        let scale = Scale::of_type(G.at_octave(8), ScaleType::Major);
        assert!(scale.degrees().unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_scale_type_steps_end_at_octave() {
        for scale_type in ScaleType::ALL {
            assert_eq!(scale_type.steps().last(), Some(&12), "{}", scale_type);
            let steps = scale_type.steps();
            assert!(steps.windows(2).all(|w| w[0] < w[1]), "{}", scale_type);
        }
    }

    #[test]
    fn test_scale_type_parse() {
        assert_eq!(ScaleType::parse("major"), Some(ScaleType::Major));
        assert_eq!(ScaleType::parse("Minor"), Some(ScaleType::NaturalMinor));
        assert_eq!(ScaleType::parse("harmonic_minor"), Some(ScaleType::HarmonicMinor));
        assert_eq!(ScaleType::parse("whole tone"), Some(ScaleType::WholeTone));
        assert_eq!(ScaleType::parse("unknown"), None);
    }

    #[test]
    fn test_contains() {
        let scale = Scale::of_type(D.at_octave(4), ScaleType::Major);
        assert!(scale.contains(F.sharp()).unwrap());
        assert!(scale.contains("Gb".parse().unwrap()).unwrap());
        assert!(!scale.contains(F).unwrap());
    }

    #[test]
    fn test_degree_numerals() {
        let numerals: Vec<String> = Degree::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(numerals, ["I", "ii", "iii", "IV", "V", "vi", "vii", "VIII"]);
    }

    #[test]
    fn test_scale_registry() {
        let mut registry = ScaleRegistry::new();
        registry.register(CustomScaleDefinition {
            name: "stacked_thirds".to_string(),
            pattern: IntervalPattern::stacked(&[MAJOR_THIRD, MAJOR_THIRD, MAJOR_THIRD]),
        });

        let custom = registry.get_scale(C.at_octave(4), "stacked_thirds").unwrap();
        assert_eq!(
            custom.degrees().unwrap(),
            vec![
                C.at_octave(4),
                E.at_octave(4),
                G.sharp().at_octave(4),
                C.at_octave(5)
            ]
        );

        assert!(registry.get_scale(C.at_octave(4), "dorian").is_some());
        assert!(registry.get_pattern("nonexistent").is_none());
        assert!(registry.available_scales().contains(&"stacked_thirds".to_string()));
    }

    #[test]
    fn test_available_scales_cover_every_type() {
        let registry = ScaleRegistry::new();
        let names = registry.available_scales();
        assert_eq!(names.len(), ScaleType::ALL.len());
        assert!(names.contains(&"diminished_wh".to_string()));

        for scale_type in ScaleType::ALL {
            assert_eq!(ScaleType::parse(scale_type.id()), Some(scale_type));
        }
        for name in &names {
            assert!(registry.get_pattern(name).is_some(), "{}", name);
        }
    }
}
