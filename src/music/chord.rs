// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord labels, triads and seventh chords.
//!
//! Pitch content comes from two closed tables: triads are stacked thirds,
//! seventh chords are absolute distances from the root. A [`Chord`] is a
//! label (root, quality, interval number) that resolves to one of those
//! patterns when the combination is covered.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::interval::{
    IntervalPattern, SemiTone, AUGMENTED_FIFTH, DIMINISHED_FIFTH, DIMINISHED_SEVENTH,
    MAJOR_SEVENTH, MAJOR_THIRD, MINOR_SEVENTH, MINOR_THIRD, OCTAVE, PERFECT_FIFTH,
};
use super::note::{Note, Notes};
use crate::error::{Result, TheoryError};

pub const MAJOR_TRIAD: IntervalPattern = IntervalPattern::stacked(&[
    MAJOR_THIRD, // 4 semitones from root
    MINOR_THIRD, // perfect fifth, 7 from root
]);

pub const MINOR_TRIAD: IntervalPattern = IntervalPattern::stacked(&[
    MINOR_THIRD, // 3 semitones from root
    MAJOR_THIRD, // perfect fifth, 7 from root
]);

pub const DIMINISHED_TRIAD: IntervalPattern = IntervalPattern::stacked(&[
    MINOR_THIRD, // 3 semitones from root
    MINOR_THIRD, // diminished fifth, 6 from root
]);

pub const AUGMENTED_TRIAD: IntervalPattern = IntervalPattern::stacked(&[
    MAJOR_THIRD, // 4 semitones from root
    MAJOR_THIRD, // augmented fifth, 8 from root
]);

pub const MAJOR_SEVENTH_CHORD: IntervalPattern =
    IntervalPattern::absolute(&[MAJOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH]);
pub const MINOR_SEVENTH_CHORD: IntervalPattern =
    IntervalPattern::absolute(&[MINOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH]);
pub const DOMINANT_SEVENTH: IntervalPattern =
    IntervalPattern::absolute(&[MAJOR_THIRD, PERFECT_FIFTH, MINOR_SEVENTH]);
pub const DIMINISHED_SEVENTH_CHORD: IntervalPattern =
    IntervalPattern::absolute(&[MINOR_THIRD, DIMINISHED_FIFTH, DIMINISHED_SEVENTH]);
pub const HALF_DIMINISHED_SEVENTH: IntervalPattern =
    IntervalPattern::absolute(&[MINOR_THIRD, DIMINISHED_FIFTH, MINOR_SEVENTH]);
pub const MINOR_MAJOR_SEVENTH: IntervalPattern =
    IntervalPattern::absolute(&[MINOR_THIRD, PERFECT_FIFTH, MAJOR_SEVENTH]);
pub const AUGMENTED_MAJOR_SEVENTH: IntervalPattern =
    IntervalPattern::absolute(&[MAJOR_THIRD, AUGMENTED_FIFTH, MAJOR_SEVENTH]);
pub const AUGMENTED_SEVENTH_CHORD: IntervalPattern =
    IntervalPattern::absolute(&[MAJOR_THIRD, AUGMENTED_FIFTH, MINOR_SEVENTH]);
pub const DOMINANT_FLAT_FIVE_SEVENTH: IntervalPattern =
    IntervalPattern::absolute(&[MAJOR_THIRD, DIMINISHED_FIFTH, MINOR_SEVENTH]);

/// Chord quality label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    HalfDiminished,
    Dominant,
    Augmented,
}

impl Quality {
    pub fn symbol(self) -> &'static str {
        match self {
            Quality::Major => "maj",          // Δ, M
            Quality::Minor => "min",          // -
            Quality::Diminished => "dim",     // o, °
            Quality::HalfDiminished => "ø",   // Ø
            Quality::Dominant => "dom",       // 7
            Quality::Augmented => "aug",      // +
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Highest interval number a chord reaches above its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalNumber {
    Third,
    Fifth,
    Sixth,
    Seventh,
    Ninth,
    Eleventh,
    Thirteenth,
}

impl IntervalNumber {
    /// A plain triad is labelled by its third
    pub const TRIAD: IntervalNumber = IntervalNumber::Third;
    pub const INDETERMINATE: IntervalNumber = IntervalNumber::Fifth;
    pub const NEUTRAL: IntervalNumber = IntervalNumber::Fifth;

    pub fn number(self) -> u8 {
        match self {
            IntervalNumber::Third => 3,
            IntervalNumber::Fifth => 5,
            IntervalNumber::Sixth => 6,
            IntervalNumber::Seventh => 7,
            IntervalNumber::Ninth => 9,
            IntervalNumber::Eleventh => 11,
            IntervalNumber::Thirteenth => 13,
        }
    }

    /// Superscript shown after the quality; triads show nothing
    pub fn superscript(self) -> &'static str {
        match self {
            IntervalNumber::Third => "",
            IntervalNumber::Fifth => "⁵",
            IntervalNumber::Sixth => "⁶",
            IntervalNumber::Seventh => "⁷",
            IntervalNumber::Ninth => "⁹",
            IntervalNumber::Eleventh => "¹¹",
            IntervalNumber::Thirteenth => "¹³",
        }
    }
}

impl fmt::Display for IntervalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.superscript())
    }
}

/// Interval from which a chord is built up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Major and minor seconds, e.g. C-D-E♭
    Secundal,
    /// Major and minor thirds, e.g. C-E-G. Most common chords are tertian.
    Tertian,
    /// Perfect and augmented fourths, e.g. C-F-B
    Quartal,
    /// Perfect fifths
    Quintal,
}

impl Category {
    /// Category of a single step between adjacent chord tones
    pub fn of_interval(semitones: SemiTone) -> Option<Category> {
        match semitones {
            1 | 2 => Some(Category::Secundal),
            3 | 4 => Some(Category::Tertian),
            5 | 6 => Some(Category::Quartal),
            7 => Some(Category::Quintal),
            _ => None,
        }
    }

    /// Classify ascending chord tones by the intervals between neighbours.
    ///
    /// Every adjacent pair must fall in the same category; mixed or
    /// out-of-range steps, and chords of fewer than two notes, yield `None`.
    pub fn classify(notes: &[Note]) -> Option<Category> {
        let mut steps = notes.windows(2).map(|pair| pair[0].interval(&pair[1]));
        let first = Category::of_interval(steps.next()?)?;
        steps
            .all(|step| Category::of_interval(step) == Some(first))
            .then_some(first)
    }
}

/// The four triad shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadType {
    Major,
    Minor,
    Diminished,
    Augmented,
}

impl TriadType {
    pub fn pattern(self) -> IntervalPattern {
        match self {
            TriadType::Major => MAJOR_TRIAD,
            TriadType::Minor => MINOR_TRIAD,
            TriadType::Diminished => DIMINISHED_TRIAD,
            TriadType::Augmented => AUGMENTED_TRIAD,
        }
    }

    pub fn quality(self) -> Quality {
        match self {
            TriadType::Major => Quality::Major,
            TriadType::Minor => Quality::Minor,
            TriadType::Diminished => Quality::Diminished,
            TriadType::Augmented => Quality::Augmented,
        }
    }
}

/// Root, third and fifth, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triad {
    notes: [Note; 3],
}

impl Triad {
    pub fn new(root: Note, third: Note, fifth: Note) -> Self {
        Self {
            notes: [root, third, fifth],
        }
    }

    pub fn from_pattern(root: Note, triad_type: TriadType) -> Result<Self> {
        let notes = triad_type.pattern().from_note(root)?;
        match notes.as_slice() {
            &[root, third, fifth] => Ok(Triad::new(root, third, fifth)),
            _ => Err(TheoryError::DegreeOutOfRange {
                degree: 2,
                len: notes.len(),
            }),
        }
    }

    pub fn root(&self) -> Note {
        self.notes[0]
    }

    pub fn third(&self) -> Note {
        self.notes[1]
    }

    pub fn fifth(&self) -> Note {
        self.notes[2]
    }

    pub fn notes(&self) -> [Note; 3] {
        self.notes
    }

    /// Rotate the lowest note to the top `number` times.
    ///
    /// Each rotation moves the bass up an octave, keeping its spelling.
    pub fn inversion(&self, number: usize) -> Result<Triad> {
        let mut notes = self.notes;
        for _ in 0..number {
            let bass = notes[0];
            bass.raise(OCTAVE)?;
            notes = [notes[1], notes[2], Note::new(bass.pitch, bass.octave + 1)];
        }
        Ok(Triad { notes })
    }
}

impl fmt::Display for Triad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.notes[0], self.notes[1], self.notes[2])
    }
}

/// The closed table of seventh chord types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeventhType {
    Major,
    Minor,
    Dominant,
    Diminished,
    HalfDiminished,
    MinorMajor,
    AugmentedMajor,
    Augmented,
    DominantFlatFive,
}

impl SeventhType {
    pub const ALL: [SeventhType; 9] = [
        SeventhType::Major,
        SeventhType::Minor,
        SeventhType::Dominant,
        SeventhType::Diminished,
        SeventhType::HalfDiminished,
        SeventhType::MinorMajor,
        SeventhType::AugmentedMajor,
        SeventhType::Augmented,
        SeventhType::DominantFlatFive,
    ];

    pub fn pattern(self) -> IntervalPattern {
        match self {
            SeventhType::Major => MAJOR_SEVENTH_CHORD,
            SeventhType::Minor => MINOR_SEVENTH_CHORD,
            SeventhType::Dominant => DOMINANT_SEVENTH,
            SeventhType::Diminished => DIMINISHED_SEVENTH_CHORD,
            SeventhType::HalfDiminished => HALF_DIMINISHED_SEVENTH,
            SeventhType::MinorMajor => MINOR_MAJOR_SEVENTH,
            SeventhType::AugmentedMajor => AUGMENTED_MAJOR_SEVENTH,
            SeventhType::Augmented => AUGMENTED_SEVENTH_CHORD,
            SeventhType::DominantFlatFive => DOMINANT_FLAT_FIVE_SEVENTH,
        }
    }

    pub fn quality(self) -> Quality {
        match self {
            SeventhType::Major => Quality::Major,
            SeventhType::Minor | SeventhType::MinorMajor => Quality::Minor,
            SeventhType::Dominant | SeventhType::DominantFlatFive => Quality::Dominant,
            SeventhType::Diminished => Quality::Diminished,
            SeventhType::HalfDiminished => Quality::HalfDiminished,
            SeventhType::AugmentedMajor | SeventhType::Augmented => Quality::Augmented,
        }
    }

    /// Chord symbol suffix, e.g. `maj⁷` for C major seventh
    pub fn symbol(self) -> &'static str {
        match self {
            SeventhType::Major => "maj⁷",
            SeventhType::Minor => "min⁷",
            SeventhType::Dominant => "⁷",
            SeventhType::Diminished => "°⁷",
            SeventhType::HalfDiminished => "ø⁷",
            SeventhType::MinorMajor => "m maj⁷",
            SeventhType::AugmentedMajor => "+maj⁷",
            SeventhType::Augmented => "aug⁷",
            SeventhType::DominantFlatFive => "⁷♭⁵",
        }
    }

    /// Parse seventh type from string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "maj" | "maj7" => Some(SeventhType::Major),
            "minor" | "min" | "min7" | "m7" => Some(SeventhType::Minor),
            "dominant" | "dom" | "7" => Some(SeventhType::Dominant),
            "diminished" | "dim" | "dim7" => Some(SeventhType::Diminished),
            "halfdiminished" | "m7b5" => Some(SeventhType::HalfDiminished),
            "minormajor" | "mmaj7" => Some(SeventhType::MinorMajor),
            "augmentedmajor" | "augmaj7" => Some(SeventhType::AugmentedMajor),
            "augmented" | "aug" | "aug7" => Some(SeventhType::Augmented),
            "dominantflatfive" | "7b5" => Some(SeventhType::DominantFlatFive),
            _ => None,
        }
    }
}

/// A triad with a seventh on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seventh {
    pub triad: Triad,
    pub seventh: Note,
}

impl Seventh {
    pub fn from_pattern(root: Note, seventh_type: SeventhType) -> Result<Self> {
        let notes = seventh_type.pattern().from_note(root)?;
        match notes.as_slice() {
            &[root, third, fifth, seventh] => Ok(Seventh {
                triad: Triad::new(root, third, fifth),
                seventh,
            }),
            _ => Err(TheoryError::DegreeOutOfRange {
                degree: 3,
                len: notes.len(),
            }),
        }
    }

    pub fn notes(&self) -> [Note; 4] {
        let [root, third, fifth] = self.triad.notes();
        [root, third, fifth, self.seventh]
    }
}

/// A chord label: root, quality and highest interval number.
///
/// This wraps the tables above for display and classification; it does not
/// build arbitrary quality/number combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    pub root: Note,
    pub quality: Quality,
    pub number: IntervalNumber,
}

impl Chord {
    pub fn new(root: Note, quality: Quality, number: IntervalNumber) -> Self {
        Self {
            root,
            quality,
            number,
        }
    }

    /// Pattern for the combinations covered by the triad and seventh tables
    pub fn pattern(&self) -> Option<IntervalPattern> {
        match (self.quality, self.number) {
            (Quality::Major, IntervalNumber::Third) => Some(TriadType::Major.pattern()),
            (Quality::Minor, IntervalNumber::Third) => Some(TriadType::Minor.pattern()),
            (Quality::Diminished, IntervalNumber::Third) => Some(TriadType::Diminished.pattern()),
            (Quality::Augmented, IntervalNumber::Third) => Some(TriadType::Augmented.pattern()),
            (Quality::Major, IntervalNumber::Seventh) => Some(SeventhType::Major.pattern()),
            (Quality::Minor, IntervalNumber::Seventh) => Some(SeventhType::Minor.pattern()),
            (Quality::Dominant, IntervalNumber::Seventh) => Some(SeventhType::Dominant.pattern()),
            (Quality::Diminished, IntervalNumber::Seventh) => {
                Some(SeventhType::Diminished.pattern())
            }
            (Quality::HalfDiminished, IntervalNumber::Seventh) => {
                Some(SeventhType::HalfDiminished.pattern())
            }
            (Quality::Augmented, IntervalNumber::Seventh) => {
                Some(SeventhType::Augmented.pattern())
            }
            _ => None,
        }
    }

    pub fn notes(&self) -> Result<Notes> {
        self.pattern()
            .ok_or_else(|| TheoryError::UnsupportedChord(self.to_string()))?
            .from_note(self.root)
    }

    /// Category derived from the chord's notes
    pub fn category(&self) -> Result<Option<Category>> {
        Ok(Category::classify(&self.notes()?))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.root.pitch, self.quality, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::pitch::{Accidental, Letter, Pitch, A, B, C, D, E, F, G};

    fn b_flat() -> Pitch {
        Pitch::new(Letter::B, Accidental::Flat)
    }

    #[test]
    fn test_triads() {
        let c4 = C.at_octave(4);
        let major = Triad::from_pattern(c4, TriadType::Major).unwrap();
        assert_eq!(major.notes(), [c4, E.at_octave(4), G.at_octave(4)]);

        let minor = Triad::from_pattern(A.at_octave(3), TriadType::Minor).unwrap();
        assert_eq!(minor.third(), C.at_octave(4));
        assert_eq!(minor.fifth(), E.at_octave(4));

        let diminished = Triad::from_pattern(B.at_octave(3), TriadType::Diminished).unwrap();
        assert_eq!(diminished.fifth(), F.at_octave(4));

        let augmented = Triad::from_pattern(c4, TriadType::Augmented).unwrap();
        assert_eq!(augmented.fifth(), G.sharp().at_octave(4));
    }

    #[test]
    fn test_inversions() {
        let triad = Triad::from_pattern(C.at_octave(4), TriadType::Major).unwrap();

        let first = triad.inversion(1).unwrap();
        assert_eq!(first.notes(), [E.at_octave(4), G.at_octave(4), C.at_octave(5)]);

        let second = triad.inversion(2).unwrap();
        assert_eq!(second.notes(), [G.at_octave(4), C.at_octave(5), E.at_octave(5)]);

        let third = triad.inversion(3).unwrap();
        assert_eq!(third.notes(), [C.at_octave(5), E.at_octave(5), G.at_octave(5)]);

        assert_eq!(triad.inversion(0).unwrap(), triad);
    }

    #[test]
    fn test_inversion_keeps_spelling() {
        let root = b_flat().at_octave(3);
        let triad = Triad::from_pattern(root, TriadType::Major).unwrap();
        let first = triad.inversion(1).unwrap();
        assert_eq!(first.fifth().pitch, b_flat());
        assert_eq!(first.fifth().octave, 4);
    }

    #[test]
    fn test_inversion_out_of_range() {
        let triad = Triad::from_pattern(C.at_octave(8), TriadType::Major).unwrap();
        assert!(triad.inversion(1).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_dominant_seventh() {
        let chord = Seventh::from_pattern(C.at_octave(4), SeventhType::Dominant).unwrap();
        assert_eq!(
            chord.notes(),
            [
                C.at_octave(4),
                E.at_octave(4),
                G.at_octave(4),
                b_flat().at_octave(4)
            ]
        );
    }

    #[test]
    fn test_seventh_table() {
        let root = C.at_octave(4);
        let expected: [(SeventhType, [i32; 3]); 9] = [
            (SeventhType::Major, [4, 7, 11]),
            (SeventhType::Minor, [3, 7, 10]),
            (SeventhType::Dominant, [4, 7, 10]),
            (SeventhType::Diminished, [3, 6, 9]),
            (SeventhType::HalfDiminished, [3, 6, 10]),
            (SeventhType::MinorMajor, [3, 7, 11]),
            (SeventhType::AugmentedMajor, [4, 8, 11]),
            (SeventhType::Augmented, [4, 8, 10]),
            (SeventhType::DominantFlatFive, [4, 6, 10]),
        ];

        for (seventh_type, steps) in expected {
            let chord = Seventh::from_pattern(root, seventh_type).unwrap();
            let notes = chord.notes();
            let distances: Vec<i32> = notes[1..].iter().map(|n| root.interval(n)).collect();
            assert_eq!(distances, steps, "{:?}", seventh_type);
        }
    }

    #[test]
    fn test_seventh_type_parse() {
        assert_eq!(SeventhType::parse("dominant"), Some(SeventhType::Dominant));
        assert_eq!(SeventhType::parse("half-diminished"), Some(SeventhType::HalfDiminished));
        assert_eq!(SeventhType::parse("maj7"), Some(SeventhType::Major));
        assert_eq!(SeventhType::parse("sus4"), None);
        for seventh_type in SeventhType::ALL {
            assert!(!seventh_type.symbol().is_empty());
        }
    }

    #[test]
    fn test_chord_pattern_lookup() {
        let chord = Chord::new(G.at_octave(3), Quality::Dominant, IntervalNumber::Seventh);
        assert_eq!(chord.pattern(), Some(DOMINANT_SEVENTH));
        assert_eq!(
            chord.notes().unwrap(),
            vec![
                G.at_octave(3),
                B.at_octave(3),
                D.at_octave(4),
                F.at_octave(4)
            ]
        );

        let triad = Chord::new(D.at_octave(4), Quality::Minor, IntervalNumber::TRIAD);
        assert_eq!(triad.pattern(), Some(MINOR_TRIAD));

        let ninth = Chord::new(C.at_octave(4), Quality::Dominant, IntervalNumber::Ninth);
        assert_eq!(ninth.pattern(), None);
        assert!(matches!(ninth.notes(), Err(TheoryError::UnsupportedChord(_))));
    }

    #[test]
    fn test_chord_display() {
        let chord = Chord::new(C.at_octave(4), Quality::Major, IntervalNumber::Seventh);
        assert_eq!(chord.to_string(), "Cmaj⁷");

        let chord = Chord::new(F.sharp().at_octave(3), Quality::Minor, IntervalNumber::Third);
        assert_eq!(chord.to_string(), "F♯min");

        let chord = Chord::new(
            b_flat().at_octave(2),
            Quality::HalfDiminished,
            IntervalNumber::Seventh,
        );
        assert_eq!(chord.to_string(), "B♭ø⁷");

        assert_eq!(IntervalNumber::Thirteenth.to_string(), "¹³");
        assert_eq!(IntervalNumber::NEUTRAL, IntervalNumber::INDETERMINATE);
    }

    #[test]
    fn test_category_classify() {
        let c4 = C.at_octave(4);
        let tertian = DOMINANT_SEVENTH.from_note(c4).unwrap();
        assert_eq!(Category::classify(&tertian), Some(Category::Tertian));

        let secundal = [c4, D.at_octave(4), Pitch::new(Letter::E, Accidental::Flat).at_octave(4)];
        assert_eq!(Category::classify(&secundal), Some(Category::Secundal));

        let quartal = [c4, F.at_octave(4), B.at_octave(4)];
        assert_eq!(Category::classify(&quartal), Some(Category::Quartal));

        let quintal = [c4, G.at_octave(4), D.at_octave(5)];
        assert_eq!(Category::classify(&quintal), Some(Category::Quintal));

        let mixed = [c4, D.at_octave(4), G.at_octave(4)];
        assert_eq!(Category::classify(&mixed), None);

        assert_eq!(Category::classify(&[c4]), None);
    }

    // Category comes from the chord's notes, never from a stored tag
    #[test]
    fn test_chord_category_is_derived() {
        let chord = Chord::new(C.at_octave(4), Quality::Diminished, IntervalNumber::Seventh);
        assert_eq!(chord.category().unwrap(), Some(Category::Tertian));

        let augmented = Chord::new(C.at_octave(4), Quality::Augmented, IntervalNumber::Seventh);
        // C E G♯ B♭: the last step is a major second
        assert_eq!(augmented.category().unwrap(), None);
    }
}
