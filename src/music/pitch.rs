// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch spelling and the circular pitch-class ring.
//!
//! A [`Pitch`] is a spelling (letter plus accidental) kept for display.
//! Arithmetic never looks at the spelling directly: every pitch is first
//! mapped to its position on the twelve-element ring, a [`PitchClass`],
//! and moved there.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::interval::{SemiTone, SEMITONES_PER_OCTAVE};
use super::note::{Note, Octave};
use crate::error::{Result, TheoryError};

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in ascending order from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Ring position of the natural form of this letter
    pub fn natural_position(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Step through the letter names, wrapping from B back to C
    pub fn offset(self, steps: i32) -> Letter {
        let steps = steps.rem_euclid(7);
        Letter::ALL[(self as usize + steps as usize) % 7]
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = TheoryError;

    fn try_from(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Letter::C),
            'D' => Ok(Letter::D),
            'E' => Ok(Letter::E),
            'F' => Ok(Letter::F),
            'G' => Ok(Letter::G),
            'A' => Ok(Letter::A),
            'B' => Ok(Letter::B),
            other => Err(TheoryError::InvalidSpelling(format!(
                "'{}' is not a note letter",
                other
            ))),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidentals that may be attached to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
    DoubleSharp,
    DoubleFlat,
}

impl Accidental {
    /// Unicode symbol used when rendering a pitch
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::Flat => "♭",
            Accidental::DoubleSharp => "♯♯",
            Accidental::DoubleFlat => "♭♭",
        }
    }

    /// Signed semitone alteration applied to the natural letter
    pub fn shift(self) -> SemiTone {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
            Accidental::DoubleSharp => 2,
            Accidental::DoubleFlat => -2,
        }
    }

    /// Accidental producing the given alteration, if one exists
    pub fn from_shift(shift: SemiTone) -> Option<Self> {
        match shift {
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            -1 => Some(Accidental::Flat),
            2 => Some(Accidental::DoubleSharp),
            -2 => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "♮" => Some(Accidental::Natural),
            "#" | "♯" | "s" => Some(Accidental::Sharp),
            "b" | "♭" => Some(Accidental::Flat),
            "##" | "♯♯" | "x" | "𝄪" => Some(Accidental::DoubleSharp),
            "bb" | "♭♭" | "𝄫" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Position on the twelve-element pitch-class ring (0 = C, 11 = B)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build from any integer, wrapping onto the ring
    pub fn from_index(index: i32) -> Self {
        PitchClass(index.rem_euclid(SEMITONES_PER_OCTAVE) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// The ring member at this position
    pub fn canonical(self) -> Pitch {
        CIRCULAR_PITCH_CLASS[self.0 as usize]
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

/// A spelled pitch: a letter and an accidental.
///
/// Equality is equality of spelling. Use [`Pitch::pitch_class`] or
/// [`Pitch::is_enharmonic`] to compare sounding pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub letter: Letter,
    #[serde(default)]
    pub accidental: Accidental,
}

pub const C: Pitch = Pitch::natural(Letter::C);
pub const D: Pitch = Pitch::natural(Letter::D);
pub const E: Pitch = Pitch::natural(Letter::E);
pub const F: Pitch = Pitch::natural(Letter::F);
pub const G: Pitch = Pitch::natural(Letter::G);
pub const A: Pitch = Pitch::natural(Letter::A);
pub const B: Pitch = Pitch::natural(Letter::B);

/// The twelve pitch classes in chromatic order starting at C
pub const CIRCULAR_PITCH_CLASS: [Pitch; 12] = [
    C,
    Pitch::new(Letter::C, Accidental::Sharp),
    D,
    Pitch::new(Letter::D, Accidental::Sharp),
    E,
    F,
    Pitch::new(Letter::F, Accidental::Sharp),
    G,
    Pitch::new(Letter::G, Accidental::Sharp),
    A,
    Pitch::new(Letter::A, Accidental::Sharp),
    B,
];

// A flat lowers the natural by one step; below C it wraps to B.
fn lower_one(position: u8) -> u8 {
    if position != 0 {
        position - 1
    } else {
        Letter::B.natural_position()
    }
}

fn raise_one(position: u8) -> u8 {
    if position != Letter::B.natural_position() {
        position + 1
    } else {
        Letter::C.natural_position()
    }
}

/// Canonical ring index of a pitch, whatever its spelling.
///
/// Double accidentals apply the single-step rule twice.
pub fn position(pitch: Pitch) -> u8 {
    let natural = pitch.letter.natural_position();
    match pitch.accidental {
        Accidental::Natural => natural,
        Accidental::Sharp => raise_one(natural),
        Accidental::Flat => lower_one(natural),
        Accidental::DoubleSharp => raise_one(raise_one(natural)),
        Accidental::DoubleFlat => lower_one(lower_one(natural)),
    }
}

/// Ring member `semitones` away from `pitch`, in either direction
pub fn move_from(pitch: Pitch, semitones: SemiTone) -> Pitch {
    PitchClass::from_index(
        position(pitch) as SemiTone + semitones.rem_euclid(SEMITONES_PER_OCTAVE),
    )
    .canonical()
}

impl Pitch {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// The same letter spelled sharp
    pub fn sharp(self) -> Self {
        Self::new(self.letter, Accidental::Sharp)
    }

    /// The same letter spelled flat
    pub fn flat(self) -> Self {
        Self::new(self.letter, Accidental::Flat)
    }

    /// The same letter without accidental
    pub fn to_natural(self) -> Self {
        Self::natural(self.letter)
    }

    pub fn position(self) -> u8 {
        position(self)
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass(position(self))
    }

    /// Place this pitch in a register
    pub fn at_octave(self, octave: Octave) -> Note {
        Note::new(self, octave)
    }

    pub fn move_by(self, semitones: SemiTone) -> Self {
        move_from(self, semitones)
    }

    pub fn up(self, semitones: SemiTone) -> Self {
        move_from(self, semitones)
    }

    pub fn down(self, semitones: SemiTone) -> Self {
        move_from(self, -semitones)
    }

    /// Signed distance on the ring from this pitch to `other` (-11..=11)
    pub fn interval(self, other: Pitch) -> SemiTone {
        position(other) as SemiTone - position(self) as SemiTone
    }

    pub fn is_enharmonic(self, other: Pitch) -> bool {
        position(self) == position(other)
    }

    /// Spell this pitch's ring position on `letter`.
    ///
    /// Fails when more than a double accidental would be required.
    pub fn respell(self, letter: Letter) -> Result<Pitch> {
        let mut shift = (position(self) as SemiTone - letter.natural_position() as SemiTone)
            .rem_euclid(SEMITONES_PER_OCTAVE);
        if shift > SEMITONES_PER_OCTAVE / 2 {
            shift -= SEMITONES_PER_OCTAVE;
        }

        Accidental::from_shift(shift)
            .map(|accidental| Pitch::new(letter, accidental))
            .ok_or_else(|| {
                TheoryError::InvalidSpelling(format!("{} cannot be spelled on {}", self, letter))
            })
    }

    /// Every spelling, at most a double accidental away, of this position
    pub fn enharmonic_spellings(self) -> Vec<Pitch> {
        Letter::ALL
            .iter()
            .filter_map(|&letter| self.respell(letter).ok())
            .collect()
    }
}

impl From<Letter> for Pitch {
    fn from(letter: Letter) -> Self {
        Pitch::natural(letter)
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    /// Parse "C", "C#", "C♯", "Db", "Bbb", "F##", "Fx" and similar
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| TheoryError::InvalidSpelling("empty pitch".to_string()))
            .and_then(Letter::try_from)?;
        let accidental = Accidental::parse(chars.as_str())
            .ok_or_else(|| TheoryError::InvalidSpelling(format!("unknown accidental in '{}'", s)))?;
        Ok(Pitch::new(letter, accidental))
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}
