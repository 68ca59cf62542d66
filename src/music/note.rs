// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notes, octaves and the global pitch space.
//!
//! A note is a spelled pitch placed in an octave. Its index
//! (`ring position + octave * 12`) embeds every note into the integers and
//! is the only thing used for ordering and equality, so `C♯4 == D♭4`.
//!
//! Raising a note goes through [`pitch_space`], a table of every note from
//! [`LOWEST_OCTAVE`] to [`HIGHEST_OCTAVE`] built once on first use and never
//! mutated afterwards.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interval::{IntervalPattern, SemiTone, SEMITONES_PER_OCTAVE};
use super::pitch::{Pitch, A, CIRCULAR_PITCH_CLASS};
use super::scale::ScaleType;
use crate::error::{Result, TheoryError};

/// Octave register index
pub type Octave = i32;

pub const LOWEST_OCTAVE: Octave = 0;
pub const HIGHEST_OCTAVE: Octave = 8;

/// Frequency of A in the concert octave, in Hz
pub const CONCERT_PITCH: f64 = 440.0;

/// Octave holding the concert A
pub const CONCERT_OCTAVE: Octave = 4;

/// 2^(1/12)
pub const TWELFTH_ROOT_OF_2: f64 = 1.059_463_094_359_295_3;

/// Ordered sequence of notes produced by derivations
pub type Notes = Vec<Note>;

static PITCH_SPACE: Lazy<Vec<Note>> = Lazy::new(|| {
    let space: Vec<Note> = (LOWEST_OCTAVE..=HIGHEST_OCTAVE)
        .flat_map(|octave| {
            CIRCULAR_PITCH_CLASS
                .iter()
                .map(move |&pitch| Note::new(pitch, octave))
        })
        .collect();
    debug!(
        notes = space.len(),
        lowest = LOWEST_OCTAVE,
        highest = HIGHEST_OCTAVE,
        "built pitch space"
    );
    space
});

/// Every supported note, lowest first, spelled from the pitch-class ring
pub fn pitch_space() -> &'static [Note] {
    &PITCH_SPACE
}

/// Reference used to turn notes into frequencies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Frequency of A in the concert octave
    #[serde(default = "default_concert_pitch")]
    pub concert_pitch: f64,
    /// Octave holding that A
    #[serde(default = "default_concert_octave")]
    pub concert_octave: Octave,
}

fn default_concert_pitch() -> f64 {
    CONCERT_PITCH
}
fn default_concert_octave() -> Octave {
    CONCERT_OCTAVE
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            concert_pitch: default_concert_pitch(),
            concert_octave: default_concert_octave(),
        }
    }
}

impl Tuning {
    /// The note sounding at `concert_pitch`
    pub fn reference_note(&self) -> Note {
        Note::new(A, self.concert_octave)
    }
}

/// A pitch in a particular octave
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Note {
    pub pitch: Pitch,
    pub octave: Octave,
}

impl Note {
    pub const fn new(pitch: Pitch, octave: Octave) -> Self {
        Self { pitch, octave }
    }

    /// Concert A with the default tuning
    pub fn concert_pitch() -> Self {
        Tuning::default().reference_note()
    }

    /// Linear position of this note in pitch space.
    ///
    /// Widened to `i64` so any octave plus any `SemiTone` offset stays exact.
    pub fn index(&self) -> i64 {
        let octave_start = i64::from(self.octave) * i64::from(SEMITONES_PER_OCTAVE);
        octave_start + i64::from(self.pitch.position())
    }

    /// The note `semitones` away, looked up in the pitch space.
    ///
    /// Results are spelled from the pitch-class ring. Leaving the supported
    /// octave range is an error, never a wrap.
    pub fn raise(&self, semitones: SemiTone) -> Result<Note> {
        self.step(i64::from(semitones))
    }

    pub fn lower(&self, semitones: SemiTone) -> Result<Note> {
        self.step(-i64::from(semitones))
    }

    fn step(&self, semitones: i64) -> Result<Note> {
        let target = self.index() + semitones;
        let offset = target - i64::from(LOWEST_OCTAVE * SEMITONES_PER_OCTAVE);

        usize::try_from(offset)
            .ok()
            .and_then(|i| PITCH_SPACE.get(i))
            .copied()
            .ok_or_else(|| {
                debug!(note = %self, semitones, target, "raise left the pitch space");
                TheoryError::NoteOutOfRange { index: target }
            })
    }

    /// Signed semitone distance from this note up to `other`.
    ///
    /// Saturates at the `SemiTone` bounds for notes further apart than that.
    pub fn interval(&self, other: &Note) -> SemiTone {
        let distance = other.index() - self.index();
        distance.clamp(i64::from(SemiTone::MIN), i64::from(SemiTone::MAX)) as SemiTone
    }

    /// Equal-tempered frequency with A4 = 440 Hz
    pub fn frequency(&self) -> f64 {
        self.frequency_with(&Tuning::default())
    }

    pub fn frequency_with(&self, tuning: &Tuning) -> f64 {
        let from_reference = tuning.reference_note().interval(self);
        tuning.concert_pitch * 2f64.powf(from_reference as f64 / SEMITONES_PER_OCTAVE as f64)
    }

    /// Apply an interval pattern with this note as root
    pub fn raise_by_pattern(&self, pattern: &IntervalPattern) -> Result<Notes> {
        pattern.from_note(*self)
    }

    pub fn major_scale(&self) -> Result<Notes> {
        self.raise_by_pattern(&ScaleType::Major.pattern())
    }

    pub fn minor_scale(&self) -> Result<Notes> {
        self.raise_by_pattern(&ScaleType::NaturalMinor.pattern())
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.index() == other.index()
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index().hash(state);
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse "C4", "F#3", "Bb-1"
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c.is_ascii_digit() || c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| TheoryError::InvalidSpelling(format!("'{}' has no octave", s)))?;

        let (pitch, octave) = s.split_at(split);
        let octave: Octave = octave
            .parse()
            .map_err(|_| TheoryError::InvalidSpelling(format!("invalid octave in '{}'", s)))?;
        Ok(Note::new(pitch.parse()?, octave))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}
