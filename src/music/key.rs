// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Major keys and their diatonic chords.
//!
//! Chord roots are reached around the circle of fifths rather than through
//! a scale pattern: IV is a fifth below the tonic, and V, ii, vi, iii, vii
//! follow one another a fifth apart, each built from the previous one.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::chord::{Triad, TriadType};
use super::interval::{PERFECT_FIFTH, SEMITONES_PER_OCTAVE};
use super::note::Octave;
use super::pitch::Pitch;
use super::scale::{Degree, Scale, MAJOR_SCALE};
use crate::error::Result;

/// A major key identified by its tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(Pitch);

impl Key {
    pub const fn new(tonic: Pitch) -> Self {
        Key(tonic)
    }

    pub fn tonic(self) -> Pitch {
        self.0
    }

    pub fn i(self) -> Pitch {
        self.0
    }

    pub fn iv(self) -> Pitch {
        self.0.down(PERFECT_FIFTH)
    }

    pub fn v(self) -> Pitch {
        self.0.up(PERFECT_FIFTH)
    }

    pub fn ii(self) -> Pitch {
        self.v().up(PERFECT_FIFTH)
    }

    pub fn vi(self) -> Pitch {
        self.ii().up(PERFECT_FIFTH)
    }

    pub fn iii(self) -> Pitch {
        self.vi().up(PERFECT_FIFTH)
    }

    pub fn vii(self) -> Pitch {
        self.iii().up(PERFECT_FIFTH)
    }

    /// Roots of the major triads: IV, I, V
    pub fn major(self) -> [Pitch; 3] {
        [self.iv(), self.i(), self.v()]
    }

    /// Roots of the minor triads: ii, vi, iii
    pub fn minor(self) -> [Pitch; 3] {
        [self.ii(), self.vi(), self.iii()]
    }

    /// Root of the diminished triad: vii
    pub fn diminished(self) -> [Pitch; 1] {
        [self.vii()]
    }

    /// All seven chord roots, major then minor then diminished
    pub fn chords(self) -> Vec<Pitch> {
        self.major()
            .into_iter()
            .chain(self.minor())
            .chain(self.diminished())
            .collect()
    }

    /// Chord root for a scale degree
    pub fn degree(self, degree: Degree) -> Pitch {
        match degree {
            Degree::Tonic | Degree::Octave => self.i(),
            Degree::Supertonic => self.ii(),
            Degree::Mediant => self.iii(),
            Degree::Subdominant => self.iv(),
            Degree::Dominant => self.v(),
            Degree::Submediant => self.vi(),
            Degree::LeadingTone => self.vii(),
        }
    }

    /// Shape of the triad built on a degree
    pub fn triad_type(degree: Degree) -> TriadType {
        match degree {
            Degree::Tonic | Degree::Subdominant | Degree::Dominant | Degree::Octave => {
                TriadType::Major
            }
            Degree::Supertonic | Degree::Mediant | Degree::Submediant => TriadType::Minor,
            Degree::LeadingTone => TriadType::Diminished,
        }
    }

    /// Diatonic triad on `degree`, rooted in the octave starting at the tonic
    pub fn triad(self, degree: Degree, octave: Octave) -> Result<Triad> {
        let tonic = self.0.at_octave(octave);
        let offset = if degree == Degree::Octave {
            SEMITONES_PER_OCTAVE
        } else {
            self.0.interval(self.degree(degree)).rem_euclid(SEMITONES_PER_OCTAVE)
        };
        Triad::from_pattern(tonic.raise(offset)?, Key::triad_type(degree))
    }

    /// Triads I through vii°, in scale order
    pub fn triads(self, octave: Octave) -> Result<Vec<Triad>> {
        Degree::ALL[..7]
            .iter()
            .map(|&degree| self.triad(degree, octave))
            .collect()
    }

    /// The major scale on this tonic
    pub fn scale(self, octave: Octave) -> Scale {
        Scale::new(self.0.at_octave(octave), MAJOR_SCALE)
    }

    /// The seven scale pitches spelled with one letter per degree
    pub fn spelled_scale(self) -> Result<Vec<Pitch>> {
        std::iter::once(0)
            .chain(MAJOR_SCALE.steps()[..6].iter().copied())
            .enumerate()
            .map(|(i, step)| self.0.up(step).respell(self.0.letter.offset(i as i32)))
            .collect()
    }
}

impl From<Pitch> for Key {
    fn from(tonic: Pitch) -> Self {
        Key(tonic)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} major", self.0)
    }
}
