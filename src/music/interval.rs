// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Semitone intervals and interval patterns.
//!
//! Named intervals follow extended meantone naming, so several names share a
//! semitone value (an augmented second and a minor third are both 3). The
//! aliases are deliberate and all of them are exported.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::note::{Note, Notes};
use crate::error::Result;

/// Semitone offset type
pub type SemiTone = i32;

pub const SEMITONES_PER_OCTAVE: SemiTone = 12;

/// Cents in one octave
pub const OCTAVE_CENTS: i32 = 1200;

//  Name                                           Pitch from C
pub const UNISON: SemiTone = 0; //                 C
pub const DIMINISHED_SECOND: SemiTone = UNISON; // D♭♭
pub const CHROMATIC_SEMITONE: SemiTone = 1; //     C♯
pub const MINOR_SECOND: SemiTone = CHROMATIC_SEMITONE; // D♭
pub const HALF_TONE: SemiTone = MINOR_SECOND;
pub const WHOLE_TONE: SemiTone = 2; //             D
pub const MAJOR_SECOND: SemiTone = WHOLE_TONE;
pub const DIMINISHED_THIRD: SemiTone = WHOLE_TONE; // E♭♭
pub const AUGMENTED_SECOND: SemiTone = 3; //       D♯
pub const MINOR_THIRD: SemiTone = AUGMENTED_SECOND; // E♭
pub const MAJOR_THIRD: SemiTone = 4; //            E
pub const DIMINISHED_FOURTH: SemiTone = MAJOR_THIRD; // F♭
pub const AUGMENTED_THIRD: SemiTone = 5; //        E♯
pub const PERFECT_FOURTH: SemiTone = AUGMENTED_THIRD; // F
pub const AUGMENTED_FOURTH: SemiTone = 6; //       F♯
pub const DIMINISHED_FIFTH: SemiTone = AUGMENTED_FOURTH; // G♭
pub const TRITONE: SemiTone = AUGMENTED_FOURTH;
pub const PERFECT_FIFTH: SemiTone = 7; //          G
pub const DIMINISHED_SIXTH: SemiTone = PERFECT_FIFTH; // A♭♭
pub const AUGMENTED_FIFTH: SemiTone = 8; //        G♯
pub const MINOR_SIXTH: SemiTone = AUGMENTED_FIFTH; // A♭
pub const MAJOR_SIXTH: SemiTone = 9; //            A
pub const DIMINISHED_SEVENTH: SemiTone = MAJOR_SIXTH; // B♭♭
pub const AUGMENTED_SIXTH: SemiTone = 10; //       A♯
pub const MINOR_SEVENTH: SemiTone = AUGMENTED_SIXTH; // B♭
pub const MAJOR_SEVENTH: SemiTone = 11; //         B
pub const DIMINISHED_OCTAVE: SemiTone = MAJOR_SEVENTH; // C♭
pub const AUGMENTED_SEVENTH: SemiTone = 12; //     B♯
pub const OCTAVE: SemiTone = AUGMENTED_SEVENTH; // C

/// Size of an interval in cents
pub fn cents(semitones: SemiTone) -> i32 {
    semitones * OCTAVE_CENTS / SEMITONES_PER_OCTAVE
}

/// A list of semitone steps and the way they are applied to a root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalPattern {
    /// Each step is measured from the previously produced note
    Stacked(Cow<'static, [SemiTone]>),
    /// Each step is measured from the root
    Absolute(Cow<'static, [SemiTone]>),
}

impl IntervalPattern {
    pub const fn stacked(steps: &'static [SemiTone]) -> Self {
        IntervalPattern::Stacked(Cow::Borrowed(steps))
    }

    pub const fn absolute(steps: &'static [SemiTone]) -> Self {
        IntervalPattern::Absolute(Cow::Borrowed(steps))
    }

    pub fn steps(&self) -> &[SemiTone] {
        match self {
            IntervalPattern::Stacked(steps) | IntervalPattern::Absolute(steps) => steps,
        }
    }

    /// Number of notes produced, root included
    pub fn note_count(&self) -> usize {
        self.steps().len() + 1
    }

    /// Apply the pattern to `root`.
    ///
    /// The result always starts with `root` and holds one more note than
    /// there are steps. Fails if any produced note leaves the pitch space.
    pub fn from_note(&self, root: Note) -> Result<Notes> {
        let mut notes = Vec::with_capacity(self.note_count());
        notes.push(root);

        match self {
            IntervalPattern::Stacked(steps) => {
                let mut current = root;
                for &step in steps.iter() {
                    current = current.raise(step)?;
                    notes.push(current);
                }
            }
            IntervalPattern::Absolute(steps) => {
                for &step in steps.iter() {
                    notes.push(root.raise(step)?);
                }
            }
        }

        Ok(notes)
    }

    /// Equivalent pattern with every step measured from the root
    pub fn to_absolute(&self) -> IntervalPattern {
        match self {
            IntervalPattern::Absolute(_) => self.clone(),
            IntervalPattern::Stacked(steps) => {
                let absolute: Vec<SemiTone> = steps
                    .iter()
                    .scan(0, |total, &step| {
                        *total += step;
                        Some(*total)
                    })
                    .collect();
                IntervalPattern::Absolute(Cow::Owned(absolute))
            }
        }
    }

    /// Equivalent pattern with every step measured from the previous note
    pub fn to_stacked(&self) -> IntervalPattern {
        match self {
            IntervalPattern::Stacked(_) => self.clone(),
            IntervalPattern::Absolute(steps) => {
                let mut previous = 0;
                let stacked: Vec<SemiTone> = steps
                    .iter()
                    .map(|&step| {
                        let relative = step - previous;
                        previous = step;
                        relative
                    })
                    .collect();
                IntervalPattern::Stacked(Cow::Owned(stacked))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::pitch::{Accidental, Letter, Pitch, C, E, G};

    const MAJOR_TRIAD_STACKED: IntervalPattern =
        IntervalPattern::stacked(&[MAJOR_THIRD, MINOR_THIRD]);
    const MAJOR_TRIAD_ABSOLUTE: IntervalPattern =
        IntervalPattern::absolute(&[MAJOR_THIRD, PERFECT_FIFTH]);

    #[test]
    fn test_aliases_share_values() {
        assert_eq!(AUGMENTED_SECOND, MINOR_THIRD);
        assert_eq!(DIMINISHED_FIFTH, AUGMENTED_FOURTH);
        assert_eq!(DIMINISHED_SEVENTH, MAJOR_SIXTH);
        assert_eq!(AUGMENTED_SEVENTH, OCTAVE);
        assert_eq!(OCTAVE, SEMITONES_PER_OCTAVE);
        assert_eq!(DIMINISHED_SECOND, UNISON);
    }

    #[test]
    fn test_cents() {
        assert_eq!(cents(OCTAVE), 1200);
        assert_eq!(cents(HALF_TONE), 100);
        assert_eq!(cents(PERFECT_FIFTH), 700);
    }

    #[test]
    fn test_stacked_and_absolute_triads_agree() {
        let root = C.at_octave(4);
        let stacked = MAJOR_TRIAD_STACKED.from_note(root).unwrap();
        let absolute = MAJOR_TRIAD_ABSOLUTE.from_note(root).unwrap();

        assert_eq!(stacked, vec![C.at_octave(4), E.at_octave(4), G.at_octave(4)]);
        assert_eq!(stacked, absolute);
    }

    #[test]
    fn test_stacked_accumulates() {
        let pattern = IntervalPattern::stacked(&[OCTAVE, OCTAVE]);
        let notes = pattern.from_note(C.at_octave(2)).unwrap();
        assert_eq!(notes, vec![C.at_octave(2), C.at_octave(3), C.at_octave(4)]);
    }

    #[test]
    fn test_absolute_keeps_root() {
        let pattern = IntervalPattern::absolute(&[OCTAVE, OCTAVE]);
        let notes = pattern.from_note(C.at_octave(2)).unwrap();
        assert_eq!(notes, vec![C.at_octave(2), C.at_octave(3), C.at_octave(3)]);
    }

    #[test]
    fn test_length_and_order() {
        let pattern = IntervalPattern::absolute(&[7, 4, 11]);
        let notes = pattern.from_note(C.at_octave(4)).unwrap();
        assert_eq!(notes.len(), pattern.note_count());
        assert_eq!(notes[1].index() - notes[0].index(), 7);
        assert_eq!(notes[2].index() - notes[0].index(), 4);

        let empty = IntervalPattern::stacked(&[]);
        assert_eq!(empty.from_note(C.at_octave(4)).unwrap(), vec![C.at_octave(4)]);
    }

    #[test]
    fn test_root_spelling_kept() {
        let d_flat = Pitch::new(Letter::D, Accidental::Flat).at_octave(4);
        let notes = MAJOR_TRIAD_STACKED.from_note(d_flat).unwrap();
        assert_eq!(notes[0].pitch, d_flat.pitch);
    }

    #[test]
    fn test_overflow_is_reported() {
        let top = crate::music::pitch::B.at_octave(8);
        let err = MAJOR_TRIAD_STACKED.from_note(top).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(MAJOR_TRIAD_STACKED.to_absolute(), MAJOR_TRIAD_ABSOLUTE);
        assert_eq!(MAJOR_TRIAD_ABSOLUTE.to_stacked(), MAJOR_TRIAD_STACKED);
    }
}
