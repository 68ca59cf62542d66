// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine for Largo.
//!
//! Pitch classes live on a twelve-element ring; notes embed that ring into
//! a bounded pitch space; interval patterns derive scales and chords from a
//! root, and keys derive their chords around the circle of fifths.

pub mod chord;
pub mod duration;
pub mod interval;
pub mod key;
pub mod note;
pub mod pitch;
pub mod scale;

pub use chord::{Category, Chord, IntervalNumber, Quality, Seventh, SeventhType, Triad, TriadType};
pub use duration::Duration;
pub use interval::{IntervalPattern, SemiTone};
pub use key::Key;
pub use note::{pitch_space, Note, Notes, Octave, Tuning};
pub use pitch::{Accidental, Letter, Pitch, PitchClass};
pub use scale::{CustomScaleDefinition, Degree, Scale, ScaleRegistry, ScaleType};
