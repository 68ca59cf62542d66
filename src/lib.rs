// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Largo: pitches, notes, intervals, scales, chords and keys in twelve-tone
//! equal temperament.

pub mod config;
pub mod error;
pub mod music;

pub use error::{Result, TheoryError};
