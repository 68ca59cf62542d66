// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for pitch arithmetic.

use thiserror::Error;

/// Result alias used throughout the theory engine.
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Failures of the pure theory computations.
///
/// Every variant is reproducible from the same inputs; nothing here is
/// transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A note index fell outside the supported pitch space.
    #[error("note index {index} is outside the pitch space")]
    NoteOutOfRange {
        /// The index that was requested.
        index: i64,
    },

    /// A scale degree was requested from a pattern too short to contain it.
    #[error("degree {degree} requested from a scale of {len} notes")]
    DegreeOutOfRange {
        /// Zero-based position of the degree.
        degree: usize,
        /// Number of notes the pattern produced.
        len: usize,
    },

    /// A letter/accidental combination could not be resolved.
    #[error("invalid spelling: {0}")]
    InvalidSpelling(String),

    /// A chord label with no entry in the triad or seventh tables.
    #[error("no interval pattern for chord {0}")]
    UnsupportedChord(String),
}

impl TheoryError {
    /// True for both flavours of out-of-range failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            TheoryError::NoteOutOfRange { .. } | TheoryError::DegreeOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_grouping() {
        assert!(TheoryError::NoteOutOfRange { index: 120 }.is_out_of_range());
        assert!(TheoryError::DegreeOutOfRange { degree: 7, len: 6 }.is_out_of_range());
        assert!(!TheoryError::InvalidSpelling("H".to_string()).is_out_of_range());
    }

    #[test]
    fn test_error_messages() {
        let err = TheoryError::NoteOutOfRange { index: -1 };
        assert_eq!(err.to_string(), "note index -1 is outside the pitch space");

        let err = TheoryError::DegreeOutOfRange { degree: 7, len: 6 };
        assert_eq!(err.to_string(), "degree 7 requested from a scale of 6 notes");
    }
}
