// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note durations as fractions of a whole note.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    Large,
    Long,
    DoubleWhole,
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    HundredTwentyEighth,
    TwoHundredFiftySixth,
}

impl Duration {
    /// Longest first
    pub const ALL: [Duration; 12] = [
        Duration::Large,
        Duration::Long,
        Duration::DoubleWhole,
        Duration::Whole,
        Duration::Half,
        Duration::Quarter,
        Duration::Eighth,
        Duration::Sixteenth,
        Duration::ThirtySecond,
        Duration::SixtyFourth,
        Duration::HundredTwentyEighth,
        Duration::TwoHundredFiftySixth,
    ];

    /// Length in whole notes
    pub fn value(self) -> f64 {
        match self {
            Duration::Large => 8.0,
            Duration::Long => 4.0,
            Duration::DoubleWhole => 2.0,
            Duration::Whole => 1.0,
            Duration::Half => 1.0 / 2.0,
            Duration::Quarter => 1.0 / 4.0,
            Duration::Eighth => 1.0 / 8.0,
            Duration::Sixteenth => 1.0 / 16.0,
            Duration::ThirtySecond => 1.0 / 32.0,
            Duration::SixtyFourth => 1.0 / 64.0,
            Duration::HundredTwentyEighth => 1.0 / 128.0,
            Duration::TwoHundredFiftySixth => 1.0 / 256.0,
        }
    }

    /// Length of the dotted form
    pub fn dotted(self) -> f64 {
        self.value() * 1.5
    }

    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Duration::Quarter => Some("♩"),
            Duration::Eighth => Some("♪"),
            Duration::Sixteenth => Some("♬"),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Duration::Large => "large",
            Duration::Long => "long",
            Duration::DoubleWhole => "double whole",
            Duration::Whole => "whole",
            Duration::Half => "half",
            Duration::Quarter => "quarter",
            Duration::Eighth => "eighth",
            Duration::Sixteenth => "sixteenth",
            Duration::ThirtySecond => "thirty-second",
            Duration::SixtyFourth => "sixty-fourth",
            Duration::HundredTwentyEighth => "hundred twenty-eighth",
            Duration::TwoHundredFiftySixth => "two hundred fifty-sixth",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => f.write_str(symbol),
            None => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_value_halves() {
        for pair in Duration::ALL.windows(2) {
            assert_eq!(pair[0].value(), pair[1].value() * 2.0);
        }
    }

    #[test]
    fn test_values() {
        assert_eq!(Duration::Whole.value(), 1.0);
        assert_eq!(Duration::Quarter.value(), 0.25);
        assert_eq!(Duration::Half.dotted(), 0.75);
    }

    #[test]
    fn test_display() {
        assert_eq!(Duration::Quarter.to_string(), "♩");
        assert_eq!(Duration::Half.to_string(), "half");
    }
}
