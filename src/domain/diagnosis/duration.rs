//! Number of days the user has had the symptom.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A strictly positive day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomDuration(u32);

/// Result of lenient parsing: the days used and whether the default kicked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDuration {
    pub duration: SymptomDuration,
    pub defaulted: bool,
}

impl SymptomDuration {
    /// Used whenever the answer is unusable.
    pub const DEFAULT: SymptomDuration = SymptomDuration(1);

    pub fn try_new(days: i64) -> Result<Self, ValidationError> {
        if days <= 0 || days > i64::from(u32::MAX) {
            return Err(ValidationError::out_of_range(
                "days",
                1,
                i64::from(u32::MAX),
                days,
            ));
        }
        Ok(Self(days as u32))
    }

    /// Parses an integer answer, falling back to one day on garbage or
    /// non-positive input.
    pub fn parse_lenient(raw: &str) -> ParsedDuration {
        match raw.trim().parse::<i64>().map(Self::try_new) {
            Ok(Ok(duration)) => ParsedDuration {
                duration,
                defaulted: false,
            },
            _ => ParsedDuration {
                duration: Self::DEFAULT,
                defaulted: true,
            },
        }
    }

    pub fn days(&self) -> u32 {
        self.0
    }
}

impl Default for SymptomDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for SymptomDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_positive_integer() {
        let parsed = SymptomDuration::parse_lenient("5");
        assert_eq!(parsed.duration.days(), 5);
        assert!(!parsed.defaulted);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(SymptomDuration::parse_lenient(" 12\n").duration.days(), 12);
    }

    #[test]
    fn negative_defaults_to_one() {
        let parsed = SymptomDuration::parse_lenient("-3");
        assert_eq!(parsed.duration.days(), 1);
        assert!(parsed.defaulted);
    }

    #[test]
    fn zero_defaults_to_one() {
        assert!(SymptomDuration::parse_lenient("0").defaulted);
    }

    #[test]
    fn garbage_defaults_to_one() {
        let parsed = SymptomDuration::parse_lenient("abc");
        assert_eq!(parsed.duration, SymptomDuration::DEFAULT);
        assert!(parsed.defaulted);
    }

    #[test]
    fn decimals_are_not_integers() {
        assert!(SymptomDuration::parse_lenient("4.5").defaulted);
    }

    #[test]
    fn try_new_reports_range() {
        let err = SymptomDuration::try_new(0).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: 0, .. }));
    }

    proptest! {
        #[test]
        fn positive_values_round_trip(days in 1u32..=100_000) {
            let parsed = SymptomDuration::parse_lenient(&days.to_string());
            prop_assert_eq!(parsed.duration.days(), days);
            prop_assert!(!parsed.defaulted);
        }

        #[test]
        fn parsed_duration_is_never_zero(raw in ".{0,12}") {
            prop_assert!(SymptomDuration::parse_lenient(&raw).duration.days() >= 1);
        }
    }
}
