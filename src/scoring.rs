//! Score labels shown at the end of a round.

use std::fmt;

/// Number of questions drawn for one round.
pub const TOTAL_QUESTIONS: usize = 20;

/// Label for an exact final score.
///
/// Only 1, 5, 10, 15 and 20 have their own text; every other score,
/// including 0, reads "Perfect". This mirrors the shipped table and is most
/// likely meant to be banded like [`Band`].
pub fn milestone_text(score: u32) -> &'static str {
    match score {
        1 | 5 => "Nice try",
        10 | 15 => "Better luck next time",
        _ => "Perfect",
    }
}

/// Range a final score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    OneToFive,
    SixToTen,
    ElevenToFifteen,
    SixteenToTwenty,
}

impl Band {
    pub fn for_score(score: u32) -> Option<Self> {
        match score {
            1..=5 => Some(Band::OneToFive),
            6..=10 => Some(Band::SixToTen),
            11..=15 => Some(Band::ElevenToFifteen),
            16..=20 => Some(Band::SixteenToTwenty),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::OneToFive => "1-5",
            Band::SixToTen => "6-10",
            Band::ElevenToFifteen => "11-15",
            Band::SixteenToTwenty => "16-20",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band label, or "No score" for 0 and anything past the round length.
pub fn band_text(score: u32) -> &'static str {
    Band::for_score(score).map_or("No score", Band::label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_table() {
        assert_eq!(milestone_text(1), "Nice try");
        assert_eq!(milestone_text(5), "Nice try");
        assert_eq!(milestone_text(10), "Better luck next time");
        assert_eq!(milestone_text(15), "Better luck next time");
        assert_eq!(milestone_text(20), "Perfect");
    }

    #[test]
    fn test_unlisted_scores_fall_back_to_perfect() {
        for score in [0, 2, 4, 6, 9, 11, 14, 16, 19] {
            assert_eq!(milestone_text(score), "Perfect", "score {score}");
        }
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(band_text(0), "No score");
        assert_eq!(band_text(1), "1-5");
        assert_eq!(band_text(5), "1-5");
        assert_eq!(band_text(6), "6-10");
        assert_eq!(band_text(10), "6-10");
        assert_eq!(band_text(11), "11-15");
        assert_eq!(band_text(15), "11-15");
        assert_eq!(band_text(16), "16-20");
        assert_eq!(band_text(20), "16-20");
        assert_eq!(band_text(21), "No score");
    }
}
