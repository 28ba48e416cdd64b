use serde::{Deserialize, Serialize};

use super::Difficulty;

/// One row of a per-difficulty leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Best score per difficulty for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyScores {
    #[serde(default)]
    pub easy: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub hard: u32,
}

impl DifficultyScores {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Raises the stored value if `score` beats it. Returns whether it changed.
    pub fn raise(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let slot = match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        };

        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_never_lowers() {
        let mut scores = DifficultyScores::default();
        assert!(scores.raise(Difficulty::Hard, 7));
        assert!(!scores.raise(Difficulty::Hard, 3));
        assert!(!scores.raise(Difficulty::Hard, 7));
        assert_eq!(scores.get(Difficulty::Hard), 7);
        assert_eq!(scores.get(Difficulty::Easy), 0);
    }

    #[test]
    fn test_json_shape() {
        let scores = DifficultyScores {
            easy: 1,
            medium: 2,
            hard: 3,
        };
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json, serde_json::json!({"easy": 1, "medium": 2, "hard": 3}));
    }
}
