use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, LeaderboardEntry};

pub const LEADERBOARD_SIZE: usize = 10;

/// Top scores per difficulty, independent of who set them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(default)]
    easy: Vec<LeaderboardEntry>,
    #[serde(default)]
    medium: Vec<LeaderboardEntry>,
    #[serde(default)]
    hard: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn entries(&self, difficulty: Difficulty) -> &[LeaderboardEntry] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn entries_mut(&mut self, difficulty: Difficulty) -> &mut Vec<LeaderboardEntry> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Sorts every list by score descending and cuts it to
    /// [`LEADERBOARD_SIZE`]. Tables read from disk go through this before use.
    pub fn normalize(&mut self) {
        for difficulty in Difficulty::ALL {
            let entries = self.entries_mut(difficulty);
            entries.sort_by(|a, b| b.score.cmp(&a.score));
            entries.truncate(LEADERBOARD_SIZE);
        }
    }

    /// Appends `entry`, re-sorts by score descending and keeps the top
    /// [`LEADERBOARD_SIZE`]. Equal scores keep their earlier order, so a new
    /// entry ranks below existing ones with the same score.
    ///
    /// Returns the 1-based rank of the new entry, or `None` if it fell off.
    pub fn record(&mut self, difficulty: Difficulty, entry: LeaderboardEntry) -> Option<usize> {
        let entries = self.entries_mut(difficulty);
        entries.push(entry);
        let inserted = entries.len() - 1;

        let mut indexed: Vec<(usize, LeaderboardEntry)> = entries.drain(..).enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score));
        indexed.truncate(LEADERBOARD_SIZE);

        let rank = indexed
            .iter()
            .position(|(index, _)| *index == inserted)
            .map(|position| position + 1);
        entries.extend(indexed.into_iter().map(|(_, entry)| entry));
        rank
    }
}
