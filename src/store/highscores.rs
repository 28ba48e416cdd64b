use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Difficulty, DifficultyScores};

/// Best score per player and difficulty, keyed by username.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerHighScores {
    players: BTreeMap<String, DifficultyScores>,
}

impl PlayerHighScores {
    pub fn contains(&self, username: &str) -> bool {
        self.players.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Option<&DifficultyScores> {
        self.players.get(username)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Adds a zeroed record for a new player. Returns `false` if the player
    /// already exists; their scores are left untouched.
    pub fn register(&mut self, username: &str) -> bool {
        if self.contains(username) {
            return false;
        }
        self.players
            .insert(username.to_string(), DifficultyScores::default());
        true
    }

    /// Records a finished round. Returns whether the stored best changed.
    pub fn record(&mut self, username: &str, difficulty: Difficulty, score: u32) -> bool {
        self.players
            .entry(username.to_string())
            .or_default()
            .raise(difficulty, score)
    }
}
