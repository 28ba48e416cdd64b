//! JSON-file persistence for the leaderboard and player high scores.
//!
//! Both tables are small documents rewritten in full on every save.

mod highscores;
mod json_file;
mod leaderboard;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use highscores::PlayerHighScores;
pub use json_file::JsonFile;
pub use leaderboard::{Leaderboard, LEADERBOARD_SIZE};

pub const LEADERBOARD_FILE: &str = "leaderboard.json";
pub const HIGHSCORES_FILE: &str = "player_highscores.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The two table files, side by side in one data directory.
#[derive(Debug, Clone)]
pub struct Stores {
    pub leaderboard: JsonFile,
    pub highscores: JsonFile,
}

impl Stores {
    pub fn in_dir<P: AsRef<std::path::Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            leaderboard: JsonFile::new(dir.join(LEADERBOARD_FILE)),
            highscores: JsonFile::new(dir.join(HIGHSCORES_FILE)),
        }
    }
}
