mod difficulty;
mod question;
mod score;

pub use difficulty::Difficulty;
pub use question::{InvalidQuestion, Question, NUM_OPTIONS};
pub use score::{DifficultyScores, LeaderboardEntry};
