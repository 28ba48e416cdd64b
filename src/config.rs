use std::path::PathBuf;

use clap::Parser;

use crate::store::Stores;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "TechMaster Challenge: a terminal tech trivia quiz", long_about = None)]
pub struct Args {
    /// Directory holding leaderboard.json and player_highscores.json
    #[arg(short, long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Directory holding the .wav sound cues
    #[arg(short, long, default_value = "assets")]
    pub assets_dir: PathBuf,

    /// JSON file to load the question pools from instead of the built-in bank
    #[arg(short, long)]
    pub questions: Option<PathBuf>,

    /// Command used to play a sound file; the file path is appended
    #[arg(long)]
    pub audio_command: Option<String>,

    /// Turn off all sound
    #[arg(short, long)]
    pub mute: bool,

    /// Directory the log file is written to
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Runtime settings derived from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub stores: Stores,
    pub assets_dir: PathBuf,
    pub questions: Option<PathBuf>,
    pub audio_command: Option<String>,
    pub mute: bool,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            stores: Stores::in_dir(&args.data_dir),
            assets_dir: args.assets_dir,
            questions: args.questions,
            audio_command: args.audio_command,
            mute: args.mute,
            log_dir: args.log_dir,
            log_level: args.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from(Args::parse_from(["techmaster"]));
        assert_eq!(config.stores.leaderboard.path(), Path::new("./leaderboard.json"));
        assert_eq!(config.stores.highscores.path(), Path::new("./player_highscores.json"));
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert!(config.questions.is_none());
        assert!(!config.mute);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "techmaster",
            "--data-dir",
            "/tmp/scores",
            "--questions",
            "bank.json",
            "--mute",
        ]);
        let config = Config::from(args);
        assert_eq!(
            config.stores.leaderboard.path(),
            Path::new("/tmp/scores/leaderboard.json")
        );
        assert_eq!(config.questions, Some(PathBuf::from("bank.json")));
        assert!(config.mute);
    }
}
