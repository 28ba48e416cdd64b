//! Sound feedback.
//!
//! The session only talks to [`MediaPlayer`]. Missing or unplayable assets are
//! never an error: they are logged at debug level and skipped.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::scoring::Band;

/// One-shot sound events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Correct,
    Wrong,
    /// Final score, only some of which have a sound.
    Milestone(u32),
    Band(Band),
}

/// Looping tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Background,
}

pub trait MediaPlayer {
    fn play_cue(&mut self, cue: Cue);
    fn play_loop(&mut self, track: Track);
    fn stop(&mut self);

    /// Called from the UI loop so a player can restart a finished loop.
    fn poll(&mut self) {}
}

impl Cue {
    /// Asset file for the cue, if it has one. Correct and wrong answers use the
    /// terminal bell instead of a file.
    pub fn asset(self) -> Option<&'static str> {
        match self {
            Cue::Correct | Cue::Wrong => None,
            Cue::Milestone(score) => match score {
                1 => Some("1 TO 10.wav"),
                5 => Some("5 TO 10.wav"),
                10 => Some("10 TO 15.wav"),
                15 => Some("15 TO 20.wav"),
                20 => Some("20.wav"),
                _ => None,
            },
            Cue::Band(band) => Some(match band {
                Band::OneToFive | Band::SixToTen => "1 TO 10.wav",
                Band::ElevenToFifteen => "10 TO 15.wav",
                Band::SixteenToTwenty => "15 TO 20.wav",
            }),
        }
    }
}

impl Track {
    pub fn asset(self) -> &'static str {
        match self {
            Track::Background => "BGmusic.wav",
        }
    }
}

/// Plays nothing. Used with `--mute` and in tests.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl MediaPlayer for SilentPlayer {
    fn play_cue(&mut self, _cue: Cue) {}
    fn play_loop(&mut self, _track: Track) {}
    fn stop(&mut self) {}
}

/// Plays `.wav` assets by handing them to an external command such as
/// `aplay` or `afplay`, and rings the terminal bell for answer feedback.
pub struct AssetPlayer {
    assets_dir: PathBuf,
    command: Option<Vec<String>>,
    looping: Option<(Track, Child)>,
    cues: Vec<Child>,
}

impl AssetPlayer {
    /// `command` is split on whitespace; the asset path is appended as the
    /// last argument. `None` picks a platform default.
    pub fn new<P: Into<PathBuf>>(assets_dir: P, command: Option<&str>) -> Self {
        let command = command
            .map(str::to_string)
            .or_else(default_command)
            .map(|cmd| cmd.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .filter(|parts| !parts.is_empty());

        Self {
            assets_dir: assets_dir.into(),
            command,
            looping: None,
            cues: Vec::new(),
        }
    }

    fn resolve(&self, file: &str) -> Option<PathBuf> {
        let path = self.assets_dir.join(file);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(path = %path.display(), "asset missing, skipping");
            None
        }
    }

    fn spawn(&self, path: &Path) -> Option<Child> {
        let (program, args) = self.command.as_ref()?.split_first()?;
        match Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => Some(child),
            Err(err) => {
                tracing::debug!(program = %program, "failed to start audio command: {err}");
                None
            }
        }
    }

    fn start_loop(&mut self, track: Track) {
        let child = self
            .resolve(track.asset())
            .and_then(|path| self.spawn(&path));
        if let Some(child) = child {
            self.looping = Some((track, child));
        }
    }

    fn stop_loop(&mut self) {
        if let Some((_, mut child)) = self.looping.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    fn reap_cues(&mut self) {
        self.cues
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}

fn default_command() -> Option<String> {
    if cfg!(target_os = "macos") {
        Some("afplay".to_string())
    } else if cfg!(target_os = "linux") {
        Some("aplay -q".to_string())
    } else {
        None
    }
}

fn ring_bell() {
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x07").and_then(|()| stdout.flush());
}

impl MediaPlayer for AssetPlayer {
    fn play_cue(&mut self, cue: Cue) {
        self.reap_cues();

        let Some(file) = cue.asset() else {
            if matches!(cue, Cue::Correct | Cue::Wrong) {
                ring_bell();
            }
            return;
        };

        if let Some(child) = self.resolve(file).and_then(|path| self.spawn(&path)) {
            self.cues.push(child);
        }
    }

    fn play_loop(&mut self, track: Track) {
        self.stop_loop();
        self.start_loop(track);
    }

    fn stop(&mut self) {
        self.stop_loop();
    }

    fn poll(&mut self) {
        self.reap_cues();

        let finished = match &mut self.looping {
            Some((track, child)) => match child.try_wait() {
                Ok(Some(_)) => Some(*track),
                _ => None,
            },
            None => None,
        };
        if let Some(track) = finished {
            self.start_loop(track);
        }
    }
}

impl Drop for AssetPlayer {
    fn drop(&mut self) {
        self.stop_loop();
        for child in &mut self.cues {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
