//! # techmaster
//!
//! TechMaster Challenge: a terminal tech trivia quiz with per-player high
//! scores and a per-difficulty top-10 leaderboard.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use techmaster::{Config, QuizError, TechMaster};
//!
//! fn main() -> Result<(), QuizError> {
//!     let config = Config::from(<techmaster::Args as clap::Parser>::parse());
//!     TechMaster::from_config(&config)?.run()
//! }
//! ```

mod app;
pub mod config;
pub mod data;
mod error;
pub mod logging;
pub mod media;
pub mod models;
pub mod scoring;
pub mod session;
pub mod store;
pub mod terminal;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, MenuItem, Notice, WelcomeItem};
pub use config::{Args, Config};
pub use data::{load_bank_from_json, LoadError, QuestionBank};
pub use error::QuizError;
pub use media::{AssetPlayer, MediaPlayer, SilentPlayer};
pub use models::{Difficulty, Question};
pub use session::{QuizSession, Screen};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A quiz instance that can be run in the terminal.
pub struct TechMaster {
    app: App,
}

impl TechMaster {
    pub fn new(session: QuizSession) -> Self {
        Self {
            app: App::new(session),
        }
    }

    /// Builds the question bank, media player and score stores described by
    /// `config`.
    pub fn from_config(config: &Config) -> Result<Self, QuizError> {
        let bank = match &config.questions {
            Some(path) => {
                let bank = load_bank_from_json(path)?;
                tracing::info!(path = %path.display(), "loaded question bank");
                bank
            }
            None => QuestionBank::builtin(),
        };

        let media: Box<dyn MediaPlayer> = if config.mute {
            Box::new(SilentPlayer)
        } else {
            Box::new(AssetPlayer::new(
                &config.assets_dir,
                config.audio_command.as_deref(),
            ))
        };

        let session = QuizSession::new(bank, config.stores.clone(), media);
        Ok(Self::new(session))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    tracing::info!("quit");
    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if app.notice().is_some() {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
        return false;
    }

    match app.screen() {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::Instructions => handle_instructions_input(app, key),
        Screen::Login => handle_login_input(app, key),
        Screen::Menu => handle_menu_input(app, key),
        Screen::Question => handle_question_input(app, key),
        Screen::RoundComplete(_) | Screen::HighScores => handle_back_only_input(app, key),
        Screen::Leaderboard(_) => handle_leaderboard_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_welcome_item();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_welcome_item();
            false
        }
        KeyCode::Enter => app.activate_welcome_item(),
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.navigate(session::ScreenId::Instructions);
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_instructions_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace => {
            app.navigate(session::ScreenId::Welcome);
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_login_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) => app.name_input_push(c),
        KeyCode::Backspace => app.name_input_pop(),
        KeyCode::Enter => app.submit_name(),
        KeyCode::Esc => app.navigate(session::ScreenId::Welcome),
        _ => {}
    }
    false
}

fn handle_menu_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_menu_item(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_menu_item(),
        KeyCode::Enter => app.activate_menu_item(),
        KeyCode::Char('1') => app.choose_difficulty(Difficulty::Easy),
        KeyCode::Char('2') => app.choose_difficulty(Difficulty::Medium),
        KeyCode::Char('3') => app.choose_difficulty(Difficulty::Hard),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_question_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.skip_question(),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => app.back_to_menu(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_leaderboard_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.cycle_leaderboard(false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.cycle_leaderboard(true),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => return handle_back_only_input(app, key),
    }
    false
}

fn handle_back_only_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('m') => {
            app.back_to_menu();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
