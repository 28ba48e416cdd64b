use std::time::Instant;

use crate::error::QuizError;
use crate::models::{Difficulty, NUM_OPTIONS};
use crate::session::{LoginOutcome, QuizSession, Screen, ScreenId, SessionEvent, UserAction};

const NAME_MAX_LENGTH: usize = 24;

/// Entries on the welcome screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeItem {
    Instructions,
    Login,
    Quit,
}

impl WelcomeItem {
    pub const ALL: [WelcomeItem; 3] = [WelcomeItem::Instructions, WelcomeItem::Login, WelcomeItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            WelcomeItem::Instructions => "Instructions",
            WelcomeItem::Login => "New Player / Login",
            WelcomeItem::Quit => "Quit",
        }
    }
}

/// Entries on the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play(Difficulty),
    Leaderboard,
    HighScores,
    NewPlayer,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Play(Difficulty::Easy),
        MenuItem::Play(Difficulty::Medium),
        MenuItem::Play(Difficulty::Hard),
        MenuItem::Leaderboard,
        MenuItem::HighScores,
        MenuItem::NewPlayer,
    ];

    pub fn label(self) -> String {
        match self {
            MenuItem::Play(difficulty) => difficulty.as_str().to_uppercase(),
            MenuItem::Leaderboard => "Leaderboard".to_string(),
            MenuItem::HighScores => "High Scores".to_string(),
            MenuItem::NewPlayer => "New Player".to_string(),
        }
    }
}

/// A message the player has to dismiss before doing anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    fn info(title: &str, message: String) -> Self {
        Self {
            title: title.to_string(),
            message,
            is_error: false,
        }
    }

    fn error(title: &str, message: String) -> Self {
        Self {
            title: title.to_string(),
            message,
            is_error: true,
        }
    }
}

/// Terminal front end state wrapped around a [`QuizSession`].
pub struct App {
    session: QuizSession,
    welcome_cursor: usize,
    menu_cursor: usize,
    selected_option: usize,
    name_input: String,
    notice: Option<Notice>,
    status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            welcome_cursor: 0,
            menu_cursor: 0,
            selected_option: 0,
            name_input: String::new(),
            notice: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn screen(&self) -> &Screen {
        self.session.screen()
    }

    pub fn welcome_cursor(&self) -> usize {
        self.welcome_cursor
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
        self.collect_warning();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn select_next_welcome_item(&mut self) {
        self.welcome_cursor = (self.welcome_cursor + 1) % WelcomeItem::ALL.len();
    }

    pub fn select_previous_welcome_item(&mut self) {
        let len = WelcomeItem::ALL.len();
        self.welcome_cursor = (self.welcome_cursor + len - 1) % len;
    }

    /// Activates the highlighted welcome entry. Returns true on quit.
    pub fn activate_welcome_item(&mut self) -> bool {
        match WelcomeItem::ALL[self.welcome_cursor] {
            WelcomeItem::Instructions => self.navigate(ScreenId::Instructions),
            WelcomeItem::Login => {
                self.name_input.clear();
                self.navigate(ScreenId::Login);
            }
            WelcomeItem::Quit => self.should_quit = true,
        }
        self.should_quit
    }

    pub fn select_next_menu_item(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1) % MenuItem::ALL.len();
    }

    pub fn select_previous_menu_item(&mut self) {
        let len = MenuItem::ALL.len();
        self.menu_cursor = (self.menu_cursor + len - 1) % len;
    }

    pub fn activate_menu_item(&mut self) {
        match MenuItem::ALL[self.menu_cursor] {
            MenuItem::Play(difficulty) => self.choose_difficulty(difficulty),
            MenuItem::Leaderboard => self.navigate(ScreenId::Leaderboard(Difficulty::Easy)),
            MenuItem::HighScores => self.navigate(ScreenId::HighScores),
            MenuItem::NewPlayer => {
                self.welcome_cursor = 0;
                self.navigate(ScreenId::Welcome);
            }
        }
    }

    pub fn choose_difficulty(&mut self, difficulty: Difficulty) {
        if let Some(SessionEvent::RoundStarted { .. }) =
            self.apply(UserAction::ChooseDifficulty(difficulty))
        {
            self.selected_option = 0;
        }
    }

    pub fn select_next_option(&mut self) {
        self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
    }

    pub fn submit_answer(&mut self) {
        if let Some(SessionEvent::Answered(_)) =
            self.apply(UserAction::SelectOption(self.selected_option))
        {
            self.selected_option = 0;
        }
    }

    pub fn skip_question(&mut self) {
        if let Some(SessionEvent::Answered(_)) = self.apply(UserAction::Skip) {
            self.selected_option = 0;
        }
    }

    pub fn back_to_menu(&mut self) {
        self.apply(UserAction::BackToMenu);
    }

    pub fn navigate(&mut self, target: ScreenId) {
        self.apply(UserAction::Navigate(target));
    }

    /// Shows the leaderboard tab next to the current one.
    pub fn cycle_leaderboard(&mut self, forward: bool) {
        if let Screen::Leaderboard(current) = *self.session.screen() {
            let next = if forward { current.next() } else { current.previous() };
            self.navigate(ScreenId::Leaderboard(next));
        }
    }

    pub fn name_input_push(&mut self, c: char) {
        if self.name_input.chars().count() < NAME_MAX_LENGTH {
            self.name_input.push(c);
        }
    }

    pub fn name_input_pop(&mut self) {
        self.name_input.pop();
    }

    pub fn submit_name(&mut self) {
        let name = self.name_input.clone();
        if let Some(SessionEvent::LoggedIn { name, outcome }) = self.apply(UserAction::Login(name)) {
            self.menu_cursor = 0;
            self.notice = Some(match outcome {
                LoginOutcome::NewPlayer => {
                    Notice::info("New Player", format!("Profile created for {}", name))
                }
                LoginOutcome::Returning => {
                    Notice::info("Welcome Back", format!("Welcome back, {}", name))
                }
            });
        }
    }

    /// Runs an action, turning errors into notices.
    fn apply(&mut self, action: UserAction) -> Option<SessionEvent> {
        let result = self.session.dispatch(action);
        self.collect_warning();

        match result {
            Ok(event) => Some(event),
            Err(err) => {
                self.notice = Some(match &err {
                    QuizError::Validation(_) => Notice::error("Invalid name", err.to_string()),
                    QuizError::NoQuestions(_) => Notice::error("Error", err.to_string()),
                    _ => {
                        tracing::error!("{err}");
                        Notice::error("Error", err.to_string())
                    }
                });
                None
            }
        }
    }

    fn collect_warning(&mut self) {
        if let Some(warning) = self.session.take_warning() {
            self.status = Some(warning);
        }
    }
}
