use crate::models::Difficulty;
use crate::scoring::Band;

/// What the presentation layer should be showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Instructions,
    Login,
    Menu,
    Question,
    RoundComplete(RoundSummary),
    Leaderboard(Difficulty),
    HighScores,
}

/// Screens that can be reached with [`UserAction::Navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Welcome,
    Instructions,
    Login,
    Menu,
    Leaderboard(Difficulty),
    HighScores,
}

impl Screen {
    /// Whether `target` is a legal plain navigation from this screen.
    pub fn can_navigate(&self, target: ScreenId) -> bool {
        matches!(
            (self, target),
            (Screen::Welcome, ScreenId::Instructions | ScreenId::Login)
                | (Screen::Instructions | Screen::Login, ScreenId::Welcome)
                | (
                    Screen::Menu,
                    ScreenId::Leaderboard(_) | ScreenId::HighScores | ScreenId::Welcome
                )
                | (Screen::Leaderboard(_), ScreenId::Leaderboard(_) | ScreenId::Menu)
                | (Screen::HighScores | Screen::RoundComplete(_), ScreenId::Menu)
        )
    }
}

impl From<ScreenId> for Screen {
    fn from(id: ScreenId) -> Self {
        match id {
            ScreenId::Welcome => Screen::Welcome,
            ScreenId::Instructions => Screen::Instructions,
            ScreenId::Login => Screen::Login,
            ScreenId::Menu => Screen::Menu,
            ScreenId::Leaderboard(difficulty) => Screen::Leaderboard(difficulty),
            ScreenId::HighScores => Screen::HighScores,
        }
    }
}

/// Input from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    SelectOption(usize),
    Skip,
    BackToMenu,
    Login(String),
    ChooseDifficulty(Difficulty),
    Navigate(ScreenId),
}

/// Result shown under a question after it was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong { correct_answer: String },
    Skipped { correct_answer: String },
}

impl Feedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct)
    }

    pub fn message(&self) -> String {
        match self {
            Feedback::Correct => "Correct!".to_string(),
            Feedback::Wrong { correct_answer } => {
                format!("Wrong! Correct answer: {}", correct_answer)
            }
            Feedback::Skipped { correct_answer } => {
                format!("Skipped! Correct answer: {}", correct_answer)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    NewPlayer,
    Returning,
}

/// Everything the result screen needs once a round is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub difficulty: Difficulty,
    pub score: u32,
    pub total: usize,
    pub milestone: &'static str,
    /// `None` when the score falls outside every band.
    pub band: Option<Band>,
    pub new_high_score: bool,
    /// 1-based leaderboard position, if the score made the board.
    pub rank: Option<usize>,
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The action is not valid on the current screen.
    Ignored,
    Navigated(ScreenId),
    LoggedIn { name: String, outcome: LoginOutcome },
    RoundStarted { difficulty: Difficulty, questions: usize },
    Answered(Feedback),
    ReturnedToMenu { abandoned_round: bool },
}
