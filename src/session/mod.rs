//! The quiz-session state machine.
//!
//! [`QuizSession`] owns the logged-in player, the round in progress and the
//! two persisted tables. The presentation layer renders [`QuizSession::screen`]
//! and feeds user input back through [`QuizSession::dispatch`].

mod round;
mod screen;

use std::time::{Duration, Instant};

use rand::Rng;

use crate::data::QuestionBank;
use crate::error::QuizError;
use crate::media::{Cue, MediaPlayer, Track};
use crate::models::{Difficulty, LeaderboardEntry, Question};
use crate::scoring::{self, Band, TOTAL_QUESTIONS};
use crate::store::{Leaderboard, PlayerHighScores, StoreError, Stores};

pub use round::Round;
pub use screen::{
    Feedback, LoginOutcome, RoundSummary, Screen, ScreenId, SessionEvent, UserAction,
};

/// How long answer feedback stays up before the next question.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// An answered question waiting for the pacing delay to run out.
#[derive(Debug, Clone)]
struct PendingAdvance {
    deadline: Instant,
    answered: Question,
    feedback: Feedback,
}

pub struct QuizSession {
    bank: QuestionBank,
    stores: Stores,
    leaderboard: Leaderboard,
    highscores: PlayerHighScores,
    media: Box<dyn MediaPlayer>,
    player: Option<String>,
    screen: Screen,
    round: Option<Round>,
    pending: Option<PendingAdvance>,
    warning: Option<String>,
}

impl QuizSession {
    /// Loads both tables (falling back to empty ones) and starts the
    /// background loop.
    pub fn new(bank: QuestionBank, stores: Stores, mut media: Box<dyn MediaPlayer>) -> Self {
        let mut leaderboard: Leaderboard = stores.leaderboard.load_or_default();
        leaderboard.normalize();
        let highscores: PlayerHighScores = stores.highscores.load_or_default();
        tracing::info!(
            leaderboard = %stores.leaderboard.path().display(),
            players = highscores.len(),
            "loaded score tables"
        );

        media.play_loop(Track::Background);

        Self {
            bank,
            stores,
            leaderboard,
            highscores,
            media,
            player: None,
            screen: Screen::Welcome,
            round: None,
            pending: None,
            warning: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn highscores(&self) -> &PlayerHighScores {
        &self.highscores
    }

    /// Most recent non-fatal problem, cleared on read.
    pub fn take_warning(&mut self) -> Option<String> {
        self.warning.take()
    }

    /// Answer controls are disabled while feedback is showing.
    pub fn answers_locked(&self) -> bool {
        self.pending.is_some()
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.pending.as_ref().map(|pending| &pending.feedback)
    }

    /// The question on screen: the one just answered while its feedback is
    /// showing, otherwise the current one.
    pub fn displayed_question(&self) -> Option<&Question> {
        match &self.pending {
            Some(pending) => Some(&pending.answered),
            None => self.current_question(),
        }
    }

    /// Head of the round's queue, or `None` once the round is complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.round.as_ref().and_then(Round::current)
    }

    /// Applies one user action according to the screen transition table.
    pub fn dispatch(&mut self, action: UserAction) -> Result<SessionEvent, QuizError> {
        match action {
            UserAction::Navigate(target) => {
                if !self.screen.can_navigate(target) {
                    return Ok(self.ignore(&UserAction::Navigate(target)));
                }
                self.screen = target.into();
                Ok(SessionEvent::Navigated(target))
            }
            UserAction::Login(name) => {
                if self.screen != Screen::Login {
                    return Ok(self.ignore(&UserAction::Login(name)));
                }
                let outcome = self.login(&name)?;
                Ok(SessionEvent::LoggedIn {
                    name: name.trim().to_string(),
                    outcome,
                })
            }
            UserAction::ChooseDifficulty(difficulty) => {
                if self.screen != Screen::Menu {
                    return Ok(self.ignore(&action));
                }
                self.start_round(difficulty)?;
                Ok(SessionEvent::RoundStarted {
                    difficulty,
                    questions: self.round.as_ref().map_or(0, Round::remaining),
                })
            }
            UserAction::SelectOption(index) => {
                if self.screen != Screen::Question || self.answers_locked() {
                    return Ok(self.ignore(&action));
                }
                let selected = self
                    .current_question()
                    .and_then(|question| question.options.get(index))
                    .cloned();
                match selected {
                    Some(selected) => self.submit_answer(&selected).map(SessionEvent::Answered),
                    None => Ok(self.ignore(&action)),
                }
            }
            UserAction::Skip => {
                if self.screen != Screen::Question || self.answers_locked() {
                    return Ok(self.ignore(&action));
                }
                self.skip_question().map(SessionEvent::Answered)
            }
            UserAction::BackToMenu => Ok(SessionEvent::ReturnedToMenu {
                abandoned_round: self.back_to_menu(),
            }),
        }
    }

    fn ignore(&self, action: &UserAction) -> SessionEvent {
        tracing::trace!(?action, screen = ?self.screen, "action ignored");
        SessionEvent::Ignored
    }

    /// Logs a player in, creating a zeroed high-score record for new names.
    pub fn login(&mut self, name: &str) -> Result<LoginOutcome, QuizError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(QuizError::Validation("Please enter a name"));
        }

        let outcome = if self.highscores.register(name) {
            self.persist_highscores();
            tracing::info!(player = name, "created player profile");
            LoginOutcome::NewPlayer
        } else {
            tracing::info!(player = name, "returning player");
            LoginOutcome::Returning
        };

        self.player = Some(name.to_string());
        self.screen = Screen::Menu;
        Ok(outcome)
    }

    /// Draws a fresh round from the pool for `difficulty`.
    pub fn start_round(&mut self, difficulty: Difficulty) -> Result<(), QuizError> {
        self.start_round_with(difficulty, &mut rand::rng())
    }

    pub fn start_round_with<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(), QuizError> {
        if self.player.is_none() {
            return Err(QuizError::NotLoggedIn);
        }

        let pool = self.bank.pool(difficulty);
        if pool.is_empty() {
            self.screen = Screen::Menu;
            return Err(QuizError::NoQuestions(difficulty));
        }

        self.media.stop();
        let round = Round::draw(difficulty, pool, TOTAL_QUESTIONS, rng);
        tracing::info!(%difficulty, questions = round.remaining(), "round started");

        self.round = Some(round);
        self.pending = None;
        self.screen = Screen::Question;
        Ok(())
    }

    /// Checks `selected` against the current question and moves past it.
    pub fn submit_answer(&mut self, selected: &str) -> Result<Feedback, QuizError> {
        let correct = self
            .current_question()
            .map(|question| question.is_correct(selected))
            .ok_or(QuizError::NoActiveQuestion)?;
        self.answer_current(|answered| {
            if correct {
                Feedback::Correct
            } else {
                Feedback::Wrong {
                    correct_answer: answered.correct_answer.clone(),
                }
            }
        })
    }

    /// Moves past the current question; counts as wrong.
    pub fn skip_question(&mut self) -> Result<Feedback, QuizError> {
        self.answer_current(|answered| Feedback::Skipped {
            correct_answer: answered.correct_answer.clone(),
        })
    }

    fn answer_current(
        &mut self,
        feedback: impl FnOnce(&Question) -> Feedback,
    ) -> Result<Feedback, QuizError> {
        if self.answers_locked() {
            return Err(QuizError::NoActiveQuestion);
        }
        let round = self.round.as_mut().ok_or(QuizError::NoActiveQuestion)?;
        let answered = round.dequeue_current().ok_or(QuizError::NoActiveQuestion)?;

        let feedback = feedback(&answered);
        if feedback.is_correct() {
            round.award_point();
            self.media.play_cue(Cue::Correct);
        } else {
            self.media.play_cue(Cue::Wrong);
        }

        self.pending = Some(PendingAdvance {
            deadline: Instant::now() + ADVANCE_DELAY,
            answered,
            feedback: feedback.clone(),
        });
        Ok(feedback)
    }

    /// Drives the pacing delay; call once per UI loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.media.poll();

        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if due {
            self.advance();
        }
    }

    /// Ends the feedback pause now: shows the next question, or finishes the
    /// round when none are left.
    pub fn advance(&mut self) {
        if self.pending.take().is_none() {
            return;
        }

        if self.round.as_ref().is_some_and(Round::is_complete) {
            match self.finish_round() {
                Ok(summary) => self.screen = Screen::RoundComplete(summary),
                Err(err) => {
                    tracing::error!("failed to finish round: {err}");
                    self.screen = Screen::Menu;
                }
            }
        }
    }

    /// Scores the completed round, updates both tables and persists them.
    pub fn finish_round(&mut self) -> Result<RoundSummary, QuizError> {
        match &self.round {
            Some(round) if round.is_complete() => {}
            Some(_) => return Err(QuizError::RoundInProgress),
            None => return Err(QuizError::NoActiveQuestion),
        }
        let player = self.player.clone().ok_or(QuizError::NotLoggedIn)?;
        let Some(round) = self.round.take() else {
            return Err(QuizError::NoActiveQuestion);
        };
        self.pending = None;

        let difficulty = round.difficulty();
        let score = round.score();

        let band = Band::for_score(score);
        if let Some(band) = band {
            self.media.play_cue(Cue::Band(band));
        }

        let new_high_score = self.highscores.record(&player, difficulty, score);
        if new_high_score {
            self.persist_highscores();
        }

        let rank = self
            .leaderboard
            .record(difficulty, LeaderboardEntry::new(player.as_str(), score));
        self.persist_leaderboard();

        self.media.play_cue(Cue::Milestone(score));

        tracing::info!(%player, %difficulty, score, ?rank, new_high_score, "round finished");

        Ok(RoundSummary {
            difficulty,
            score,
            total: TOTAL_QUESTIONS,
            milestone: scoring::milestone_text(score),
            band,
            new_high_score,
            rank,
        })
    }

    /// Returns to the menu (or the welcome screen when nobody is logged in),
    /// dropping any round in progress without recording it. Returns whether a
    /// round was abandoned.
    pub fn back_to_menu(&mut self) -> bool {
        self.pending = None;
        let abandoned = self.round.take().is_some();
        if abandoned {
            tracing::info!("round abandoned");
        }

        self.screen = if self.player.is_some() {
            Screen::Menu
        } else {
            Screen::Welcome
        };
        abandoned
    }

    fn persist_highscores(&mut self) {
        let result = self.stores.highscores.save(&self.highscores);
        self.note_save(result);
    }

    fn persist_leaderboard(&mut self) {
        let result = self.stores.leaderboard.save(&self.leaderboard);
        self.note_save(result);
    }

    fn note_save(&mut self, result: Result<(), StoreError>) {
        if let Err(err) = result {
            tracing::warn!("{err}");
            self.warning = Some(format!("Could not save scores: {err}"));
        }
    }
}
