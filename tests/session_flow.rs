//! End-to-end rounds driven through `QuizSession::dispatch`.

use std::path::PathBuf;
use std::time::Instant;

use techmaster::models::{Difficulty, LeaderboardEntry, Question};
use techmaster::scoring::Band;
use techmaster::session::{
    ADVANCE_DELAY, LoginOutcome, QuizSession, Screen, ScreenId, SessionEvent, UserAction,
};
use techmaster::store::{JsonFile, Leaderboard, PlayerHighScores, Stores};
use techmaster::{QuestionBank, SilentPlayer};

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("techmaster-flow-{}", uuid::Uuid::new_v4()))
}

fn pool(prefix: &str, size: usize) -> Vec<Question> {
    (0..size)
        .map(|i| {
            let answer = format!("{prefix} answer {i}");
            Question::new(
                &format!("{prefix} prompt {i}"),
                ["decoy 1", answer.as_str(), "decoy 2", "decoy 3"],
                &answer,
            )
        })
        .collect()
}

fn open(dir: &PathBuf, bank: QuestionBank) -> QuizSession {
    QuizSession::new(bank, Stores::in_dir(dir), Box::new(SilentPlayer))
}

fn login(session: &mut QuizSession, name: &str) -> LoginOutcome {
    session
        .dispatch(UserAction::Navigate(ScreenId::Login))
        .unwrap();
    match session.dispatch(UserAction::Login(name.to_string())).unwrap() {
        SessionEvent::LoggedIn { outcome, .. } => outcome,
        other => panic!("unexpected event {:?}", other),
    }
}

/// Plays the current round to the end, answering correctly `correct` times.
fn play_round(session: &mut QuizSession, mut correct: usize) {
    while let Some(question) = session.current_question().cloned() {
        let remaining = session.round().unwrap().remaining();
        let counter = session.round().unwrap().question_counter();
        let score = session.round().unwrap().score();

        let right = question
            .options
            .iter()
            .position(|option| *option == question.correct_answer)
            .unwrap();
        let action = if correct > 0 {
            correct -= 1;
            UserAction::SelectOption(right)
        } else {
            UserAction::SelectOption((right + 1) % 4)
        };
        let expect_point = matches!(action, UserAction::SelectOption(i) if i == right);

        assert!(matches!(
            session.dispatch(action).unwrap(),
            SessionEvent::Answered(_)
        ));

        let round = session.round().unwrap();
        assert_eq!(round.remaining(), remaining - 1);
        assert_eq!(round.question_counter(), counter + 1);
        assert_eq!(round.score(), score + u32::from(expect_point));

        session.tick(Instant::now() + ADVANCE_DELAY);
    }
}

#[test]
fn perfect_easy_round() {
    let dir = temp_dir();
    let bank = QuestionBank::new(pool("easy", 20), Vec::new(), Vec::new());
    let mut session = open(&dir, bank);
    login(&mut session, "Ada");

    let event = session
        .dispatch(UserAction::ChooseDifficulty(Difficulty::Easy))
        .unwrap();
    assert_eq!(
        event,
        SessionEvent::RoundStarted {
            difficulty: Difficulty::Easy,
            questions: 20
        }
    );

    play_round(&mut session, 20);

    let Screen::RoundComplete(summary) = session.screen() else {
        panic!("round should be complete, got {:?}", session.screen());
    };
    assert_eq!(summary.score, 20);
    assert_eq!(summary.milestone, "Perfect");
    assert_eq!(summary.band, Some(Band::SixteenToTwenty));

    session.dispatch(UserAction::Navigate(ScreenId::Menu)).unwrap();
    assert_eq!(session.screen(), &Screen::Menu);
}

#[test]
fn zero_score_round() {
    let dir = temp_dir();
    let bank = QuestionBank::new(Vec::new(), pool("medium", 8), Vec::new());
    let mut session = open(&dir, bank);
    login(&mut session, "Ada");
    session
        .dispatch(UserAction::ChooseDifficulty(Difficulty::Medium))
        .unwrap();

    play_round(&mut session, 0);

    let Screen::RoundComplete(summary) = session.screen() else {
        panic!("round should be complete");
    };
    assert_eq!(summary.score, 0);
    assert_eq!(summary.band, None);
    assert_eq!(summary.milestone, "Perfect");
}

#[test]
fn returning_player_keeps_scores_across_restarts() {
    let dir = temp_dir();
    let bank = QuestionBank::new(pool("easy", 6), Vec::new(), Vec::new());

    let mut session = open(&dir, bank.clone());
    assert_eq!(login(&mut session, "Ada"), LoginOutcome::NewPlayer);

    let on_disk: PlayerHighScores = JsonFile::new(dir.join("player_highscores.json"))
        .load()
        .unwrap();
    let expected: serde_json::Value = serde_json::json!({"Ada": {"easy": 0, "medium": 0, "hard": 0}});
    assert_eq!(serde_json::to_value(&on_disk).unwrap(), expected);

    session
        .dispatch(UserAction::ChooseDifficulty(Difficulty::Easy))
        .unwrap();
    play_round(&mut session, 4);
    drop(session);

    let mut session = open(&dir, bank);
    assert_eq!(login(&mut session, "Ada"), LoginOutcome::Returning);
    assert_eq!(session.highscores().get("Ada").unwrap().easy, 4);
    assert_eq!(
        session.leaderboard().entries(Difficulty::Easy),
        &[LeaderboardEntry::new("Ada", 4)]
    );
}

#[test]
fn full_hard_leaderboard_drops_lowest() {
    let dir = temp_dir();
    let stores = Stores::in_dir(&dir);

    let mut seeded = Leaderboard::default();
    for score in (11..=20).rev() {
        seeded.record(Difficulty::Hard, LeaderboardEntry::new(format!("p{score}"), score));
    }
    stores.leaderboard.save(&seeded).unwrap();

    let bank = QuestionBank::new(Vec::new(), Vec::new(), pool("hard", 20));
    let mut session = open(&dir, bank);
    login(&mut session, "Ada");
    session
        .dispatch(UserAction::ChooseDifficulty(Difficulty::Hard))
        .unwrap();
    play_round(&mut session, 15);

    let reloaded: Leaderboard = stores.leaderboard.load().unwrap();
    let hard = reloaded.entries(Difficulty::Hard);
    assert_eq!(hard.len(), 10);
    assert!(hard.windows(2).all(|pair| pair[0].score >= pair[1].score));
    assert!(hard.contains(&LeaderboardEntry::new("Ada", 15)));
    assert!(!hard.iter().any(|entry| entry.score == 11));
}

#[test]
fn hand_edited_leaderboard_is_repaired_on_save() {
    let dir = temp_dir();
    std::fs::create_dir_all(&dir).unwrap();
    let medium: Vec<serde_json::Value> = (0..15)
        .map(|i| serde_json::json!({"name": format!("p{i}"), "score": i}))
        .collect();
    std::fs::write(
        dir.join("leaderboard.json"),
        serde_json::json!({"easy": [], "medium": medium, "hard": []}).to_string(),
    )
    .unwrap();

    let bank = QuestionBank::new(pool("easy", 1), Vec::new(), Vec::new());
    let mut session = open(&dir, bank);
    login(&mut session, "Ada");
    session
        .dispatch(UserAction::ChooseDifficulty(Difficulty::Easy))
        .unwrap();
    play_round(&mut session, 1);

    let reloaded: Leaderboard = Stores::in_dir(&dir).leaderboard.load().unwrap();
    for difficulty in Difficulty::ALL {
        let entries = reloaded.entries(difficulty);
        assert!(entries.len() <= 10, "{difficulty} has {} entries", entries.len());
        assert!(entries.windows(2).all(|pair| pair[0].score >= pair[1].score));
    }
    assert_eq!(
        reloaded.entries(Difficulty::Medium).first(),
        Some(&LeaderboardEntry::new("p14", 14))
    );
    assert_eq!(
        reloaded.entries(Difficulty::Easy),
        &[LeaderboardEntry::new("Ada", 1)]
    );
}

#[test]
fn abandoned_round_records_nothing() {
    let dir = temp_dir();
    let bank = QuestionBank::new(pool("easy", 5), Vec::new(), Vec::new());
    let mut session = open(&dir, bank);
    login(&mut session, "Ada");
    session
        .dispatch(UserAction::ChooseDifficulty(Difficulty::Easy))
        .unwrap();
    session.dispatch(UserAction::Skip).unwrap();

    let event = session.dispatch(UserAction::BackToMenu).unwrap();
    assert_eq!(event, SessionEvent::ReturnedToMenu { abandoned_round: true });
    assert!(session.round().is_none());
    assert!(session.leaderboard().entries(Difficulty::Easy).is_empty());
    assert!(!dir.join("leaderboard.json").exists());
}

#[test]
fn corrupt_tables_start_empty() {
    let dir = temp_dir();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("leaderboard.json"), "[[[").unwrap();
    std::fs::write(dir.join("player_highscores.json"), "nope").unwrap();

    let mut session = open(&dir, QuestionBank::builtin());
    assert!(session.highscores().is_empty());
    assert_eq!(login(&mut session, "Grace"), LoginOutcome::NewPlayer);

    let repaired: PlayerHighScores = JsonFile::new(dir.join("player_highscores.json"))
        .load()
        .unwrap();
    assert!(repaired.contains("Grace"));
}
