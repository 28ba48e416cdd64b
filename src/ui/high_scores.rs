use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::models::Difficulty;
use crate::scoring::TOTAL_QUESTIONS;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let card_area = super::centered(area, 40, 11);
    let session = app.session();
    let scores = session
        .player()
        .and_then(|player| session.highscores().get(player))
        .copied()
        .unwrap_or_default();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "HIGH SCORES",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];
    content.extend(Difficulty::ALL.iter().map(|&difficulty| {
        Line::from(
            format!(
                "{}: {}/{}",
                capitalize(difficulty.as_str()),
                scores.get(difficulty),
                TOTAL_QUESTIONS
            )
            .fg(Color::Gray),
        )
    }));
    content.push(Line::from(""));
    content.push(Line::from("enter back".fg(Color::DarkGray)));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(super::card());
    frame.render_widget(widget, card_area);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
