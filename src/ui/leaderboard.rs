use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::App;
use crate::models::Difficulty;
use crate::scoring::TOTAL_QUESTIONS;

pub fn render(frame: &mut Frame, area: Rect, app: &App, difficulty: Difficulty) {
    let card_area = super::centered(area, 48, 20);

    let tabs: Vec<Span> = Difficulty::ALL
        .iter()
        .map(|&d| {
            let style = if d == difficulty {
                Style::default().fg(Color::Black).bg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {} ", d.as_str().to_uppercase()), style)
        })
        .collect();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "LEADERBOARD",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(tabs),
        Line::from(""),
    ];

    let entries = app.session().leaderboard().entries(difficulty);
    if entries.is_empty() {
        content.push(Line::from("No scores yet".fg(Color::DarkGray)));
    }
    for (index, entry) in entries.iter().enumerate() {
        let rank = index + 1;
        let rank_style = match rank {
            1 => Style::default().fg(Color::Yellow).bold(),
            2 => Style::default().fg(Color::White),
            3 => Style::default().fg(Color::LightRed),
            _ => Style::default().fg(Color::Gray),
        };
        content.push(Line::from(Span::styled(
            format!("{}. {} — {}/{}", rank, entry.name, entry.score, TOTAL_QUESTIONS),
            rank_style,
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from("h/l switch  ·  enter back".fg(Color::DarkGray)));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(super::card());
    frame.render_widget(widget, card_area);
}
